//! One-time admin codes for bootstrapping the first superuser.
//!
//! A code is generated at startup when no superuser exists, kept in memory for a short
//! TTL and invalidated on first successful redemption.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a generated code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// A code taken out by `AdminCodeService::claim`.
pub struct ClaimedCode(AdminCode);

/// Holds at most one pending admin code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a random 32-character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        code
    }

    /// Checks `input` against the pending code and consumes it on a match.
    ///
    /// An expired code is dropped on contact. A wrong guess leaves a live code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it is now consumed
    /// - `false` - No code, wrong code, or expired code
    pub async fn redeem(&self, input: &str) -> bool {
        self.claim(input).await.is_some()
    }

    /// Takes the pending code out on a match, like `redeem`, but hands it back so it can
    /// be put back with `restore` if the promotion it guards fails.
    pub async fn claim(&self, input: &str) -> Option<ClaimedCode> {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                None
            }
            Some(stored) if stored.code == input => code.take().map(ClaimedCode),
            _ => None,
        }
    }

    /// Puts a claimed code back with its original expiry.
    ///
    /// A code generated after the claim wins; the claimed one is then dropped.
    pub async fn restore(&self, claimed: ClaimedCode) {
        let mut code = self.code.write().await;

        if code.is_none() && !claimed.0.is_expired() {
            *code = Some(claimed.0);
        }
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        matches!(self.code.read().await.as_ref(), Some(stored) if !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests that a generated code is alphanumeric and pending.
    ///
    /// Expected: 32-character code and a valid code state
    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;

        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that the correct code is accepted exactly once.
    ///
    /// Expected: first redemption succeeds, second fails
    #[tokio::test]
    async fn redeems_code_once() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.redeem(&code).await);
        assert!(!service.redeem(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong guess does not burn the pending code.
    ///
    /// Expected: wrong code rejected, real code still redeemable
    #[tokio::test]
    async fn wrong_code_keeps_pending_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(!service.redeem("wrong_code").await);
        assert!(service.redeem(&code).await);
    }

    /// Tests putting a claimed code back.
    ///
    /// Expected: the code is pending again and redeemable once
    #[tokio::test]
    async fn restored_code_is_redeemable() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        let claimed = service.claim(&code).await.unwrap();
        assert!(!service.has_valid_code().await);

        service.restore(claimed).await;

        assert!(service.redeem(&code).await);
        assert!(!service.redeem(&code).await);
    }

    /// Tests restoring after a new code was generated.
    ///
    /// Expected: the newer code stays, the claimed one is gone
    #[tokio::test]
    async fn restore_keeps_newer_code() {
        let service = AdminCodeService::new();
        let old = service.generate().await;
        let claimed = service.claim(&old).await.unwrap();
        let new = service.generate().await;

        service.restore(claimed).await;

        assert!(!service.redeem(&old).await);
        assert!(service.redeem(&new).await);
    }

    /// Tests redemption when no code was ever generated.
    ///
    /// Expected: false
    #[tokio::test]
    async fn rejects_without_code() {
        let service = AdminCodeService::new();

        assert!(!service.redeem("any_code").await);
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: old code rejected, new code accepted
    #[tokio::test]
    async fn regenerate_replaces_code() {
        let service = AdminCodeService::new();
        let old = service.generate().await;
        let new = service.generate().await;

        assert!(!service.redeem(&old).await);
        assert!(service.redeem(&new).await);
    }

    /// Tests that codes stop working after their TTL.
    ///
    /// Expected: expired code rejected and cleared
    #[tokio::test]
    async fn expired_code_is_rejected() {
        let service = AdminCodeService::with_ttl(Duration::from_millis(20));
        let code = service.generate().await;

        sleep(Duration::from_millis(50)).await;

        assert!(!service.has_valid_code().await);
        assert!(!service.redeem(&code).await);
    }
}
