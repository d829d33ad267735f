//! Registration, password login and superuser promotion.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginForm, RegisterDto, TokenDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, User},
        service::{admin::code::AdminCodeService, token::TokenService},
        util::{db::conflict_on_unique, password},
    },
};

pub const TOKEN_TYPE: &str = "bearer";

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after the password policy and uniqueness checks.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Password fails the policy
    /// - `Err(AppError::Conflict)` - Email or phone number already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        password::check_policy(&dto.password, &dto.email)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        if user_repo
            .find_by_phone_number(&dto.phone_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "User with this phone number already exists".to_string(),
            ));
        }

        let hashed_password = password::hash(&dto.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                name: dto.name,
                surname: dto.surname,
                patronymic: dto.patronymic,
                email: dto.email,
                phone_number: dto.phone_number,
                hashed_password,
            })
            .await
            .map_err(|e| conflict_on_unique(e, "User with this email or phone number already exists"))?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// `form.username` is the account email. Unknown email, wrong password and inactive
    /// accounts all answer the same `BadCredentials`.
    pub async fn login(&self, tokens: &TokenService, form: LoginForm) -> Result<TokenDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&form.username)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AuthError::BadCredentials)?;

        if !password::verify(&form.password, &user.hashed_password).await? {
            return Err(AuthError::BadCredentials.into());
        }

        let access_token = tokens.issue(user.id)?;

        Ok(TokenDto {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        })
    }

    /// Promotes `user_id` to superuser when `code` is the live admin code.
    ///
    /// The code is consumed by a successful redemption. If the promotion fails the code is
    /// put back and stays valid until its original expiry.
    pub async fn redeem_admin_code(
        &self,
        admin_code_service: &AdminCodeService,
        user_id: i32,
        code: &str,
    ) -> Result<User, AppError> {
        let Some(claimed) = admin_code_service.claim(code).await else {
            return Err(AuthError::InvalidAdminCode.into());
        };

        match self.promote(user_id).await {
            Ok(user) => {
                tracing::info!("User {} promoted to superuser", user.id);
                Ok(user)
            }
            Err(err) => {
                admin_code_service.restore(claimed).await;
                Err(err)
            }
        }
    }

    async fn promote(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user_repo.set_superuser(user.id, true).await?;

        Ok(User {
            is_superuser: true,
            ..user
        })
    }
}
