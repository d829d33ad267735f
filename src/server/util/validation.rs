use validator::Validate;

use crate::server::error::AppError;

/// Runs the field validators declared on a request body.
///
/// # Returns
/// - `Ok(())` - Every field passed
/// - `Err(AppError::Validation)` - At least one field failed; maps to 400
pub fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{auth::RegisterDto, task::CreateTaskDto};

    fn register_dto() -> RegisterDto {
        RegisterDto {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: "Sergeevich".to_string(),
            email: "ivan@example.com".to_string(),
            phone_number: "79001234567".to_string(),
            password: "night-owl-42".to_string(),
        }
    }

    /// Tests that a well-formed registration passes.
    ///
    /// Expected: Ok
    #[test]
    fn accepts_valid_registration() {
        assert!(validate(&register_dto()).is_ok());
    }

    /// Tests that a phone number of the wrong length is rejected.
    ///
    /// Expected: Err(AppError::Validation)
    #[test]
    fn rejects_short_phone_number() {
        let dto = RegisterDto {
            phone_number: "7900123".to_string(),
            ..register_dto()
        };

        assert!(matches!(validate(&dto), Err(AppError::Validation(_))));
    }

    /// Tests that a malformed email is rejected.
    ///
    /// Expected: Err(AppError::Validation)
    #[test]
    fn rejects_malformed_email() {
        let dto = RegisterDto {
            email: "not-an-email".to_string(),
            ..register_dto()
        };

        assert!(matches!(validate(&dto), Err(AppError::Validation(_))));
    }

    /// Tests that task levels start at 1.
    ///
    /// Expected: Err(AppError::Validation) for level 0
    #[test]
    fn rejects_task_level_zero() {
        let dto = CreateTaskDto {
            level: 0,
            mystery_of_place: "Under the bridge".to_string(),
            place: "Bridge".to_string(),
            answer: "troll".to_string(),
        };

        assert!(matches!(validate(&dto), Err(AppError::Validation(_))));
    }
}
