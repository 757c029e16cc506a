use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password is required"));
    }
    Ok(())
}
