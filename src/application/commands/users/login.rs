use super::UserCommandService;
use crate::{
    application::{dto::LoginOutcome, error::ApplicationResult},
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Checks the credentials and reports which of the three outcomes applies.
    /// A blank email cannot belong to anyone and is reported as unknown.
    pub async fn verify_credentials(
        &self,
        command: LoginUserCommand,
    ) -> ApplicationResult<LoginOutcome> {
        let Ok(email) = Email::new(command.email) else {
            return Ok(LoginOutcome::UserNotFound);
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!(%email, "login for unknown email");
            return Ok(LoginOutcome::UserNotFound);
        };

        let matches = self
            .password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let outcome = if matches {
            LoginOutcome::Success
        } else {
            LoginOutcome::IncorrectPassword
        };
        tracing::info!(user_id = %user.id, outcome = %outcome, "login attempt");
        Ok(outcome)
    }
}
