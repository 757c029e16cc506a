use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, User, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(username, email, &command.password)
            .await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::validation("email already registered"));
        }
        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        email: Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, email, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
