use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct FindUserByEmailQuery {
    pub email: String,
}

impl UserQueryService {
    pub async fn find_by_email(&self, query: FindUserByEmailQuery) -> ApplicationResult<UserDto> {
        let email = Email::new(query.email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
