use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Bumps `article_count` and appends `article_id` to the user's list as one
    /// unit. Fails with `NotFound` when the user does not exist.
    async fn record_new_article(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        recorded_at: DateTime<Utc>,
    ) -> DomainResult<User>;
}
