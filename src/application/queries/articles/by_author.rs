use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct ListArticlesByEmailQuery {
    pub email: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_by_author_email(
        &self,
        query: ListArticlesByEmailQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let email = query
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("email is required"))?;
        let email = Email::new(email)?;

        let author = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let summaries = self.read_repo.list_by_author(author.id).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
