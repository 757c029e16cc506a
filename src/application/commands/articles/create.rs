// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleHeading, Category, ImageUrl, NewArticle},
        user::Email,
    },
};

/// Publishes a new article on behalf of the user registered under `email`.
pub struct CreateArticleCommand {
    pub email: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
}

impl ArticleCommandService {
    /// Inserts the article, then records it on the author. The two writes are
    /// independent: if the second fails the article stays without a
    /// back-reference on the user.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let image = command
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("image URL is required"))
            .and_then(|url| ImageUrl::new(url).map_err(ApplicationError::from))?;

        let email = Email::new(command.email)?;
        let author = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let heading = ArticleHeading::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let category = command
            .category
            .ok_or_else(|| ApplicationError::validation("category is required"))?
            .parse::<Category>()?;

        let now = self.clock.now();
        let new_article = NewArticle::new(heading, content, image, category, author.id, now)
            .featured(command.featured);

        let created = self.write_repo.insert(new_article).await?;

        if let Err(err) = self
            .user_repo
            .record_new_article(author.id, created.id, now)
            .await
        {
            tracing::error!(
                article_id = %created.id,
                user_id = %author.id,
                error = %err,
                "article stored but author record not updated"
            );
            return Err(err.into());
        }

        tracing::info!(article_id = %created.id, user_id = %author.id, "article created");
        Ok(created.into())
    }
}
