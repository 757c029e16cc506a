use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        lookup,
    },
    domain::article::{ArticleContent, ArticleHeading, ArticleId, ArticleUpdate, Category},
};

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub heading: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = lookup::article_id(&command.id)?;
        let update = self.build_update(id, command)?;

        if update.is_empty() {
            let article = self
                .read_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("article not found"))?;
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }

    fn build_update(
        &self,
        id: ArticleId,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleUpdate> {
        let UpdateArticleCommand {
            id: _,
            heading,
            content,
            category,
            featured,
        } = command;

        let mut update = ArticleUpdate::new(id, self.clock.now());

        if let Some(heading) = heading {
            update = update.with_heading(ArticleHeading::new(heading)?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(category) = category {
            update = update.with_category(category.parse::<Category>()?);
        }
        if let Some(featured) = featured {
            update = update.with_featured(featured);
        }

        Ok(update)
    }
}
