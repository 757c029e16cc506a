// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::ArticleDto, error::ApplicationResult, lookup};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Removes the article and returns it. The author's article list is left
    /// as is, so it keeps the id of the deleted article.
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = lookup::article_id(&command.id)?;
        let deleted = self.write_repo.delete(id).await?;
        tracing::info!(article_id = %deleted.id, author_id = %deleted.author_id, "article deleted");
        Ok(deleted.into())
    }
}
