// src/application/lookup.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;

/// Identifiers are opaque to callers; one that does not parse cannot name an
/// existing article, so it is reported the same way as a missing one.
pub(crate) fn article_id(raw: &str) -> ApplicationResult<ArticleId> {
    ArticleId::parse(raw).map_err(|_| ApplicationError::not_found("article not found"))
}
