// src/domain/comment.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reader comment on an article. Part of the data model only; nothing
/// persists or serves comments yet.
#[derive(Debug, Clone)]
pub struct Comment {
    pub body: CommentBody,
    pub author_id: Option<UserId>,
}

impl Comment {
    pub fn new(body: CommentBody, author_id: Option<UserId>) -> Self {
        Self { body, author_id }
    }
}
