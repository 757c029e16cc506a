// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleHeading, ArticleId, Category, ImageUrl,
};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub heading: ArticleHeading,
    pub content: ArticleContent,
    pub image: ImageUrl,
    pub category: Category,
    pub author_id: UserId,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub heading: ArticleHeading,
    pub content: ArticleContent,
    pub image: ImageUrl,
    pub category: Category,
    pub author_id: UserId,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        heading: ArticleHeading,
        content: ArticleContent,
        image: ImageUrl,
        category: Category,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            heading,
            content,
            image,
            category,
            author_id,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub heading: Option<ArticleHeading>,
    pub content: Option<ArticleContent>,
    pub category: Option<Category>,
    pub featured: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            heading: None,
            content: None,
            category: None,
            featured: None,
            updated_at,
        }
    }

    pub fn with_heading(mut self, heading: ArticleHeading) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.featured.is_none()
    }
}

/// Listing projection used for an author's own article list.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub heading: ArticleHeading,
    pub category: Category,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// An article together with its author's display name. The name is absent
/// when the author record no longer resolves.
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub author_name: Option<Username>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        let update = ArticleUpdate::new(ArticleId::generate(), Utc::now());
        assert!(update.is_empty());
        assert!(!update.with_featured(false).is_empty());
    }

    #[test]
    fn new_article_defaults_to_not_featured() {
        let now = Utc::now();
        let article = NewArticle::new(
            ArticleHeading::new("h").unwrap(),
            ArticleContent::new("c").unwrap(),
            ImageUrl::new("i").unwrap(),
            Category::Sports,
            UserId::generate(),
            now,
        );
        assert!(!article.featured);
        assert_eq!(article.created_at, article.updated_at);
        assert!(article.featured(true).featured);
    }
}
