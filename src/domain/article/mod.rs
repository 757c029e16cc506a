pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleDetail, ArticleSummary, ArticleUpdate, NewArticle};
pub use listing::{ArticleFilter, FEATURED_LIMIT, PageRequest};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleHeading, ArticleId, Category, ImageUrl};
