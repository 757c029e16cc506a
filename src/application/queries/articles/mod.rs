mod by_author;
mod get_by_id;
mod list;
mod service;

pub use by_author::ListArticlesByEmailQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use list::{ListArticlesQuery, ListByCategoryQuery};
pub use service::ArticleQueryService;
