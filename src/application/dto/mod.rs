pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{
    ArticleDetailDto, ArticleDto, ArticleListResponse, ArticleSummaryDto,
    ArticleSummaryListResponse, DeletedArticleResponse,
};
pub use auth::LoginOutcome;
pub use users::UserDto;
