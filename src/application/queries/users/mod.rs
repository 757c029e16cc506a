mod by_email;
mod service;

pub use by_email::FindUserByEmailQuery;
pub use service::UserQueryService;
