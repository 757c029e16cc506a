mod login;
mod password;
mod register;
mod service;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
