mod auth_manager;
mod bearer_token;

pub use auth_manager::AuthManager;
pub use bearer_token::BearerToken;
