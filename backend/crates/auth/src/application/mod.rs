//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod log_in;
pub mod refresh;
pub mod session_issuer;
pub mod sign_up;
pub mod verify_credentials;
pub mod who;

// Re-exports
pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInUseCase};
pub use refresh::RefreshUseCase;
pub use session_issuer::TokenPair;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use verify_credentials::VerifyCredentialsUseCase;
pub use who::WhoUseCase;
