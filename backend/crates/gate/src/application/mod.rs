//! Application Layer
//!
//! Use cases and application configuration.

pub mod check_access;
pub mod config;
pub mod submit_password;

/// Session store key for the per-session unlock flag
pub const AUTH_SUCCESS_KEY: &str = "auth_success";

// Re-exports
pub use check_access::CheckAccessUseCase;
pub use config::GateConfig;
pub use submit_password::{SubmitPasswordUseCase, UnlockOutput};
