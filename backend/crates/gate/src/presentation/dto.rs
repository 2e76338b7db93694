//! Form DTOs

use serde::Deserialize;

/// Login form submission
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}
