//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256 digests, constant-time comparison)
//! - Cookie management

pub mod cookie;
pub mod crypto;
