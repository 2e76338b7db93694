//! Infrastructure Layer
//!
//! Session store implementation.

pub mod memory;

pub use memory::InMemorySessionStore;
