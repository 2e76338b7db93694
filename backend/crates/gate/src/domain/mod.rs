//! Domain Layer
//!
//! Session identity and the session store contract.

pub mod repository;
pub mod value_object;

pub use repository::SessionStore;
pub use value_object::SessionId;
