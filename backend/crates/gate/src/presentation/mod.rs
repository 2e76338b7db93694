//! Presentation Layer
//!
//! HTTP handlers, page rendering, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::GateAppState;
pub use router::{gate_router, gate_router_generic};
