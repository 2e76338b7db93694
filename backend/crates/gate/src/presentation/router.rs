//! Gate Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::repository::SessionStore;
use crate::infra::memory::InMemorySessionStore;
use crate::presentation::handlers::{self, GateAppState};

/// Create the Gate router with the in-memory session store
pub fn gate_router(config: GateConfig) -> Router {
    gate_router_generic(InMemorySessionStore::new(), config)
}

/// Create a generic Gate router for any session store implementation
pub fn gate_router_generic<S>(store: S, config: GateConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = GateAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::view_page::<S>))
        .route("/login", post(handlers::submit_login::<S>))
        .with_state(state)
}
