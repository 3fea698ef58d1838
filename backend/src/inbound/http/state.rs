//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UsersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case behind `GET /api/users`.
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Bundle the given ports.
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self { users }
    }
}
