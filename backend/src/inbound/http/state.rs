//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain workflow port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::AccountWorkflow;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountWorkflow>,
}

impl HttpState {
    /// Construct state over an account workflow implementation.
    pub fn new(accounts: Arc<dyn AccountWorkflow>) -> Self {
        Self { accounts }
    }
}
