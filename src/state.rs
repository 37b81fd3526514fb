//! Shared application state for request handlers.

use std::sync::Arc;

use crate::container::ContainerId;
use crate::greeting::Greeting;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is fixed at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub container_id: Arc<ContainerId>,
    pub greeting: Arc<Greeting>,
}

impl AppState {
    /// Creates the application state, rendering the greeting once from the
    /// container id and the configured version.
    pub fn new(container_id: ContainerId, version: &str) -> Self {
        let greeting = Greeting::new(&container_id, version);
        Self {
            container_id: Arc::new(container_id),
            greeting: Arc::new(greeting),
        }
    }
}
