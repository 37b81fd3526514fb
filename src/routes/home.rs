//! Greeting handler.
//!
//! Serves `/` and every path without a more specific route, for any method,
//! so probes and curious clients always learn which container answered.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// Greeting handler.
///
/// Returns `Hello, world! I'm container: <id>. version <version>\n` as plain text.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    tracing::debug!(container_id = %state.container_id, "Serving greeting");
    state.greeting.body().to_owned()
}
