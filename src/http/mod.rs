//! HTTP server module.
//!
//! Plain HTTP only. The listener binds the configured address and serves until
//! the process receives SIGTERM or SIGINT; there is no self-initiated shutdown.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
