//! container-hello: a minimal container entry point.
//!
//! Answers `/` with a greeting that names the container (its hostname) and a
//! version, and `/healthz` with `ok` for orchestrator liveness probes.

pub mod config;
pub mod container;
pub mod error;
pub mod greeting;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use error::{Error, Result};
