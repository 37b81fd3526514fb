//! Top-level error type for process startup.
//!
//! Request handlers cannot fail, so the only errors are the ones that stop the
//! process: a bad configuration file or a listener that cannot bind.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
