//! Container identity.
//!
//! In a multi-replica deployment each container gets its own hostname, which
//! is what the greeting reports as the container id. It is resolved once at
//! startup and never refreshed.

use std::fmt;

/// Identifier of the container (or host) this process runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerId(String);

impl ContainerId {
    /// Create an identifier from a known value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Resolve the identifier from the OS hostname.
    ///
    /// A failed lookup is not fatal: the identifier is left empty and the
    /// greeting is still served.
    pub fn resolve() -> Self {
        match hostname::get() {
            Ok(name) => Self(name.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to resolve hostname, using empty container id");
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
