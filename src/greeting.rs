//! Greeting body served on `/`.

use crate::container::ContainerId;

/// Rendered greeting, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    body: String,
}

impl Greeting {
    pub fn new(container_id: &ContainerId, version: &str) -> Self {
        Self {
            body: format!(
                "Hello, world! I'm container: {}. version {}\n",
                container_id, version
            ),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_id_and_version() {
        let greeting = Greeting::new(&ContainerId::new("abc123"), "0.0.13");
        assert_eq!(
            greeting.body(),
            "Hello, world! I'm container: abc123. version 0.0.13\n"
        );
    }

    #[test]
    fn empty_id_keeps_the_surrounding_text() {
        let greeting = Greeting::new(&ContainerId::default(), "0.0.13");
        assert_eq!(
            greeting.body(),
            "Hello, world! I'm container: . version 0.0.13\n"
        );
    }
}
