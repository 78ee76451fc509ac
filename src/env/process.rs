//! Process environment

use super::EnvAccessor;

/// Environment backed by the current process (`std::env`).
///
/// Values that are not valid UTF-8 are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a process environment accessor
    pub fn new() -> Self {
        Self
    }
}

impl EnvAccessor for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "ignoring non-UTF-8 environment value");
                None
            }
        }
    }
}
