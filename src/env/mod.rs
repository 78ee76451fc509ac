//! Environment access
//!
//! The resolver never reads the process environment directly. It is handed an
//! [`EnvAccessor`], which owns lookup and type coercion:
//! * [`ProcessEnv`] reads `std::env`
//! * [`MapEnv`] reads an in-memory map (tests, embedding callers)

mod map;
mod process;

pub use map::MapEnv;
pub use process::ProcessEnv;

use std::str::FromStr;

/// Typed, read-only access to named environment values.
///
/// Implementors only provide [`EnvAccessor::var`]. The typed lookups are
/// derived from it and must return the same value for the same key within
/// one resolution.
pub trait EnvAccessor {
    /// Raw value for `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// String value, or `default` when unset.
    ///
    /// A value that is set but empty is returned as is.
    fn string(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }

    /// String value with no default.
    fn optional(&self, key: &str) -> Option<String> {
        self.var(key)
    }

    /// Integer value, or `default` when unset or not parsable as `T`.
    fn int<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr,
    {
        match self.var(key) {
            Some(raw) => match raw.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key, "ignoring invalid integer, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Boolean value, or `default` when unset.
    ///
    /// A set value is `true` only when it is exactly `true`. Case and
    /// surrounding whitespace are not normalized.
    fn bool(&self, key: &str, default: bool) -> bool {
        match self.var(key) {
            Some(raw) => raw == "true",
            None => default,
        }
    }
}

impl<T: EnvAccessor + ?Sized> EnvAccessor for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
