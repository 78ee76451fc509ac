//! Connection pool sizing

use crate::env::EnvAccessor;
use crate::keys::{self, defaults};
use crate::{Error, Result};
use serde::Serialize;

/// Pool bounds handed to the downstream pool manager.
///
/// Resolution does not check `min <= max`. Call [`PoolParameters::validate`]
/// when the bounds must be consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolParameters {
    /// Minimum open connections
    pub min: u32,
    /// Maximum open connections
    pub max: u32,
}

impl Default for PoolParameters {
    fn default() -> Self {
        Self {
            min: defaults::POOL_MIN,
            max: defaults::POOL_MAX,
        }
    }
}

impl PoolParameters {
    /// Resolve pool bounds. The keys are the same for every backend.
    pub fn from_env<E: EnvAccessor + ?Sized>(env: &E) -> Self {
        Self {
            min: env.int(keys::DATABASE_POOL_MIN, defaults::POOL_MIN),
            max: env.int(keys::DATABASE_POOL_MAX, defaults::POOL_MAX),
        }
    }

    /// Reject inverted bounds
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidPool {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
