//! dbresolve: database connection descriptors from environment variables
//!
//! Selects one of the supported backends (`sqlite`, `mysql`, `postgres`)
//! from `DATABASE_CLIENT` and resolves its connection fields, optional TLS
//! parameters, pool bounds and acquisition timeout into an immutable
//! [`ConnectionDescriptor`].
//!
//! Resolution is synchronous and side-effect free: the only input is the
//! [`EnvAccessor`](env::EnvAccessor) it is handed, and the only failure is an
//! unsupported backend.
//!
//! ```
//! use dbresolve::env::MapEnv;
//! use dbresolve::Resolver;
//!
//! let env = MapEnv::new()
//!     .with("DATABASE_CLIENT", "mysql")
//!     .with("DATABASE_SSL", "true");
//!
//! let descriptor = Resolver::new(".").resolve(&env)?;
//! assert!(descriptor.tls().is_some());
//! assert_eq!(descriptor.pool().map(|pool| pool.max), Some(10));
//! # Ok::<(), dbresolve::Error>(())
//! ```

#![warn(missing_docs)]

pub mod descriptor;
pub mod env;
pub mod error;
pub mod keys;
pub mod resolver;

pub use descriptor::{
    Backend, Connection, ConnectionDescriptor, MysqlConnection, PoolParameters,
    PostgresConnection, SqliteConnection, TlsParameters,
};
pub use error::{Error, Result};
pub use resolver::{resolve, Resolver};
