//! Connection resolution

use crate::descriptor::{
    Backend, Connection, ConnectionDescriptor, MysqlConnection, PostgresConnection,
    SqliteConnection,
};
use crate::env::EnvAccessor;
use crate::keys::{self, defaults};
use crate::Result;
use std::path::{Path, PathBuf};

/// Resolves [`ConnectionDescriptor`]s from an environment.
///
/// The resolver only holds the base directory that relative SQLite
/// filenames are joined to. It keeps no other state, so one instance can
/// serve any number of concurrent resolutions.
///
/// # Examples
///
/// ```
/// use dbresolve::env::MapEnv;
/// use dbresolve::{Backend, Resolver};
///
/// let env = MapEnv::new().with("DATABASE_CLIENT", "postgres");
/// let descriptor = Resolver::new("/srv/app").resolve(&env)?;
/// assert_eq!(descriptor.backend(), Backend::Postgres);
/// # Ok::<(), dbresolve::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    base_dir: PathBuf,
}

impl Resolver {
    /// Create a resolver joining SQLite filenames onto `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory for SQLite filenames
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBackend`](crate::Error::UnsupportedBackend)
    /// when `DATABASE_CLIENT` is not `sqlite`, `mysql` or `postgres`. Every
    /// other missing or malformed value falls back to its default.
    pub fn resolve<E: EnvAccessor + ?Sized>(&self, env: &E) -> Result<ConnectionDescriptor> {
        let backend: Backend = env
            .string(keys::DATABASE_CLIENT, defaults::CLIENT)
            .parse()?;

        let connection = match backend {
            Backend::Sqlite => {
                Connection::Sqlite(SqliteConnection::from_env(env, &self.base_dir))
            }
            Backend::Mysql => Connection::Mysql(MysqlConnection::from_env(env)),
            Backend::Postgres => Connection::Postgres(PostgresConnection::from_env(env)),
        };

        let timeout = env.int(
            keys::DATABASE_CONNECTION_TIMEOUT,
            defaults::CONNECTION_TIMEOUT_MS,
        );

        Ok(ConnectionDescriptor::new(connection, timeout))
    }
}

/// Resolve a descriptor with a one-off [`Resolver`] rooted at `base_dir`.
pub fn resolve<E: EnvAccessor + ?Sized>(
    env: &E,
    base_dir: impl Into<PathBuf>,
) -> Result<ConnectionDescriptor> {
    Resolver::new(base_dir).resolve(env)
}
