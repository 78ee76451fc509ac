//! Per-backend connection fields
//!
//! Each backend has its own struct carrying only the fields that apply to
//! it. Server backends resolve TLS and pool bounds on their own. SQLite has
//! neither, nor any network fields.

use super::backend::Backend;
use super::pool::PoolParameters;
use super::tls::{serialize_tls, TlsParameters};
use crate::env::EnvAccessor;
use crate::keys::{self, defaults};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Backend-specific connection fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// Embedded file database
    Sqlite(SqliteConnection),
    /// MySQL server
    Mysql(MysqlConnection),
    /// PostgreSQL server
    Postgres(PostgresConnection),
}

impl Connection {
    /// Backend this connection targets
    pub fn backend(&self) -> Backend {
        match self {
            Self::Sqlite(_) => Backend::Sqlite,
            Self::Mysql(_) => Backend::Mysql,
            Self::Postgres(_) => Backend::Postgres,
        }
    }

    /// TLS block, if the backend supports TLS and it is enabled
    pub fn tls(&self) -> Option<&TlsParameters> {
        match self {
            Self::Sqlite(_) => None,
            Self::Mysql(c) => c.tls.as_ref(),
            Self::Postgres(c) => c.tls.as_ref(),
        }
    }

    /// Pool bounds, `None` for SQLite
    pub fn pool(&self) -> Option<PoolParameters> {
        match self {
            Self::Sqlite(_) => None,
            Self::Mysql(c) => Some(c.pool),
            Self::Postgres(c) => Some(c.pool),
        }
    }
}

impl Serialize for Connection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Sqlite(c) => c.serialize(serializer),
            Self::Mysql(c) => c.serialize(serializer),
            Self::Postgres(c) => c.serialize(serializer),
        }
    }
}

/// SQLite connection: a single database file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqliteConnection {
    /// Database file (base directory joined with `DATABASE_FILENAME`)
    pub filename: PathBuf,
    /// Tell the query builder to insert NULL for missing columns
    #[serde(skip)]
    pub use_null_as_default: bool,
}

impl SqliteConnection {
    /// Resolve the database file relative to `base_dir`.
    ///
    /// An absolute `DATABASE_FILENAME` replaces `base_dir`.
    pub fn from_env<E: EnvAccessor + ?Sized>(env: &E, base_dir: &Path) -> Self {
        let filename = env.string(keys::DATABASE_FILENAME, defaults::SQLITE_FILENAME);
        Self {
            filename: base_dir.join(filename),
            use_null_as_default: true,
        }
    }
}

/// MySQL connection.
///
/// Credentials have no defaults; unset values stay `None`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct MysqlConnection {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: Option<String>,
    /// Login user
    pub user: Option<String>,
    /// Login password
    pub password: Option<String>,
    /// TLS block (`None` when disabled)
    #[serde(rename = "ssl", serialize_with = "serialize_tls")]
    pub tls: Option<TlsParameters>,
    /// Pool bounds (emitted beside `connection`, not inside it)
    #[serde(skip)]
    pub pool: PoolParameters,
}

impl MysqlConnection {
    /// Resolve MySQL fields
    pub fn from_env<E: EnvAccessor + ?Sized>(env: &E) -> Self {
        Self {
            host: env.string(keys::DATABASE_HOST, defaults::HOST),
            port: env.int(keys::DATABASE_PORT, defaults::MYSQL_PORT),
            database: env.optional(keys::DATABASE_NAME),
            user: env.optional(keys::DATABASE_USERNAME),
            password: env.optional(keys::DATABASE_PASSWORD),
            tls: TlsParameters::from_env(env),
            pool: PoolParameters::from_env(env),
        }
    }
}

impl std::fmt::Debug for MysqlConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MysqlConnection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("tls", &self.tls)
            .field("pool", &self.pool)
            .finish()
    }
}

/// PostgreSQL connection.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgresConnection {
    /// Full connection URL (`DATABASE_URL`), passed through unparsed
    pub connection_string: Option<String>,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
    /// TLS block (`None` when disabled)
    #[serde(rename = "ssl", serialize_with = "serialize_tls")]
    pub tls: Option<TlsParameters>,
    /// Schema on the search path
    pub schema: String,
    /// Pool bounds (emitted beside `connection`, not inside it)
    #[serde(skip)]
    pub pool: PoolParameters,
}

impl PostgresConnection {
    /// Resolve Postgres fields
    pub fn from_env<E: EnvAccessor + ?Sized>(env: &E) -> Self {
        Self {
            connection_string: env.optional(keys::DATABASE_URL),
            host: env.string(keys::DATABASE_HOST, defaults::HOST),
            port: env.int(keys::DATABASE_PORT, defaults::POSTGRES_PORT),
            database: env.string(keys::DATABASE_NAME, defaults::POSTGRES_CREDENTIAL),
            user: env.string(keys::DATABASE_USERNAME, defaults::POSTGRES_CREDENTIAL),
            password: env.string(keys::DATABASE_PASSWORD, defaults::POSTGRES_CREDENTIAL),
            tls: TlsParameters::from_env(env),
            schema: env.string(keys::DATABASE_SCHEMA, defaults::POSTGRES_SCHEMA),
            pool: PoolParameters::from_env(env),
        }
    }
}

impl std::fmt::Debug for PostgresConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // URLs usually embed the password
        f.debug_struct("PostgresConnection")
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "<redacted>"),
            )
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("tls", &self.tls)
            .field("schema", &self.schema)
            .field("pool", &self.pool)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_sqlite_default_filename() {
        let conn = SqliteConnection::from_env(&MapEnv::new(), Path::new("/srv/app"));
        assert_eq!(conn.filename, PathBuf::from("/srv/app/.tmp/data.db"));
        assert!(conn.use_null_as_default);
    }

    #[test]
    fn test_sqlite_custom_filename() {
        let env = MapEnv::new().with(keys::DATABASE_FILENAME, "db/prod.sqlite");
        let conn = SqliteConnection::from_env(&env, Path::new("/srv/app"));
        assert_eq!(conn.filename, PathBuf::from("/srv/app/db/prod.sqlite"));
    }

    #[test]
    fn test_sqlite_absolute_filename_replaces_base() {
        let env = MapEnv::new().with(keys::DATABASE_FILENAME, "/var/lib/app.db");
        let conn = SqliteConnection::from_env(&env, Path::new("/srv/app"));
        assert_eq!(conn.filename, PathBuf::from("/var/lib/app.db"));
    }

    #[test]
    fn test_mysql_defaults() {
        let conn = MysqlConnection::from_env(&MapEnv::new());
        assert_eq!(conn.host, "localhost");
        assert_eq!(conn.port, 3306);
        assert_eq!(conn.database, None);
        assert_eq!(conn.user, None);
        assert_eq!(conn.password, None);
        assert_eq!(conn.tls, None);
    }

    #[test]
    fn test_mysql_overrides() {
        let env = MapEnv::new()
            .with(keys::DATABASE_HOST, "db.internal")
            .with(keys::DATABASE_PORT, "3307")
            .with(keys::DATABASE_NAME, "shop")
            .with(keys::DATABASE_USERNAME, "shop_rw")
            .with(keys::DATABASE_PASSWORD, "");
        let conn = MysqlConnection::from_env(&env);
        assert_eq!(conn.host, "db.internal");
        assert_eq!(conn.port, 3307);
        assert_eq!(conn.database.as_deref(), Some("shop"));
        assert_eq!(conn.user.as_deref(), Some("shop_rw"));
        // empty credentials are not rejected
        assert_eq!(conn.password.as_deref(), Some(""));
    }

    #[test]
    fn test_postgres_defaults() {
        let conn = PostgresConnection::from_env(&MapEnv::new());
        assert_eq!(conn.connection_string, None);
        assert_eq!(conn.host, "localhost");
        assert_eq!(conn.port, 5432);
        assert_eq!(conn.database, "strapi");
        assert_eq!(conn.user, "strapi");
        assert_eq!(conn.password, "strapi");
        assert_eq!(conn.schema, "public");
        assert_eq!(conn.tls, None);
    }

    #[test]
    fn test_postgres_connection_string_and_schema() {
        let env = MapEnv::new()
            .with(keys::DATABASE_URL, "postgres://u:p@db:5432/app")
            .with(keys::DATABASE_SCHEMA, "tenant_a");
        let conn = PostgresConnection::from_env(&env);
        assert_eq!(
            conn.connection_string.as_deref(),
            Some("postgres://u:p@db:5432/app")
        );
        assert_eq!(conn.schema, "tenant_a");
    }

    #[test]
    fn test_server_backends_resolve_pool() {
        let env = MapEnv::new()
            .with(keys::DATABASE_POOL_MIN, "1")
            .with(keys::DATABASE_POOL_MAX, "4");
        let expected = PoolParameters { min: 1, max: 4 };
        assert_eq!(MysqlConnection::from_env(&env).pool, expected);
        assert_eq!(PostgresConnection::from_env(&env).pool, expected);
        assert_eq!(
            Connection::Mysql(MysqlConnection::from_env(&env)).pool(),
            Some(expected)
        );
    }

    #[test]
    fn test_sqlite_has_no_pool() {
        let env = MapEnv::new()
            .with(keys::DATABASE_POOL_MIN, "9")
            .with(keys::DATABASE_POOL_MAX, "1");
        let sqlite = Connection::Sqlite(SqliteConnection::from_env(&env, Path::new(".")));
        assert_eq!(sqlite.pool(), None);
    }

    #[test]
    fn test_connection_tls_accessor() {
        let env = MapEnv::new().with(keys::DATABASE_SSL, "true");
        let pg = Connection::Postgres(PostgresConnection::from_env(&env));
        assert!(pg.tls().is_some());
        assert_eq!(pg.backend(), Backend::Postgres);

        let sqlite = Connection::Sqlite(SqliteConnection::from_env(&env, Path::new(".")));
        assert!(sqlite.tls().is_none());
        assert_eq!(sqlite.backend(), Backend::Sqlite);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let env = MapEnv::new()
            .with(keys::DATABASE_PASSWORD, "hunter2")
            .with(keys::DATABASE_URL, "postgres://u:hunter2@db/app");
        let pg = format!("{:?}", PostgresConnection::from_env(&env));
        let my = format!("{:?}", MysqlConnection::from_env(&env));
        assert!(!pg.contains("hunter2"));
        assert!(!my.contains("hunter2"));
        assert!(my.contains("<redacted>"));
    }
}
