//! Environment variable names and their defaults

/// Backend selector
pub const DATABASE_CLIENT: &str = "DATABASE_CLIENT";
/// Server host (mysql, postgres)
pub const DATABASE_HOST: &str = "DATABASE_HOST";
/// Server port (mysql, postgres)
pub const DATABASE_PORT: &str = "DATABASE_PORT";
/// Database name (mysql, postgres)
pub const DATABASE_NAME: &str = "DATABASE_NAME";
/// Login user (mysql, postgres)
pub const DATABASE_USERNAME: &str = "DATABASE_USERNAME";
/// Login password (mysql, postgres)
pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
/// Full connection string (postgres only)
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Search path schema (postgres only)
pub const DATABASE_SCHEMA: &str = "DATABASE_SCHEMA";
/// Database file, relative to the resolver's base directory (sqlite only)
pub const DATABASE_FILENAME: &str = "DATABASE_FILENAME";

/// TLS enable flag
pub const DATABASE_SSL: &str = "DATABASE_SSL";
/// Client private key
pub const DATABASE_SSL_KEY: &str = "DATABASE_SSL_KEY";
/// Client certificate
pub const DATABASE_SSL_CERT: &str = "DATABASE_SSL_CERT";
/// Certificate authority
pub const DATABASE_SSL_CA: &str = "DATABASE_SSL_CA";
/// Directory of trusted CA certificates
pub const DATABASE_SSL_CAPATH: &str = "DATABASE_SSL_CAPATH";
/// Allowed cipher suites
pub const DATABASE_SSL_CIPHER: &str = "DATABASE_SSL_CIPHER";
/// Strict peer verification flag
pub const DATABASE_SSL_REJECT_UNAUTHORIZED: &str = "DATABASE_SSL_REJECT_UNAUTHORIZED";

/// Minimum pooled connections
pub const DATABASE_POOL_MIN: &str = "DATABASE_POOL_MIN";
/// Maximum pooled connections
pub const DATABASE_POOL_MAX: &str = "DATABASE_POOL_MAX";
/// Connection acquisition timeout in milliseconds
pub const DATABASE_CONNECTION_TIMEOUT: &str = "DATABASE_CONNECTION_TIMEOUT";

/// Default values
pub mod defaults {
    /// Backend used when `DATABASE_CLIENT` is unset
    pub const CLIENT: &str = "mysql";
    /// Host for both server backends
    pub const HOST: &str = "localhost";
    /// MySQL port
    pub const MYSQL_PORT: u16 = 3306;
    /// Postgres port
    pub const POSTGRES_PORT: u16 = 5432;
    /// Postgres database, user and password
    pub const POSTGRES_CREDENTIAL: &str = "strapi";
    /// Postgres schema
    pub const POSTGRES_SCHEMA: &str = "public";
    /// SQLite database file
    pub const SQLITE_FILENAME: &str = ".tmp/data.db";
    /// TLS enabled
    pub const SSL: bool = false;
    /// Strict peer verification
    pub const SSL_REJECT_UNAUTHORIZED: bool = true;
    /// Pool minimum
    pub const POOL_MIN: u32 = 2;
    /// Pool maximum
    pub const POOL_MAX: u32 = 10;
    /// Acquisition timeout (ms)
    pub const CONNECTION_TIMEOUT_MS: u64 = 60_000;
}
