//! Connection descriptor
//!
//! This module holds the output of resolution:
//! * Backend selection ([`Backend`])
//! * Per-backend connection fields ([`Connection`])
//! * TLS parameters for server backends
//! * Pool sizing and the acquisition timeout

mod backend;
mod connection;
mod pool;
mod tls;

pub use backend::Backend;
pub use connection::{Connection, MysqlConnection, PostgresConnection, SqliteConnection};
pub use pool::PoolParameters;
pub use tls::TlsParameters;

use crate::Result;
use serde::ser::SerializeStruct;
use serde::Serialize;

/// Resolved, immutable database configuration.
///
/// Serializes to the shape the downstream query builder expects:
///
/// ```json
/// {
///   "client": "postgres",
///   "connection": { "host": "localhost", "port": 5432, "ssl": false, "...": "..." },
///   "pool": { "min": 2, "max": 10 },
///   "acquireConnectionTimeout": 60000
/// }
/// ```
///
/// SQLite has no `pool` and carries `useNullAsDefault` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    connection: Connection,
    acquire_connection_timeout: u64,
}

impl ConnectionDescriptor {
    /// Assemble a descriptor
    pub fn new(connection: Connection, acquire_connection_timeout: u64) -> Self {
        Self {
            connection,
            acquire_connection_timeout,
        }
    }

    /// Selected backend
    pub fn backend(&self) -> Backend {
        self.connection.backend()
    }

    /// Backend-specific connection fields
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// TLS block, present only when enabled on a server backend
    pub fn tls(&self) -> Option<&TlsParameters> {
        self.connection.tls()
    }

    /// Pool bounds for server backends, `None` for SQLite
    pub fn pool(&self) -> Option<PoolParameters> {
        self.connection.pool()
    }

    /// Connection acquisition timeout in milliseconds
    pub fn acquire_connection_timeout(&self) -> u64 {
        self.acquire_connection_timeout
    }

    /// Acquisition timeout as a `Duration`
    pub fn acquire_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.acquire_connection_timeout)
    }

    /// Check the pool bounds, if the backend has a pool
    pub fn validate(&self) -> Result<()> {
        if let Some(pool) = self.pool() {
            pool.validate()?;
        }
        Ok(())
    }

    /// Compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Consume the descriptor, returning its connection fields
    pub fn into_connection(self) -> Connection {
        self.connection
    }
}

impl Serialize for ConnectionDescriptor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ConnectionDescriptor", 4)?;
        state.serialize_field("client", &self.backend())?;
        state.serialize_field("connection", &self.connection)?;
        match &self.connection {
            Connection::Sqlite(sqlite) => {
                state.serialize_field("useNullAsDefault", &sqlite.use_null_as_default)?;
            }
            Connection::Mysql(MysqlConnection { pool, .. })
            | Connection::Postgres(PostgresConnection { pool, .. }) => {
                state.serialize_field("pool", pool)?;
            }
        }
        state.serialize_field("acquireConnectionTimeout", &self.acquire_connection_timeout)?;
        state.end()
    }
}
