//! Supported storage backends

use crate::{Error, Result};
use serde::Serialize;

/// Storage backend named by `DATABASE_CLIENT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Embedded file database
    Sqlite,
    /// MySQL / MariaDB server
    #[default]
    Mysql,
    /// PostgreSQL server
    Postgres,
}

impl Backend {
    /// Every supported backend
    pub const ALL: [Backend; 3] = [Backend::Sqlite, Backend::Mysql, Backend::Postgres];

    /// Identifier used in `DATABASE_CLIENT`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
        }
    }

    /// Whether the backend talks to a server over the network
    pub fn is_client_server(&self) -> bool {
        matches!(self, Self::Mysql | Self::Postgres)
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            other => Err(Error::UnsupportedBackend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("sqlite".parse::<Backend>().unwrap(), Backend::Sqlite);
        assert_eq!("mysql".parse::<Backend>().unwrap(), Backend::Mysql);
        assert_eq!("postgres".parse::<Backend>().unwrap(), Backend::Postgres);
    }

    #[test]
    fn test_backend_from_str_unsupported() {
        match "oracle".parse::<Backend>() {
            Err(Error::UnsupportedBackend(value)) => assert_eq!(value, "oracle"),
            other => panic!("expected UnsupportedBackend, got {:?}", other),
        }
        // matching is exact
        assert!("Postgres".parse::<Backend>().is_err());
        assert!("postgresql".parse::<Backend>().is_err());
        assert!("".parse::<Backend>().is_err());
    }

    #[test]
    fn test_backend_display_round_trips() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }

    #[test]
    fn test_backend_default_is_mysql() {
        assert_eq!(Backend::default(), Backend::Mysql);
        assert_eq!(
            Backend::default().as_str(),
            crate::keys::defaults::CLIENT
        );
    }

    #[test]
    fn test_backend_is_client_server() {
        assert!(!Backend::Sqlite.is_client_server());
        assert!(Backend::Mysql.is_client_server());
        assert!(Backend::Postgres.is_client_server());
    }
}
