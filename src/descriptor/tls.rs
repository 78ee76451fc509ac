//! TLS parameters for the server backends.
//!
//! The block only exists when `DATABASE_SSL` is true. A disabled block is
//! `None`, never an empty value.

use crate::env::EnvAccessor;
use crate::keys::{self, defaults};
use serde::Serialize;

/// Transport security parameters handed to the driver.
///
/// Key material fields are passed through verbatim. They may hold file
/// contents or paths depending on what the driver expects.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsParameters {
    /// Client private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Client certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    /// Certificate authority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    /// Directory of trusted CA certificates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capath: Option<String>,
    /// Allowed cipher suites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
    /// Reject peers whose certificate does not verify
    pub reject_unauthorized: bool,
}

impl Default for TlsParameters {
    fn default() -> Self {
        Self {
            key: None,
            cert: None,
            ca: None,
            capath: None,
            cipher: None,
            reject_unauthorized: defaults::SSL_REJECT_UNAUTHORIZED,
        }
    }
}

impl TlsParameters {
    /// Resolve the TLS block, or `None` when `DATABASE_SSL` is not true.
    pub fn from_env<E: EnvAccessor + ?Sized>(env: &E) -> Option<Self> {
        if !env.bool(keys::DATABASE_SSL, defaults::SSL) {
            return None;
        }

        Some(Self {
            key: env.optional(keys::DATABASE_SSL_KEY),
            cert: env.optional(keys::DATABASE_SSL_CERT),
            ca: env.optional(keys::DATABASE_SSL_CA),
            capath: env.optional(keys::DATABASE_SSL_CAPATH),
            cipher: env.optional(keys::DATABASE_SSL_CIPHER),
            reject_unauthorized: env.bool(
                keys::DATABASE_SSL_REJECT_UNAUTHORIZED,
                defaults::SSL_REJECT_UNAUTHORIZED,
            ),
        })
    }
}

impl std::fmt::Debug for TlsParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsParameters")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("cert", &self.cert)
            .field("ca", &self.ca)
            .field("capath", &self.capath)
            .field("cipher", &self.cipher)
            .field("reject_unauthorized", &self.reject_unauthorized)
            .finish()
    }
}

/// Serialize an optional TLS block as `false` when absent.
pub(crate) fn serialize_tls<S>(
    tls: &Option<TlsParameters>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match tls {
        Some(params) => params.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
