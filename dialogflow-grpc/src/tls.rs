//! # TLS Negotiation
//!
//! The TLS setup of a channel is decided once, at construction, from the options in a
//! [`crate::ChannelConfig`]. The outcome is a [`TlsMode`], which is then turned into the
//! effective host and an optional `ClientTlsConfig`.
use crate::{BoxError, LOG_TARGET, error::ChannelEstablishmentError};
use std::{fmt, sync::Arc};
use tonic::transport::{ClientTlsConfig, Identity};

/// A client certificate chain and its private key, both PEM encoded.
#[derive(Clone)]
pub struct ClientCertificate {
    pub cert_chain: Vec<u8>,
    pub private_key: Vec<u8>,
}

impl fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCertificate")
            .field("cert_chain", &format_args!("{} bytes", self.cert_chain.len()))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Callback producing the client certificate for mutual TLS.
pub type ClientCertSource = Arc<dyn Fn() -> Result<ClientCertificate, BoxError> + Send + Sync>;

/// How the channel secures its connection.
#[derive(Clone)]
pub enum TlsMode {
    /// Server-authenticated TLS using the trusted roots of the platform. `http://` hosts
    /// are dialled in plaintext.
    None,
    /// Deprecated mutual TLS setup: the host is replaced by `api_mtls_endpoint` and the
    /// client identity comes from `client_cert_source`, or from nowhere when absent.
    LegacyCertCallback {
        api_mtls_endpoint: String,
        client_cert_source: Option<ClientCertSource>,
    },
    /// Mutual TLS with a client identity produced by the callback.
    ClientCertCallback(ClientCertSource),
    /// A TLS configuration used as given.
    ExplicitCredentials(ClientTlsConfig),
}

impl fmt::Debug for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsMode::None => f.write_str("None"),
            TlsMode::LegacyCertCallback {
                api_mtls_endpoint,
                client_cert_source,
            } => f
                .debug_struct("LegacyCertCallback")
                .field("api_mtls_endpoint", api_mtls_endpoint)
                .field("client_cert_source", &client_cert_source.is_some())
                .finish(),
            TlsMode::ClientCertCallback(_) => f.write_str("ClientCertCallback"),
            TlsMode::ExplicitCredentials(config) => {
                f.debug_tuple("ExplicitCredentials").field(config).finish()
            }
        }
    }
}

/// The host to dial and the TLS configuration to dial it with.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedTls {
    pub(crate) host: String,
    pub(crate) config: Option<ClientTlsConfig>,
}

impl TlsMode {
    /// Turns the mode into a concrete TLS configuration for `host`.
    ///
    /// Certificate callbacks are invoked here, exactly once.
    pub(crate) fn resolve(self, host: &str) -> Result<ResolvedTls, ChannelEstablishmentError> {
        match self {
            TlsMode::None => Ok(ResolvedTls {
                host: host.to_string(),
                config: default_tls(host),
            }),
            TlsMode::LegacyCertCallback {
                api_mtls_endpoint,
                client_cert_source,
            } => {
                let mut config = ClientTlsConfig::new().with_enabled_roots();
                if let Some(source) = client_cert_source {
                    config = config.identity(load_identity(&source)?);
                }
                tracing::debug!(
                    target: LOG_TARGET,
                    host = %api_mtls_endpoint,
                    "Overriding host with the mutual TLS endpoint"
                );
                Ok(ResolvedTls {
                    host: api_mtls_endpoint,
                    config: Some(config),
                })
            }
            TlsMode::ClientCertCallback(source) => Ok(ResolvedTls {
                host: host.to_string(),
                config: Some(
                    ClientTlsConfig::new()
                        .with_enabled_roots()
                        .identity(load_identity(&source)?),
                ),
            }),
            TlsMode::ExplicitCredentials(config) => Ok(ResolvedTls {
                host: host.to_string(),
                config: Some(config),
            }),
        }
    }
}

fn load_identity(source: &ClientCertSource) -> Result<Identity, ChannelEstablishmentError> {
    let cert = source().map_err(ChannelEstablishmentError::ClientCertificate)?;
    Ok(Identity::from_pem(cert.cert_chain, cert.private_key))
}

fn default_tls(host: &str) -> Option<ClientTlsConfig> {
    if host.starts_with("http://") {
        None
    } else {
        Some(ClientTlsConfig::new().with_enabled_roots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_source(counter: Arc<AtomicUsize>) -> ClientCertSource {
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(ClientCertificate {
                cert_chain: b"cert".to_vec(),
                private_key: b"key".to_vec(),
            })
        })
    }

    #[test]
    fn test_none_keeps_host_and_uses_tls() {
        let resolved = TlsMode::None.resolve("dialogflow.googleapis.com").unwrap();
        assert_eq!(resolved.host, "dialogflow.googleapis.com");
        assert!(resolved.config.is_some());
    }

    #[test]
    fn test_none_plaintext_for_http_hosts() {
        let resolved = TlsMode::None.resolve("http://localhost:8080").unwrap();
        assert!(resolved.config.is_none());
    }

    #[test]
    fn test_legacy_overrides_host() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mode = TlsMode::LegacyCertCallback {
            api_mtls_endpoint: "dialogflow.mtls.googleapis.com".to_string(),
            client_cert_source: Some(counting_source(counter.clone())),
        };

        let resolved = mode.resolve("dialogflow.googleapis.com").unwrap();
        assert_eq!(resolved.host, "dialogflow.mtls.googleapis.com");
        assert!(resolved.config.is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_legacy_without_callback_uses_default_tls() {
        let mode = TlsMode::LegacyCertCallback {
            api_mtls_endpoint: "dialogflow.mtls.googleapis.com".to_string(),
            client_cert_source: None,
        };

        let resolved = mode.resolve("dialogflow.googleapis.com").unwrap();
        assert_eq!(resolved.host, "dialogflow.mtls.googleapis.com");
        assert!(resolved.config.is_some());
    }

    #[test]
    fn test_callback_error_is_surfaced() {
        let source: ClientCertSource = Arc::new(|| Err("no certificate on this machine".into()));

        let err = TlsMode::ClientCertCallback(source)
            .resolve("dialogflow.googleapis.com")
            .unwrap_err();
        assert!(matches!(err, ChannelEstablishmentError::ClientCertificate(_)));
    }

    #[test]
    fn test_certificate_debug_redacts_key() {
        let cert = ClientCertificate {
            cert_chain: b"cert".to_vec(),
            private_key: b"very-secret".to_vec(),
        };
        assert!(!format!("{cert:?}").contains("very-secret"));
    }
}
