//! # Channel Configuration
//!
//! [`ChannelConfig`] gathers every construction argument of a transport. It is a plain
//! builder: nothing is validated or resolved until a transport is built from it.
//!
//! [`TransportSettings`] is the serializable subset of the same options, meant to be
//! loaded from a JSON file.
use crate::{
    client_info::ClientInfo,
    credentials::{AmbientDiscovery, CredentialSource, Credentials},
    error::ConfigurationError,
    tls::{ClientCertSource, ClientCertificate, TlsMode},
};
use serde::Deserialize;
use std::{fmt, path::PathBuf, sync::Arc, time::Duration};
use tonic::transport::{Certificate, ClientTlsConfig, Identity};

/// Construction arguments for a transport.
#[derive(Clone, Default)]
pub struct ChannelConfig {
    /// Host to connect to. Defaults to the service's default host.
    pub host: Option<String>,
    pub credentials: Option<Credentials>,
    pub credentials_file: Option<PathBuf>,
    /// OAuth scopes. Defaults to the service's scopes.
    pub scopes: Option<Vec<String>>,
    /// Deprecated. Replaces `host` and switches to mutual TLS.
    pub api_mtls_endpoint: Option<String>,
    /// Deprecated. Certificate callback used together with `api_mtls_endpoint`.
    pub client_cert_source: Option<ClientCertSource>,
    pub ssl_credentials: Option<ClientTlsConfig>,
    /// Certificate callback for mutual TLS. Ignored when `ssl_credentials` is set.
    pub client_cert_source_for_mtls: Option<ClientCertSource>,
    pub quota_project_id: Option<String>,
    pub client_info: ClientInfo,
    /// `None` means unbounded.
    pub max_send_message_size: Option<usize>,
    /// `None` means unbounded.
    pub max_receive_message_size: Option<usize>,
    pub connect_timeout: Option<Duration>,
    /// Where ambient credentials are searched. Defaults to [`AmbientDiscovery::from_env`].
    pub ambient_discovery: Option<AmbientDiscovery>,
}

impl fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("host", &self.host)
            .field("credentials", &self.credentials)
            .field("credentials_file", &self.credentials_file)
            .field("scopes", &self.scopes)
            .field("api_mtls_endpoint", &self.api_mtls_endpoint)
            .field("client_cert_source", &self.client_cert_source.is_some())
            .field("ssl_credentials", &self.ssl_credentials)
            .field(
                "client_cert_source_for_mtls",
                &self.client_cert_source_for_mtls.is_some(),
            )
            .field("quota_project_id", &self.quota_project_id)
            .field("client_info", &self.client_info)
            .field("max_send_message_size", &self.max_send_message_size)
            .field("max_receive_message_size", &self.max_receive_message_size)
            .field("connect_timeout", &self.connect_timeout)
            .field("ambient_discovery", &self.ambient_discovery)
            .finish()
    }
}

/// Construction options that still work but are scheduled for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecatedOption {
    ApiMtlsEndpoint,
    ClientCertSource,
}

impl fmt::Display for DeprecatedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeprecatedOption::ApiMtlsEndpoint => f.write_str("api_mtls_endpoint is deprecated"),
            DeprecatedOption::ClientCertSource => f.write_str("client_cert_source is deprecated"),
        }
    }
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_api_mtls_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_mtls_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_client_cert_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Result<ClientCertificate, crate::BoxError> + Send + Sync + 'static,
    {
        self.client_cert_source = Some(Arc::new(source));
        self
    }

    pub fn with_ssl_credentials(mut self, tls: ClientTlsConfig) -> Self {
        self.ssl_credentials = Some(tls);
        self
    }

    pub fn with_client_cert_source_for_mtls<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Result<ClientCertificate, crate::BoxError> + Send + Sync + 'static,
    {
        self.client_cert_source_for_mtls = Some(Arc::new(source));
        self
    }

    pub fn with_quota_project_id(mut self, project: impl Into<String>) -> Self {
        self.quota_project_id = Some(project.into());
        self
    }

    pub fn with_client_info(mut self, client_info: ClientInfo) -> Self {
        self.client_info = client_info;
        self
    }

    pub fn with_max_send_message_size(mut self, limit: usize) -> Self {
        self.max_send_message_size = Some(limit);
        self
    }

    pub fn with_max_receive_message_size(mut self, limit: usize) -> Self {
        self.max_receive_message_size = Some(limit);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_ambient_discovery(mut self, discovery: AmbientDiscovery) -> Self {
        self.ambient_discovery = Some(discovery);
        self
    }

    /// Lists the deprecated options that are set.
    pub fn deprecated_options(&self) -> Vec<DeprecatedOption> {
        let mut deprecated = Vec::new();
        if self.api_mtls_endpoint.is_some() {
            deprecated.push(DeprecatedOption::ApiMtlsEndpoint);
        }
        if self.client_cert_source.is_some() {
            deprecated.push(DeprecatedOption::ClientCertSource);
        }
        deprecated
    }

    /// Fails when both an explicit credential and a credentials file were given.
    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        if self.credentials.is_some() && self.credentials_file.is_some() {
            return Err(ConfigurationError::DuplicateCredentialArgs);
        }
        Ok(())
    }

    /// Picks the one credential source in effect. Call [`ChannelConfig::validate`] first.
    pub(crate) fn credential_source(&self) -> CredentialSource {
        match (&self.credentials, &self.credentials_file) {
            (Some(credentials), _) => CredentialSource::Explicit(credentials.clone()),
            (None, Some(path)) => CredentialSource::File(path.clone()),
            (None, None) => CredentialSource::Ambient(
                self.ambient_discovery
                    .clone()
                    .unwrap_or_else(AmbientDiscovery::from_env),
            ),
        }
    }

    /// Decides how the channel is secured.
    ///
    /// The deprecated mTLS endpoint wins over everything else. Otherwise a client
    /// certificate callback is used only when no explicit TLS configuration was given.
    pub fn tls_mode(&self) -> TlsMode {
        if let Some(endpoint) = &self.api_mtls_endpoint {
            return TlsMode::LegacyCertCallback {
                api_mtls_endpoint: endpoint.clone(),
                client_cert_source: self.client_cert_source.clone(),
            };
        }

        match (&self.ssl_credentials, &self.client_cert_source_for_mtls) {
            (Some(tls), _) => TlsMode::ExplicitCredentials(tls.clone()),
            (None, Some(source)) => TlsMode::ClientCertCallback(source.clone()),
            (None, None) => TlsMode::None,
        }
    }
}

/// Serializable transport settings, e.g. loaded from a JSON file.
///
/// ```json
/// {
///   "host": "dialogflow.googleapis.com",
///   "credentials_file": "/etc/dialogflow/token.json",
///   "quota_project_id": "my-billing-project",
///   "max_receive_message_size": 16777216
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportSettings {
    pub host: Option<String>,
    pub credentials_file: Option<PathBuf>,
    pub scopes: Option<Vec<String>>,
    pub quota_project_id: Option<String>,
    pub api_mtls_endpoint: Option<String>,
    /// PEM client certificate chain, used for mutual TLS together with `client_key`.
    pub client_certificate: Option<PathBuf>,
    pub client_key: Option<PathBuf>,
    /// PEM CA bundle replacing the platform roots.
    pub ca_certificate: Option<PathBuf>,
    pub max_send_message_size: Option<usize>,
    pub max_receive_message_size: Option<usize>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': '{source}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file '{path}': '{source}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("'client_certificate' and 'client_key' must be set together")]
    IncompleteClientCertificate,
}

impl TransportSettings {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Converts the settings into a [`ChannelConfig`].
    ///
    /// With a `ca_certificate` every PEM file is read right away. Otherwise the client
    /// certificate is read by a callback, when the channel is built.
    pub fn into_config(self) -> Result<ChannelConfig, SettingsError> {
        let mut config = ChannelConfig {
            host: self.host,
            credentials_file: self.credentials_file,
            scopes: self.scopes,
            quota_project_id: self.quota_project_id,
            max_send_message_size: self.max_send_message_size,
            max_receive_message_size: self.max_receive_message_size,
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            ..ChannelConfig::default()
        };

        let cert_paths = match (self.client_certificate, self.client_key) {
            (Some(cert), Some(key)) => Some((cert, key)),
            (None, None) => None,
            _ => return Err(SettingsError::IncompleteClientCertificate),
        };

        if let Some(endpoint) = self.api_mtls_endpoint {
            config.api_mtls_endpoint = Some(endpoint);
            config.client_cert_source = cert_paths.map(|(cert, key)| file_cert_source(cert, key));
        } else if let Some(ca) = self.ca_certificate {
            let mut tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(read(ca)?));
            if let Some((cert, key)) = cert_paths {
                tls = tls.identity(Identity::from_pem(read(cert)?, read(key)?));
            }
            config.ssl_credentials = Some(tls);
        } else {
            config.client_cert_source_for_mtls =
                cert_paths.map(|(cert, key)| file_cert_source(cert, key));
        }

        Ok(config)
    }
}

fn read(path: PathBuf) -> Result<Vec<u8>, SettingsError> {
    std::fs::read(&path).map_err(|source| SettingsError::Io { path, source })
}

fn file_cert_source(cert: PathBuf, key: PathBuf) -> ClientCertSource {
    Arc::new(move || {
        Ok(ClientCertificate {
            cert_chain: std::fs::read(&cert)?,
            private_key: std::fs::read(&key)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_credentials_rejected() {
        let config = ChannelConfig::new()
            .with_credentials(Credentials::bearer("token"))
            .with_credentials_file("/tmp/creds.json");

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::DuplicateCredentialArgs)
        ));
    }

    #[test]
    fn test_single_credential_source() {
        let explicit = ChannelConfig::new().with_credentials(Credentials::bearer("token"));
        assert!(explicit.validate().is_ok());
        assert!(matches!(
            explicit.credential_source(),
            CredentialSource::Explicit(_)
        ));

        let file = ChannelConfig::new().with_credentials_file("/tmp/creds.json");
        assert!(matches!(file.credential_source(), CredentialSource::File(_)));

        let ambient = ChannelConfig::new().with_ambient_discovery(AmbientDiscovery::disabled());
        assert!(matches!(
            ambient.credential_source(),
            CredentialSource::Ambient(discovery) if discovery == AmbientDiscovery::disabled()
        ));
    }

    #[test]
    fn test_tls_mode_defaults_to_none() {
        assert!(matches!(ChannelConfig::new().tls_mode(), TlsMode::None));
    }

    #[test]
    fn test_tls_mode_legacy_wins() {
        let config = ChannelConfig::new()
            .with_api_mtls_endpoint("mtls.example.com")
            .with_ssl_credentials(ClientTlsConfig::new())
            .with_client_cert_source_for_mtls(|| Err("unused".into()));

        assert!(matches!(
            config.tls_mode(),
            TlsMode::LegacyCertCallback { api_mtls_endpoint, client_cert_source: None }
                if api_mtls_endpoint == "mtls.example.com"
        ));
    }

    #[test]
    fn test_tls_mode_explicit_credentials_beat_callback() {
        let config = ChannelConfig::new()
            .with_ssl_credentials(ClientTlsConfig::new())
            .with_client_cert_source_for_mtls(|| Err("unused".into()));

        assert!(matches!(
            config.tls_mode(),
            TlsMode::ExplicitCredentials(_)
        ));
    }

    #[test]
    fn test_tls_mode_callback() {
        let config = ChannelConfig::new().with_client_cert_source_for_mtls(|| Err("unused".into()));
        assert!(matches!(config.tls_mode(), TlsMode::ClientCertCallback(_)));
    }

    #[test]
    fn test_deprecated_options() {
        let config = ChannelConfig::new()
            .with_api_mtls_endpoint("mtls.example.com")
            .with_client_cert_source(|| Err("unused".into()));

        assert_eq!(
            config.deprecated_options(),
            vec![
                DeprecatedOption::ApiMtlsEndpoint,
                DeprecatedOption::ClientCertSource
            ]
        );
        assert!(ChannelConfig::new().deprecated_options().is_empty());
    }

    #[test]
    fn test_settings_into_config() {
        let settings: TransportSettings = serde_json::from_str(
            r#"{
                "host": "http://localhost:8080",
                "credentials_file": "/tmp/token.json",
                "scopes": ["https://www.googleapis.com/auth/dialogflow"],
                "quota_project_id": "billing",
                "max_receive_message_size": 1024,
                "connect_timeout_secs": 3
            }"#,
        )
        .unwrap();

        let config = settings.into_config().unwrap();
        assert_eq!(config.host.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.credentials_file, Some(PathBuf::from("/tmp/token.json")));
        assert_eq!(config.quota_project_id.as_deref(), Some("billing"));
        assert_eq!(config.max_receive_message_size, Some(1024));
        assert_eq!(config.max_send_message_size, None);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
        assert!(matches!(config.tls_mode(), TlsMode::None));
    }

    #[test]
    fn test_settings_client_certificate_requires_key() {
        let settings = TransportSettings {
            client_certificate: Some(PathBuf::from("/tmp/cert.pem")),
            ..TransportSettings::default()
        };
        assert!(matches!(
            settings.into_config(),
            Err(SettingsError::IncompleteClientCertificate)
        ));
    }

    #[test]
    fn test_settings_client_certificate_callback() {
        let settings = TransportSettings {
            client_certificate: Some(PathBuf::from("/tmp/cert.pem")),
            client_key: Some(PathBuf::from("/tmp/key.pem")),
            ..TransportSettings::default()
        };
        let config = settings.into_config().unwrap();
        assert!(matches!(config.tls_mode(), TlsMode::ClientCertCallback(_)));
    }

    #[test]
    fn test_settings_reject_unknown_fields() {
        let result = serde_json::from_str::<TransportSettings>(r#"{"hots": "typo"}"#);
        assert!(result.is_err());
    }
}
