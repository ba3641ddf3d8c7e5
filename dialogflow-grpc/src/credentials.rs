//! # Credentials
//!
//! The transport never looks inside a token. It only needs something that can hand out a
//! bearer token for a set of scopes, which is what [`TokenProvider`] models.
//!
//! Credentials come from exactly one of three places:
//!
//! 1. An explicit [`Credentials`] value passed to the config.
//! 2. A credentials file (see [`Credentials::from_file`]).
//! 3. Ambient discovery through [`AmbientDiscovery`]: the file named by
//!    `GOOGLE_APPLICATION_CREDENTIALS`, then the gcloud well-known file.
use crate::{BoxError, error::CredentialsError};
use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use tonic::metadata::{Ascii, MetadataValue};

/// Environment variable pointing at a credentials file.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

const WELL_KNOWN_FILE: &str = "application_default_credentials.json";

/// A source of bearer tokens.
///
/// Implementations are called once per request from the channel's interceptor, so they
/// should cache tokens themselves when fetching one is expensive.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self, scopes: &[String]) -> Result<String, BoxError>;
}

/// A fixed token, e.g. the output of `gcloud auth print-access-token`.
struct StaticToken(String);

impl TokenProvider for StaticToken {
    fn access_token(&self, _scopes: &[String]) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

/// Opaque bearer-token credentials attached to every request of a built channel.
#[derive(Clone)]
pub struct Credentials {
    provider: Arc<dyn TokenProvider>,
    quota_project_id: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider", &"<redacted>")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl Credentials {
    /// Credentials that always present the same bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::from_provider(StaticToken(token.into()))
    }

    pub fn from_provider(provider: impl TokenProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            quota_project_id: None,
        }
    }

    /// Returns a copy of these credentials billed against `quota_project_id`.
    pub fn with_quota_project_id(mut self, quota_project_id: impl Into<String>) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    pub fn quota_project_id(&self) -> Option<&str> {
        self.quota_project_id.as_deref()
    }

    /// Loads credentials from a JSON credentials file.
    ///
    /// The file must carry an `access_token`. Files that would require a token exchange
    /// (plain service account keys, refresh tokens) are rejected with
    /// [`CredentialsError::MissingAccessToken`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CredentialsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CredentialsFile =
            serde_json::from_str(&content).map_err(|source| CredentialsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let token = file
            .access_token
            .ok_or_else(|| CredentialsError::MissingAccessToken {
                path: path.to_path_buf(),
                kind: file.kind.clone().unwrap_or_else(|| "unknown".to_string()),
            })?;

        let mut credentials = Self::bearer(token);
        credentials.quota_project_id = file.quota_project_id;
        Ok(credentials)
    }

    /// Builds the `authorization` header value for one request.
    pub(crate) fn authorization(
        &self,
        scopes: &[String],
    ) -> Result<MetadataValue<Ascii>, tonic::Status> {
        let token = self
            .provider
            .access_token(scopes)
            .map_err(|e| tonic::Status::unauthenticated(format!("Failed to obtain token: {e}")))?;

        format!("Bearer {token}")
            .parse()
            .map_err(|_| tonic::Status::unauthenticated("Access token is not a valid header value"))
    }
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "type")]
    kind: Option<String>,
    access_token: Option<String>,
    quota_project_id: Option<String>,
}

/// Where ambient credentials are looked up.
///
/// [`AmbientDiscovery::from_env`] is what transports use unless told otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientDiscovery {
    /// Explicit file, normally the value of `GOOGLE_APPLICATION_CREDENTIALS`.
    pub credentials_file: Option<PathBuf>,
    /// The gcloud application default credentials file.
    pub well_known_file: Option<PathBuf>,
}

impl AmbientDiscovery {
    /// Reads `GOOGLE_APPLICATION_CREDENTIALS` and locates the gcloud configuration directory.
    pub fn from_env() -> Self {
        Self {
            credentials_file: std::env::var_os(CREDENTIALS_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            well_known_file: gcloud_config_dir().map(|dir| dir.join(WELL_KNOWN_FILE)),
        }
    }

    /// A discovery that never finds anything.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub(crate) fn discover(&self) -> Result<Credentials, CredentialsError> {
        if let Some(path) = &self.credentials_file {
            return Credentials::from_file(path);
        }

        match &self.well_known_file {
            Some(path) if path.is_file() => Credentials::from_file(path),
            _ => Err(CredentialsError::NotFound),
        }
    }
}

#[cfg(windows)]
fn gcloud_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("gcloud"))
}

#[cfg(not(windows))]
fn gcloud_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("gcloud"))
}

/// The single credential source chosen for a transport.
#[derive(Debug, Clone)]
pub(crate) enum CredentialSource {
    Explicit(Credentials),
    File(PathBuf),
    Ambient(AmbientDiscovery),
}

impl CredentialSource {
    pub(crate) fn resolve(self) -> Result<Credentials, CredentialsError> {
        match self {
            CredentialSource::Explicit(credentials) => Ok(credentials),
            CredentialSource::File(path) => Credentials::from_file(path),
            CredentialSource::Ambient(discovery) => discovery.discover(),
        }
    }
}
