//! # Transport Errors
//!
//! Construction of a transport can fail in two ways:
//!
//! - **[`ConfigurationError`]**: the arguments contradict each other. Detected before any
//!   I/O takes place.
//! - **[`ChannelEstablishmentError`]**: credentials could not be obtained, the TLS material
//!   was rejected or the channel could not be opened.
//!
//! Both are fatal: no partially built transport is ever returned. Errors raised by an RPC
//! itself are plain `tonic::Status` values and are never wrapped here.
use crate::BoxError;
use std::path::PathBuf;

/// Umbrella error returned by every transport constructor.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    ChannelEstablishment(#[from] ChannelEstablishmentError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("'credentials' and 'credentials_file' are mutually exclusive")]
    DuplicateCredentialArgs,
    #[error("Invalid quota project id '{0}': not a valid header value")]
    InvalidQuotaProject(String),
    #[error("Invalid client info '{0}': not a valid header value")]
    InvalidClientInfo(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChannelEstablishmentError {
    #[error("Invalid endpoint '{host}': '{source}'")]
    InvalidEndpoint {
        host: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("Failed to obtain credentials: '{0}'")]
    Credentials(#[from] CredentialsError),
    #[error("Client certificate source failed: '{0}'")]
    ClientCertificate(#[source] BoxError),
    #[error("TLS configuration rejected for '{host}': '{source}'")]
    Tls {
        host: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("Failed to connect to '{host}': '{source}'")]
    ConnectionFailed {
        host: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("Failed to start the runtime backing a blocking transport: '{0}'")]
    Runtime(#[source] std::io::Error),
}

/// Errors raised while resolving credentials from a file or from the environment.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error(
        "Could not automatically determine credentials. Set GOOGLE_APPLICATION_CREDENTIALS or pass credentials explicitly"
    )]
    NotFound,
    #[error("Failed to read credentials file '{path}': '{source}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse credentials file '{path}': '{source}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Credentials file '{path}' of type '{kind}' carries no access token")]
    MissingAccessToken { path: PathBuf, kind: String },
}
