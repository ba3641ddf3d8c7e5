//! # Channel Construction
//!
//! Builds the single authenticated channel a transport owns.
//!
//! ## How it works
//!
//! 1. The TLS mode decided by the config is resolved: certificate callbacks run and the
//!    deprecated mTLS endpoint may replace the host.
//! 2. Credentials are resolved from exactly one source (explicit, file or ambient).
//! 3. The endpoint is dialled eagerly, so DNS, TLS and connection failures surface at
//!    construction time instead of on the first call.
//! 4. The channel is wrapped with an [`AuthInterceptor`] attaching the bearer token and
//!    the quota project to every request.
use crate::{
    LOG_TARGET,
    config::ChannelConfig,
    credentials::Credentials,
    error::{ChannelEstablishmentError, ConfigurationError, TransportError},
    tls::ResolvedTls,
};
use std::sync::Arc;
use tonic::{
    Request, Status,
    metadata::{Ascii, MetadataValue},
    service::{Interceptor, interceptor::InterceptedService},
    transport::{Channel, Endpoint},
};

/// Metadata key naming the project billed for a request.
pub const QUOTA_PROJECT_HEADER: &str = "x-goog-user-project";

/// The channel type of transports built from a [`ChannelConfig`].
pub type AuthenticatedChannel = InterceptedService<Channel, AuthInterceptor>;

/// Attaches credentials to every outgoing request.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    credentials: Credentials,
    scopes: Arc<[String]>,
    quota_project: Option<MetadataValue<Ascii>>,
}

impl AuthInterceptor {
    /// Creates the interceptor. An explicit `quota_project_id` takes precedence over the
    /// one carried by the credentials.
    pub fn new(
        credentials: Credentials,
        scopes: &[String],
        quota_project_id: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let quota_project = quota_project_id
            .or(credentials.quota_project_id())
            .map(|project| {
                project
                    .parse()
                    .map_err(|_| ConfigurationError::InvalidQuotaProject(project.to_string()))
            })
            .transpose()?;

        Ok(Self {
            credentials,
            scopes: scopes.into(),
            quota_project,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let authorization = self.credentials.authorization(&self.scopes)?;
        request.metadata_mut().insert("authorization", authorization);

        if let Some(project) = &self.quota_project {
            request
                .metadata_mut()
                .insert(QUOTA_PROJECT_HEADER, project.clone());
        }

        Ok(request)
    }
}

/// Turns a bare host into a dialable URI.
///
/// Hosts with an explicit scheme are kept as they are; others get `https://` and, when
/// they carry no port, `:443`.
pub fn endpoint_uri(host: &str) -> String {
    if host.contains("://") {
        return host.to_string();
    }

    let has_port = host
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()));

    if has_port {
        format!("https://{host}")
    } else {
        format!("https://{host}:443")
    }
}

/// Builds and connects the channel described by `config`.
///
/// `host` and `scopes` are the effective values, already defaulted by the caller.
pub(crate) async fn create_channel(
    config: &ChannelConfig,
    host: &str,
    scopes: &[String],
) -> Result<(String, AuthenticatedChannel), TransportError> {
    let ResolvedTls { host, config: tls } = config.tls_mode().resolve(host)?;

    let credentials = config
        .credential_source()
        .resolve()
        .map_err(ChannelEstablishmentError::from)?;

    let interceptor =
        AuthInterceptor::new(credentials, scopes, config.quota_project_id.as_deref())?;

    let uri = endpoint_uri(&host);
    let mut endpoint = Endpoint::from_shared(uri.clone()).map_err(|source| {
        tracing::error!(target: LOG_TARGET, host = %uri, error = ?source, "Invalid endpoint");
        ChannelEstablishmentError::InvalidEndpoint {
            host: uri.clone(),
            source,
        }
    })?;

    if let Some(user_agent) = &config.client_info.user_agent {
        endpoint = endpoint
            .user_agent(user_agent.as_str())
            .map_err(|source| ChannelEstablishmentError::InvalidEndpoint {
                host: uri.clone(),
                source,
            })?;
    }

    if let Some(timeout) = config.connect_timeout {
        endpoint = endpoint.connect_timeout(timeout);
    }

    if let Some(tls) = tls {
        endpoint = endpoint
            .tls_config(tls)
            .map_err(|source| ChannelEstablishmentError::Tls {
                host: uri.clone(),
                source,
            })?;
    }

    tracing::debug!(target: LOG_TARGET, host = %uri, "Creating gRPC channel");

    let channel = endpoint.connect().await.map_err(|source| {
        tracing::error!(
            target: LOG_TARGET,
            host = %uri,
            error = ?source,
            "Failed to connect to gRPC service"
        );
        ChannelEstablishmentError::ConnectionFailed {
            host: uri.clone(),
            source,
        }
    })?;

    Ok((host, InterceptedService::new(channel, interceptor)))
}
