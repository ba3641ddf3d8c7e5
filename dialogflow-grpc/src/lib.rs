//! # Dialogflow gRPC
//!
//! `dialogflow-grpc` provides the gRPC transports used to talk to the Dialogflow API.
//! A transport owns exactly one authenticated channel and hands out typed, lazily
//! created method bindings for every RPC of the service it was built for.
//!
//! ## Key Components
//!
//! * **[`ChannelConfig`]:** Everything needed to build a channel: host, credentials,
//!   scopes, TLS material, quota project and message size limits.
//! * **[`services`]:** One module per Dialogflow service (Documents, SessionEntityTypes,
//!   Conversations) plus the long-running Operations client. Each service comes in an
//!   asynchronous (`*GrpcAsyncTransport`) and a blocking (`*GrpcTransport`) flavour.
//! * **[`UnaryCall`] & [`BlockingUnaryCall`]:** The cached method bindings. Calling them
//!   issues one RPC over the shared channel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dialogflow_grpc::{ChannelConfig, Credentials};
//! use dialogflow_grpc::proto::dialogflow_v2::GetDocumentRequest;
//! use dialogflow_grpc::services::documents::DocumentsGrpcAsyncTransport;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ChannelConfig::new().with_credentials(Credentials::bearer("ya29.token"));
//! let transport = DocumentsGrpcAsyncTransport::connect(config).await?;
//!
//! let request = GetDocumentRequest {
//!     name: "projects/p/knowledgeBases/kb/documents/d".to_string(),
//! };
//! let document = transport.get_document().call(request).await?.into_inner();
//! println!("{}", document.display_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Construction fails with a [`TransportError`]: either a [`ConfigurationError`]
//! (mutually exclusive arguments) or a [`ChannelEstablishmentError`] (credentials, TLS
//! or connection failures). Calls return `tonic::Status` untouched; retries and
//! deadlines are the caller's business.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost`, `prost-types` and `tonic` to ensure that consumers
//! use compatible versions of these underlying dependencies.
pub mod channel;
pub mod client_info;
pub mod config;
pub mod credentials;
pub mod error;
pub mod proto;
pub mod services;
pub mod tls;
pub mod transport;

pub use channel::{AuthInterceptor, AuthenticatedChannel};
pub use client_info::ClientInfo;
pub use config::{ChannelConfig, DeprecatedOption, TransportSettings};
pub use credentials::{AmbientDiscovery, Credentials, TokenProvider};
pub use error::{ChannelEstablishmentError, ConfigurationError, CredentialsError, TransportError};
pub use tls::{ClientCertSource, ClientCertificate, TlsMode};
pub use transport::{
    BlockingUnaryCall, CallShape, GrpcTransport, MessageLimits, MethodDescriptor, ServiceInfo,
    Transport, UnaryCall, WrappedMethod, WrappedMethods,
};

// Re-exports
pub use prost;
pub use prost_types;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// `tracing` target used by every event emitted from this crate.
pub(crate) const LOG_TARGET: &str = "dialogflow_grpc";
