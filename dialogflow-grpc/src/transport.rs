//! # Generic Transport
//!
//! [`GrpcTransport`] is the part every service transport has in common: it owns one
//! channel, the effective host and scopes, the message size limits and the table of
//! wrapped methods. Service transports add one cached accessor per RPC on top of it.
//!
//! ## How it works
//!
//! A service is described statically by a [`ServiceInfo`] listing its
//! [`MethodDescriptor`]s. Binding a descriptor with [`GrpcTransport::bind`] clones the
//! channel into a `tonic::client::Grpc` configured with the transport's limits, and
//! returns a [`UnaryCall`] that knows the wire path and the prost codec to use.
//!
//! Bindings are cheap but not free, so service transports keep each of them in a
//! `OnceLock` and hand out the same instance on every access.
use crate::{
    BoxError, LOG_TARGET,
    channel::{self, AuthenticatedChannel},
    client_info::{API_CLIENT_HEADER, ClientInfo},
    config::ChannelConfig,
    error::{ChannelEstablishmentError, TransportError},
};
use http::uri::PathAndQuery;
use http_body::Body as HttpBody;
use std::{collections::BTreeMap, fmt, marker::PhantomData, sync::Arc};
use tonic::{
    GrpcMethod, IntoRequest, Response, Status,
    client::GrpcService,
    metadata::{Ascii, MetadataValue},
};

/// How the response of an RPC should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    Unary,
    /// Returns a `google.longrunning.Operation` to be polled with an operations client.
    LongRunning,
}

/// Static description of one RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Name of the accessor exposing the RPC, e.g. `get_document`.
    pub name: &'static str,
    /// Fully qualified service name, e.g. `google.cloud.dialogflow.v2.Documents`.
    pub service: &'static str,
    /// RPC name as declared in the proto file, e.g. `GetDocument`.
    pub rpc: &'static str,
    /// Wire path, `/<service>/<rpc>`.
    pub path: &'static str,
    pub shape: CallShape,
}

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub default_host: &'static str,
    pub auth_scopes: &'static [&'static str],
    pub methods: &'static [MethodDescriptor],
}

impl ServiceInfo {
    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// Maximum encoded message sizes, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimits {
    pub max_send: usize,
    pub max_receive: usize,
}

impl MessageLimits {
    pub const UNBOUNDED: Self = Self {
        max_send: usize::MAX,
        max_receive: usize::MAX,
    };

    fn from_config(config: &ChannelConfig) -> Self {
        Self {
            max_send: config.max_send_message_size.unwrap_or(usize::MAX),
            max_receive: config.max_receive_message_size.unwrap_or(usize::MAX),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }
}

impl Default for MessageLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-method call defaults registered when a transport is built.
///
/// Only the client identification lives here; retry and timeout policies are layered on
/// by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedMethod {
    pub method: &'static MethodDescriptor,
    pub client_info: ClientInfo,
}

/// The wrapped-method table of a transport, keyed by accessor name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedMethods(BTreeMap<&'static str, WrappedMethod>);

impl WrappedMethods {
    fn new(service: &'static ServiceInfo, client_info: &ClientInfo) -> Self {
        let methods = service
            .methods
            .iter()
            .map(|method| {
                (
                    method.name,
                    WrappedMethod {
                        method,
                        client_info: client_info.clone(),
                    },
                )
            })
            .collect();
        Self(methods)
    }

    pub fn get(&self, name: &str) -> Option<&WrappedMethod> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// One channel, bound to one service.
pub struct GrpcTransport<S> {
    service: &'static ServiceInfo,
    host: String,
    scopes: Vec<String>,
    channel: S,
    limits: MessageLimits,
    api_client: MetadataValue<Ascii>,
    wrapped_methods: WrappedMethods,
    client_info: ClientInfo,
    quota_project_id: Option<String>,
}

impl<S> fmt::Debug for GrpcTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcTransport")
            .field("service", &self.service.name)
            .field("host", &self.host)
            .field("scopes", &self.scopes)
            .field("limits", &self.limits)
            .field("quota_project_id", &self.quota_project_id)
            .finish_non_exhaustive()
    }
}

/// Effective values shared by both constructors.
struct Prepared {
    host: String,
    scopes: Vec<String>,
    limits: MessageLimits,
    api_client: MetadataValue<Ascii>,
    wrapped_methods: WrappedMethods,
}

fn prepare(
    service: &'static ServiceInfo,
    config: &ChannelConfig,
) -> Result<Prepared, TransportError> {
    config.validate()?;

    Ok(Prepared {
        host: config
            .host
            .clone()
            .unwrap_or_else(|| service.default_host.to_string()),
        scopes: config.scopes.clone().unwrap_or_else(|| {
            service
                .auth_scopes
                .iter()
                .map(|scope| scope.to_string())
                .collect()
        }),
        limits: MessageLimits::from_config(config),
        api_client: config.client_info.header_value()?,
        wrapped_methods: WrappedMethods::new(service, &config.client_info),
    })
}

impl GrpcTransport<AuthenticatedChannel> {
    /// Builds and connects an authenticated channel for `service`.
    pub async fn connect(
        service: &'static ServiceInfo,
        config: ChannelConfig,
    ) -> Result<Self, TransportError> {
        let prepared = prepare(service, &config)?;

        for option in config.deprecated_options() {
            tracing::warn!(target: LOG_TARGET, service = service.name, "{option}");
        }

        let (host, channel) =
            channel::create_channel(&config, &prepared.host, &prepared.scopes).await?;

        tracing::debug!(
            target: LOG_TARGET,
            service = service.name,
            host = %host,
            "Transport ready"
        );

        Ok(Self {
            service,
            host,
            scopes: prepared.scopes,
            channel,
            limits: prepared.limits,
            api_client: prepared.api_client,
            wrapped_methods: prepared.wrapped_methods,
            client_info: config.client_info,
            quota_project_id: config.quota_project_id,
        })
    }
}

impl<S> GrpcTransport<S> {
    /// Wraps an existing channel.
    ///
    /// The channel is used as given: credentials, TLS options and certificate callbacks in
    /// `config` are ignored. Supplying both `credentials` and `credentials_file` is still
    /// an error.
    pub fn with_channel(
        service: &'static ServiceInfo,
        channel: S,
        config: ChannelConfig,
    ) -> Result<Self, TransportError> {
        let prepared = prepare(service, &config)?;

        tracing::debug!(
            target: LOG_TARGET,
            service = service.name,
            host = %prepared.host,
            "Using pre-built channel"
        );

        Ok(Self {
            service,
            host: prepared.host,
            scopes: prepared.scopes,
            channel,
            limits: prepared.limits,
            api_client: prepared.api_client,
            wrapped_methods: prepared.wrapped_methods,
            client_info: config.client_info,
            quota_project_id: config.quota_project_id,
        })
    }

    pub fn service(&self) -> &'static ServiceInfo {
        self.service
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn channel(&self) -> &S {
        &self.channel
    }

    pub fn message_limits(&self) -> MessageLimits {
        self.limits
    }

    pub fn wrapped_methods(&self) -> &WrappedMethods {
        &self.wrapped_methods
    }

    pub fn quota_project_id(&self) -> Option<&str> {
        self.quota_project_id.as_deref()
    }
}

impl<S: Clone> GrpcTransport<S> {
    /// A transport for another service sharing this transport's channel and settings.
    pub(crate) fn for_service(&self, service: &'static ServiceInfo) -> Self {
        Self {
            service,
            host: self.host.clone(),
            scopes: self.scopes.clone(),
            channel: self.channel.clone(),
            limits: self.limits,
            api_client: self.api_client.clone(),
            wrapped_methods: WrappedMethods::new(service, &self.client_info),
            client_info: self.client_info.clone(),
            quota_project_id: self.quota_project_id.clone(),
        }
    }

    /// Creates a fresh binding for `method`. Service transports cache the result.
    pub fn bind<Req, Resp>(&self, method: &'static MethodDescriptor) -> UnaryCall<Req, Resp, S> {
        tracing::trace!(
            target: LOG_TARGET,
            method = method.path,
            "Creating method binding"
        );

        let grpc = tonic::client::Grpc::new(self.channel.clone())
            .max_encoding_message_size(self.limits.max_send)
            .max_decoding_message_size(self.limits.max_receive);

        UnaryCall {
            grpc,
            method,
            api_client: self.api_client.clone(),
            _marker: PhantomData,
        }
    }
}

/// The contract shared by the asynchronous and blocking transports of every service.
pub trait Transport {
    type Channel;

    fn core(&self) -> &GrpcTransport<Self::Channel>;

    fn host(&self) -> &str {
        self.core().host()
    }

    fn scopes(&self) -> &[String] {
        self.core().scopes()
    }

    /// The channel every binding of this transport issues its calls on.
    fn grpc_channel(&self) -> &Self::Channel {
        self.core().channel()
    }

    fn message_limits(&self) -> MessageLimits {
        self.core().message_limits()
    }

    fn wrapped_methods(&self) -> &WrappedMethods {
        self.core().wrapped_methods()
    }

    fn quota_project_id(&self) -> Option<&str> {
        self.core().quota_project_id()
    }
}

/// A typed binding of one unary RPC.
pub struct UnaryCall<Req, Resp, S> {
    grpc: tonic::client::Grpc<S>,
    method: &'static MethodDescriptor,
    api_client: MetadataValue<Ascii>,
    _marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp, S: Clone> Clone for UnaryCall<Req, Resp, S> {
    fn clone(&self) -> Self {
        Self {
            grpc: self.grpc.clone(),
            method: self.method,
            api_client: self.api_client.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Req, Resp, S> fmt::Debug for UnaryCall<Req, Resp, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryCall")
            .field("method", &self.method.path)
            .finish_non_exhaustive()
    }
}

impl<Req, Resp, S> UnaryCall<Req, Resp, S> {
    pub fn method(&self) -> &'static MethodDescriptor {
        self.method
    }
}

impl<Req, Resp, S> UnaryCall<Req, Resp, S>
where
    Req: prost::Message + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
    S: GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Issues the RPC.
    ///
    /// Failures are returned exactly as reported by the server or the channel. Deadlines
    /// can be attached with `tonic::Request::set_timeout`.
    pub async fn call(&self, request: impl IntoRequest<Req>) -> Result<Response<Resp>, Status> {
        let mut grpc = self.grpc.clone();
        grpc.ready().await.map_err(|e| {
            let e: BoxError = e.into();
            Status::unavailable(format!("Channel is not ready: {e}"))
        })?;

        let mut request = request.into_request();
        request
            .metadata_mut()
            .insert(API_CLIENT_HEADER, self.api_client.clone());
        request
            .extensions_mut()
            .insert(GrpcMethod::new(self.method.service, self.method.rpc));

        tracing::debug!(target: LOG_TARGET, method = self.method.path, "Sending request");

        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static(self.method.path);
        grpc.unary(request, path, codec).await
    }
}

/// A [`UnaryCall`] driven to completion on the transport's own runtime.
///
/// Calling it from inside an asynchronous context panics, like any
/// `Runtime::block_on` would. Dropping it there is fine.
pub struct BlockingUnaryCall<Req, Resp, S> {
    inner: UnaryCall<Req, Resp, S>,
    runtime: Arc<BlockingRuntime>,
}

impl<Req, Resp, S: Clone> Clone for BlockingUnaryCall<Req, Resp, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<Req, Resp, S> fmt::Debug for BlockingUnaryCall<Req, Resp, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingUnaryCall")
            .field("method", &self.inner.method.path)
            .finish_non_exhaustive()
    }
}

impl<Req, Resp, S> BlockingUnaryCall<Req, Resp, S> {
    pub(crate) fn new(inner: UnaryCall<Req, Resp, S>, runtime: Arc<BlockingRuntime>) -> Self {
        Self { inner, runtime }
    }

    pub fn method(&self) -> &'static MethodDescriptor {
        self.inner.method
    }
}

impl<Req, Resp, S> BlockingUnaryCall<Req, Resp, S>
where
    Req: prost::Message + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
    S: GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    pub fn call(&self, request: impl IntoRequest<Req>) -> Result<Response<Resp>, Status> {
        self.runtime.block_on(self.inner.call(request))
    }
}

/// Runtime backing the blocking transports.
///
/// One worker thread keeps the channel's background connection task running between
/// calls. The runtime is shut down in the background when the last handle goes away, so
/// a blocking transport may be dropped from async code.
pub(crate) struct BlockingRuntime {
    handle: tokio::runtime::Handle,
    runtime: Option<tokio::runtime::Runtime>,
}

impl BlockingRuntime {
    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }
}

impl Drop for BlockingRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

pub(crate) fn blocking_runtime() -> Result<Arc<BlockingRuntime>, TransportError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("dialogflow-grpc")
        .enable_all()
        .build()
        .map_err(ChannelEstablishmentError::Runtime)?;

    Ok(Arc::new(BlockingRuntime {
        handle: runtime.handle().clone(),
        runtime: Some(runtime),
    }))
}
