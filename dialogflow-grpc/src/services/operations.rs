//! Typed access to `google.longrunning.Operations`.
//!
//! Only the bindings live here. Deciding when to poll an operation, and for how long,
//! is up to the caller.
use super::{DEFAULT_HOST, DEFAULT_SCOPES};
use crate::{
    AuthenticatedChannel, ChannelConfig,
    error::TransportError,
    proto::longrunning::{
        CancelOperationRequest, DeleteOperationRequest, GetOperationRequest,
        ListOperationsRequest, ListOperationsResponse, Operation,
    },
    transport::{
        BlockingUnaryCall, CallShape, GrpcTransport, MethodDescriptor, ServiceInfo, Transport,
        UnaryCall, BlockingRuntime, blocking_runtime,
    },
};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

const GET_OPERATION: MethodDescriptor = MethodDescriptor {
    name: "get_operation",
    service: "google.longrunning.Operations",
    rpc: "GetOperation",
    path: "/google.longrunning.Operations/GetOperation",
    shape: CallShape::Unary,
};

const LIST_OPERATIONS: MethodDescriptor = MethodDescriptor {
    name: "list_operations",
    service: "google.longrunning.Operations",
    rpc: "ListOperations",
    path: "/google.longrunning.Operations/ListOperations",
    shape: CallShape::Unary,
};

const CANCEL_OPERATION: MethodDescriptor = MethodDescriptor {
    name: "cancel_operation",
    service: "google.longrunning.Operations",
    rpc: "CancelOperation",
    path: "/google.longrunning.Operations/CancelOperation",
    shape: CallShape::Unary,
};

const DELETE_OPERATION: MethodDescriptor = MethodDescriptor {
    name: "delete_operation",
    service: "google.longrunning.Operations",
    rpc: "DeleteOperation",
    path: "/google.longrunning.Operations/DeleteOperation",
    shape: CallShape::Unary,
};

pub static SERVICE: ServiceInfo = ServiceInfo {
    name: "google.longrunning.Operations",
    default_host: DEFAULT_HOST,
    auth_scopes: DEFAULT_SCOPES,
    methods: &[
        GET_OPERATION,
        LIST_OPERATIONS,
        CANCEL_OPERATION,
        DELETE_OPERATION,
    ],
};

/// Asynchronous client for long-running operations.
pub struct OperationsClient<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    get_operation: OnceLock<UnaryCall<GetOperationRequest, Operation, S>>,
    list_operations: OnceLock<UnaryCall<ListOperationsRequest, ListOperationsResponse, S>>,
    cancel_operation: OnceLock<UnaryCall<CancelOperationRequest, (), S>>,
    delete_operation: OnceLock<UnaryCall<DeleteOperationRequest, (), S>>,
}

impl OperationsClient<AuthenticatedChannel> {
    pub async fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(
            GrpcTransport::connect(&SERVICE, config).await?,
        ))
    }
}

impl<S> OperationsClient<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(GrpcTransport::with_channel(
            &SERVICE, channel, config,
        )?))
    }

    pub(crate) fn from_core(core: GrpcTransport<S>) -> Self {
        Self {
            core,
            get_operation: OnceLock::new(),
            list_operations: OnceLock::new(),
            cancel_operation: OnceLock::new(),
            delete_operation: OnceLock::new(),
        }
    }
}

impl<S: Clone> OperationsClient<S> {
    pub fn get_operation(&self) -> &UnaryCall<GetOperationRequest, Operation, S> {
        self.get_operation
            .get_or_init(|| self.core.bind(&GET_OPERATION))
    }

    pub fn list_operations(&self) -> &UnaryCall<ListOperationsRequest, ListOperationsResponse, S> {
        self.list_operations
            .get_or_init(|| self.core.bind(&LIST_OPERATIONS))
    }

    /// Asks the server to cancel the operation. Success does not mean it was cancelled.
    pub fn cancel_operation(&self) -> &UnaryCall<CancelOperationRequest, (), S> {
        self.cancel_operation
            .get_or_init(|| self.core.bind(&CANCEL_OPERATION))
    }

    pub fn delete_operation(&self) -> &UnaryCall<DeleteOperationRequest, (), S> {
        self.delete_operation
            .get_or_init(|| self.core.bind(&DELETE_OPERATION))
    }
}

impl<S> Transport for OperationsClient<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for OperationsClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationsClient")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// Blocking client for long-running operations.
pub struct BlockingOperationsClient<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    runtime: Arc<BlockingRuntime>,
    get_operation: OnceLock<BlockingUnaryCall<GetOperationRequest, Operation, S>>,
    list_operations: OnceLock<BlockingUnaryCall<ListOperationsRequest, ListOperationsResponse, S>>,
    cancel_operation: OnceLock<BlockingUnaryCall<CancelOperationRequest, (), S>>,
    delete_operation: OnceLock<BlockingUnaryCall<DeleteOperationRequest, (), S>>,
}

impl BlockingOperationsClient<AuthenticatedChannel> {
    pub fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        let runtime = blocking_runtime()?;
        let core = runtime.block_on(GrpcTransport::connect(&SERVICE, config))?;
        Ok(Self::from_core(core, runtime))
    }
}

impl<S> BlockingOperationsClient<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        let core = GrpcTransport::with_channel(&SERVICE, channel, config)?;
        Ok(Self::from_core(core, blocking_runtime()?))
    }

    pub(crate) fn from_core(core: GrpcTransport<S>, runtime: Arc<BlockingRuntime>) -> Self {
        Self {
            core,
            runtime,
            get_operation: OnceLock::new(),
            list_operations: OnceLock::new(),
            cancel_operation: OnceLock::new(),
            delete_operation: OnceLock::new(),
        }
    }
}

impl<S: Clone> BlockingOperationsClient<S> {
    pub fn get_operation(&self) -> &BlockingUnaryCall<GetOperationRequest, Operation, S> {
        self.get_operation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&GET_OPERATION), self.runtime.clone())
        })
    }

    pub fn list_operations(
        &self,
    ) -> &BlockingUnaryCall<ListOperationsRequest, ListOperationsResponse, S> {
        self.list_operations.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&LIST_OPERATIONS), self.runtime.clone())
        })
    }

    pub fn cancel_operation(&self) -> &BlockingUnaryCall<CancelOperationRequest, (), S> {
        self.cancel_operation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&CANCEL_OPERATION), self.runtime.clone())
        })
    }

    pub fn delete_operation(&self) -> &BlockingUnaryCall<DeleteOperationRequest, (), S> {
        self.delete_operation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&DELETE_OPERATION), self.runtime.clone())
        })
    }
}

impl<S> Transport for BlockingOperationsClient<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for BlockingOperationsClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingOperationsClient")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}
