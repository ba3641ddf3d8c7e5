//! Transports for `google.cloud.dialogflow.v2.SessionEntityTypes`.
use super::{DEFAULT_HOST, DEFAULT_SCOPES};
use crate::{
    AuthenticatedChannel, ChannelConfig,
    error::TransportError,
    proto::dialogflow_v2::{
        CreateSessionEntityTypeRequest, DeleteSessionEntityTypeRequest,
        GetSessionEntityTypeRequest, ListSessionEntityTypesRequest,
        ListSessionEntityTypesResponse, SessionEntityType, UpdateSessionEntityTypeRequest,
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

const LIST_SESSION_ENTITY_TYPES: MethodDescriptor = MethodDescriptor {
    name: "list_session_entity_types",
    service: "google.cloud.dialogflow.v2.SessionEntityTypes",
    rpc: "ListSessionEntityTypes",
    path: "/google.cloud.dialogflow.v2.SessionEntityTypes/ListSessionEntityTypes",
    shape: CallShape::Unary,
};

const GET_SESSION_ENTITY_TYPE: MethodDescriptor = MethodDescriptor {
    name: "get_session_entity_type",
    service: "google.cloud.dialogflow.v2.SessionEntityTypes",
    rpc: "GetSessionEntityType",
    path: "/google.cloud.dialogflow.v2.SessionEntityTypes/GetSessionEntityType",
    shape: CallShape::Unary,
};

const CREATE_SESSION_ENTITY_TYPE: MethodDescriptor = MethodDescriptor {
    name: "create_session_entity_type",
    service: "google.cloud.dialogflow.v2.SessionEntityTypes",
    rpc: "CreateSessionEntityType",
    path: "/google.cloud.dialogflow.v2.SessionEntityTypes/CreateSessionEntityType",
    shape: CallShape::Unary,
};

const UPDATE_SESSION_ENTITY_TYPE: MethodDescriptor = MethodDescriptor {
    name: "update_session_entity_type",
    service: "google.cloud.dialogflow.v2.SessionEntityTypes",
    rpc: "UpdateSessionEntityType",
    path: "/google.cloud.dialogflow.v2.SessionEntityTypes/UpdateSessionEntityType",
    shape: CallShape::Unary,
};

const DELETE_SESSION_ENTITY_TYPE: MethodDescriptor = MethodDescriptor {
    name: "delete_session_entity_type",
    service: "google.cloud.dialogflow.v2.SessionEntityTypes",
    rpc: "DeleteSessionEntityType",
    path: "/google.cloud.dialogflow.v2.SessionEntityTypes/DeleteSessionEntityType",
    shape: CallShape::Unary,
};

pub static SERVICE: ServiceInfo = ServiceInfo {
    name: "google.cloud.dialogflow.v2.SessionEntityTypes",
    default_host: DEFAULT_HOST,
    auth_scopes: DEFAULT_SCOPES,
    methods: &[
        LIST_SESSION_ENTITY_TYPES,
        GET_SESSION_ENTITY_TYPE,
        CREATE_SESSION_ENTITY_TYPE,
        UPDATE_SESSION_ENTITY_TYPE,
        DELETE_SESSION_ENTITY_TYPE,
    ],
};

/// Asynchronous transport for the SessionEntityTypes service.
pub struct SessionEntityTypesGrpcAsyncTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    list_session_entity_types: OnceLock<
        UnaryCall<ListSessionEntityTypesRequest, ListSessionEntityTypesResponse, S>,
    >,
    get_session_entity_type: OnceLock<UnaryCall<GetSessionEntityTypeRequest, SessionEntityType, S>>,
    create_session_entity_type:
        OnceLock<UnaryCall<CreateSessionEntityTypeRequest, SessionEntityType, S>>,
    update_session_entity_type:
        OnceLock<UnaryCall<UpdateSessionEntityTypeRequest, SessionEntityType, S>>,
    delete_session_entity_type: OnceLock<UnaryCall<DeleteSessionEntityTypeRequest, (), S>>,
}

impl SessionEntityTypesGrpcAsyncTransport<AuthenticatedChannel> {
    pub async fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(
            GrpcTransport::connect(&SERVICE, config).await?,
        ))
    }
}

impl<S> SessionEntityTypesGrpcAsyncTransport<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(GrpcTransport::with_channel(
            &SERVICE, channel, config,
        )?))
    }

    fn from_core(core: GrpcTransport<S>) -> Self {
        Self {
            core,
            list_session_entity_types: OnceLock::new(),
            get_session_entity_type: OnceLock::new(),
            create_session_entity_type: OnceLock::new(),
            update_session_entity_type: OnceLock::new(),
            delete_session_entity_type: OnceLock::new(),
        }
    }
}

impl<S: Clone> SessionEntityTypesGrpcAsyncTransport<S> {
    /// Lists the session entity types of a session.
    pub fn list_session_entity_types(
        &self,
    ) -> &UnaryCall<ListSessionEntityTypesRequest, ListSessionEntityTypesResponse, S> {
        self.list_session_entity_types
            .get_or_init(|| self.core.bind(&LIST_SESSION_ENTITY_TYPES))
    }

    pub fn get_session_entity_type(
        &self,
    ) -> &UnaryCall<GetSessionEntityTypeRequest, SessionEntityType, S> {
        self.get_session_entity_type
            .get_or_init(|| self.core.bind(&GET_SESSION_ENTITY_TYPE))
    }

    /// Creates a session entity type. Fails with `ALREADY_EXISTS` if the session already
    /// overrides that entity type.
    pub fn create_session_entity_type(
        &self,
    ) -> &UnaryCall<CreateSessionEntityTypeRequest, SessionEntityType, S> {
        self.create_session_entity_type
            .get_or_init(|| self.core.bind(&CREATE_SESSION_ENTITY_TYPE))
    }

    pub fn update_session_entity_type(
        &self,
    ) -> &UnaryCall<UpdateSessionEntityTypeRequest, SessionEntityType, S> {
        self.update_session_entity_type
            .get_or_init(|| self.core.bind(&UPDATE_SESSION_ENTITY_TYPE))
    }

    pub fn delete_session_entity_type(&self) -> &UnaryCall<DeleteSessionEntityTypeRequest, (), S> {
        self.delete_session_entity_type
            .get_or_init(|| self.core.bind(&DELETE_SESSION_ENTITY_TYPE))
    }
}

impl<S> Transport for SessionEntityTypesGrpcAsyncTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for SessionEntityTypesGrpcAsyncTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEntityTypesGrpcAsyncTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// Blocking transport for the SessionEntityTypes service.
pub struct SessionEntityTypesGrpcTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    runtime: Arc<BlockingRuntime>,
    list_session_entity_types: OnceLock<
        BlockingUnaryCall<ListSessionEntityTypesRequest, ListSessionEntityTypesResponse, S>,
    >,
    get_session_entity_type:
        OnceLock<BlockingUnaryCall<GetSessionEntityTypeRequest, SessionEntityType, S>>,
    create_session_entity_type:
        OnceLock<BlockingUnaryCall<CreateSessionEntityTypeRequest, SessionEntityType, S>>,
    update_session_entity_type:
        OnceLock<BlockingUnaryCall<UpdateSessionEntityTypeRequest, SessionEntityType, S>>,
    delete_session_entity_type: OnceLock<BlockingUnaryCall<DeleteSessionEntityTypeRequest, (), S>>,
}

impl SessionEntityTypesGrpcTransport<AuthenticatedChannel> {
    pub fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        let runtime = blocking_runtime()?;
        let core = runtime.block_on(GrpcTransport::connect(&SERVICE, config))?;
        Ok(Self::from_core(core, runtime))
    }
}

impl<S> SessionEntityTypesGrpcTransport<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        let core = GrpcTransport::with_channel(&SERVICE, channel, config)?;
        Ok(Self::from_core(core, blocking_runtime()?))
    }

    fn from_core(core: GrpcTransport<S>, runtime: Arc<BlockingRuntime>) -> Self {
        Self {
            core,
            runtime,
            list_session_entity_types: OnceLock::new(),
            get_session_entity_type: OnceLock::new(),
            create_session_entity_type: OnceLock::new(),
            update_session_entity_type: OnceLock::new(),
            delete_session_entity_type: OnceLock::new(),
        }
    }
}

impl<S: Clone> SessionEntityTypesGrpcTransport<S> {
    pub fn list_session_entity_types(
        &self,
    ) -> &BlockingUnaryCall<ListSessionEntityTypesRequest, ListSessionEntityTypesResponse, S> {
        self.list_session_entity_types.get_or_init(|| {
            BlockingUnaryCall::new(
                self.core.bind(&LIST_SESSION_ENTITY_TYPES),
                self.runtime.clone(),
            )
        })
    }

    pub fn get_session_entity_type(
        &self,
    ) -> &BlockingUnaryCall<GetSessionEntityTypeRequest, SessionEntityType, S> {
        self.get_session_entity_type.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&GET_SESSION_ENTITY_TYPE), self.runtime.clone())
        })
    }

    pub fn create_session_entity_type(
        &self,
    ) -> &BlockingUnaryCall<CreateSessionEntityTypeRequest, SessionEntityType, S> {
        self.create_session_entity_type.get_or_init(|| {
            BlockingUnaryCall::new(
                self.core.bind(&CREATE_SESSION_ENTITY_TYPE),
                self.runtime.clone(),
            )
        })
    }

    pub fn update_session_entity_type(
        &self,
    ) -> &BlockingUnaryCall<UpdateSessionEntityTypeRequest, SessionEntityType, S> {
        self.update_session_entity_type.get_or_init(|| {
            BlockingUnaryCall::new(
                self.core.bind(&UPDATE_SESSION_ENTITY_TYPE),
                self.runtime.clone(),
            )
        })
    }

    pub fn delete_session_entity_type(
        &self,
    ) -> &BlockingUnaryCall<DeleteSessionEntityTypeRequest, (), S> {
        self.delete_session_entity_type.get_or_init(|| {
            BlockingUnaryCall::new(
                self.core.bind(&DELETE_SESSION_ENTITY_TYPE),
                self.runtime.clone(),
            )
        })
    }
}

impl<S> Transport for SessionEntityTypesGrpcTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for SessionEntityTypesGrpcTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEntityTypesGrpcTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}
