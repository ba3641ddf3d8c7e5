//! Transports for `google.cloud.dialogflow.v2beta1.Conversations`.
use super::{DEFAULT_HOST, DEFAULT_SCOPES};
use crate::{
    AuthenticatedChannel, ChannelConfig,
    error::TransportError,
    proto::dialogflow_v2beta1::{
        BatchCreateMessagesRequest, BatchCreateMessagesResponse, CompleteConversationRequest,
        Conversation, CreateConversationRequest, GetConversationRequest,
        ListConversationsRequest, ListConversationsResponse, ListMessagesRequest,
        ListMessagesResponse,
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

const CREATE_CONVERSATION: MethodDescriptor = MethodDescriptor {
    name: "create_conversation",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "CreateConversation",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/CreateConversation",
    shape: CallShape::Unary,
};

const LIST_CONVERSATIONS: MethodDescriptor = MethodDescriptor {
    name: "list_conversations",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "ListConversations",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/ListConversations",
    shape: CallShape::Unary,
};

const GET_CONVERSATION: MethodDescriptor = MethodDescriptor {
    name: "get_conversation",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "GetConversation",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/GetConversation",
    shape: CallShape::Unary,
};

const COMPLETE_CONVERSATION: MethodDescriptor = MethodDescriptor {
    name: "complete_conversation",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "CompleteConversation",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/CompleteConversation",
    shape: CallShape::Unary,
};

const BATCH_CREATE_MESSAGES: MethodDescriptor = MethodDescriptor {
    name: "batch_create_messages",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "BatchCreateMessages",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/BatchCreateMessages",
    shape: CallShape::Unary,
};

const LIST_MESSAGES: MethodDescriptor = MethodDescriptor {
    name: "list_messages",
    service: "google.cloud.dialogflow.v2beta1.Conversations",
    rpc: "ListMessages",
    path: "/google.cloud.dialogflow.v2beta1.Conversations/ListMessages",
    shape: CallShape::Unary,
};

pub static SERVICE: ServiceInfo = ServiceInfo {
    name: "google.cloud.dialogflow.v2beta1.Conversations",
    default_host: DEFAULT_HOST,
    auth_scopes: DEFAULT_SCOPES,
    methods: &[
        CREATE_CONVERSATION,
        LIST_CONVERSATIONS,
        GET_CONVERSATION,
        COMPLETE_CONVERSATION,
        BATCH_CREATE_MESSAGES,
        LIST_MESSAGES,
    ],
};

/// Asynchronous transport for the Conversations service.
pub struct ConversationsGrpcAsyncTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    create_conversation: OnceLock<UnaryCall<CreateConversationRequest, Conversation, S>>,
    list_conversations:
        OnceLock<UnaryCall<ListConversationsRequest, ListConversationsResponse, S>>,
    get_conversation: OnceLock<UnaryCall<GetConversationRequest, Conversation, S>>,
    complete_conversation: OnceLock<UnaryCall<CompleteConversationRequest, Conversation, S>>,
    batch_create_messages:
        OnceLock<UnaryCall<BatchCreateMessagesRequest, BatchCreateMessagesResponse, S>>,
    list_messages: OnceLock<UnaryCall<ListMessagesRequest, ListMessagesResponse, S>>,
}

impl ConversationsGrpcAsyncTransport<AuthenticatedChannel> {
    pub async fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(
            GrpcTransport::connect(&SERVICE, config).await?,
        ))
    }
}

impl<S> ConversationsGrpcAsyncTransport<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(GrpcTransport::with_channel(
            &SERVICE, channel, config,
        )?))
    }

    fn from_core(core: GrpcTransport<S>) -> Self {
        Self {
            core,
            create_conversation: OnceLock::new(),
            list_conversations: OnceLock::new(),
            get_conversation: OnceLock::new(),
            complete_conversation: OnceLock::new(),
            batch_create_messages: OnceLock::new(),
            list_messages: OnceLock::new(),
        }
    }
}

impl<S: Clone> ConversationsGrpcAsyncTransport<S> {
    /// Starts a conversation. Conversations are auto-completed after 24 hours.
    pub fn create_conversation(&self) -> &UnaryCall<CreateConversationRequest, Conversation, S> {
        self.create_conversation
            .get_or_init(|| self.core.bind(&CREATE_CONVERSATION))
    }

    pub fn list_conversations(
        &self,
    ) -> &UnaryCall<ListConversationsRequest, ListConversationsResponse, S> {
        self.list_conversations
            .get_or_init(|| self.core.bind(&LIST_CONVERSATIONS))
    }

    pub fn get_conversation(&self) -> &UnaryCall<GetConversationRequest, Conversation, S> {
        self.get_conversation
            .get_or_init(|| self.core.bind(&GET_CONVERSATION))
    }

    pub fn complete_conversation(
        &self,
    ) -> &UnaryCall<CompleteConversationRequest, Conversation, S> {
        self.complete_conversation
            .get_or_init(|| self.core.bind(&COMPLETE_CONVERSATION))
    }

    /// Imports messages into a conversation in one request.
    pub fn batch_create_messages(
        &self,
    ) -> &UnaryCall<BatchCreateMessagesRequest, BatchCreateMessagesResponse, S> {
        self.batch_create_messages
            .get_or_init(|| self.core.bind(&BATCH_CREATE_MESSAGES))
    }

    /// Lists messages of a conversation, newest first.
    pub fn list_messages(&self) -> &UnaryCall<ListMessagesRequest, ListMessagesResponse, S> {
        self.list_messages
            .get_or_init(|| self.core.bind(&LIST_MESSAGES))
    }
}

impl<S> Transport for ConversationsGrpcAsyncTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for ConversationsGrpcAsyncTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationsGrpcAsyncTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// Blocking transport for the Conversations service.
pub struct ConversationsGrpcTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    runtime: Arc<BlockingRuntime>,
    create_conversation: OnceLock<BlockingUnaryCall<CreateConversationRequest, Conversation, S>>,
    list_conversations:
        OnceLock<BlockingUnaryCall<ListConversationsRequest, ListConversationsResponse, S>>,
    get_conversation: OnceLock<BlockingUnaryCall<GetConversationRequest, Conversation, S>>,
    complete_conversation:
        OnceLock<BlockingUnaryCall<CompleteConversationRequest, Conversation, S>>,
    batch_create_messages:
        OnceLock<BlockingUnaryCall<BatchCreateMessagesRequest, BatchCreateMessagesResponse, S>>,
    list_messages: OnceLock<BlockingUnaryCall<ListMessagesRequest, ListMessagesResponse, S>>,
}

impl ConversationsGrpcTransport<AuthenticatedChannel> {
    pub fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        let runtime = blocking_runtime()?;
        let core = runtime.block_on(GrpcTransport::connect(&SERVICE, config))?;
        Ok(Self::from_core(core, runtime))
    }
}

impl<S> ConversationsGrpcTransport<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        let core = GrpcTransport::with_channel(&SERVICE, channel, config)?;
        Ok(Self::from_core(core, blocking_runtime()?))
    }

    fn from_core(core: GrpcTransport<S>, runtime: Arc<BlockingRuntime>) -> Self {
        Self {
            core,
            runtime,
            create_conversation: OnceLock::new(),
            list_conversations: OnceLock::new(),
            get_conversation: OnceLock::new(),
            complete_conversation: OnceLock::new(),
            batch_create_messages: OnceLock::new(),
            list_messages: OnceLock::new(),
        }
    }
}

impl<S: Clone> ConversationsGrpcTransport<S> {
    pub fn create_conversation(
        &self,
    ) -> &BlockingUnaryCall<CreateConversationRequest, Conversation, S> {
        self.create_conversation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&CREATE_CONVERSATION), self.runtime.clone())
        })
    }

    pub fn list_conversations(
        &self,
    ) -> &BlockingUnaryCall<ListConversationsRequest, ListConversationsResponse, S> {
        self.list_conversations.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&LIST_CONVERSATIONS), self.runtime.clone())
        })
    }

    pub fn get_conversation(&self) -> &BlockingUnaryCall<GetConversationRequest, Conversation, S> {
        self.get_conversation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&GET_CONVERSATION), self.runtime.clone())
        })
    }

    pub fn complete_conversation(
        &self,
    ) -> &BlockingUnaryCall<CompleteConversationRequest, Conversation, S> {
        self.complete_conversation.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&COMPLETE_CONVERSATION), self.runtime.clone())
        })
    }

    pub fn batch_create_messages(
        &self,
    ) -> &BlockingUnaryCall<BatchCreateMessagesRequest, BatchCreateMessagesResponse, S> {
        self.batch_create_messages.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&BATCH_CREATE_MESSAGES), self.runtime.clone())
        })
    }

    pub fn list_messages(&self) -> &BlockingUnaryCall<ListMessagesRequest, ListMessagesResponse, S> {
        self.list_messages.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&LIST_MESSAGES), self.runtime.clone())
        })
    }
}

impl<S> Transport for ConversationsGrpcTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for ConversationsGrpcTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationsGrpcTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}
