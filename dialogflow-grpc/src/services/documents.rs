//! Transports for `google.cloud.dialogflow.v2.Documents`.
//!
//! Creating, deleting, updating and reloading a document are long-running: the binding
//! returns an [`Operation`] that can be followed with [`OperationsClient`], obtained from
//! the transport's `operations_client()`.
use super::{
    DEFAULT_HOST, DEFAULT_SCOPES,
    operations::{self, BlockingOperationsClient, OperationsClient},
};
use crate::{
    AuthenticatedChannel, ChannelConfig,
    error::TransportError,
    proto::{
        dialogflow_v2::{
            CreateDocumentRequest, DeleteDocumentRequest, Document, GetDocumentRequest,
            ListDocumentsRequest, ListDocumentsResponse, ReloadDocumentRequest,
            UpdateDocumentRequest,
        },
        longrunning::Operation,
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

const LIST_DOCUMENTS: MethodDescriptor = MethodDescriptor {
    name: "list_documents",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "ListDocuments",
    path: "/google.cloud.dialogflow.v2.Documents/ListDocuments",
    shape: CallShape::Unary,
};

const GET_DOCUMENT: MethodDescriptor = MethodDescriptor {
    name: "get_document",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "GetDocument",
    path: "/google.cloud.dialogflow.v2.Documents/GetDocument",
    shape: CallShape::Unary,
};

const CREATE_DOCUMENT: MethodDescriptor = MethodDescriptor {
    name: "create_document",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "CreateDocument",
    path: "/google.cloud.dialogflow.v2.Documents/CreateDocument",
    shape: CallShape::LongRunning,
};

const DELETE_DOCUMENT: MethodDescriptor = MethodDescriptor {
    name: "delete_document",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "DeleteDocument",
    path: "/google.cloud.dialogflow.v2.Documents/DeleteDocument",
    shape: CallShape::LongRunning,
};

const UPDATE_DOCUMENT: MethodDescriptor = MethodDescriptor {
    name: "update_document",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "UpdateDocument",
    path: "/google.cloud.dialogflow.v2.Documents/UpdateDocument",
    shape: CallShape::LongRunning,
};

const RELOAD_DOCUMENT: MethodDescriptor = MethodDescriptor {
    name: "reload_document",
    service: "google.cloud.dialogflow.v2.Documents",
    rpc: "ReloadDocument",
    path: "/google.cloud.dialogflow.v2.Documents/ReloadDocument",
    shape: CallShape::LongRunning,
};

pub static SERVICE: ServiceInfo = ServiceInfo {
    name: "google.cloud.dialogflow.v2.Documents",
    default_host: DEFAULT_HOST,
    auth_scopes: DEFAULT_SCOPES,
    methods: &[
        LIST_DOCUMENTS,
        GET_DOCUMENT,
        CREATE_DOCUMENT,
        DELETE_DOCUMENT,
        UPDATE_DOCUMENT,
        RELOAD_DOCUMENT,
    ],
};

/// Asynchronous transport for the Documents service.
pub struct DocumentsGrpcAsyncTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    operations_client: OnceLock<OperationsClient<S>>,
    list_documents: OnceLock<UnaryCall<ListDocumentsRequest, ListDocumentsResponse, S>>,
    get_document: OnceLock<UnaryCall<GetDocumentRequest, Document, S>>,
    create_document: OnceLock<UnaryCall<CreateDocumentRequest, Operation, S>>,
    delete_document: OnceLock<UnaryCall<DeleteDocumentRequest, Operation, S>>,
    update_document: OnceLock<UnaryCall<UpdateDocumentRequest, Operation, S>>,
    reload_document: OnceLock<UnaryCall<ReloadDocumentRequest, Operation, S>>,
}

impl DocumentsGrpcAsyncTransport<AuthenticatedChannel> {
    /// Builds the channel described by `config` and connects it.
    pub async fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(
            GrpcTransport::connect(&SERVICE, config).await?,
        ))
    }
}

impl<S> DocumentsGrpcAsyncTransport<S> {
    /// Uses `channel` as is. Credential and TLS options of `config` are ignored.
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        Ok(Self::from_core(GrpcTransport::with_channel(
            &SERVICE, channel, config,
        )?))
    }

    fn from_core(core: GrpcTransport<S>) -> Self {
        Self {
            core,
            operations_client: OnceLock::new(),
            list_documents: OnceLock::new(),
            get_document: OnceLock::new(),
            create_document: OnceLock::new(),
            delete_document: OnceLock::new(),
            update_document: OnceLock::new(),
            reload_document: OnceLock::new(),
        }
    }
}

impl<S: Clone> DocumentsGrpcAsyncTransport<S> {
    /// Client for the operations returned by the long-running RPCs, on the same channel.
    pub fn operations_client(&self) -> &OperationsClient<S> {
        self.operations_client
            .get_or_init(|| OperationsClient::from_core(self.core.for_service(&operations::SERVICE)))
    }

    /// Returns the list of all documents of the knowledge base.
    pub fn list_documents(&self) -> &UnaryCall<ListDocumentsRequest, ListDocumentsResponse, S> {
        self.list_documents
            .get_or_init(|| self.core.bind(&LIST_DOCUMENTS))
    }

    pub fn get_document(&self) -> &UnaryCall<GetDocumentRequest, Document, S> {
        self.get_document
            .get_or_init(|| self.core.bind(&GET_DOCUMENT))
    }

    /// Creates a new document. The operation's response is the created [`Document`].
    pub fn create_document(&self) -> &UnaryCall<CreateDocumentRequest, Operation, S> {
        self.create_document
            .get_or_init(|| self.core.bind(&CREATE_DOCUMENT))
    }

    /// Deletes a document. The operation's response is `google.protobuf.Empty`.
    pub fn delete_document(&self) -> &UnaryCall<DeleteDocumentRequest, Operation, S> {
        self.delete_document
            .get_or_init(|| self.core.bind(&DELETE_DOCUMENT))
    }

    pub fn update_document(&self) -> &UnaryCall<UpdateDocumentRequest, Operation, S> {
        self.update_document
            .get_or_init(|| self.core.bind(&UPDATE_DOCUMENT))
    }

    /// Reloads a document from its source, or from the URI given in the request.
    pub fn reload_document(&self) -> &UnaryCall<ReloadDocumentRequest, Operation, S> {
        self.reload_document
            .get_or_init(|| self.core.bind(&RELOAD_DOCUMENT))
    }
}

impl<S> Transport for DocumentsGrpcAsyncTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for DocumentsGrpcAsyncTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentsGrpcAsyncTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// Blocking transport for the Documents service.
pub struct DocumentsGrpcTransport<S = AuthenticatedChannel> {
    core: GrpcTransport<S>,
    runtime: Arc<BlockingRuntime>,
    operations_client: OnceLock<BlockingOperationsClient<S>>,
    list_documents: OnceLock<BlockingUnaryCall<ListDocumentsRequest, ListDocumentsResponse, S>>,
    get_document: OnceLock<BlockingUnaryCall<GetDocumentRequest, Document, S>>,
    create_document: OnceLock<BlockingUnaryCall<CreateDocumentRequest, Operation, S>>,
    delete_document: OnceLock<BlockingUnaryCall<DeleteDocumentRequest, Operation, S>>,
    update_document: OnceLock<BlockingUnaryCall<UpdateDocumentRequest, Operation, S>>,
    reload_document: OnceLock<BlockingUnaryCall<ReloadDocumentRequest, Operation, S>>,
}

impl DocumentsGrpcTransport<AuthenticatedChannel> {
    /// Builds the channel described by `config` and connects it, blocking the caller.
    pub fn connect(config: ChannelConfig) -> Result<Self, TransportError> {
        let runtime = blocking_runtime()?;
        let core = runtime.block_on(GrpcTransport::connect(&SERVICE, config))?;
        Ok(Self::from_core(core, runtime))
    }
}

impl<S> DocumentsGrpcTransport<S> {
    pub fn with_channel(channel: S, config: ChannelConfig) -> Result<Self, TransportError> {
        let core = GrpcTransport::with_channel(&SERVICE, channel, config)?;
        Ok(Self::from_core(core, blocking_runtime()?))
    }

    fn from_core(core: GrpcTransport<S>, runtime: Arc<BlockingRuntime>) -> Self {
        Self {
            core,
            runtime,
            operations_client: OnceLock::new(),
            list_documents: OnceLock::new(),
            get_document: OnceLock::new(),
            create_document: OnceLock::new(),
            delete_document: OnceLock::new(),
            update_document: OnceLock::new(),
            reload_document: OnceLock::new(),
        }
    }
}

impl<S: Clone> DocumentsGrpcTransport<S> {
    pub fn operations_client(&self) -> &BlockingOperationsClient<S> {
        self.operations_client.get_or_init(|| {
            BlockingOperationsClient::from_core(
                self.core.for_service(&operations::SERVICE),
                self.runtime.clone(),
            )
        })
    }

    pub fn list_documents(
        &self,
    ) -> &BlockingUnaryCall<ListDocumentsRequest, ListDocumentsResponse, S> {
        self.list_documents.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&LIST_DOCUMENTS), self.runtime.clone())
        })
    }

    pub fn get_document(&self) -> &BlockingUnaryCall<GetDocumentRequest, Document, S> {
        self.get_document.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&GET_DOCUMENT), self.runtime.clone())
        })
    }

    pub fn create_document(&self) -> &BlockingUnaryCall<CreateDocumentRequest, Operation, S> {
        self.create_document.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&CREATE_DOCUMENT), self.runtime.clone())
        })
    }

    pub fn delete_document(&self) -> &BlockingUnaryCall<DeleteDocumentRequest, Operation, S> {
        self.delete_document.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&DELETE_DOCUMENT), self.runtime.clone())
        })
    }

    pub fn update_document(&self) -> &BlockingUnaryCall<UpdateDocumentRequest, Operation, S> {
        self.update_document.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&UPDATE_DOCUMENT), self.runtime.clone())
        })
    }

    pub fn reload_document(&self) -> &BlockingUnaryCall<ReloadDocumentRequest, Operation, S> {
        self.reload_document.get_or_init(|| {
            BlockingUnaryCall::new(self.core.bind(&RELOAD_DOCUMENT), self.runtime.clone())
        })
    }
}

impl<S> Transport for DocumentsGrpcTransport<S> {
    type Channel = S;

    fn core(&self) -> &GrpcTransport<S> {
        &self.core
    }
}

impl<S> fmt::Debug for DocumentsGrpcTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentsGrpcTransport")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_paths_match_service() {
        for method in SERVICE.methods {
            assert_eq!(method.service, SERVICE.name);
            assert_eq!(method.path, format!("/{}/{}", method.service, method.rpc));
        }
    }

    #[test]
    fn test_mutations_are_long_running() {
        let long_running: Vec<_> = SERVICE
            .methods
            .iter()
            .filter(|m| m.shape == CallShape::LongRunning)
            .map(|m| m.name)
            .collect();

        assert_eq!(
            long_running,
            [
                "create_document",
                "delete_document",
                "update_document",
                "reload_document"
            ]
        );
    }
}
