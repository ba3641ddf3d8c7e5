use dialogflow_grpc::proto::dialogflow_v2::{
    CreateDocumentRequest, DeleteSessionEntityTypeRequest, Document, Entity, GetDocumentRequest,
    ListDocumentsRequest, ListSessionEntityTypesRequest, ListSessionEntityTypesResponse, SessionEntityType, document,
    session_entity_type::EntityOverrideMode,
};
use dialogflow_grpc::proto::dialogflow_v2beta1::{
    BatchCreateMessagesRequest, BatchCreateMessagesResponse, CompleteConversationRequest,
    Conversation, CreateMessageRequest, conversation::LifecycleState,
};
use dialogflow_grpc::proto::longrunning::{GetOperationRequest, Operation, operation};
use dialogflow_grpc::services::conversations::ConversationsGrpcAsyncTransport;
use dialogflow_grpc::services::documents::DocumentsGrpcAsyncTransport;
use dialogflow_grpc::services::session_entity_types::SessionEntityTypesGrpcAsyncTransport;
use dialogflow_grpc::tonic::{self, Code, service::interceptor::InterceptedService};
use dialogflow_grpc::{AuthInterceptor, ChannelConfig, ClientInfo, Credentials, Transport};
use fake_channel::FakeChannel;

const DOCUMENT_NAME: &str = "projects/p/knowledgeBases/kb/documents/d";

fn documents(channel: &FakeChannel, config: ChannelConfig) -> DocumentsGrpcAsyncTransport<FakeChannel> {
    DocumentsGrpcAsyncTransport::with_channel(channel.clone(), config).unwrap()
}

#[tokio::test]
async fn test_get_document_round_trip() {
    let channel = FakeChannel::new();
    let document = Document {
        name: DOCUMENT_NAME.to_string(),
        display_name: "FAQ".to_string(),
        mime_type: "text/html".to_string(),
        knowledge_types: vec![document::KnowledgeType::Faq as i32],
        source: Some(document::Source::ContentUri(
            "gs://bucket/faq.html".to_string(),
        )),
        ..Default::default()
    };
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &document,
    );

    let transport = documents(&channel, ChannelConfig::new());
    let response = transport
        .get_document()
        .call(GetDocumentRequest {
            name: DOCUMENT_NAME.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.into_inner(), document);

    let requests = channel.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/google.cloud.dialogflow.v2.Documents/GetDocument"
    );
    assert_eq!(
        requests[0].decode::<GetDocumentRequest>().unwrap().name,
        DOCUMENT_NAME
    );
}

#[tokio::test]
async fn test_api_client_header_sent() {
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &Document::default(),
    );

    let config = ChannelConfig::new()
        .with_client_info(ClientInfo::new().with_client_library_version("2.41.0"));
    let transport = documents(&channel, config);
    transport
        .get_document()
        .call(GetDocumentRequest::default())
        .await
        .unwrap();

    let header = channel.requests()[0]
        .header("x-goog-api-client")
        .map(str::to_string)
        .unwrap();
    assert!(header.starts_with("gl-rust gapic/"));
    assert!(header.ends_with(" gccl/2.41.0"));
}

#[tokio::test]
async fn test_call_status_passed_through() {
    let channel = FakeChannel::new();
    channel.fail_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        Code::NotFound,
        "Document does not exist",
    );

    let transport = documents(&channel, ChannelConfig::new());
    let status = transport
        .get_document()
        .call(GetDocumentRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Document does not exist");

    // A second call behaves exactly like the first one.
    let status = transport
        .get_document()
        .call(GetDocumentRequest::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_unknown_method_is_unimplemented() {
    let channel = FakeChannel::new();
    let transport = documents(&channel, ChannelConfig::new());

    let status = transport
        .list_documents()
        .call(ListDocumentsRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unimplemented);
}

#[tokio::test]
async fn test_receive_limit_enforced() {
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &Document {
            name: DOCUMENT_NAME.to_string(),
            ..Default::default()
        },
    );

    let config = ChannelConfig::new().with_max_receive_message_size(4);
    let transport = documents(&channel, config);
    let status = transport
        .get_document()
        .call(GetDocumentRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::OutOfRange);
}

#[tokio::test]
async fn test_long_running_create_and_operations_client() {
    let channel = FakeChannel::new();
    let pending = Operation {
        name: "projects/p/operations/op-1".to_string(),
        done: false,
        ..Default::default()
    };
    let finished = Operation {
        done: true,
        result: Some(operation::Result::Response(dialogflow_grpc::prost_types::Any {
            type_url: "type.googleapis.com/google.cloud.dialogflow.v2.Document".to_string(),
            value: Vec::new(),
        })),
        ..pending.clone()
    };
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/CreateDocument",
        &pending,
    );
    channel.respond_with("/google.longrunning.Operations/GetOperation", &finished);

    let transport = documents(&channel, ChannelConfig::new());
    let operation = transport
        .create_document()
        .call(CreateDocumentRequest {
            parent: "projects/p/knowledgeBases/kb".to_string(),
            document: Some(Document::default()),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!operation.done);

    let operations = transport.operations_client();
    assert!(operations.grpc_channel().same_channel(&channel));
    assert_eq!(operations.host(), transport.host());

    let polled = operations
        .get_operation()
        .call(GetOperationRequest {
            name: operation.name.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(polled, finished);

    let paths: Vec<_> = channel.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/google.cloud.dialogflow.v2.Documents/CreateDocument",
            "/google.longrunning.Operations/GetOperation"
        ]
    );
}

#[tokio::test]
async fn test_session_entity_types_calls() {
    let channel = FakeChannel::new();
    let session_entity_type = SessionEntityType {
        name: "projects/p/agent/sessions/s/entityTypes/fruit".to_string(),
        entity_override_mode: EntityOverrideMode::Supplement as i32,
        entities: vec![Entity {
            value: "apple".to_string(),
            synonyms: vec!["apple".to_string(), "green apple".to_string()],
        }],
    };
    channel.respond_with(
        "/google.cloud.dialogflow.v2.SessionEntityTypes/ListSessionEntityTypes",
        &ListSessionEntityTypesResponse {
            session_entity_types: vec![session_entity_type.clone()],
            next_page_token: String::new(),
        },
    );
    channel.respond_with(
        "/google.cloud.dialogflow.v2.SessionEntityTypes/DeleteSessionEntityType",
        &(),
    );

    let transport =
        SessionEntityTypesGrpcAsyncTransport::with_channel(channel.clone(), ChannelConfig::new())
            .unwrap();

    let listed = transport
        .list_session_entity_types()
        .call(ListSessionEntityTypesRequest {
            parent: "projects/p/agent/sessions/s".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(listed.session_entity_types, vec![session_entity_type]);

    transport
        .delete_session_entity_type()
        .call(DeleteSessionEntityTypeRequest {
            name: "projects/p/agent/sessions/s/entityTypes/fruit".to_string(),
        })
        .await
        .unwrap();

    let deleted = channel.requests()[1]
        .decode::<DeleteSessionEntityTypeRequest>()
        .unwrap();
    assert_eq!(deleted.name, "projects/p/agent/sessions/s/entityTypes/fruit");
}

#[tokio::test]
async fn test_conversations_calls() {
    let channel = FakeChannel::new();
    let conversation = Conversation {
        name: "projects/p/conversations/c".to_string(),
        lifecycle_state: LifecycleState::Completed as i32,
        ..Default::default()
    };
    channel.respond_with(
        "/google.cloud.dialogflow.v2beta1.Conversations/CompleteConversation",
        &conversation,
    );
    channel.respond_with(
        "/google.cloud.dialogflow.v2beta1.Conversations/BatchCreateMessages",
        &BatchCreateMessagesResponse::default(),
    );

    let transport =
        ConversationsGrpcAsyncTransport::with_channel(channel.clone(), ChannelConfig::new())
            .unwrap();

    let completed = transport
        .complete_conversation()
        .call(CompleteConversationRequest {
            name: conversation.name.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(completed.lifecycle_state(), LifecycleState::Completed);

    let request = BatchCreateMessagesRequest {
        parent: conversation.name.clone(),
        requests: vec![CreateMessageRequest {
            parent: conversation.name.clone(),
            message: None,
        }],
    };
    transport
        .batch_create_messages()
        .call(request.clone())
        .await
        .unwrap();

    let sent = channel.requests()[1]
        .decode::<BatchCreateMessagesRequest>()
        .unwrap();
    assert_eq!(sent, request);
}

#[tokio::test]
async fn test_prebuilt_authenticated_channel_sends_credentials() {
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &Document::default(),
    );

    let interceptor =
        AuthInterceptor::new(Credentials::bearer("ya29.token"), &[], Some("billing")).unwrap();
    let authenticated = InterceptedService::new(channel.clone(), interceptor);

    let transport =
        DocumentsGrpcAsyncTransport::with_channel(authenticated, ChannelConfig::new()).unwrap();
    transport
        .get_document()
        .call(tonic::Request::new(GetDocumentRequest::default()))
        .await
        .unwrap();

    let request = &channel.requests()[0];
    assert_eq!(request.header("authorization"), Some("Bearer ya29.token"));
    assert_eq!(request.header("x-goog-user-project"), Some("billing"));
}
