use dialogflow_grpc::proto::dialogflow_v2::{
    CreateDocumentRequest, Document, GetDocumentRequest, ListSessionEntityTypesRequest,
};
use dialogflow_grpc::proto::longrunning::{GetOperationRequest, Operation};
use dialogflow_grpc::services::documents::{DocumentsGrpcAsyncTransport, DocumentsGrpcTransport};
use dialogflow_grpc::services::session_entity_types::SessionEntityTypesGrpcAsyncTransport;
use dialogflow_grpc::tonic::{
    Code,
    body::Body,
    codegen::Service,
    server::NamedService,
    transport::Server,
};
use dialogflow_grpc::{ChannelConfig, ClientInfo, Credentials, MessageLimits, Transport};
use fake_channel::FakeChannel;
use std::convert::Infallible;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::net::TcpListener;

macro_rules! named_service {
    ($name:ident, $service:literal) => {
        #[derive(Clone)]
        struct $name(FakeChannel);

        impl NamedService for $name {
            const NAME: &'static str = $service;
        }

        impl Service<http::Request<Body>> for $name {
            type Response = http::Response<Body>;
            type Error = Infallible;
            type Future = <FakeChannel as Service<http::Request<Body>>>::Future;

            fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
                self.0.poll_ready(cx)
            }

            fn call(&mut self, request: http::Request<Body>) -> Self::Future {
                self.0.call(request)
            }
        }
    };
}

named_service!(DocumentsServer, "google.cloud.dialogflow.v2.Documents");
named_service!(OperationsServer, "google.longrunning.Operations");

const DOCUMENT_NAME: &str = "projects/p/knowledgeBases/kb/documents/d";

async fn spawn_server(channel: &FakeChannel) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let documents = DocumentsServer(channel.clone());
    let operations = OperationsServer(channel.clone());

    tokio::spawn(async move {
        Server::builder()
            .add_service(documents)
            .add_service(operations)
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

fn config(url: &str) -> ChannelConfig {
    ChannelConfig::new()
        .with_host(url)
        .with_credentials(Credentials::bearer("tok"))
        .with_quota_project_id("bill")
        .with_client_info(ClientInfo::new().with_user_agent("dialogflow-tests/1.0"))
        .with_connect_timeout(Duration::from_secs(5))
}

fn document() -> Document {
    Document {
        name: DOCUMENT_NAME.to_string(),
        display_name: "FAQ".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_connected_transport_round_trip() {
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &document(),
    );
    let url = spawn_server(&channel).await;

    let transport = DocumentsGrpcAsyncTransport::connect(config(&url))
        .await
        .unwrap();

    assert_eq!(transport.host(), url);
    assert_eq!(transport.message_limits(), MessageLimits::UNBOUNDED);

    let response = transport
        .get_document()
        .call(GetDocumentRequest {
            name: DOCUMENT_NAME.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.into_inner(), document());

    let request = &channel.requests()[0];
    assert_eq!(
        request.path,
        "/google.cloud.dialogflow.v2.Documents/GetDocument"
    );
    assert_eq!(request.header("authorization"), Some("Bearer tok"));
    assert_eq!(request.header("x-goog-user-project"), Some("bill"));
    assert!(
        request
            .header("x-goog-api-client")
            .is_some_and(|value| value.starts_with("gl-rust gapic/"))
    );
    assert!(
        request
            .header("user-agent")
            .is_some_and(|value| value.starts_with("dialogflow-tests/1.0"))
    );
    assert_eq!(
        request.decode::<GetDocumentRequest>().unwrap().name,
        DOCUMENT_NAME
    );
}

#[tokio::test]
async fn test_connected_limits_can_be_overridden() {
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &document(),
    );
    let url = spawn_server(&channel).await;

    let transport =
        DocumentsGrpcAsyncTransport::connect(config(&url).with_max_receive_message_size(4))
            .await
            .unwrap();

    assert_eq!(
        transport.message_limits(),
        MessageLimits {
            max_send: usize::MAX,
            max_receive: 4
        }
    );

    let status = transport
        .get_document()
        .call(GetDocumentRequest::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::OutOfRange);
}

#[tokio::test]
async fn test_connected_operations_client_shares_channel() {
    let channel = FakeChannel::new();
    let pending = Operation {
        name: "projects/p/operations/op-1".to_string(),
        ..Default::default()
    };
    let finished = Operation {
        done: true,
        ..pending.clone()
    };
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/CreateDocument",
        &pending,
    );
    channel.respond_with("/google.longrunning.Operations/GetOperation", &finished);
    let url = spawn_server(&channel).await;

    let transport = DocumentsGrpcAsyncTransport::connect(config(&url))
        .await
        .unwrap();

    let operation = transport
        .create_document()
        .call(CreateDocumentRequest {
            parent: "projects/p/knowledgeBases/kb".to_string(),
            document: Some(document()),
        })
        .await
        .unwrap()
        .into_inner();

    let polled = transport
        .operations_client()
        .get_operation()
        .call(GetOperationRequest {
            name: operation.name,
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(polled, finished);

    let requests = channel.requests();
    assert_eq!(requests.len(), 2);
    assert!(
        requests
            .iter()
            .all(|request| request.header("authorization") == Some("Bearer tok"))
    );
}

#[tokio::test]
async fn test_service_not_served_is_unimplemented() {
    let channel = FakeChannel::new();
    let url = spawn_server(&channel).await;

    let transport = SessionEntityTypesGrpcAsyncTransport::connect(config(&url))
        .await
        .unwrap();

    let status = transport
        .list_session_entity_types()
        .call(ListSessionEntityTypesRequest::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
}

#[test]
fn test_blocking_transport_connects() {
    let server_runtime = tokio::runtime::Runtime::new().unwrap();
    let channel = FakeChannel::new();
    channel.respond_with(
        "/google.cloud.dialogflow.v2.Documents/GetDocument",
        &document(),
    );
    let url = server_runtime.block_on(spawn_server(&channel));

    let transport = DocumentsGrpcTransport::connect(config(&url)).unwrap();

    assert_eq!(transport.host(), url);
    assert!(transport.message_limits().is_unbounded());

    let response = transport
        .get_document()
        .call(GetDocumentRequest {
            name: DOCUMENT_NAME.to_string(),
        })
        .unwrap();
    assert_eq!(response.into_inner(), document());

    let request = &channel.requests()[0];
    assert_eq!(request.header("authorization"), Some("Bearer tok"));
    assert_eq!(request.header("x-goog-user-project"), Some("bill"));
}
