use dialogflow_grpc::services::documents::{DocumentsGrpcAsyncTransport, DocumentsGrpcTransport};
use dialogflow_grpc::services::session_entity_types::SessionEntityTypesGrpcAsyncTransport;
use dialogflow_grpc::{
    AmbientDiscovery, ChannelConfig, ChannelEstablishmentError, ClientCertificate,
    ConfigurationError, Credentials, CredentialsError, MessageLimits, Transport, TransportError,
};
use fake_channel::FakeChannel;
use std::time::Duration;

fn duplicate_credentials() -> ChannelConfig {
    ChannelConfig::new()
        .with_credentials(Credentials::bearer("token"))
        .with_credentials_file("/tmp/creds.json")
}

#[tokio::test]
async fn test_duplicate_credentials_is_configuration_error() {
    let result = DocumentsGrpcAsyncTransport::connect(duplicate_credentials()).await;

    assert!(matches!(
        result,
        Err(TransportError::Configuration(
            ConfigurationError::DuplicateCredentialArgs
        ))
    ));
}

#[test]
fn test_duplicate_credentials_rejected_with_prebuilt_channel() {
    let channel = FakeChannel::new();
    let result = DocumentsGrpcAsyncTransport::with_channel(channel.clone(), duplicate_credentials());

    assert!(matches!(
        result,
        Err(TransportError::Configuration(
            ConfigurationError::DuplicateCredentialArgs
        ))
    ));
    assert!(channel.requests().is_empty());
}

#[tokio::test]
async fn test_missing_ambient_credentials_is_establishment_error() {
    let config = ChannelConfig::new()
        .with_host("api.example.com")
        .with_ambient_discovery(AmbientDiscovery::disabled());

    let result = DocumentsGrpcAsyncTransport::connect(config).await;

    assert!(matches!(
        result,
        Err(TransportError::ChannelEstablishment(
            ChannelEstablishmentError::Credentials(CredentialsError::NotFound)
        ))
    ));
}

#[tokio::test]
async fn test_unreadable_credentials_file_is_establishment_error() {
    let config = ChannelConfig::new()
        .with_host("api.example.com")
        .with_credentials_file("/definitely/not/here.json");

    let result = SessionEntityTypesGrpcAsyncTransport::connect(config).await;

    assert!(matches!(
        result,
        Err(TransportError::ChannelEstablishment(
            ChannelEstablishmentError::Credentials(CredentialsError::Io { .. })
        ))
    ));
}

#[tokio::test]
async fn test_connection_failure_surfaces_at_construction() {
    let config = ChannelConfig::new()
        .with_host("http://127.0.0.1:1")
        .with_credentials(Credentials::bearer("token"))
        .with_connect_timeout(Duration::from_secs(5));

    let result = DocumentsGrpcAsyncTransport::connect(config).await;

    assert!(matches!(
        result,
        Err(TransportError::ChannelEstablishment(
            ChannelEstablishmentError::ConnectionFailed { .. }
        ))
    ));
}

#[tokio::test]
async fn test_failing_certificate_callback_is_establishment_error() {
    let config = ChannelConfig::new()
        .with_credentials(Credentials::bearer("token"))
        .with_client_cert_source_for_mtls(|| Err("no certificate provisioned".into()));

    let result = DocumentsGrpcAsyncTransport::connect(config).await;

    assert!(matches!(
        result,
        Err(TransportError::ChannelEstablishment(
            ChannelEstablishmentError::ClientCertificate(_)
        ))
    ));
}

#[test]
fn test_prebuilt_channel_is_used_verbatim() {
    let channel = FakeChannel::new();
    let config = ChannelConfig::new()
        .with_credentials_file("/definitely/not/here.json")
        .with_api_mtls_endpoint("mtls.example.com")
        .with_client_cert_source(|| panic!("certificate callback must not run"));

    let transport = DocumentsGrpcAsyncTransport::with_channel(channel.clone(), config).unwrap();

    assert!(transport.grpc_channel().same_channel(&channel));
    assert_eq!(transport.host(), "dialogflow.googleapis.com");
}

#[test]
fn test_certificate_callback_ignored_with_prebuilt_channel() {
    let config = ChannelConfig::new().with_client_cert_source_for_mtls(|| {
        Ok(ClientCertificate {
            cert_chain: Vec::new(),
            private_key: Vec::new(),
        })
    });

    let transport = DocumentsGrpcAsyncTransport::with_channel(FakeChannel::new(), config);
    assert!(transport.is_ok());
}

#[test]
fn test_limits_unbounded_by_default() {
    let transport =
        DocumentsGrpcAsyncTransport::with_channel(FakeChannel::new(), ChannelConfig::new())
            .unwrap();

    assert_eq!(transport.message_limits(), MessageLimits::UNBOUNDED);
    assert_eq!(transport.message_limits().max_send, usize::MAX);
    assert_eq!(transport.message_limits().max_receive, usize::MAX);
}

#[test]
fn test_limits_can_be_overridden() {
    let config = ChannelConfig::new()
        .with_max_send_message_size(4096)
        .with_max_receive_message_size(8192);

    let transport = DocumentsGrpcAsyncTransport::with_channel(FakeChannel::new(), config).unwrap();

    assert_eq!(
        transport.message_limits(),
        MessageLimits {
            max_send: 4096,
            max_receive: 8192
        }
    );
}

#[test]
fn test_default_scopes_and_wrapped_methods() {
    let transport =
        DocumentsGrpcAsyncTransport::with_channel(FakeChannel::new(), ChannelConfig::new())
            .unwrap();

    assert_eq!(
        transport.scopes(),
        [
            "https://www.googleapis.com/auth/cloud-platform",
            "https://www.googleapis.com/auth/dialogflow"
        ]
    );

    let wrapped = transport.wrapped_methods();
    assert_eq!(wrapped.len(), 6);
    for name in [
        "list_documents",
        "get_document",
        "create_document",
        "delete_document",
        "update_document",
        "reload_document",
    ] {
        assert!(wrapped.get(name).is_some(), "missing wrapped method {name}");
    }
}

#[test]
fn test_blocking_transport_construction_errors() {
    let result = DocumentsGrpcTransport::connect(duplicate_credentials());
    assert!(matches!(
        result,
        Err(TransportError::Configuration(
            ConfigurationError::DuplicateCredentialArgs
        ))
    ));

    let config = ChannelConfig::new().with_ambient_discovery(AmbientDiscovery::disabled());
    let result = DocumentsGrpcTransport::connect(config);
    assert!(matches!(
        result,
        Err(TransportError::ChannelEstablishment(
            ChannelEstablishmentError::Credentials(CredentialsError::NotFound)
        ))
    ));
}
