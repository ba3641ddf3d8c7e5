//! # Dialogflow CLI Entry Point
//!
//! 1. **Initialization**: Installs the `tracing` subscriber (`RUST_LOG`, defaults to `warn`)
//!    and parses command-line arguments using [`cli::Cli`].
//! 2. **Connection**: Builds the transport of the selected service from the flags and the
//!    optional settings file.
//! 3. **Execution**: Issues exactly one RPC.
//! 4. **Presentation**: Prints the response to standard output, or the error status to
//!    standard error and exits with a non-zero code.
mod cli;
mod formatter;

use clap::Parser;
use cli::{
    Cli, Commands, ConversationCommands, DocumentCommands, OperationCommands,
    SessionEntityTypeCommands,
};
use dialogflow_grpc::proto::{
    dialogflow_v2::{
        CreateDocumentRequest, DeleteDocumentRequest, DeleteSessionEntityTypeRequest, Document,
        GetDocumentRequest, GetSessionEntityTypeRequest, ListDocumentsRequest,
        ListSessionEntityTypesRequest, ReloadDocumentRequest, document, reload_document_request,
    },
    dialogflow_v2beta1::{
        CompleteConversationRequest, Conversation, CreateConversationRequest,
        GetConversationRequest, ListConversationsRequest, ListMessagesRequest,
    },
    longrunning::{
        CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, ListOperationsRequest,
    },
};
use dialogflow_grpc::services::{
    conversations::ConversationsGrpcAsyncTransport, documents::DocumentsGrpcAsyncTransport,
    operations::OperationsClient, session_entity_types::SessionEntityTypesGrpcAsyncTransport,
};
use dialogflow_grpc::tonic::{Response, Status};
use dialogflow_grpc::{ChannelConfig, TransportError};
use formatter::{FormattedString, GenericError, Message};
use std::fmt::Debug;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = match args.channel_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "{}",
                FormattedString::from(GenericError("Invalid configuration:", err))
            );
            process::exit(1);
        }
    };

    match args.command {
        Commands::Documents { sub } => documents(config, sub).await,
        Commands::SessionEntityTypes { sub } => session_entity_types(config, sub).await,
        Commands::Conversations { sub } => conversations(config, sub).await,
        Commands::Operations { sub } => operations(config, sub).await,
    }
}

fn connect_or_exit<T>(result: Result<T, TransportError>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("{}", FormattedString::from(err));
        process::exit(1);
    })
}

fn print_or_exit<T: Debug>(result: Result<Response<T>, Status>) {
    match result {
        Ok(response) => println!("{}", FormattedString::from(Message(response.into_inner()))),
        Err(status) => {
            eprintln!("{}", FormattedString::from(status));
            process::exit(1);
        }
    }
}

fn done_or_exit(result: Result<Response<()>, Status>, message: &str) {
    match result {
        Ok(_) => println!("{message}"),
        Err(status) => {
            eprintln!("{}", FormattedString::from(status));
            process::exit(1);
        }
    }
}

async fn documents(config: ChannelConfig, command: DocumentCommands) {
    let transport = connect_or_exit(DocumentsGrpcAsyncTransport::connect(config).await);

    match command {
        DocumentCommands::List {
            parent,
            page_size,
            filter,
        } => {
            let request = ListDocumentsRequest {
                parent,
                page_size: page_size.unwrap_or_default(),
                filter: filter.unwrap_or_default(),
                ..Default::default()
            };
            print_or_exit(transport.list_documents().call(request).await);
        }
        DocumentCommands::Get { name } => {
            print_or_exit(
                transport
                    .get_document()
                    .call(GetDocumentRequest { name })
                    .await,
            );
        }
        DocumentCommands::Create {
            parent,
            display_name,
            mime_type,
            content_uri,
            knowledge_type,
        } => {
            let knowledge_type: document::KnowledgeType = knowledge_type.into();
            let request = CreateDocumentRequest {
                parent,
                document: Some(Document {
                    display_name,
                    mime_type,
                    knowledge_types: vec![knowledge_type as i32],
                    source: Some(document::Source::ContentUri(content_uri)),
                    ..Default::default()
                }),
            };
            print_or_exit(transport.create_document().call(request).await);
        }
        DocumentCommands::Delete { name } => {
            print_or_exit(
                transport
                    .delete_document()
                    .call(DeleteDocumentRequest { name })
                    .await,
            );
        }
        DocumentCommands::Reload { name, content_uri } => {
            let request = ReloadDocumentRequest {
                name,
                source: content_uri.map(reload_document_request::Source::ContentUri),
                ..Default::default()
            };
            print_or_exit(transport.reload_document().call(request).await);
        }
    }
}

async fn session_entity_types(config: ChannelConfig, command: SessionEntityTypeCommands) {
    let transport = connect_or_exit(SessionEntityTypesGrpcAsyncTransport::connect(config).await);

    match command {
        SessionEntityTypeCommands::List { parent } => {
            let request = ListSessionEntityTypesRequest {
                parent,
                ..Default::default()
            };
            print_or_exit(transport.list_session_entity_types().call(request).await);
        }
        SessionEntityTypeCommands::Get { name } => {
            print_or_exit(
                transport
                    .get_session_entity_type()
                    .call(GetSessionEntityTypeRequest { name })
                    .await,
            );
        }
        SessionEntityTypeCommands::Delete { name } => {
            done_or_exit(
                transport
                    .delete_session_entity_type()
                    .call(DeleteSessionEntityTypeRequest { name })
                    .await,
                "Deleted",
            );
        }
    }
}

async fn conversations(config: ChannelConfig, command: ConversationCommands) {
    let transport = connect_or_exit(ConversationsGrpcAsyncTransport::connect(config).await);

    match command {
        ConversationCommands::Create {
            parent,
            conversation_profile,
        } => {
            let request = CreateConversationRequest {
                parent,
                conversation: Some(Conversation {
                    conversation_profile,
                    ..Default::default()
                }),
                ..Default::default()
            };
            print_or_exit(transport.create_conversation().call(request).await);
        }
        ConversationCommands::List { parent, filter } => {
            let request = ListConversationsRequest {
                parent,
                filter: filter.unwrap_or_default(),
                ..Default::default()
            };
            print_or_exit(transport.list_conversations().call(request).await);
        }
        ConversationCommands::Get { name } => {
            print_or_exit(
                transport
                    .get_conversation()
                    .call(GetConversationRequest { name })
                    .await,
            );
        }
        ConversationCommands::Complete { name } => {
            print_or_exit(
                transport
                    .complete_conversation()
                    .call(CompleteConversationRequest { name })
                    .await,
            );
        }
        ConversationCommands::Messages {
            conversation,
            filter,
        } => {
            let request = ListMessagesRequest {
                parent: conversation,
                filter: filter.unwrap_or_default(),
                ..Default::default()
            };
            print_or_exit(transport.list_messages().call(request).await);
        }
    }
}

async fn operations(config: ChannelConfig, command: OperationCommands) {
    let client = connect_or_exit(OperationsClient::connect(config).await);

    match command {
        OperationCommands::Get { name } => {
            print_or_exit(
                client
                    .get_operation()
                    .call(GetOperationRequest { name })
                    .await,
            );
        }
        OperationCommands::List { name, filter } => {
            let request = ListOperationsRequest {
                name,
                filter: filter.unwrap_or_default(),
                ..Default::default()
            };
            print_or_exit(client.list_operations().call(request).await);
        }
        OperationCommands::Cancel { name } => {
            done_or_exit(
                client
                    .cancel_operation()
                    .call(CancelOperationRequest { name })
                    .await,
                "Cancellation requested",
            );
        }
        OperationCommands::Delete { name } => {
            done_or_exit(
                client
                    .delete_operation()
                    .call(DeleteOperationRequest { name })
                    .await,
                "Deleted",
            );
        }
    }
}
