//! # CLI
//!
//! This module defines the command-line interface of `dialogflow` using `clap`, and turns
//! the global options into a [`ChannelConfig`].
use clap::{Parser, Subcommand, ValueEnum};
use dialogflow_grpc::proto::dialogflow_v2::document::KnowledgeType as ProtoKnowledgeType;
use dialogflow_grpc::{ChannelConfig, Credentials, TransportSettings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dialogflow", version, about = "Dialogflow gRPC CLI")]
pub struct Cli {
    /// API host (e.g. dialogflow.googleapis.com or http://localhost:8080)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bearer token, e.g. the output of `gcloud auth print-access-token`
    #[arg(long, env = "DIALOGFLOW_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Credentials file carrying an `access_token`
    #[arg(long, global = true)]
    pub credentials_file: Option<PathBuf>,

    /// Project billed for the requests
    #[arg(long, global = true)]
    pub quota_project: Option<String>,

    /// JSON settings file. Flags take precedence over its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Knowledge base documents (google.cloud.dialogflow.v2.Documents)
    Documents {
        #[command(subcommand)]
        sub: DocumentCommands,
    },
    /// Session entity types (google.cloud.dialogflow.v2.SessionEntityTypes)
    SessionEntityTypes {
        #[command(subcommand)]
        sub: SessionEntityTypeCommands,
    },
    /// Conversations and their messages (google.cloud.dialogflow.v2beta1.Conversations)
    Conversations {
        #[command(subcommand)]
        sub: ConversationCommands,
    },
    /// Long-running operations (google.longrunning.Operations)
    Operations {
        #[command(subcommand)]
        sub: OperationCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    List {
        /// Knowledge base (projects/<project>/knowledgeBases/<id>)
        parent: String,
        #[arg(long)]
        page_size: Option<i32>,
        #[arg(long)]
        filter: Option<String>,
    },
    Get {
        name: String,
    },
    /// Create a document from a URI. Prints the long-running operation
    Create {
        parent: String,
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        mime_type: String,
        #[arg(long)]
        content_uri: String,
        #[arg(long, value_enum, default_value_t = KnowledgeType::Faq)]
        knowledge_type: KnowledgeType,
    },
    Delete {
        name: String,
    },
    Reload {
        name: String,
        /// Reload from this Cloud Storage URI instead of the document's source
        #[arg(long)]
        content_uri: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnowledgeType {
    Faq,
    ExtractiveQa,
    ArticleSuggestion,
    AgentFacingSmartReply,
}

impl From<KnowledgeType> for ProtoKnowledgeType {
    fn from(value: KnowledgeType) -> Self {
        match value {
            KnowledgeType::Faq => ProtoKnowledgeType::Faq,
            KnowledgeType::ExtractiveQa => ProtoKnowledgeType::ExtractiveQa,
            KnowledgeType::ArticleSuggestion => ProtoKnowledgeType::ArticleSuggestion,
            KnowledgeType::AgentFacingSmartReply => ProtoKnowledgeType::AgentFacingSmartReply,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SessionEntityTypeCommands {
    List {
        /// Session (projects/<project>/agent/sessions/<session>)
        parent: String,
    },
    Get {
        name: String,
    },
    Delete {
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConversationCommands {
    Create {
        /// Project (projects/<project>/locations/<location>)
        parent: String,
        #[arg(long)]
        conversation_profile: String,
    },
    List {
        parent: String,
        #[arg(long)]
        filter: Option<String>,
    },
    Get {
        name: String,
    },
    Complete {
        name: String,
    },
    /// List the messages of a conversation
    Messages {
        conversation: String,
        #[arg(long)]
        filter: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum OperationCommands {
    Get {
        name: String,
    },
    List {
        /// Parent resource of the operations
        name: String,
        #[arg(long)]
        filter: Option<String>,
    },
    Cancel {
        name: String,
    },
    Delete {
        name: String,
    },
}

impl Cli {
    /// Builds the channel configuration from the settings file, if any, and the flags.
    pub fn channel_config(&self) -> anyhow::Result<ChannelConfig> {
        let settings = match &self.config {
            Some(path) => TransportSettings::from_file(path)?,
            None => TransportSettings::default(),
        };

        let mut config = settings.into_config()?;

        if let Some(host) = &self.host {
            config = config.with_host(host);
        }
        // A credential flag replaces the settings file's source. Both flags together stay
        // conflicting and are rejected when the transport is built.
        match (&self.access_token, &self.credentials_file) {
            (Some(token), Some(path)) => {
                config = config
                    .with_credentials(Credentials::bearer(token))
                    .with_credentials_file(path);
            }
            (Some(token), None) => {
                config.credentials_file = None;
                config = config.with_credentials(Credentials::bearer(token));
            }
            (None, Some(path)) => {
                config.credentials = None;
                config = config.with_credentials_file(path);
            }
            (None, None) => {}
        }
        if let Some(project) = &self.quota_project {
            config = config.with_quota_project_id(project);
        }

        Ok(config)
    }
}
