//! Transports for the individual Dialogflow services.
//!
//! Every service module follows the same layout: a static [`crate::ServiceInfo`]
//! describing the RPCs, an asynchronous `*GrpcAsyncTransport` and a blocking
//! `*GrpcTransport`. Both hold one lazily created binding per RPC.
pub mod conversations;
pub mod documents;
pub mod operations;
pub mod session_entity_types;

/// Host used when a config does not name one.
pub const DEFAULT_HOST: &str = "dialogflow.googleapis.com";

/// OAuth scopes requested when a config does not name any.
pub const DEFAULT_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/dialogflow",
];
