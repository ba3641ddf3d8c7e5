//! Protobuf messages exchanged with the Dialogflow API.
//!
//! These mirror the upstream `.proto` definitions, trimmed to the messages the transports
//! send and receive. Field tags match the upstream definitions, so they stay wire
//! compatible with the real service.
pub mod dialogflow_v2;
pub mod dialogflow_v2beta1;
pub mod longrunning;
pub mod rpc;
