//! Client identification sent along with every request.
use crate::error::ConfigurationError;
use tonic::metadata::{Ascii, MetadataValue};

/// Metadata key carrying the client library identification.
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Describes the library issuing requests.
///
/// It is rendered into the `x-goog-api-client` header of every call, and `user_agent` is
/// used as the HTTP user agent of channels built by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Version of a client library layered on top of these transports.
    pub client_library_version: Option<String>,
    pub user_agent: Option<String>,
}

impl ClientInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_library_version(mut self, version: impl Into<String>) -> Self {
        self.client_library_version = Some(version.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Renders the `x-goog-api-client` header value, e.g. `gl-rust gapic/0.1.0 gccl/2.3.0`.
    pub fn to_api_client_header(&self) -> String {
        let mut value = format!("gl-rust gapic/{}", env!("CARGO_PKG_VERSION"));
        if let Some(version) = &self.client_library_version {
            value.push_str(" gccl/");
            value.push_str(version);
        }
        value
    }

    pub(crate) fn header_value(&self) -> Result<MetadataValue<Ascii>, ConfigurationError> {
        let value = self.to_api_client_header();
        value
            .parse()
            .map_err(|_| ConfigurationError::InvalidClientInfo(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        let header = ClientInfo::new().to_api_client_header();
        assert!(header.starts_with("gl-rust gapic/"));
        assert!(!header.contains("gccl"));
    }

    #[test]
    fn test_header_with_library_version() {
        let header = ClientInfo::new()
            .with_client_library_version("2.3.0")
            .to_api_client_header();
        assert!(header.ends_with(" gccl/2.3.0"));
    }

    #[test]
    fn test_invalid_header_value() {
        let info = ClientInfo::new().with_client_library_version("bad\nversion");
        assert!(matches!(
            info.header_value(),
            Err(ConfigurationError::InvalidClientInfo(_))
        ));
    }
}
