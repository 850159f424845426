//! Client configuration.

use std::env;

/// Environment-driven client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDBClientConfig {
    /// Scheme and authority to connect to instead of the regional endpoint.
    pub endpoint_url: Option<String>,
    /// Verify the `x-amz-crc32` checksum of responses (default: true).
    pub verify_crc32: bool,
    /// Log every serialized request body at debug level (default: false).
    pub log_bodies: bool,
}

impl Default for DynamoDBClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            verify_crc32: true,
            log_bodies: false,
        }
    }
}

impl DynamoDBClientConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint_url: lookup("DYNAMODB_ENDPOINT_URL").filter(|v| !v.trim().is_empty()),
            verify_crc32: lookup_bool(&lookup, "DYNAMODB_VERIFY_CRC32", true),
            log_bodies: lookup_bool(&lookup, "DYNAMODB_LOG_BODIES", false),
        }
    }
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key).map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}
