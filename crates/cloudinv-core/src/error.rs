//! Error types for cloudinv-core

use thiserror::Error;

/// Errors that can occur while building an inventory
#[derive(Error, Debug, Clone)]
pub enum InventoryError {
    /// Configuration is unparseable, not a mapping, or contains an invalid regex
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Upstream listing call failed or returned a non-success status
    #[error("provider request failed: {0}")]
    ProviderError(String),

    /// A running instance has no public DNS name; the whole build aborts
    #[error("instance {instance_id} ({hostname}) has no public DNS name")]
    MissingDnsName {
        /// Provider-assigned instance id
        instance_id: String,
        /// Hostname derived for the instance before the failure
        hostname: String,
    },

    /// A running instance has no private IP address; the whole build aborts
    #[error("instance {instance_id} ({hostname}) has no private IP address")]
    MissingPrivateIp {
        /// Provider-assigned instance id
        instance_id: String,
        /// Hostname derived for the instance before the failure
        hostname: String,
    },
}

impl InventoryError {
    /// Check whether the error originated in the upstream provider
    #[must_use]
    pub fn is_provider(&self) -> bool {
        matches!(self, InventoryError::ProviderError(_))
    }
}
