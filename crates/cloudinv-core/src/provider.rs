//! Provider listing capabilities
//!
//! The builder only sees these traits, so tests substitute a fake lister and
//! the AWS adapter lives in its own crate.

use async_trait::async_trait;

use crate::error::InventoryError;
use crate::instance::Ec2Instance;

/// Compute-instance listing capability
#[async_trait]
pub trait InstanceLister: Send + Sync {
    /// List all compute instances visible to the client
    ///
    /// # Errors
    /// Returns [`InventoryError::ProviderError`] if the upstream call does
    /// not return a success status; the whole build aborts.
    async fn list_instances(&self) -> Result<Vec<Ec2Instance>, InventoryError>;
}

/// Database-instance listing capability
///
/// Declared extension point. No inventory mapping exists for database
/// instances yet; implementations currently fail with a provider error.
#[async_trait]
pub trait DbInstanceLister: Send + Sync {
    /// List database instance identifiers visible to the client
    async fn list_db_instances(&self) -> Result<Vec<String>, InventoryError>;
}
