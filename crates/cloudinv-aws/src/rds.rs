//! RDS instance listing, declared but unimplemented

use async_trait::async_trait;
use aws_sdk_rds::Client;

use cloudinv_core::{ClientConfig, DbInstanceLister, InventoryError};

use crate::sdk::load_sdk_config;

/// Lists RDS database instances
///
/// Extension point only: the client is constructed with the same options as
/// the EC2 lister, but no inventory mapping for database instances exists
/// yet.
pub struct RdsLister {
    #[allow(dead_code)]
    client: Client,
}

impl RdsLister {
    /// Build a lister from the configured client options
    pub async fn connect(config: &ClientConfig) -> Self {
        let sdk_config = load_sdk_config(config).await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl DbInstanceLister for RdsLister {
    // TODO: call describe_db_instances and decide how database endpoints
    // map onto hostvars before wiring this into the builder.
    async fn list_db_instances(&self) -> Result<Vec<String>, InventoryError> {
        Err(InventoryError::ProviderError(
            "RDS inventory is not implemented".to_string(),
        ))
    }
}
