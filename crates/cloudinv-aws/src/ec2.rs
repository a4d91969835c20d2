//! EC2 instance listing over the AWS SDK

use async_trait::async_trait;
use aws_sdk_ec2::Client;
use tracing::{debug, instrument};

use cloudinv_core::{ClientConfig, Ec2Instance, InstanceLister, InventoryError};

use crate::sdk::load_sdk_config;

/// Lists EC2 instances for the inventory builder
pub struct Ec2Lister {
    client: Client,
}

impl Ec2Lister {
    /// Build a lister from the configured client options
    pub async fn connect(config: &ClientConfig) -> Self {
        let sdk_config = load_sdk_config(config).await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Wrap an already-constructed SDK client
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstanceLister for Ec2Lister {
    #[instrument(skip(self))]
    async fn list_instances(&self) -> Result<Vec<Ec2Instance>, InventoryError> {
        let resp = self
            .client
            .describe_instances()
            .send()
            .await
            .map_err(|e| InventoryError::ProviderError(e.to_string()))?;

        let instances: Vec<Ec2Instance> = resp
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .map(|instance| Ec2Instance {
                instance_id: instance.instance_id().unwrap_or_default().to_string(),
                state: instance
                    .state()
                    .and_then(|s| s.name())
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_default(),
                tags: instance
                    .tags()
                    .iter()
                    .filter_map(|t| Some((t.key()?.to_string(), t.value()?.to_string())))
                    .collect(),
                // The API reports an unassigned public DNS as an empty
                // string; that still counts as present downstream.
                public_dns_name: instance.public_dns_name().map(str::to_string),
                public_ip_address: instance.public_ip_address().map(str::to_string),
                private_ip_address: instance.private_ip_address().map(str::to_string),
            })
            .collect();

        debug!(count = instances.len(), "described EC2 instances");

        Ok(instances)
    }
}
