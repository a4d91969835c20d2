//! Provider-side instance record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One compute instance as reported by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ec2Instance {
    /// Provider-assigned instance id
    pub instance_id: String,
    /// Lifecycle state (running, stopped, terminated, ...)
    pub state: String,
    /// Instance tags
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Public DNS name, if assigned
    pub public_dns_name: Option<String>,
    /// Public IP address, if assigned
    pub public_ip_address: Option<String>,
    /// Private IP address
    pub private_ip_address: Option<String>,
}

impl Ec2Instance {
    /// Whether the instance is in the running lifecycle state
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }

    /// Flatten tags into hostvars: keys are prefixed `ec2_tag_` and colons in
    /// AWS-namespaced tag keys become underscores
    #[must_use]
    pub fn flattened_tags(&self) -> BTreeMap<String, String> {
        self.tags
            .iter()
            .map(|(k, v)| (format!("ec2_tag_{}", k.replace(':', "_")), v.clone()))
            .collect()
    }

    /// Look up a direct attribute by its provider-side name, for the
    /// metadata-based hostname source
    #[must_use]
    pub fn metadata_attr(&self, name: &str) -> Option<&str> {
        match name {
            "InstanceId" => Some(self.instance_id.as_str()),
            "PublicDnsName" => self.public_dns_name.as_deref(),
            "PublicIpAddress" => self.public_ip_address.as_deref(),
            "PrivateIpAddress" => self.private_ip_address.as_deref(),
            _ => None,
        }
    }
}
