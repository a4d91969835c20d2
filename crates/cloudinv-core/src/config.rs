//! Configuration types for the inventory pipeline
//!
//! The configuration is a YAML document. Defaults are resolved here, once,
//! so the builder never has to re-check for absent keys.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Top-level inventory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// How host display names are derived
    #[serde(default)]
    pub hostnames: HostnamesConfig,
    /// Provider client options (named after the original boto3 section)
    #[serde(default, rename = "boto3")]
    pub client: ClientConfig,
    /// Host groups, in declaration order
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    /// Pattern-based hostvars: regex -> variables, applied in declaration order
    #[serde(default)]
    pub hostvars: IndexMap<String, BTreeMap<String, String>>,
}

impl InventoryConfig {
    /// Parse a YAML configuration document
    ///
    /// # Errors
    /// Returns [`InventoryError::ConfigError`] if the document is unparseable
    /// or is not a mapping.
    pub fn from_yaml(text: &str) -> Result<Self, InventoryError> {
        serde_yaml::from_str(text).map_err(|e| InventoryError::ConfigError(e.to_string()))
    }
}

/// Hostname derivation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostnamesConfig {
    /// Where the hostname comes from
    #[serde(default)]
    pub source: HostnameSource,
    /// Tag key or metadata attribute holding the hostname
    pub var: Option<String>,
}

impl HostnamesConfig {
    /// The tag key or metadata attribute to read, with the source-dependent
    /// default applied (`Name` for tags, `PublicDnsName` for metadata)
    #[must_use]
    pub fn var(&self) -> &str {
        self.var.as_deref().unwrap_or(match self.source {
            HostnameSource::Ec2Tag => "Name",
            HostnameSource::Ec2Metadata => "PublicDnsName",
        })
    }
}

/// Hostname source selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostnameSource {
    /// Read the hostname from an instance tag
    #[default]
    Ec2Tag,
    /// Read the hostname from an instance attribute
    Ec2Metadata,
}

/// Provider client options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// AWS region
    #[serde(default = "default_region")]
    pub region_name: String,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Read timeout in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout: u64,
    /// Retry attempt budget for the underlying client
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Static access key id (falls back to the ambient credential chain)
    pub aws_access_key_id: Option<String>,
    /// Static secret access key
    pub aws_secret_access_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region_name: default_region(),
            connect_timeout: default_connect_timeout(),
            read_timeout: default_read_timeout(),
            max_attempts: default_max_attempts(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_read_timeout() -> u64 {
    20
}

fn default_max_attempts() -> u32 {
    10
}

/// One host group definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Group name, used as a top-level inventory key
    pub name: String,
    /// Hostvar key whose value selects members
    pub hostvar: String,
    /// Regex searched against the hostvar value
    #[serde(rename = "match")]
    pub pattern: String,
    /// Variables shared by the whole group
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
    /// Optional ordering of the group's hosts
    pub order: Option<GroupOrder>,
}

/// Host ordering policy within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrder {
    /// Uniform random permutation, not reproducible
    Shuffle,
    /// Natural alphanumeric order (`host2` before `host10`)
    Sorted,
}
