//! cloudinv-core: EC2 dynamic inventory pipeline
//!
//! Builds a grouped Ansible inventory document from a declarative YAML
//! configuration and a compute-instance listing capability. The whole system
//! is a single pass: fetch, filter, transform, group, order, serialize.

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod instance;
pub mod provider;
pub mod sort;

pub use builder::InventoryBuilder;
pub use config::{
    ClientConfig, GroupConfig, GroupOrder, HostnameSource, HostnamesConfig, InventoryConfig,
};
pub use document::{GroupEntry, InventoryDocument, OutputFormat, RenderedInventory};
pub use error::InventoryError;
pub use instance::Ec2Instance;
pub use provider::{DbInstanceLister, InstanceLister};
