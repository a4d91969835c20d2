//! The inventory document being built
//!
//! Shape matches what Ansible expects from a dynamic inventory script:
//! `all.hosts`, `_meta.hostvars`, and one top-level key per group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Hostvars for a single host
pub type HostVars = BTreeMap<String, String>;

/// A named group: member hosts plus shared variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Member host identifiers, ordered per the group's order policy
    pub hosts: Vec<String>,
    /// Variables shared by the group
    pub vars: BTreeMap<String, String>,
}

/// The `_meta` block holding per-host variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Host identifier -> hostvars
    pub hostvars: BTreeMap<String, HostVars>,
}

/// Complete inventory document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// Every known host; `vars` is an empty mapping, reserved
    pub all: GroupEntry,
    /// Per-host variables
    #[serde(rename = "_meta")]
    pub meta: Meta,
    /// Configured groups, keyed by name
    #[serde(flatten)]
    pub groups: BTreeMap<String, GroupEntry>,
}

impl InventoryDocument {
    /// Create a document pre-seeded with `localhost` and its fixed hostvars
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self::default();
        doc.all.hosts.push("localhost".to_string());
        doc.meta.hostvars.insert(
            "localhost".to_string(),
            BTreeMap::from([
                ("ansible_host".to_string(), "localhost".to_string()),
                ("ec2_public_dns_name".to_string(), "localhost".to_string()),
                ("ec2_public_ip_address".to_string(), "127.0.0.1".to_string()),
                ("ec2_private_ip_address".to_string(), "127.0.0.1".to_string()),
                ("ansible_connection".to_string(), "local".to_string()),
            ]),
        );
        doc
    }

    /// Serialize as key-sorted JSON with 2-space indentation
    ///
    /// # Errors
    /// Returns [`InventoryError::ConfigError`] only if serialization itself
    /// fails, which a well-formed document cannot trigger.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        // Round-tripping through Value sorts object keys: the default
        // serde_json map is BTreeMap-backed.
        let value = serde_json::to_value(self)
            .map_err(|e| InventoryError::ConfigError(e.to_string()))?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| InventoryError::ConfigError(e.to_string()))
    }

    /// Render in the requested output format
    ///
    /// # Errors
    /// See [`InventoryDocument::to_json`].
    pub fn render(self, format: OutputFormat) -> Result<RenderedInventory, InventoryError> {
        match format {
            OutputFormat::Json => Ok(RenderedInventory::Json(self.to_json()?)),
            OutputFormat::Raw => Ok(RenderedInventory::Raw(self)),
        }
    }
}

/// Recognized output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Key-sorted, 2-space-indented JSON text
    Json,
    /// The in-memory document, for callers that do not need text
    Raw,
}

/// A rendered inventory, per [`OutputFormat`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedInventory {
    /// Serialized JSON text
    Json(String),
    /// The raw document
    Raw(InventoryDocument),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_seeds_localhost() {
        let doc = InventoryDocument::new();

        assert_eq!(doc.all.hosts, vec!["localhost"]);
        let vars = doc.meta.hostvars.get("localhost").unwrap();
        assert_eq!(vars.len(), 5);
        assert_eq!(vars.get("ansible_host").map(String::as_str), Some("localhost"));
        assert_eq!(vars.get("ansible_connection").map(String::as_str), Some("local"));
        assert_eq!(
            vars.get("ec2_private_ip_address").map(String::as_str),
            Some("127.0.0.1")
        );
    }

    #[test]
    fn json_output_sorts_top_level_keys() {
        let mut doc = InventoryDocument::new();
        doc.groups.insert("web".to_string(), GroupEntry::default());
        doc.groups.insert("db".to_string(), GroupEntry::default());

        let json = doc.to_json().unwrap();
        let meta_at = json.find("\"_meta\"").unwrap();
        let all_at = json.find("\"all\"").unwrap();
        let db_at = json.find("\"db\"").unwrap();
        let web_at = json.find("\"web\"").unwrap();

        assert!(meta_at < all_at);
        assert!(all_at < db_at);
        assert!(db_at < web_at);
    }

    #[test]
    fn json_output_uses_two_space_indent() {
        let json = InventoryDocument::new().to_json().unwrap();

        assert!(json.contains("\n  \"_meta\""));
    }

    #[test]
    fn render_raw_hands_back_the_document() {
        let doc = InventoryDocument::new();
        let rendered = doc.clone().render(OutputFormat::Raw).unwrap();

        assert_eq!(rendered, RenderedInventory::Raw(doc));
    }
}
