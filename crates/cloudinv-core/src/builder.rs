//! Inventory builder
//!
//! Runs the single fetch/filter/transform/group/order pass over the
//! instances a lister returns. Fatal conditions abort the whole build with
//! no partial output; per-instance conditions are logged and the run
//! continues.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::config::{GroupOrder, HostnameSource, InventoryConfig};
use crate::document::{GroupEntry, InventoryDocument, OutputFormat, RenderedInventory};
use crate::error::InventoryError;
use crate::instance::Ec2Instance;
use crate::provider::InstanceLister;
use crate::sort::natural_sort;

#[derive(Debug)]
struct CompiledGroup {
    name: String,
    hostvar: String,
    pattern: Regex,
    vars: BTreeMap<String, String>,
    order: Option<GroupOrder>,
}

#[derive(Debug)]
struct HostvarRule {
    pattern: Regex,
    vars: BTreeMap<String, String>,
}

/// Builds inventory documents from a configuration and a listing capability
///
/// Regexes and hostname defaults are resolved once here, so a bad pattern
/// fails at construction rather than mid-pipeline.
#[derive(Debug)]
pub struct InventoryBuilder {
    hostname_source: HostnameSource,
    hostname_var: String,
    groups: Vec<CompiledGroup>,
    hostvar_rules: Vec<HostvarRule>,
}

impl InventoryBuilder {
    /// Create a builder from a resolved configuration
    ///
    /// # Errors
    /// Returns [`InventoryError::ConfigError`] if any group `match` pattern
    /// or `hostvars` pattern is not a valid regex.
    pub fn new(config: &InventoryConfig) -> Result<Self, InventoryError> {
        let groups = config
            .groups
            .iter()
            .map(|g| {
                let pattern = Regex::new(&g.pattern).map_err(|e| {
                    InventoryError::ConfigError(format!(
                        "group {}: invalid match pattern: {e}",
                        g.name
                    ))
                })?;
                Ok(CompiledGroup {
                    name: g.name.clone(),
                    hostvar: g.hostvar.clone(),
                    pattern,
                    vars: g.vars.clone(),
                    order: g.order,
                })
            })
            .collect::<Result<Vec<_>, InventoryError>>()?;

        let hostvar_rules = config
            .hostvars
            .iter()
            .map(|(pattern, vars)| {
                let pattern = Regex::new(pattern).map_err(|e| {
                    InventoryError::ConfigError(format!("invalid hostvars pattern: {e}"))
                })?;
                Ok(HostvarRule {
                    pattern,
                    vars: vars.clone(),
                })
            })
            .collect::<Result<Vec<_>, InventoryError>>()?;

        Ok(Self {
            hostname_source: config.hostnames.source,
            hostname_var: config.hostnames.var().to_string(),
            groups,
            hostvar_rules,
        })
    }

    /// Build and render in one step
    ///
    /// # Errors
    /// See [`InventoryBuilder::build`].
    pub async fn run(
        &self,
        lister: &dyn InstanceLister,
        format: OutputFormat,
    ) -> Result<RenderedInventory, InventoryError> {
        self.build(lister).await?.render(format)
    }

    /// Build the inventory document
    ///
    /// # Errors
    /// Returns [`InventoryError::ProviderError`] if the listing call fails,
    /// and [`InventoryError::MissingDnsName`] / [`InventoryError::MissingPrivateIp`]
    /// if a running instance lacks one of the required addresses.
    #[instrument(skip(self, lister))]
    pub async fn build(
        &self,
        lister: &dyn InstanceLister,
    ) -> Result<InventoryDocument, InventoryError> {
        let mut doc = InventoryDocument::new();
        for group in &self.groups {
            doc.groups.insert(group.name.clone(), GroupEntry::default());
        }

        let instances = lister.list_instances().await?;
        debug!(count = instances.len(), "fetched instances");

        for instance in &instances {
            if !instance.is_running() {
                continue;
            }
            let Some(hostname) = self.derive_hostname(instance) else {
                continue;
            };
            self.register_host(&mut doc, instance, hostname)?;
        }

        for group in &self.groups {
            let entry = doc.groups.entry(group.name.clone()).or_default();
            entry.vars = group.vars.clone();
            for host in &doc.all.hosts {
                let Some(hostvars) = doc.meta.hostvars.get(host) else {
                    continue;
                };
                if let Some(value) = hostvars.get(&group.hostvar)
                    && group.pattern.is_match(value)
                {
                    entry.hosts.push(host.clone());
                }
            }
        }

        for group in &self.groups {
            let Some(order) = group.order else { continue };
            if let Some(entry) = doc.groups.get_mut(&group.name) {
                match order {
                    GroupOrder::Shuffle => entry.hosts.shuffle(&mut rand::thread_rng()),
                    GroupOrder::Sorted => natural_sort(&mut entry.hosts),
                }
            }
        }

        info!(
            hosts = doc.all.hosts.len(),
            groups = doc.groups.len(),
            "inventory build completed"
        );

        Ok(doc)
    }

    fn derive_hostname(&self, instance: &Ec2Instance) -> Option<String> {
        match self.hostname_source {
            HostnameSource::Ec2Tag => {
                if instance.tags.is_empty() {
                    warn!(instance_id = %instance.instance_id, "instance has no tags, skipping");
                    return None;
                }
                match instance.tags.get(&self.hostname_var) {
                    Some(value) => Some(value.clone()),
                    None => {
                        warn!(
                            instance_id = %instance.instance_id,
                            tag = %self.hostname_var,
                            "instance has no hostname tag, skipping"
                        );
                        None
                    }
                }
            }
            HostnameSource::Ec2Metadata => match instance.metadata_attr(&self.hostname_var) {
                Some(value) => Some(value.to_string()),
                None => {
                    // Compatibility with the original script: the host is
                    // still registered, under an empty-string key.
                    warn!(
                        instance_id = %instance.instance_id,
                        attr = %self.hostname_var,
                        "instance has no such metadata attribute, hostname is empty"
                    );
                    Some(String::new())
                }
            },
        }
    }

    fn register_host(
        &self,
        doc: &mut InventoryDocument,
        instance: &Ec2Instance,
        hostname: String,
    ) -> Result<(), InventoryError> {
        let mut hostvars = instance.flattened_tags();

        for rule in &self.hostvar_rules {
            if rule.pattern.is_match(&hostname) {
                hostvars.extend(rule.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        match &instance.public_dns_name {
            Some(dns) => {
                // ansible_host is what the orchestrator dials at connect time
                hostvars.insert("ansible_host".to_string(), dns.clone());
                hostvars.insert("ec2_public_dns_name".to_string(), dns.clone());
            }
            None => {
                return Err(InventoryError::MissingDnsName {
                    instance_id: instance.instance_id.clone(),
                    hostname,
                });
            }
        }

        match &instance.public_ip_address {
            Some(ip) => {
                hostvars.insert("ec2_public_ip_address".to_string(), ip.clone());
            }
            None => {
                warn!(
                    instance_id = %instance.instance_id,
                    hostname = %hostname,
                    "instance has no public IP address"
                );
            }
        }

        let private_ip = instance.private_ip_address.clone().ok_or_else(|| {
            InventoryError::MissingPrivateIp {
                instance_id: instance.instance_id.clone(),
                hostname: hostname.clone(),
            }
        })?;
        hostvars.insert("ec2_private_ip_address".to_string(), private_ip);

        doc.all.hosts.push(hostname.clone());
        if doc.meta.hostvars.insert(hostname.clone(), hostvars).is_some() {
            warn!(
                hostname = %hostname,
                "duplicate hostname, earlier hostvars overwritten"
            );
        }
        Ok(())
    }
}
