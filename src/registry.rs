//! The merged service registry and its builder.
//!
//! One registry is built per orchestration run. It owns its definitions
//! exclusively; merged values are copies, never references back into the
//! catalog.

use crate::catalog::{self, Catalog};
use crate::network::NetworkDefinition;
use crate::order::{self, OrderWarning};
use crate::service::{merge_with_default, ServiceDefinition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Whether the built-in catalog participates in registry construction.
///
/// `UserOnly` is the escape hatch letting a user run with zero built-in
/// services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsMode {
    WithDefaults,
    UserOnly,
}

impl DefaultsMode {
    /// Map the configuration file's `defaults` flag onto an explicit mode.
    pub fn from_flag(defaults: bool) -> Self {
        if defaults {
            DefaultsMode::WithDefaults
        } else {
            DefaultsMode::UserOnly
        }
    }
}

/// The final mapping from logical service name to definition, plus the
/// derived start order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub services: HashMap<String, ServiceDefinition>,

    /// Start order over the keys of `services`. Valid only after
    /// [`Registry::sort_services`] has run; holds every key exactly once.
    #[serde(default)]
    pub sorted_services: Vec<String>,
}

impl Registry {
    pub fn new(services: HashMap<String, ServiceDefinition>) -> Self {
        Self {
            services,
            sorted_services: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.get(name)
    }

    /// Derive and store the start order, returning any legacy-width
    /// warnings. Definitions are never mutated here.
    pub fn sort_services(&mut self) -> Vec<OrderWarning> {
        let (ordered, warnings) = order::resolve(&self.services);
        self.sorted_services = ordered;
        warnings
    }
}

/// Assembles a [`Registry`] from the catalog defaults and the user's
/// possibly-partial service map.
#[derive(Debug)]
pub struct RegistryBuilder<'a> {
    catalog: &'a Catalog,
    mode: DefaultsMode,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(catalog: &'a Catalog, mode: DefaultsMode) -> Self {
        Self { catalog, mode }
    }

    /// Build the registry.
    ///
    /// In `UserOnly` mode the registry is exactly the user map, possibly
    /// empty. In `WithDefaults` mode each catalog entry is merged against the
    /// user's entry of the same name (whole-value replacement, see
    /// [`merge_with_default`]), and afterwards the reverse proxy and mail
    /// capture get their default-ports bindings patched in if the merge left
    /// `port_bindings` unconfigured. User entries for names the catalog does
    /// not know are kept as-is.
    pub fn build(
        &self,
        user_services: Option<HashMap<String, ServiceDefinition>>,
    ) -> Registry {
        let mut services = user_services.unwrap_or_default();

        if self.mode == DefaultsMode::UserOnly {
            debug!(services = services.len(), "built registry without catalog defaults");
            return Registry::new(services);
        }

        for (name, default) in &self.catalog.services {
            let merged = merge_with_default(default, services.get(name));
            services.insert(name.clone(), merged);
        }

        // Port 80 on the proxy and 1025 on mail capture must always be
        // usable, even when a user override said nothing about ports. Only
        // the bindings are patched; the rest of the merged entry stands.
        for name in [catalog::HAPROXY, catalog::MAILHOG] {
            let needs_ports = services
                .get(name)
                .map_or(false, |s| s.port_bindings.is_none());
            if needs_ports {
                if let (Some(entry), Some(variant)) = (
                    services.get_mut(name),
                    Catalog::default_ports_variant(name),
                ) {
                    entry.port_bindings = variant.port_bindings;
                }
            }
        }

        debug!(services = services.len(), "built registry with catalog defaults");
        Registry::new(services)
    }

    /// Resolve the network map: the user's networks if supplied, otherwise
    /// the single default network when defaults are enabled. Network
    /// injection is a defaults-mode feature; `UserOnly` without user networks
    /// yields an empty map.
    pub fn networks(
        &self,
        user_networks: Option<HashMap<String, NetworkDefinition>>,
    ) -> HashMap<String, NetworkDefinition> {
        match (user_networks, self.mode) {
            (Some(networks), _) => networks,
            (None, DefaultsMode::WithDefaults) => HashMap::from([(
                catalog::DEFAULT_NETWORK.to_string(),
                self.catalog.default_network.clone(),
            )]),
            (None, DefaultsMode::UserOnly) => HashMap::new(),
        }
    }
}
