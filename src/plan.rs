//! Top-level resolution pipeline.
//!
//! Wires platform detection, the default catalog, the registry builder, and
//! the order resolver into one synchronous planning step. The resulting
//! [`StartPlan`] is the artifact the execution engine consumes: for each name
//! in `registry.sorted_services` it looks up the definition and performs the
//! equivalent of "ensure running", in that order.

use crate::catalog::Catalog;
use crate::config::UserConfig;
use crate::network::NetworkDefinition;
use crate::order::OrderWarning;
use crate::platform::Platform;
use crate::registry::{DefaultsMode, Registry, RegistryBuilder};
use crate::resolver::ResolverDefinition;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Everything one orchestration run needs from the planning step.
#[derive(Debug, Clone)]
pub struct StartPlan {
    /// Merged registry with `sorted_services` populated.
    pub registry: Registry,

    /// Networks to ensure before services start.
    pub networks: HashMap<String, NetworkDefinition>,

    /// Platform resolver stubs for the engine to write to disk.
    pub resolvers: Vec<ResolverDefinition>,

    /// SSH key material, passed through opaque and uninterpreted.
    pub key: Option<String>,

    /// Configuration-inconsistency warnings gathered during ordering.
    pub warnings: Vec<OrderWarning>,
}

impl StartPlan {
    /// Resolve a plan from the user configuration for the given platform.
    ///
    /// Pure and infallible: partial or absent user configuration falls back
    /// to catalog defaults, and inconsistencies surface as warnings rather
    /// than errors.
    pub fn resolve(platform: Platform, config: UserConfig) -> StartPlan {
        let catalog = Catalog::for_platform(platform);
        let mode = DefaultsMode::from_flag(config.defaults);
        debug!(%platform, ?mode, "resolving start plan");

        let builder = RegistryBuilder::new(&catalog, mode);
        let mut registry = builder.build(config.services);
        let networks = builder.networks(config.networks);

        // A user resolver list replaces the platform defaults wholesale;
        // resolvers are never field-merged.
        let resolvers = config.resolvers.unwrap_or(catalog.resolvers);

        let warnings = registry.sort_services();
        for warning in &warnings {
            warn!(service = %warning.service, "{}", warning);
        }
        debug!(
            services = registry.len(),
            networks = networks.len(),
            resolvers = resolvers.len(),
            "start plan resolved"
        );

        StartPlan {
            registry,
            networks,
            resolvers,
            key: config.key,
            warnings,
        }
    }
}
