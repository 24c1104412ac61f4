//! User configuration model.
//!
//! The deserialized view of the optional user override file. Every field is
//! optional: absence stays distinguishable from explicit-empty wherever the
//! default/replace policy depends on it. Parsing lives in [`loader`]; the
//! resolution core only ever sees the structurally valid (possibly empty)
//! result.

use crate::network::NetworkDefinition;
use crate::resolver::ResolverDefinition;
use crate::service::ServiceDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod loader;
pub mod merge_policy;

pub use loader::ConfigLoader;

/// Root user configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Whether the built-in catalog participates in registry construction.
    #[serde(default = "default_defaults")]
    pub defaults: bool,

    /// Partial or complete service overrides, keyed by logical name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<HashMap<String, ServiceDefinition>>,

    /// Replacement resolver set. Supplying any list disables the platform
    /// defaults entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolvers: Option<Vec<ResolverDefinition>>,

    /// Replacement network map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<HashMap<String, NetworkDefinition>>,

    /// SSH key material or path, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn default_defaults() -> bool {
    true
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            defaults: default_defaults(),
            services: None,
            resolvers: None,
            networks: None,
            key: None,
        }
    }
}
