//! Virtual network groupings.

use serde::{Deserialize, Serialize};

/// A named set of services that must share a virtual network.
///
/// Immutable after construction. A single default network is seeded by the
/// registry builder when defaults are enabled and the user supplied no
/// networks of their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// Network name as known to the container engine.
    #[serde(default)]
    pub name: String,

    /// Logical service names attached to this network.
    #[serde(default)]
    pub services: Vec<String>,
}
