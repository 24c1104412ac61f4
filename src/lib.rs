//! Bantam: Local Dev-Environment Orchestration Core
//!
//! Reconciles built-in default service definitions with an optional user
//! override file into a single consistent registry, and derives a
//! deterministic start order from integer dependency weights. Container
//! execution, resolver-file I/O, and CLI parsing belong to external
//! collaborators; this crate is the synchronous planning step they consume.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod order;
pub mod plan;
pub mod platform;
pub mod registry;
pub mod resolver;
pub mod service;

pub use catalog::Catalog;
pub use config::{ConfigLoader, UserConfig};
pub use error::ConfigError;
pub use network::NetworkDefinition;
pub use order::OrderWarning;
pub use plan::StartPlan;
pub use platform::Platform;
pub use registry::{DefaultsMode, Registry, RegistryBuilder};
pub use resolver::ResolverDefinition;
pub use service::{merge_with_default, ServiceDefinition, Weight};
