//! Merge rules: defaults and override order for the configuration file.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// The built-in catalog is opt-out, so `defaults` is seeded true before any
/// file source is layered on. Everything else defaults through serde on the
/// target structs.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder().set_default("defaults", true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserConfig;

    #[test]
    fn seeded_defaults_survive_an_empty_source() {
        let config: UserConfig = builder_with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(config.defaults);
        assert!(config.services.is_none());
    }
}
