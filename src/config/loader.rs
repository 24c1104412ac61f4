//! Configuration file loading: $XDG-style global file, best-effort policy.
//!
//! Deserialization failures are never fatal to orchestration: the loader
//! reports them and the caller proceeds with defaults. The resolution core
//! downstream always receives a structurally valid (possibly empty)
//! [`UserConfig`].

use crate::config::{merge_policy, UserConfig};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Path to the global config file: `$HOME/.config/bantam/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("bantam")
                .join("config.toml")
        })
    }

    /// Load the user configuration from the global config file, if present.
    pub fn load() -> Result<UserConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(
                    config::File::from(path)
                        .format(config::FileFormat::Toml)
                        .required(false),
                );
            }
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load the user configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<UserConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?.add_source(
            config::File::from(path.as_ref().to_path_buf()).format(config::FileFormat::Toml),
        );
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Best-effort load: on any failure, report and fall back to the default
    /// configuration so orchestration proceeds with catalog defaults.
    pub fn load_or_default() -> UserConfig {
        Self::load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load user configuration, proceeding with defaults");
            UserConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_from_file_parses_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
defaults = true
key = "/home/dev/.ssh/id_rsa"

[services."mailhog.docker.amazee.io"]
name = "my-mail"
image = "custom/mailhog"
weight = 15

[services."mailhog.docker.amazee.io".port_bindings]
"1025/tcp" = "11025"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert!(config.defaults);
        let services = config.services.unwrap();
        let mail = &services["mailhog.docker.amazee.io"];
        assert_eq!(mail.image, "custom/mailhog");
        assert_eq!(
            mail.port_bindings.as_ref().unwrap()["1025/tcp"],
            "11025".to_string()
        );
    }

    #[test]
    fn load_from_file_seeds_defaults_flag() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "key = \"/tmp/key\"").unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert!(config.defaults);
        assert_eq!(config.key.as_deref(), Some("/tmp/key"));
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(ConfigLoader::load_from_file("/nonexistent/bantam.toml").is_err());
    }

    #[test]
    fn malformed_file_errors_without_panicking() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "defaults = [not toml").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}
