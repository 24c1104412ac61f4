//! Platform DNS stub file definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One platform DNS stub file redirecting a development domain to the local
/// nameserver.
///
/// Selected once per run from the host platform. Never field-merged with user
/// data: a user-supplied resolver list replaces the platform defaults
/// wholesale. Writing the file to disk is the execution engine's job; `data`
/// is payload here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolverDefinition {
    /// Literal file contents.
    #[serde(default)]
    pub data: String,

    /// Filename within `folder`.
    #[serde(default)]
    pub file: String,

    /// Target directory.
    #[serde(default)]
    pub folder: String,

    /// Human-readable label.
    #[serde(default)]
    pub name: String,
}

impl ResolverDefinition {
    /// Full path the stub file would be written to.
    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.folder).join(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_path_joins_folder_and_file() {
        let resolver = ResolverDefinition {
            folder: "/etc/resolver".to_string(),
            file: "docker.amazee.io".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolver.target_path(),
            PathBuf::from("/etc/resolver/docker.amazee.io")
        );
    }
}
