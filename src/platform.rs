//! Host platform signal.
//!
//! The host operating system is the only environment-sourced input to the
//! resolution core; it drives default resolver selection and nothing else.

use std::fmt;

/// Host operating system, read once per orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Linux,
    /// Any other platform. Resolver support degrades silently to an empty
    /// set; services are unaffected.
    Other,
}

impl Platform {
    /// Detect the platform of the running process.
    pub fn current() -> Self {
        Self::from(std::env::consts::OS)
    }
}

impl From<&str> for Platform {
    fn from(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Platform::Darwin,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Darwin => f.write_str("darwin"),
            Platform::Linux => f.write_str("linux"),
            Platform::Other => f.write_str("other"),
        }
    }
}
