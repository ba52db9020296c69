//! Configuration types for unify.
//!
//! [`Config::load`] reads `~/.config/unify/config.toml` (or an explicit path),
//! creating the default file if it does not yet exist, then applies
//! `UNIFY__<SECTION>__<KEY>` environment overrides. [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem (useful in
//! tests).

use crate::error::UnifyError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[mapping]
rejected_payload = "retain"
parallel         = false

[output]
unified_path  = "unified_events.json"
rejected_path = "invalid_events.json"
pretty        = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Whether a rejected record keeps its original payload for later debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectedPayload {
    #[default]
    Retain,
    Drop,
}

impl FromStr for RejectedPayload {
    type Err = UnifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" | "keep" => Ok(RejectedPayload::Retain),
            "drop" | "discard" => Ok(RejectedPayload::Drop),
            other => Err(UnifyError::PayloadPolicy(other.to_string())),
        }
    }
}

/// `[mapping]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub rejected_payload: RejectedPayload,
    /// Map records across the rayon pool once categories are frozen.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            rejected_payload: RejectedPayload::Retain,
            parallel: false,
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_unified_path")]
    pub unified_path: PathBuf,
    #[serde(default = "default_rejected_path")]
    pub rejected_path: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_unified_path() -> PathBuf { PathBuf::from("unified_events.json") }
fn default_rejected_path() -> PathBuf { PathBuf::from("invalid_events.json") }
fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unified_path: default_unified_path(),
            rejected_path: default_rejected_path(),
            pretty: default_pretty(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `path == None` the user config file is used, and created with the
    /// defaults if it does not exist. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, UnifyError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => {
                let p = config_path();
                if !p.exists() {
                    if let Some(parent) = p.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&p, DEFAULT_CONFIG.trim_start())?;
                }
                (p, false)
            }
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(config::Environment::with_prefix("UNIFY").separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("unify")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
