//! Data mode and its persisted preference.
//!
//! Separate from the gateway itself: the gateway takes a [`DataMode`] at
//! construction and never re-reads the store mid-flight. The store is the
//! durable preference consulted when a new gateway is built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which transport family the gateway attempts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Fixture data only; no network I/O is ever attempted.
    #[default]
    Mock,
    /// Attempt the HTTP backend, falling back to fixtures on failure.
    Live,
}

impl DataMode {
    /// The persisted spelling of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            other => Err(UnknownMode(other.to_owned())),
        }
    }
}

/// Error for a mode string that is neither `mock` nor `live`.
#[derive(Debug)]
pub struct UnknownMode(String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode '{}' (expected 'mock' or 'live')", self.0)
    }
}

impl std::error::Error for UnknownMode {}

/// On-disk shape of the preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Persisted {
    #[serde(default)]
    mode: Option<String>,
}

/// Durable mode preference stored at `~/.config/erika/mode.toml`.
///
/// Reads default to [`DataMode::Mock`] when the file is missing, unreadable,
/// or holds anything but the two known values.
#[derive(Debug, Clone)]
pub struct ModeStore {
    path: PathBuf,
}

impl ModeStore {
    /// Store at the default path.
    pub fn new() -> Self {
        Self { path: Self::path() }
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted mode, defaulting to `mock`.
    pub fn mode(&self) -> DataMode {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return DataMode::default();
        };
        toml::from_str::<Persisted>(&contents)
            .ok()
            .and_then(|p| p.mode)
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    /// Persist the given mode.
    pub fn set_mode(&self, mode: DataMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(&Persisted {
            mode: Some(mode.as_str().to_owned()),
        })?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Default path: `~/.config/erika/mode.toml`.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("erika")
            .join("mode.toml")
    }
}

impl Default for ModeStore {
    fn default() -> Self {
        Self::new()
    }
}
