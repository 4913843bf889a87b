//! Resolved defaults with provenance
//!
//! Records which inputs contributed to a resolution, with a digest of each
//! file's raw bytes, next to the resolved option bundles.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::defaults::{resolve_defaults, SwcDefaults};
use crate::input::{InputError, ProjectConfiguration, TsCompilerOptions};

/// Schema version for the report
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "swc-defaults/resolved@1";

/// Origin of a contributing source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Tsconfig,
    Project,
}

/// A contributing source with provenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// File path (None for builtin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 of the raw file bytes (None for builtin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ConfigSource {
    fn builtin() -> Self {
        Self {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }
    }

    fn file(origin: ConfigOrigin, path: &Path, bytes: &[u8]) -> Self {
        Self {
            origin,
            path: Some(path.to_string_lossy().to_string()),
            digest: Some(hex::encode(Sha256::digest(bytes))),
        }
    }
}

/// Resolved option bundles plus the sources they came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDefaults {
    pub schema_version: u32,

    pub schema_id: String,

    /// Contributing sources in precedence order (lowest first)
    pub sources: Vec<ConfigSource>,

    pub defaults: SwcDefaults,
}

impl ResolvedDefaults {
    /// Load the given input files and resolve.
    ///
    /// Each path that is given must exist.
    pub fn build(
        tsconfig_path: Option<&Path>,
        project_path: Option<&Path>,
    ) -> Result<Self, InputError> {
        let mut sources = vec![ConfigSource::builtin()];

        let ts_options = match tsconfig_path {
            Some(path) => {
                let bytes = crate::input::read_bytes(path)?;
                let options = TsCompilerOptions::from_bytes(path, &bytes)?;
                sources.push(ConfigSource::file(ConfigOrigin::Tsconfig, path, &bytes));
                Some(options)
            }
            None => None,
        };

        let configuration = match project_path {
            Some(path) => {
                let bytes = crate::input::read_bytes(path)?;
                let config = ProjectConfiguration::from_bytes(path, &bytes)?;
                sources.push(ConfigSource::file(ConfigOrigin::Project, path, &bytes));
                Some(config)
            }
            None => None,
        };

        let defaults = resolve_defaults(ts_options.as_ref(), configuration.as_ref());
        tracing::debug!(sources = sources.len(), "resolved defaults");

        Ok(Self::with_sources(defaults, sources))
    }

    /// Resolve from inputs already in memory. Only the builtin source is
    /// recorded.
    pub fn from_inputs(
        ts_options: Option<&TsCompilerOptions>,
        configuration: Option<&ProjectConfiguration>,
    ) -> Self {
        Self::with_sources(
            resolve_defaults(ts_options, configuration),
            vec![ConfigSource::builtin()],
        )
    }

    fn with_sources(defaults: SwcDefaults, sources: Vec<ConfigSource>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            sources,
            defaults,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
