//! Project configuration (`nest-cli.json`)

use serde::{Deserialize, Serialize};
use std::path::Path;
use swc_options::CliOptionsOverride;

use super::jsonc::strip_jsonc;
use super::{decode, read_bytes, InputError};

/// Project-level configuration.
///
/// Only `sourceRoot` and `compilerOptions.builder` matter to the resolver;
/// everything else in the file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<ProjectCompilerOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderConfig>,
}

/// Builder selection: either a bare tag (`"swc"`, `"tsc"`, ...) or a record
/// carrying CLI option overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuilderConfig {
    Tag(String),
    Record(BuilderRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub builder_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CliOptionsOverride>,
}

impl BuilderConfig {
    /// CLI overrides carried by this builder. A bare tag carries none.
    pub fn cli_overrides(&self) -> Option<&CliOptionsOverride> {
        match self {
            Self::Tag(_) => None,
            Self::Record(record) => record.options.as_ref(),
        }
    }
}

impl ProjectConfiguration {
    /// Builder CLI overrides, if the project configures any
    pub fn builder_overrides(&self) -> Option<&CliOptionsOverride> {
        self.compiler_options
            .as_ref()
            .and_then(|c| c.builder.as_ref())
            .and_then(BuilderConfig::cli_overrides)
    }

    /// Load from a file. `.toml` files are read as TOML, anything else as
    /// JSON (comments allowed).
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let bytes = read_bytes(path)?;
        Self::from_bytes(path, &bytes)
    }

    /// Parse raw bytes read from `path`, choosing the format by extension
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, InputError> {
        let contents = decode(path, bytes)?;
        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let config = if is_toml {
            Self::from_toml_str(contents).map_err(|source| InputError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::from_json_str(contents).map_err(|source| InputError::Json {
                path: path.to_path_buf(),
                source,
            })?
        };

        tracing::debug!(path = %path.display(), toml = is_toml, "loaded project configuration");
        Ok(config)
    }

    /// Parse a JSON document (comments and trailing commas allowed)
    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&strip_jsonc(contents))
    }

    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
