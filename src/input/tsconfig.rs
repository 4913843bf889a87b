//! TypeScript compiler options

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::jsonc::strip_jsonc;
use super::{decode, read_bytes, InputError};

/// The subset of TypeScript `compilerOptions` the resolver reads.
///
/// Every field is optional; an absent field is distinct from `false` or
/// empty. Other tsconfig keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsCompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_source_map: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfigFile {
    #[serde(default)]
    compiler_options: Option<TsCompilerOptions>,
}

impl TsCompilerOptions {
    /// Load `compilerOptions` from a tsconfig file.
    ///
    /// `extends` is not followed.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let bytes = read_bytes(path)?;
        Self::from_bytes(path, &bytes)
    }

    /// Parse raw tsconfig bytes read from `path`
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, InputError> {
        let contents = decode(path, bytes)?;
        Self::from_tsconfig_str(contents).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a tsconfig document. A missing `compilerOptions` section yields
    /// empty options.
    pub fn from_tsconfig_str(contents: &str) -> Result<Self, serde_json::Error> {
        let file: TsConfigFile = serde_json::from_str(&strip_jsonc(contents))?;
        let options = file.compiler_options.unwrap_or_default();
        tracing::debug!(?options, "parsed tsconfig compiler options");
        Ok(options)
    }
}
