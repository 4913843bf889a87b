//! Compiler options (`.swcrc` shape).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Language level emitted by the compiler.
pub const DEFAULT_TARGET: &str = "es2021";

/// Module system of the emitted code.
pub const DEFAULT_MODULE_TYPE: &str = "commonjs";

/// Source syntax accepted by the parser.
pub const DEFAULT_SYNTAX: &str = "typescript";

/// Source map emission mode.
///
/// "Off" is represented by the absence of a value (`Option::None`), so this
/// enum only carries the two enabled modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMaps {
    /// Separate `.map` files (`true`).
    Enabled,
    /// Maps embedded in the emitted file (`"inline"`).
    Inline,
}

impl Serialize for SourceMaps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled => serializer.serialize_bool(true),
            Self::Inline => serializer.serialize_str("inline"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceMapsRepr {
    Flag(bool),
    Mode(String),
}

/// Accepts `true`, `false`, `"inline"` or null. `false` maps to `None`.
fn deserialize_source_maps<'de, D>(deserializer: D) -> Result<Option<SourceMaps>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<SourceMapsRepr>::deserialize(deserializer)? {
        None | Some(SourceMapsRepr::Flag(false)) => Ok(None),
        Some(SourceMapsRepr::Flag(true)) => Ok(Some(SourceMaps::Enabled)),
        Some(SourceMapsRepr::Mode(mode)) if mode == "inline" => Ok(Some(SourceMaps::Inline)),
        Some(SourceMapsRepr::Mode(other)) => Err(serde::de::Error::custom(format!(
            "invalid sourceMaps mode '{}': expected true, false or \"inline\"",
            other
        ))),
    }
}

/// Compiler options handed to SWC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwcOptions {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_source_maps"
    )]
    pub source_maps: Option<SourceMaps>,

    pub module: ModuleConfig,

    pub jsc: JscConfig,

    pub minify: bool,

    /// Whether a project-local `.swcrc` is honored on top of these options.
    pub swcrc: bool,
}

impl Default for SwcOptions {
    fn default() -> Self {
        Self {
            source_maps: None,
            module: ModuleConfig::default(),
            jsc: JscConfig::default(),
            minify: false,
            swcrc: true,
        }
    }
}

impl SwcOptions {
    /// Serialize as a pretty-printed `.swcrc` document
    pub fn to_swcrc_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    #[serde(rename = "type")]
    pub module_type: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            module_type: DEFAULT_MODULE_TYPE.to_string(),
        }
    }
}

/// The `jsc` section: target, parser, transforms and path mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JscConfig {
    pub target: String,

    pub parser: ParserConfig,

    pub transform: TransformConfig,

    pub keep_class_names: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Module path aliases, e.g. `"@app/*" -> ["app/*"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for JscConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            parser: ParserConfig::default(),
            transform: TransformConfig::default(),
            keep_class_names: true,
            base_url: None,
            paths: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    pub syntax: String,
    pub decorators: bool,
    pub dynamic_import: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            syntax: DEFAULT_SYNTAX.to_string(),
            decorators: true,
            dynamic_import: true,
        }
    }
}

/// Decorator handling compatible with `experimentalDecorators` +
/// `emitDecoratorMetadata` TypeScript projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    pub legacy_decorator: bool,
    pub decorator_metadata: bool,
    pub use_define_for_class_fields: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            legacy_decorator: true,
            decorator_metadata: true,
            use_define_for_class_fields: false,
        }
    }
}
