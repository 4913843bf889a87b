//! Resolver inputs
//!
//! The two optional inputs to the defaults resolver, and loaders that read
//! them from disk:
//! - TypeScript compiler options (`tsconfig.json`)
//! - Project configuration (`nest-cli.json`, or TOML)

mod jsonc;
mod project;
mod tsconfig;

pub use project::{BuilderConfig, BuilderRecord, ProjectCompilerOptions, ProjectConfiguration};
pub use tsconfig::TsCompilerOptions;

use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading resolver inputs
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Utf8 { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read the raw bytes of an input file
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, InputError> {
    fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn decode<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str, InputError> {
    std::str::from_utf8(bytes).map_err(|_| InputError::Utf8 {
        path: path.to_path_buf(),
    })
}
