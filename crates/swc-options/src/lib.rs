//! SWC option bundles
//!
//! Typed shapes for the two configuration objects handed to the SWC
//! toolchain: the compiler options (the `.swcrc` document) and the options
//! for the SWC CLI build driver.

mod cli;
mod compiler;

pub use cli::{CliOptions, CliOptionsOverride, DEFAULT_EXTENSIONS, DEFAULT_OUT_DIR, DEFAULT_SOURCE_ROOT};
pub use compiler::{
    JscConfig, ModuleConfig, ParserConfig, SourceMaps, SwcOptions, TransformConfig,
    DEFAULT_MODULE_TYPE, DEFAULT_SYNTAX, DEFAULT_TARGET,
};
