//! SWC defaults
//!
//! Computes default SWC compiler options and SWC CLI driver options for a
//! TypeScript project, from its TypeScript compiler options and its project
//! configuration.

pub mod defaults;
pub mod input;
pub mod path;
pub mod report;

pub use defaults::{resolve_defaults, SwcDefaults};
pub use input::{BuilderConfig, InputError, ProjectConfiguration, TsCompilerOptions};
pub use path::convert_path;
pub use report::{ConfigOrigin, ConfigSource, ResolvedDefaults};
pub use swc_options::{CliOptions, CliOptionsOverride, SourceMaps, SwcOptions};
