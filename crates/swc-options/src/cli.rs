//! CLI driver options and the partial override applied on top of them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Output directory used when none is configured.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Source directory used when the project does not set `sourceRoot`.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// File extensions compiled by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".ts", ".tsx"];

/// Options for the SWC CLI build driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOptions {
    pub out_dir: String,

    /// Inputs to compile. Holds exactly one entry unless overridden.
    pub filenames: Vec<String>,

    pub sync: bool,

    pub extensions: Vec<String>,

    pub copy_files: bool,

    pub include_dotfiles: bool,

    pub quiet: bool,

    pub watch: bool,

    pub strip_leading_paths: bool,

    /// Driver keys supplied by builder options that are not modeled above
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CliOptions {
    /// Base defaults for the given output directory and source root
    pub fn new(out_dir: impl Into<String>, source_root: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            filenames: vec![source_root.into()],
            sync: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            copy_files: false,
            include_dotfiles: false,
            quiet: false,
            watch: false,
            strip_leading_paths: true,
            extra: BTreeMap::new(),
        }
    }

    /// Apply an override: every field it sets replaces ours wholesale.
    pub fn apply(&mut self, overrides: &CliOptionsOverride) {
        if let Some(ref out_dir) = overrides.out_dir {
            self.out_dir = out_dir.clone();
        }
        if let Some(ref filenames) = overrides.filenames {
            self.filenames = filenames.clone();
        }
        if let Some(sync) = overrides.sync {
            self.sync = sync;
        }
        if let Some(ref extensions) = overrides.extensions {
            self.extensions = extensions.clone();
        }
        if let Some(copy_files) = overrides.copy_files {
            self.copy_files = copy_files;
        }
        if let Some(include_dotfiles) = overrides.include_dotfiles {
            self.include_dotfiles = include_dotfiles;
        }
        if let Some(quiet) = overrides.quiet {
            self.quiet = quiet;
        }
        if let Some(watch) = overrides.watch {
            self.watch = watch;
        }
        if let Some(strip_leading_paths) = overrides.strip_leading_paths {
            self.strip_leading_paths = strip_leading_paths;
        }
        for (key, value) in &overrides.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    /// Render as arguments for the SWC CLI driver.
    ///
    /// Keys in `extra` are not rendered.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--out-dir".to_string(), self.out_dir.clone()];

        if !self.extensions.is_empty() {
            args.push("--extensions".to_string());
            args.push(self.extensions.join(","));
        }

        let flags = [
            (self.sync, "--sync"),
            (self.copy_files, "--copy-files"),
            (self.include_dotfiles, "--include-dotfiles"),
            (self.quiet, "--quiet"),
            (self.watch, "--watch"),
            (self.strip_leading_paths, "--strip-leading-paths"),
        ];
        for (enabled, flag) in flags {
            if enabled {
                args.push(flag.to_string());
            }
        }

        args.extend(self.filenames.iter().cloned());
        args
    }
}

/// Partial `CliOptions` supplied by project builder options.
///
/// `None` leaves the default in place; unknown keys are collected in `extra`
/// and copied through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOptionsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filenames: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_files: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_dotfiles: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_leading_paths: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CliOptionsOverride {
    /// True when applying this override changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
