//! Defaults resolver
//!
//! Derives the SWC compiler options and CLI driver options from optional
//! TypeScript compiler options and an optional project configuration.
//! Precedence, lowest to highest:
//! 1. Built-in defaults
//! 2. TypeScript compiler options
//! 3. Project builder options (CLI options only)

use serde::{Deserialize, Serialize};
use swc_options::{
    CliOptions, JscConfig, SourceMaps, SwcOptions, DEFAULT_OUT_DIR, DEFAULT_SOURCE_ROOT,
};

use crate::input::{ProjectConfiguration, TsCompilerOptions};
use crate::path::convert_path;

/// The resolved pair of option bundles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwcDefaults {
    pub swc_options: SwcOptions,
    pub cli_options: CliOptions,
}

/// Resolve SWC compiler and CLI options.
///
/// Total over its inputs: absent fields fall back to built-in defaults.
pub fn resolve_defaults(
    ts_options: Option<&TsCompilerOptions>,
    configuration: Option<&ProjectConfiguration>,
) -> SwcDefaults {
    SwcDefaults {
        swc_options: resolve_swc_options(ts_options),
        cli_options: resolve_cli_options(ts_options, configuration),
    }
}

fn resolve_swc_options(ts_options: Option<&TsCompilerOptions>) -> SwcOptions {
    let Some(ts) = ts_options else {
        return SwcOptions::default();
    };

    SwcOptions {
        source_maps: source_maps(ts),
        jsc: JscConfig {
            base_url: ts.base_url.clone(),
            paths: ts.paths.clone(),
            ..JscConfig::default()
        },
        ..SwcOptions::default()
    }
}

/// `sourceMap` wins over `inlineSourceMap`
fn source_maps(ts: &TsCompilerOptions) -> Option<SourceMaps> {
    if ts.source_map == Some(true) {
        Some(SourceMaps::Enabled)
    } else if ts.inline_source_map == Some(true) {
        Some(SourceMaps::Inline)
    } else {
        None
    }
}

fn resolve_cli_options(
    ts_options: Option<&TsCompilerOptions>,
    configuration: Option<&ProjectConfiguration>,
) -> CliOptions {
    // Only the tsconfig value is normalized; the fallback and any builder
    // override are used as given.
    let out_dir = ts_options
        .and_then(|ts| ts.out_dir.as_deref())
        .filter(|dir| !dir.is_empty())
        .map(convert_path)
        .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());

    let source_root = configuration
        .and_then(|c| c.source_root.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE_ROOT.to_string());

    let mut cli_options = CliOptions::new(out_dir, source_root);

    match configuration.and_then(ProjectConfiguration::builder_overrides) {
        Some(overrides) => {
            tracing::debug!(?overrides, "applying builder options");
            cli_options.apply(overrides);
        }
        None => tracing::trace!("no builder options to apply"),
    }

    cli_options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BuilderConfig, BuilderRecord, ProjectCompilerOptions};
    use swc_options::CliOptionsOverride;

    fn project_with_overrides(overrides: CliOptionsOverride) -> ProjectConfiguration {
        ProjectConfiguration {
            compiler_options: Some(ProjectCompilerOptions {
                builder: Some(BuilderConfig::Record(BuilderRecord {
                    builder_type: Some("swc".to_string()),
                    options: Some(overrides),
                })),
            }),
            source_root: None,
        }
    }

    #[test]
    fn test_no_inputs() {
        let defaults = resolve_defaults(None, None);

        assert_eq!(defaults.swc_options, SwcOptions::default());
        assert_eq!(defaults.cli_options, CliOptions::new("dist", "src"));
    }

    #[test]
    fn test_source_map_wins_over_inline() {
        let ts = TsCompilerOptions {
            source_map: Some(true),
            inline_source_map: Some(true),
            ..Default::default()
        };
        let defaults = resolve_defaults(Some(&ts), None);
        assert_eq!(defaults.swc_options.source_maps, Some(SourceMaps::Enabled));
    }

    #[test]
    fn test_inline_source_map() {
        for source_map in [None, Some(false)] {
            let ts = TsCompilerOptions {
                source_map,
                inline_source_map: Some(true),
                ..Default::default()
            };
            let defaults = resolve_defaults(Some(&ts), None);
            assert_eq!(defaults.swc_options.source_maps, Some(SourceMaps::Inline));
        }
    }

    #[test]
    fn test_source_maps_off() {
        let ts = TsCompilerOptions {
            source_map: Some(false),
            inline_source_map: Some(false),
            ..Default::default()
        };
        let defaults = resolve_defaults(Some(&ts), None);
        assert_eq!(defaults.swc_options.source_maps, None);
    }

    #[test]
    fn test_out_dir_is_normalized() {
        let ts = TsCompilerOptions {
            out_dir: Some(r"C:\project\dist".to_string()),
            ..Default::default()
        };
        let defaults = resolve_defaults(Some(&ts), None);
        assert_eq!(defaults.cli_options.out_dir, "C:/project/dist");
    }

    #[test]
    fn test_empty_out_dir_falls_back() {
        let ts = TsCompilerOptions {
            out_dir: Some(String::new()),
            ..Default::default()
        };
        let defaults = resolve_defaults(Some(&ts), None);
        assert_eq!(defaults.cli_options.out_dir, "dist");
    }

    #[test]
    fn test_builder_out_dir_not_normalized() {
        let ts = TsCompilerOptions {
            out_dir: Some("./build".to_string()),
            ..Default::default()
        };
        let project = project_with_overrides(CliOptionsOverride {
            out_dir: Some(r"out\\win".to_string()),
            ..Default::default()
        });

        let defaults = resolve_defaults(Some(&ts), Some(&project));
        assert_eq!(defaults.cli_options.out_dir, r"out\\win");
    }

    #[test]
    fn test_builder_tag_yields_no_overrides() {
        let project = ProjectConfiguration {
            compiler_options: Some(ProjectCompilerOptions {
                builder: Some(BuilderConfig::Tag("swc".to_string())),
            }),
            source_root: None,
        };
        let defaults = resolve_defaults(None, Some(&project));
        assert_eq!(defaults.cli_options, CliOptions::new("dist", "src"));
    }

    #[test]
    fn test_overrides_do_not_touch_compiler_options() {
        let project = project_with_overrides(CliOptionsOverride {
            quiet: Some(true),
            ..Default::default()
        });
        let defaults = resolve_defaults(None, Some(&project));
        assert_eq!(defaults.swc_options, SwcOptions::default());
        assert!(defaults.cli_options.quiet);
    }

    #[test]
    fn test_builder_can_replace_filenames() {
        let mut project = project_with_overrides(CliOptionsOverride {
            filenames: Some(vec!["apps/api/src".to_string(), "libs".to_string()]),
            ..Default::default()
        });
        project.source_root = Some("lib".to_string());

        let defaults = resolve_defaults(None, Some(&project));
        assert_eq!(
            defaults.cli_options.filenames,
            vec!["apps/api/src".to_string(), "libs".to_string()]
        );
    }
}
