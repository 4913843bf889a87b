//! Input file loading
//!
//! Builds a resolution report from tsconfig and project configuration files
//! laid out the way a TypeScript project keeps them.

use std::fs;
use std::path::PathBuf;
use swc_defaults::{ConfigOrigin, InputError, ResolvedDefaults, SourceMaps};
use tempfile::TempDir;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

#[test]
fn test_nest_project_layout() {
    let project = Project::new();
    let tsconfig = project.write(
        "tsconfig.json",
        r#"{
  "compilerOptions": {
    "module": "commonjs",
    "declaration": true,
    "emitDecoratorMetadata": true,
    "experimentalDecorators": true,
    "target": "ES2021",
    "sourceMap": true,
    "outDir": "./dist",
    "baseUrl": "./",
    // path aliases
    "paths": {
      "@common/*": ["src/common/*"],
    },
  }
}"#,
    );
    let nest_cli = project.write(
        "nest-cli.json",
        r#"{
  "$schema": "https://json.schemastore.org/nest-cli",
  "collection": "@nestjs/schematics",
  "sourceRoot": "src",
  "compilerOptions": {
    "deleteOutDir": true,
    "builder": {
      "type": "swc",
      "options": { "copyFiles": true, "includeDotfiles": true }
    }
  }
}"#,
    );

    let report = ResolvedDefaults::build(Some(&tsconfig), Some(&nest_cli)).unwrap();
    let defaults = &report.defaults;

    assert_eq!(report.sources.len(), 3);
    assert_eq!(report.sources[1].origin, ConfigOrigin::Tsconfig);
    assert_eq!(
        report.sources[2].path.as_deref(),
        Some(&*nest_cli.to_string_lossy())
    );

    assert_eq!(defaults.swc_options.source_maps, Some(SourceMaps::Enabled));
    assert_eq!(defaults.swc_options.jsc.base_url.as_deref(), Some("./"));
    assert_eq!(
        defaults.swc_options.jsc.paths.as_ref().unwrap()["@common/*"],
        vec!["src/common/*".to_string()]
    );
    // The tsconfig target does not leak into the compiler options
    assert_eq!(defaults.swc_options.jsc.target, "es2021");

    assert_eq!(defaults.cli_options.out_dir, "./dist");
    assert!(defaults.cli_options.copy_files);
    assert!(defaults.cli_options.include_dotfiles);
    assert_eq!(defaults.cli_options.filenames, vec!["src".to_string()]);
}

#[test]
fn test_toml_project_configuration() {
    let project = Project::new();
    let config = project.write(
        "swc-project.toml",
        r#"
sourceRoot = "lib"

[compilerOptions]
builder = "swc"
"#,
    );

    let report = ResolvedDefaults::build(None, Some(&config)).unwrap();

    assert_eq!(report.sources[1].origin, ConfigOrigin::Project);
    assert_eq!(report.defaults.cli_options.filenames, vec!["lib".to_string()]);
    assert!(!report.defaults.cli_options.copy_files);
}

#[test]
fn test_invalid_project_configuration() {
    let project = Project::new();
    let config = project.write("nest-cli.json", r#"{ "sourceRoot": 42 }"#);

    let err = ResolvedDefaults::build(None, Some(&config)).unwrap_err();

    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().contains("nest-cli.json"));
}

#[test]
fn test_non_utf8_tsconfig() {
    let project = Project::new();
    let path = project.dir.path().join("tsconfig.json");
    fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

    let err = ResolvedDefaults::build(Some(&path), None).unwrap_err();
    assert!(matches!(err, InputError::Utf8 { .. }));
}

#[test]
fn test_report_json_round_trip() {
    let project = Project::new();
    let tsconfig = project.write(
        "tsconfig.json",
        r#"{ "compilerOptions": { "inlineSourceMap": true } }"#,
    );

    let report = ResolvedDefaults::build(Some(&tsconfig), None).unwrap();
    let parsed: ResolvedDefaults = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(parsed.defaults, report.defaults);
    assert_eq!(parsed.sources, report.sources);
    assert_eq!(parsed.defaults.swc_options.source_maps, Some(SourceMaps::Inline));
}
