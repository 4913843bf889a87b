//! SWC defaults CLI
//!
//! Entry point for the `swc-defaults` command-line tool.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use swc_defaults::ResolvedDefaults;
use tracing::Level;

/// Looked up in the working directory when `--tsconfig` is not given
const DEFAULT_TSCONFIG: &str = "tsconfig.json";

/// Looked up in the working directory when `--config` is not given
const DEFAULT_PROJECT_CONFIG: &str = "nest-cli.json";

#[derive(Parser)]
#[command(name = "swc-defaults")]
#[command(about = "Resolve SWC compiler and CLI defaults for a TypeScript project", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print both option bundles with their sources as JSON
    Resolve {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the compiler options as a .swcrc document
    Swcrc {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the SWC CLI driver arguments
    Args {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to tsconfig (default: ./tsconfig.json if present)
    #[arg(long, short = 't')]
    tsconfig: Option<PathBuf>,

    /// Path to project configuration, JSON or TOML (default: ./nest-cli.json if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve { inputs } => {
            let report = resolve(&inputs);
            print_or_exit(report.to_json());
        }
        Commands::Swcrc { inputs } => {
            let report = resolve(&inputs);
            print_or_exit(report.defaults.swc_options.to_swcrc_json());
        }
        Commands::Args { inputs } => {
            let report = resolve(&inputs);
            let args: Vec<String> = report
                .defaults
                .cli_options
                .to_args()
                .iter()
                .map(|arg| shell_quote(arg))
                .collect();
            println!("{}", args.join(" "));
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve(inputs: &InputArgs) -> ResolvedDefaults {
    let tsconfig = input_path(inputs.tsconfig.as_deref(), DEFAULT_TSCONFIG);
    let project = input_path(inputs.config.as_deref(), DEFAULT_PROJECT_CONFIG);

    match ResolvedDefaults::build(tsconfig.as_deref(), project.as_deref()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error loading inputs: {}", e);
            process::exit(1);
        }
    }
}

/// An explicit path is always used; the default only when it exists.
fn input_path(explicit: Option<&Path>, default: &str) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let path = PathBuf::from(default);
            if path.exists() {
                tracing::debug!(path = %path.display(), "using default input");
                Some(path)
            } else {
                None
            }
        }
    }
}

fn print_or_exit(json: Result<String, serde_json::Error>) {
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./,:=@%+".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
