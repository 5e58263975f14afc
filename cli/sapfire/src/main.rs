//! Sapfire CLI: inspect Visual Studio solutions and validate build requests.

mod commands;
mod manifest;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use manifest::SapfireManifest;

#[derive(Parser)]
#[command(
    name = "sapfire",
    version,
    about = "Inspect Visual Studio solutions and validate build configurations"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared across all subcommands.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sapfire.toml with build defaults in the current directory
    Init {
        /// Solution path to record (default: the only .sln in the directory)
        #[arg(long)]
        solution: Option<String>,
    },
    /// Show versions, projects, configurations and properties of a solution
    Inspect {
        /// Path to the .sln file
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },
    /// List the projects referenced by a solution
    Projects {
        /// Path to the .sln file
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },
    /// Show the configuration/platform matrix of a solution
    Platforms {
        /// Path to the .sln file
        #[arg(value_name = "SLN")]
        path: PathBuf,
        /// Only show this configuration
        #[arg(long)]
        configuration: Option<String>,
    },
    /// Check that a configuration/platform pair exists in a solution
    Check(CheckArgs),
}

/// Build request for `sapfire check`; unset values fall back to sapfire.toml.
#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// Path to the .sln file
    #[arg(long, env = "SF_MSBUILD_PROJECT")]
    pub project: Option<PathBuf>,
    /// Build configuration (e.g., Debug, Release)
    #[arg(long, env = "SF_MSBUILD_CONFIGURATION")]
    pub configuration: Option<String>,
    /// Target platform (e.g., x86, x64, ARM)
    #[arg(long, env = "SF_MSBUILD_PLATFORM")]
    pub platform: Option<String>,
    /// Platforms to include in the app bundle, divided by '|' (e.g., 'x86|ARM')
    #[arg(long, env = "SF_MSBUILD_APPX_PLATFORMS")]
    pub appx_bundle_platforms: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr unless `--json`; `--verbose` enables debug; `RUST_LOG` overrides.
fn init_logging(opts: &GlobalOptions) {
    if opts.json {
        return;
    }
    let level = if opts.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("sapfire", level)
        .filter_module("sapfire_msbuild", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { solution } => commands::init::run(&cwd, solution.as_deref()),

        Commands::Inspect { path } => commands::inspect::run(&path, &cli.global),

        Commands::Projects { path } => commands::projects::run(&path, &cli.global),

        Commands::Platforms {
            path,
            configuration,
        } => commands::platforms::run(&path, configuration.as_deref(), &cli.global),

        Commands::Check(args) => {
            let manifest = SapfireManifest::find_and_load(&cwd)?;
            commands::check::run(
                &args,
                manifest.as_ref().map(|(m, dir)| (m, dir.as_path())),
                &cli.global,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from([
            "sapfire",
            "check",
            "--project",
            "App.sln",
            "--configuration",
            "Release",
            "--platform",
            "x64",
            "--appx-bundle-platforms",
            "x86|x64",
        ])
        .unwrap();
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.project, Some(PathBuf::from("App.sln")));
        assert_eq!(args.appx_bundle_platforms.as_deref(), Some("x86|x64"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sapfire", "inspect", "App.sln", "--json", "-v"]).unwrap();
        assert!(cli.global.json);
        assert!(cli.global.verbose);
    }
}
