use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Outroute - a build output directory router for multi-module projects
#[derive(Parser, Debug)]
#[command(name = "outroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the shared build root directory
    #[arg(short, long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute per-subproject output directories
    Resolve(ResolveArgs),

    /// Remove the shared build root and everything beneath it
    Clean(CleanArgs),

    /// List configured repository mirrors
    Mirrors(MirrorsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Resolve a single subproject by name
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Maximum discovery depth
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Directory names to skip during discovery (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    pub exclude: Option<Vec<String>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show what would be removed without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct MirrorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::parse_from(["outroute", "resolve", "/work/proj"]);
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.path, PathBuf::from("/work/proj"));
                assert!(!args.json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_resolve_with_options() {
        let cli = Cli::parse_from([
            "outroute",
            "resolve",
            "--project",
            "app",
            "--max-depth",
            "3",
            "--exclude",
            "vendor,docs",
            "/work/proj",
        ]);
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.project.as_deref(), Some("app"));
                assert_eq!(args.max_depth, Some(3));
                assert_eq!(
                    args.exclude,
                    Some(vec!["vendor".to_string(), "docs".to_string()])
                );
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_clean_with_dry_run() {
        let cli = Cli::parse_from(["outroute", "clean", "--dry-run", "/work/proj"]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.dry_run);
                assert!(!args.force);
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn global_root_flag() {
        let cli = Cli::parse_from(["outroute", "clean", "--root", "/tmp/build"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/build")));
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["outroute", "-vvv", "resolve"]);
        assert_eq!(cli.verbose, 3);
    }
}
