use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Temp Sweeper - A temporary file and browser cache cleanup utility
#[derive(Parser, Debug)]
#[command(name = "temp-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "TEMP_SWEEPER_CONFIG")]
    pub config: Option<PathBuf>,

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
    /// Delete temporary files and browser caches
    Clean(CleanArgs),

    /// Estimate how much a cleanup would free, without deleting
    Analyze(AnalyzeArgs),

    /// Show disk and memory usage
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Which locations a clean or analyze run covers.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Sweep only these directories instead of temp dirs and browser caches
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Skip the system temp directories
    #[arg(long)]
    pub no_temp: bool,

    /// Skip browser caches
    #[arg(long)]
    pub no_browsers: bool,

    /// Browsers to clean (comma-separated, e.g. chrome,firefox)
    #[arg(short, long, value_delimiter = ',', value_name = "LIST")]
    pub browsers: Option<Vec<String>>,

    /// Maximum recursion depth for temp directories and explicit paths
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Leave directories emptied by the sweep in place
    #[arg(long)]
    pub keep_empty_dirs: bool,

    /// Clean browser caches even while the browser is running
    #[arg(short, long)]
    pub force: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write a cleanup report into this directory
    #[arg(long, value_name = "DIR")]
    pub report: Option<PathBuf>,

    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
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
    fn parse_clean_defaults() {
        let cli = Cli::parse_from(["temp-sweeper", "clean"]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.selection.paths.is_empty());
                assert!(!args.selection.no_temp);
                assert!(args.selection.max_depth.is_none());
                assert!(!args.force);
                assert!(!args.yes);
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn parse_clean_with_options() {
        let cli = Cli::parse_from([
            "temp-sweeper",
            "clean",
            "--no-temp",
            "--browsers",
            "chrome,firefox",
            "--max-depth",
            "5",
            "--keep-empty-dirs",
            "-y",
            "/var/tmp/cache",
        ]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.selection.no_temp);
                assert_eq!(args.selection.max_depth, Some(5));
                assert_eq!(
                    args.selection.browsers,
                    Some(vec!["chrome".to_string(), "firefox".to_string()])
                );
                assert_eq!(args.selection.paths, vec![PathBuf::from("/var/tmp/cache")]);
                assert!(args.keep_empty_dirs);
                assert!(args.yes);
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn parse_analyze_json() {
        let cli = Cli::parse_from(["temp-sweeper", "analyze", "--json", "/tmp"]);
        match cli.command {
            Command::Analyze(args) => {
                assert!(args.json);
                assert_eq!(args.selection.paths, vec![PathBuf::from("/tmp")]);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["temp-sweeper", "-vvv", "status"]);
        assert_eq!(cli.verbose, 3);
    }
}
