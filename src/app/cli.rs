//! Command-Line Interface

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Gesture Segmenter - Segment keypoint trajectories into movement annotations
#[derive(Parser, Debug)]
#[command(name = "gesture-seg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indexed, headerless annotation CSV
    Csv,
    /// Full analysis report as JSON
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a recording into movement annotations
    Analyze {
        /// Input recording file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (derived from the input name if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Override the configured confidence threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Validate a recording file without analyzing it
    Validate {
        /// Input recording file (JSON)
        input: PathBuf,
    },

    /// Show summary information about a recording
    Info {
        /// Input recording file (JSON)
        input: PathBuf,

        /// Show per-track details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g. "segmentation.gap_cutoff")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. "segmentation.gap_cutoff")
        key: String,

        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["gesture-seg", "analyze", "--input", "rec.json"]).unwrap();
        match cli.command {
            Commands::Analyze {
                input,
                output,
                format,
                threshold,
            } => {
                assert_eq!(input, PathBuf::from("rec.json"));
                assert!(output.is_none());
                assert_eq!(format, OutputFormat::Csv);
                assert!(threshold.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parse_analyze_all_options() {
        let cli = Cli::try_parse_from([
            "gesture-seg",
            "analyze",
            "--input",
            "rec.json",
            "--output",
            "out.json",
            "--format",
            "json",
            "--threshold",
            "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                output,
                format,
                threshold,
                ..
            } => {
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(threshold, Some(0.5));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::try_parse_from(["gesture-seg", "validate", "rec.json"]).unwrap();
        match cli.command {
            Commands::Validate { input } => assert_eq!(input, PathBuf::from("rec.json")),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_info_detailed() {
        let cli = Cli::try_parse_from(["gesture-seg", "info", "rec.json", "--detailed"]).unwrap();
        match cli.command {
            Commands::Info { detailed, .. } => assert!(detailed),
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::try_parse_from(["gesture-seg", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parse_config_actions() {
        let cli = Cli::try_parse_from(["gesture-seg", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Show
            }
        ));

        let cli = Cli::try_parse_from([
            "gesture-seg",
            "config",
            "set",
            "segmentation.gap_cutoff",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { key, value },
            } => {
                assert_eq!(key, "segmentation.gap_cutoff");
                assert_eq!(value, "5");
            }
            _ => panic!("Expected Config Set"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["gesture-seg", "-v", "-c", "my.toml", "validate", "rec.json"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_cli_invalid_command_fails() {
        assert!(Cli::try_parse_from(["gesture-seg", "bogus"]).is_err());
    }

    #[test]
    fn test_cli_missing_required_argument_fails() {
        assert!(Cli::try_parse_from(["gesture-seg", "analyze"]).is_err());
    }

    #[test]
    fn test_cli_command_structure() {
        let cmd = Cli::command();
        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert!(subcommands.contains(&"analyze"));
        assert!(subcommands.contains(&"validate"));
        assert!(subcommands.contains(&"info"));
        assert!(subcommands.contains(&"init"));
        assert!(subcommands.contains(&"config"));
    }
}
