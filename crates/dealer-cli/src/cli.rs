//! CLI definition using clap

use clap::{Parser, Subcommand};
use dealer_types::OutputFormat;

#[derive(Parser)]
#[command(name = "dealer")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle inventory for a single dealership")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Listing format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Run {
        /// Pre-load demonstration vehicles (overrides config)
        #[arg(long)]
        sample: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default listing format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log filter used when RUST_LOG is unset (e.g. "warn", "dealer_store=debug")
        #[arg(long)]
        set_log_level: Option<String>,

        /// Enable/disable pre-loading demonstration vehicles
        #[arg(long)]
        set_sample_data: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["dealer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_run_with_sample_and_global_flags() {
        let cli = Cli::try_parse_from(["dealer", "run", "--sample", "-f", "json", "-v"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Run { sample: true }));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_setters() {
        let cli = Cli::try_parse_from([
            "dealer",
            "config",
            "--set-output",
            "table",
            "--set-sample-data",
            "true",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Config {
                set_output,
                set_sample_data,
                show,
                reset,
                ..
            }) => {
                assert_eq!(set_output, Some(OutputFormat::Table));
                assert_eq!(set_sample_data, Some(true));
                assert!(!show);
                assert!(!reset);
            }
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["dealer", "-f", "xml"]).is_err());
    }
}
