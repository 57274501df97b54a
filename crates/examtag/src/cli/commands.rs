//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Tag command arguments.
#[derive(Debug, Args)]
pub struct TagCommand {
    /// Directory containing the question files (overrides config)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// First file index to process (overrides config)
    #[arg(long, value_name = "N")]
    pub from: Option<u32>,

    /// Last file index to process (overrides config)
    #[arg(long, value_name = "N")]
    pub to: Option<u32>,

    /// Stop at the first file that fails instead of continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Classify and report without writing anything back
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Classify command arguments.
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// The year string to classify (e.g. "2079 Chaitra")
    pub year: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_tag_command_debug() {
        let cmd = TagCommand {
            dir: None,
            from: Some(1),
            to: Some(10),
            fail_fast: false,
            dry_run: true,
            format: OutputFormat::Plain,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("dry_run"));
    }

    #[test]
    fn test_classify_command_debug() {
        let cmd = ClassifyCommand {
            year: "2079 Chaitra".to_string(),
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("2079 Chaitra"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
