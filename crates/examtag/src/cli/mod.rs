//! Command-line interface for examtag.
//!
//! This module provides the CLI structure and argument types for the
//! `examtag` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ClassifyCommand, ConfigCommand, OutputFormat, TagCommand};

/// examtag - Tag exam question files with their session type
///
/// Reads the numbered question JSON files of a question bank, derives each
/// record's Regular/Back session type from its year, and rewrites the
/// files in place.
#[derive(Debug, Parser)]
#[command(name = "examtag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tag the question files in place
    Tag(TagCommand),

    /// Classify a single year string without touching any file
    Classify(ClassifyCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "examtag");
    }

    #[test]
    fn test_verbosity_quiet_beats_verbose() {
        let cli = Cli::try_parse_from(["examtag", "-q", "-v", "tag"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["examtag", "tag"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["examtag", "-v", "tag"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["examtag", "-vv", "tag"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_tag() {
        let cli = Cli::try_parse_from(["examtag", "tag"]).unwrap();
        assert!(matches!(cli.command, Command::Tag(_)));
    }

    #[test]
    fn test_parse_tag_with_options() {
        let cli = Cli::try_parse_from([
            "examtag", "tag", "--dir", "data", "--from", "2", "--to", "5", "--dry-run",
        ])
        .unwrap();
        let Command::Tag(cmd) = cli.command else {
            panic!("expected tag command");
        };
        assert_eq!(cmd.dir, Some(PathBuf::from("data")));
        assert_eq!(cmd.from, Some(2));
        assert_eq!(cmd.to, Some(5));
        assert!(cmd.dry_run);
        assert!(!cmd.fail_fast);
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from(["examtag", "classify", "2079 Chaitra"]).unwrap();
        let Command::Classify(cmd) = cli.command else {
            panic!("expected classify command");
        };
        assert_eq!(cmd.year, "2079 Chaitra");
        assert!(!cmd.json);
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["examtag", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli = Cli::try_parse_from(["examtag", "-c", "/custom/config.toml", "tag"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
