//! `examtag` - CLI for tagging exam question files.
//!
//! This binary reads the numbered question JSON files of a question bank,
//! derives each record's Regular/Back session type, and rewrites the
//! files in place.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::bail;
use clap::Parser;

use examtag::cli::{ClassifyCommand, Cli, Command, ConfigCommand, OutputFormat, TagCommand};
use examtag::tagger::FileStatus;
use examtag::{init_logging, Config, ExamType, Tagger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Tag(cmd) => handle_tag(&config, &cmd),
        Command::Classify(cmd) => handle_classify(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_tag(config: &Config, cmd: &TagCommand) -> anyhow::Result<()> {
    let base_dir = cmd.dir.clone().unwrap_or_else(|| config.base_dir());
    let first = cmd.from.unwrap_or(config.tagger.first_index);
    let last = cmd.to.unwrap_or(config.tagger.last_index);
    if first == 0 || first > last {
        bail!("invalid index range: {first}..={last}");
    }

    let tagger = Tagger::new(base_dir)
        .with_indices(first..=last)
        .with_fail_fast(cmd.fail_fast || config.tagger.fail_fast)
        .with_dry_run(cmd.dry_run);

    let summary = tagger.run()?;

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            for outcome in &summary.files {
                match &outcome.status {
                    FileStatus::Updated { stats } => {
                        let verb = if cmd.dry_run { "Would update" } else { "Updated" };
                        println!("{verb}: {} ({} questions)", outcome.file, stats.total());
                    }
                    FileStatus::NotFound => {
                        println!("Not found: {}", outcome.file);
                    }
                    FileStatus::Failed { message } => {
                        println!("Failed: {} ({message})", outcome.file);
                    }
                }
            }
        }
    }

    if summary.has_failures() {
        bail!("{} file(s) failed to process", summary.failed_count());
    }
    Ok(())
}

fn handle_classify(cmd: &ClassifyCommand) -> anyhow::Result<()> {
    let exam_type = ExamType::from_year(&cmd.year);
    if cmd.json {
        let result = serde_json::json!({
            "year": cmd.year,
            "type": exam_type,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{exam_type}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Tagger]");
                println!("  Base directory:  {}", config.base_dir().display());
                println!("  First index:     {}", config.tagger.first_index);
                println!("  Last index:      {}", config.tagger.last_index);
                println!("  Fail fast:       {}", config.tagger.fail_fast);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
