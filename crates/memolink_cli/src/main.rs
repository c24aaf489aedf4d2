//! Command-line front end for `memolink_core`.
//!
//! # Responsibility
//! - Read memo/profile JSON files and print core annotations as JSON.
//! - Keep output deterministic so it can be diffed in local checks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memolink_core::{
    extract_keywords_with_limit, extract_memo_metadata, init_logging, FollowUpDetector,
    FollowUpQuery, LoggingSettings, MemoRecord, MiningConfig, PersonDetector,
    RegexPersonDetector, RelationshipProfile, SuggestionReconciler, SuggestionState,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "memolink", version, about = "Mine memo text for tags, people and follow-ups")]
struct Cli {
    /// JSON file overriding built-in keyword tables and labels.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Absolute directory for rolling log files (stderr when omitted).
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract inline tags and clean text.
    Metadata { text: String },
    /// Extract relevance keywords.
    Keywords { text: String },
    /// Detect mentioned people.
    People { text: String },
    /// Detect follow-ups across a memo collection.
    FollowUps {
        /// JSON array of memo records.
        #[arg(long)]
        memos: PathBuf,
        /// JSON array of relationship profiles.
        #[arg(long)]
        profiles: Option<PathBuf>,
        /// Only keep follow-ups created at or after this epoch millisecond.
        #[arg(long)]
        since_ms: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
        /// Print only the newest follow-up (or `null`).
        #[arg(long)]
        most_recent: bool,
    },
    /// Build a suggestion list from several texts in order.
    Suggest {
        #[arg(long = "text", required = true)]
        texts: Vec<String>,
        #[arg(long)]
        profiles: Option<PathBuf>,
        /// Names to dismiss before analysis.
        #[arg(long = "dismiss")]
        dismissed: Vec<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Metadata { .. } => "metadata",
            Self::Keywords { .. } => "keywords",
            Self::People { .. } => "people",
            Self::FollowUps { .. } => "follow-ups",
            Self::Suggest { .. } => "suggest",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingSettings {
        level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
    })
    .map_err(anyhow::Error::msg)
    .context("failed to initialize logging")?;

    let config = match cli.config.as_deref() {
        Some(path) => MiningConfig::load(path)?,
        None => MiningConfig::default(),
    };

    let command_name = cli.command.name();
    let output = run(cli.command, &config)?;
    log::info!("event=cli_command module=cli status=ok command={command_name}");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command, config: &MiningConfig) -> Result<serde_json::Value> {
    let value = match command {
        Command::Metadata { text } => serde_json::to_value(extract_memo_metadata(&text))?,
        Command::Keywords { text } => serde_json::to_value(extract_keywords_with_limit(
            &text,
            config.keywords.max_keywords,
        ))?,
        Command::People { text } => {
            let detector = RegexPersonDetector::with_keywords(config.category_keywords.clone());
            serde_json::to_value(detector.detect(&text))?
        }
        Command::FollowUps {
            memos,
            profiles,
            since_ms,
            limit,
            most_recent,
        } => {
            let memos: Vec<MemoRecord> = read_json(&memos)?;
            let roster = read_roster(profiles.as_deref())?;
            let detector = FollowUpDetector::with_settings(&config.follow_up);
            if most_recent {
                serde_json::to_value(detector.most_recent(&memos, roster.as_slice()))?
            } else {
                let query = FollowUpQuery { since_ms, limit };
                serde_json::to_value(detector.list(&memos, roster.as_slice(), &query))?
            }
        }
        Command::Suggest {
            texts,
            profiles,
            dismissed,
        } => {
            let roster = read_roster(profiles.as_deref())?;
            let mut state = SuggestionState::new();
            let detector = RegexPersonDetector::with_keywords(config.category_keywords.clone());
            let mut reconciler = SuggestionReconciler::with_detector(detector, &mut state);
            for name in &dismissed {
                reconciler.dismiss_suggestion(name);
            }
            for text in &texts {
                reconciler.analyze_text_for_people(text, &roster);
            }
            serde_json::to_value(reconciler.suggestions())?
        }
    };
    Ok(value)
}

fn read_roster(path: Option<&Path>) -> Result<Vec<RelationshipProfile>> {
    match path {
        Some(path) => read_json(path),
        None => Ok(Vec::new()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid json in `{}`", path.display()))
}
