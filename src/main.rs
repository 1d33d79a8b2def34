//! chatbox - Entry Point

use chatbox::config::{self, REPLY_DELAY_RANGE_MS};
use chatbox::model::AppError;
use chatbox::view::{self, LaunchOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// chatbox - a terminal chat widget with a canned-reply bot
#[derive(Parser, Debug)]
#[command(name = "chatbox")]
#[command(version)]
#[command(about = "Terminal chat widget with feedback, emoji and in-conversation search")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Delay before the bot replies, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(*REPLY_DELAY_RANGE_MS.start()..=*REPLY_DELAY_RANGE_MS.end()))]
    pub reply_delay_ms: Option<u64>,

    /// Seed the reply picker for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve_config(args.config, args.reply_delay_ms, args.seed)?;

    chatbox::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let options = LaunchOptions {
        no_color: args.no_color,
        search: args.search,
    };
    view::run_with_config(&config, &options)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["chatbox", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["chatbox", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["chatbox"]);
        assert_eq!(args.config, None);
        assert_eq!(args.reply_delay_ms, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.search, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_reply_delay_flag() {
        let args = Args::parse_from(["chatbox", "--reply-delay-ms", "1500"]);
        assert_eq!(args.reply_delay_ms, Some(1500));
    }

    #[test]
    fn test_reply_delay_rejects_zero() {
        let err = Args::try_parse_from(["chatbox", "--reply-delay-ms", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_reply_delay_rejects_above_limit() {
        let result = Args::try_parse_from(["chatbox", "--reply-delay-ms", "10001"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_flag() {
        let args = Args::parse_from(["chatbox", "--seed", "42"]);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_search_short_and_long() {
        let short = Args::parse_from(["chatbox", "-s", "hello"]);
        let long = Args::parse_from(["chatbox", "--search", "hello"]);
        assert_eq!(short.search.as_deref(), Some("hello"));
        assert_eq!(long.search, short.search);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["chatbox", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "chatbox",
            "--config",
            "/custom/config.toml",
            "--reply-delay-ms",
            "20",
            "--seed",
            "7",
            "-s",
            "clarify",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.reply_delay_ms, Some(20));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.search.as_deref(), Some("clarify"));
    }

    #[test]
    fn test_cli_delay_flows_through_precedence_chain() {
        use chatbox::config::{apply_cli_overrides, merge_config, validate, ConfigFile};

        let config_file = ConfigFile {
            reply_delay_ms: Some(900),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.reply_delay_ms, 900, "Config file overrides default");

        let with_cli = apply_cli_overrides(merged, Some(30), Some(1));
        let resolved = validate(with_cli).expect("valid");
        assert_eq!(resolved.reply_delay_ms, 30, "CLI overrides all other sources");
        assert_eq!(resolved.seed, Some(1));
    }
}
