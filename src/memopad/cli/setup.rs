use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "memopad", bin_name = "memopad", version = get_version())]
#[command(about = "A keyboard-driven memo pad for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pad file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the memo pad (the default)
    #[command(alias = "o")]
    Open,

    /// Print all notes, pinned first
    #[command(alias = "ls")]
    List,

    /// Print the path of the pad file
    Path,

    /// Check the pad file; back it up and start fresh if it is unreadable
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, autosave, log-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Cli {
    /// Whether this invocation takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Open))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_opens_the_pad() {
        let cli = Cli::try_parse_from(["memopad"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.is_interactive());
        assert!(cli.file.is_none());
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["memopad", "ls", "--file", "notes.json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.file, Some(PathBuf::from("notes.json")));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn config_takes_optional_key_and_value() {
        let cli = Cli::try_parse_from(["memopad", "config", "autosave", "true"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("autosave".into()),
                value: Some("true".into()),
            })
        );

        let cli = Cli::try_parse_from(["memopad", "config"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: None,
                value: None
            })
        );
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["memopad", "sync"]).is_err());
    }
}
