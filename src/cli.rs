use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "t9suggest")]
#[command(about = "t9suggest - Predictive text (T9) suggestions from a text corpus.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order). Defaults to
    /// config.toml if it exists.
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Log at debug level, including every dropped corpus token.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print exact matches and completions for a digit sequence.
    Suggest {
        /// Plain text corpus to build the dictionary from.
        corpus: PathBuf,

        /// Keypad digits 2-9, eg. 2287 for "cats".
        #[arg(default_value = "")]
        digits: String,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the keypad code of one or more words.
    Encode {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Build the dictionary and serve the HTTP API.
    Serve {
        /// Corpus file. Overrides `corpus.path` in the config.
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suggest() {
        let cli = Cli::try_parse_from(["t9suggest", "suggest", "corpus.txt", "2287"]).unwrap();
        match cli.command {
            Commands::Suggest {
                corpus,
                digits,
                json,
            } => {
                assert_eq!(corpus, PathBuf::from("corpus.txt"));
                assert_eq!(digits, "2287");
                assert!(!json);
            }
            _ => panic!("expected suggest"),
        }
        assert!(cli.config.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["t9suggest", "suggest", "c.txt", "22", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn digits_default_to_empty() {
        let cli = Cli::try_parse_from(["t9suggest", "suggest", "corpus.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Suggest { digits, .. } if digits.is_empty()));
    }

    #[test]
    fn config_is_repeatable() {
        let cli = Cli::try_parse_from([
            "t9suggest",
            "--config",
            "a.toml",
            "--config",
            "b.toml",
            "serve",
        ])
        .unwrap();
        assert_eq!(cli.config.len(), 2);
        assert!(matches!(cli.command, Commands::Serve { corpus: None }));
    }

    #[test]
    fn encode_needs_words() {
        assert!(Cli::try_parse_from(["t9suggest", "encode"]).is_err());
    }
}
