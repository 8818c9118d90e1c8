//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a `key=value` form field argument.
fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("'{}' is not in key=value form", s)),
    }
}

/// Marketing-site behavior layer: hero rotator, menu, and form relay
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about = "Hero rotator, accessible menu, and contact form relay", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive demo loop
    Run {
        /// Skip image preloading on startup
        #[arg(long)]
        no_preload: bool,
    },
    /// Submit a contact form through the relay endpoint
    Submit {
        /// Relay endpoint override
        #[arg(long)]
        endpoint: Option<String>,
        /// Form field as key=value (repeatable)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["vitrine"]);
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["vitrine", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["vitrine", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_run_subcommand() {
        let args = Args::parse_from(["vitrine", "run"]);
        match args.command {
            Some(Command::Run { no_preload }) => assert!(!no_preload),
            _ => panic!("Expected Run subcommand"),
        }

        let args = Args::parse_from(["vitrine", "run", "--no-preload"]);
        match args.command {
            Some(Command::Run { no_preload }) => assert!(no_preload),
            _ => panic!("Expected Run subcommand"),
        }
    }

    #[test]
    fn test_args_submit_subcommand_fields() {
        let args = Args::parse_from([
            "vitrine",
            "submit",
            "--field",
            "name=Ada",
            "--field",
            "message=hello there",
        ]);
        match args.command {
            Some(Command::Submit { endpoint, fields }) => {
                assert!(endpoint.is_none());
                assert_eq!(
                    fields,
                    vec![
                        ("name".to_string(), "Ada".to_string()),
                        ("message".to_string(), "hello there".to_string()),
                    ]
                );
            }
            _ => panic!("Expected Submit subcommand"),
        }
    }

    #[test]
    fn test_args_submit_endpoint_override() {
        let args = Args::parse_from([
            "vitrine",
            "submit",
            "--endpoint",
            "https://formspree.io/f/abc123",
            "--field",
            "email=ada@example.com",
        ]);
        match args.command {
            Some(Command::Submit { endpoint, .. }) => {
                assert_eq!(endpoint.as_deref(), Some("https://formspree.io/f/abc123"));
            }
            _ => panic!("Expected Submit subcommand"),
        }
    }

    #[test]
    fn test_args_submit_rejects_malformed_field() {
        let result = Args::try_parse_from(["vitrine", "submit", "--field", "no-separator"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["vitrine", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["vitrine", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }

    #[test]
    fn test_parse_field_accepts_value_with_equals() {
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn test_parse_field_rejects_empty_key() {
        assert!(parse_field("=value").is_err());
    }
}
