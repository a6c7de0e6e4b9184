//! CLI commands.

mod check;
mod check_digit;
mod mint;
mod profiles;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// nbn - Mint and check URN:NBN persistent identifiers.
#[derive(Debug, Parser)]
#[command(name = "nbn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Profiles file (TOML).
    #[arg(long, global = true, env = "NBN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build an identifier from a profile and/or explicit parts.
    Mint(mint::MintCommand),

    /// Verify one or more identifiers.
    Check(check::CheckCommand),

    /// Compute the check digit for a scheme-specific string.
    CheckDigit(check_digit::CheckDigitCommand),

    /// List configured profiles.
    Profiles,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = self.format;

        // check and check-digit never need profiles
        let ctx = match self.command {
            Commands::Mint(_) | Commands::Profiles => CommandContext {
                config: Config::load(self.config.as_deref())?,
                format,
            },
            _ => CommandContext {
                config: Config::default(),
                format,
            },
        };

        match self.command {
            Commands::Mint(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::CheckDigit(cmd) => cmd.run(ctx),
            Commands::Profiles => profiles::run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
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
    fn parses_mint_flags() {
        let cli = Cli::try_parse_from([
            "nbn", "--format", "json", "mint", "--profile", "qucosa", "--number", "4711",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Mint(_)));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["nbn", "--format", "yaml", "profiles"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["nbn", "profiles"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn parses_check_digit() {
        let cli = Cli::try_parse_from(["nbn", "check-digit", "swb:14-opus-4711"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckDigit(_)));
    }
}
