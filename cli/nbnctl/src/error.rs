//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use nbn_urn::UrnError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Urn(#[from] UrnError),

    #[error("Profiles file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("{invalid} of {total} identifiers failed verification")]
    CheckFailed { invalid: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };

    let hint = match cli_err {
        CliError::Urn(UrnError::InvalidCharacter { .. }) => {
            Some("Hint: parts may only contain a-z, 0-9, '.', '_' and '-'.")
        }
        CliError::Urn(UrnError::MissingPart(_)) => {
            Some("Hint: pass the part as a flag or choose a profile with --profile.")
        }
        CliError::Urn(UrnError::UnknownConfiguration { .. }) => {
            Some("Hint: run `nbn profiles` to list configured profiles.")
        }
        CliError::ConfigNotFound(_) => {
            Some("Hint: check --config or NBN_CONFIG.")
        }
        _ => None,
    };

    if let Some(hint) = hint {
        eprintln!("\n{}", hint.yellow());
    }
}
