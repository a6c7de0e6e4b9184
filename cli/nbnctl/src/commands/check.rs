//! Check command.

use anyhow::Result;
use clap::Args;
use nbn_urn::{Urn, UrnError};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_failure, print_output, print_success, OutputFormat};

use super::CommandContext;

/// Verify identifiers. Fails if any of them is invalid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identifiers to verify (e.g. urn:nbn:de:swb:14-opus-47118).
    #[arg(required = true)]
    urns: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    urn: String,
    valid: bool,
    #[tabled(display = "display_option")]
    reason: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

impl CheckRow {
    fn new(input: &str, result: Result<Urn, UrnError>) -> Self {
        match result {
            Ok(urn) => Self {
                urn: urn.to_string(),
                valid: true,
                reason: None,
            },
            Err(e) => Self {
                urn: input.to_string(),
                valid: false,
                reason: Some(e.to_string()),
            },
        }
    }
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<CheckRow> = self
            .urns
            .iter()
            .map(|input| {
                let result = Urn::parse(input);
                debug!(urn = %input, valid = result.is_ok(), "Checked identifier");
                CheckRow::new(input, result)
            })
            .collect();

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            OutputFormat::Table => {
                for row in &rows {
                    match &row.reason {
                        None => print_success(&row.urn),
                        Some(reason) => print_failure(&format!("{} ({})", row.urn, reason)),
                    }
                }
            }
        }

        let invalid = rows.iter().filter(|row| !row.valid).count();
        if invalid > 0 {
            return Err(CliError::CheckFailed {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}
