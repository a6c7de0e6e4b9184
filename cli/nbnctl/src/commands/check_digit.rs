//! Check digit command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Print the check digit for a scheme-specific string such as
/// `swb:14-opus-4711`.
#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// Scheme-specific string without `urn:nbn:de:` and without check digit.
    canonical: String,
}

#[derive(Debug, Serialize)]
struct CheckDigitView<'a> {
    canonical: &'a str,
    check_digit: u8,
}

impl CheckDigitCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let (canonical, check_digit) = self.compute()?;

        match ctx.format {
            OutputFormat::Json => print_single(&CheckDigitView {
                canonical,
                check_digit,
            }),
            OutputFormat::Table => println!("{}", check_digit),
        }

        Ok(())
    }

    /// Returns the scheme-specific string (a leading `urn:nbn:de:` is
    /// dropped) and its check digit.
    fn compute(&self) -> Result<(&str, u8), CliError> {
        let canonical = self
            .canonical
            .strip_prefix(nbn_urn::PREFIX)
            .unwrap_or(&self.canonical);
        let check_digit = nbn_urn::check_digit(canonical)?;
        Ok((canonical, check_digit))
    }
}
