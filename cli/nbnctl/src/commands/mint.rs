//! Mint command.

use anyhow::Result;
use clap::Args;
use nbn_urn::{Urn, UrnBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Build an identifier. Explicit part flags override profile values.
#[derive(Debug, Args)]
pub struct MintCommand {
    /// Profile supplying network, library and prefix.
    #[arg(long, short = 'p')]
    profile: Option<String>,

    /// Network abbreviation (e.g. bsz).
    #[arg(long)]
    network: Option<String>,

    /// Library identifier (e.g. 14).
    #[arg(long)]
    library: Option<String>,

    /// Sub-namespace prefix (e.g. qucosa).
    #[arg(long)]
    prefix: Option<String>,

    /// Unique number from the minting sequence.
    #[arg(long, short = 'n')]
    number: Option<String>,
}

#[derive(Debug, Serialize)]
struct MintView {
    urn: String,
    scheme: &'static str,
    nss: String,
    check_digit: u8,
}

impl From<&Urn> for MintView {
    fn from(urn: &Urn) -> Self {
        Self {
            urn: urn.to_string(),
            scheme: urn.scheme(),
            nss: urn.nss().to_string(),
            check_digit: urn.check_digit(),
        }
    }
}

impl MintCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let urn = self.build(&ctx)?;
        info!(urn = %urn, "Minted identifier");

        match ctx.format {
            OutputFormat::Json => print_single(&MintView::from(&urn)),
            OutputFormat::Table => println!("{}", urn),
        }

        Ok(())
    }

    fn build(&self, ctx: &CommandContext) -> Result<Urn, CliError> {
        let mut builder = UrnBuilder::new();

        if let Some(name) = &self.profile {
            let config = ctx.config.profiles.get(name)?;
            debug!(profile = %name, "Applying profile");
            builder.apply_named_configuration(config);
        }
        if let Some(network) = &self.network {
            builder.set_network_abbreviation(network)?;
        }
        if let Some(library) = &self.library {
            builder.set_library_identifier(library)?;
        }
        if let Some(prefix) = &self.prefix {
            builder.set_sub_namespace_prefix(prefix)?;
        }
        if let Some(number) = &self.number {
            builder.set_unique_number(number)?;
        }

        Ok(builder.build()?)
    }
}
