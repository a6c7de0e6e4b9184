//! Profiles command.

use anyhow::Result;
use nbn_urn::NamedConfiguration;
use serde::Serialize;
use tabled::Tabled;

use crate::config::Config;
use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct ProfileRow {
    name: String,
    network_abbreviation: String,
    library_identifier: String,
    sub_namespace_prefix: String,
}

impl ProfileRow {
    fn new(name: &str, config: &NamedConfiguration) -> Self {
        Self {
            name: name.to_string(),
            network_abbreviation: config.network_abbreviation.to_string(),
            library_identifier: config.library_identifier.to_string(),
            sub_namespace_prefix: config.sub_namespace_prefix.to_string(),
        }
    }
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let rows = rows(&ctx.config);
    print_output(&rows, ctx.format);
    Ok(())
}

fn rows(config: &Config) -> Vec<ProfileRow> {
    config
        .profiles
        .iter()
        .map(|(name, config)| ProfileRow::new(name, config))
        .collect()
}
