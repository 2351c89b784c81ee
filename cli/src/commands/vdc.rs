//! `abiq vdc` command — List virtual datacenters.

use clap::Args;

use abiq_core::{HttpCatalog, RemoteCatalog};

use crate::output;

#[derive(Args)]
pub struct VdcArgs {
    /// Only print datacenter ids
    #[arg(short, long)]
    pub quiet: bool,

    /// Print raw JSON records instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: VdcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_session()?;
    let catalog = HttpCatalog::new(config);
    let datacenters = catalog.list_datacenters().await?;

    if args.quiet {
        for datacenter in &datacenters {
            println!("{}", datacenter.id);
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&datacenters)?);
        return Ok(());
    }

    let mut table = output::new_table(&["ID", "NAME"]);
    for datacenter in &datacenters {
        table.add_row([datacenter.id.to_string(), datacenter.name.clone()]);
    }
    println!("{table}");

    Ok(())
}
