//! `abiq vapp` command — Resolve virtual appliances.

use clap::Args;

use abiq_core::{ApplianceResolver, HttpCatalog, Resolution, Selection, VirtualAppliance};

use crate::output;

#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("selector").args(["id", "name"])))]
pub struct VappArgs {
    /// Appliance id (requires --vdc)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), requires = "vdc")]
    pub id: Option<u32>,

    /// Appliance name, matched case-insensitively (requires --vdc)
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new(), requires = "vdc")]
    pub name: Option<String>,

    /// Virtual datacenter id; optional when listing
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub vdc: Option<u32>,

    /// Describe the query without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Only print appliance ids
    #[arg(short, long)]
    pub quiet: bool,

    /// Print raw JSON records instead of a table
    #[arg(long)]
    pub json: bool,
}

impl VappArgs {
    /// Convert the mutually exclusive selection flags into a [`Selection`].
    fn selection(&self) -> Selection {
        match (self.id, self.name.as_deref(), self.vdc) {
            (Some(id), None, Some(vdc_id)) => Selection::ById { vdc_id, id },
            (None, Some(name), Some(vdc_id)) => Selection::ByName {
                vdc_id,
                name: name.to_string(),
            },
            (None, None, vdc_id) => Selection::List { vdc_id },
            // The argument group and `requires` rules leave no other
            // combination parseable.
            _ => unreachable!("selection flags violate the argument group"),
        }
    }
}

pub async fn execute(args: VappArgs) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.selection();

    if args.dry_run {
        describe(&selection);
        // Declined before any remote call: empty result, no diagnostics.
        return render(&args, &Resolution::empty());
    }

    let config = super::load_session()?;
    let resolver = ApplianceResolver::new(HttpCatalog::new(config));

    tracing::debug!("resolving {:?}", selection);
    let resolution = resolver.resolve(&selection).await;

    render(&args, &resolution)
}

fn describe(selection: &Selection) {
    match selection {
        Selection::ById { vdc_id, id } => {
            println!("Would fetch virtual appliance {id} from datacenter {vdc_id}");
        }
        Selection::ByName { vdc_id, name } => {
            println!("Would search datacenter {vdc_id} for appliances named \"{name}\"");
        }
        Selection::List { vdc_id: Some(id) } => {
            println!("Would list virtual appliances in datacenter {id}");
        }
        Selection::List { vdc_id: None } => {
            println!("Would list virtual appliances across all datacenters");
        }
    }
}

fn render(args: &VappArgs, resolution: &Resolution) -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics are non-fatal and go to stderr; resolved appliances are
    // still printed below them.
    for diagnostic in &resolution.diagnostics {
        eprintln!("{}: {}", diagnostic.event_id, diagnostic.message);
    }

    if args.quiet {
        for appliance in &resolution.appliances {
            println!("{}", appliance.id);
        }
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution.appliances)?);
    } else if !args.dry_run {
        let mut table = output::new_table(&["ID", "NAME", "STATE"]);
        for appliance in &resolution.appliances {
            table.add_row([
                appliance.id.to_string(),
                appliance.name.clone(),
                state_of(appliance),
            ]);
        }
        println!("{table}");
    }

    if resolution.appliances.is_empty() && !resolution.diagnostics.is_empty() {
        return Err("no virtual appliances resolved".into());
    }

    Ok(())
}

/// Deployment state if the payload carries one, "-" otherwise.
fn state_of(appliance: &VirtualAppliance) -> String {
    appliance
        .extra
        .get("state")
        .and_then(|v| v.as_str())
        .unwrap_or("-")
        .to_string()
}
