//! CLI command definitions and dispatch.

mod login;
mod vapp;
mod vdc;
mod version;

use clap::{Parser, Subcommand};

/// Abiq — query virtual appliances in an Abiquo-style cloud.
#[derive(Parser)]
#[command(name = "abiq", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve virtual appliances by id, by name, or list them
    Vapp(vapp::VappArgs),
    /// List virtual datacenters
    Vdc(vdc::VdcArgs),
    /// Store and verify API credentials
    Login(login::LoginArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Vapp(args) => vapp::execute(args).await,
        Command::Vdc(args) => vdc::execute(args).await,
        Command::Login(args) => login::execute(args).await,
        Command::Version(args) => version::execute(args).await,
    }
}

/// Load the API session (environment or ~/.abiq/config.json).
pub(crate) fn load_session() -> Result<abiq_core::ApiConfig, Box<dyn std::error::Error>> {
    let config = abiq_core::ApiConfig::load(None)?;
    Ok(config)
}
