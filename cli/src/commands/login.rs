//! `abiq login` command — Store API credentials.

use clap::Args;

use abiq_core::{ApiConfig, HttpCatalog, RemoteCatalog};

#[derive(Args)]
pub struct LoginArgs {
    /// API endpoint (e.g. https://cloud.example.com/api)
    pub endpoint: Option<String>,

    /// Username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password
    #[arg(short, long)]
    pub password: Option<String>,

    /// Read password from stdin
    #[arg(long)]
    pub password_stdin: bool,

    /// Skip the verification request against the API
    #[arg(long)]
    pub no_verify: bool,
}

pub async fn execute(args: LoginArgs) -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = match args.endpoint {
        Some(e) => e,
        None => prompt("Endpoint: ")?,
    };

    let username = match args.username {
        Some(u) => u,
        None => prompt("Username: ")?,
    };

    let password = if args.password_stdin {
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        input.trim().to_string()
    } else {
        match args.password {
            Some(p) => p,
            None => prompt("Password: ")?,
        }
    };

    if endpoint.is_empty() || username.is_empty() || password.is_empty() {
        return Err("Endpoint, username and password are required".into());
    }

    let config = ApiConfig {
        endpoint,
        username,
        password,
    };

    if !args.no_verify {
        // One cheap authenticated request proves the credentials work.
        let catalog = HttpCatalog::new(config.clone());
        catalog.list_datacenters().await?;
    }

    let path = ApiConfig::default_path();
    config.save(&path)?;

    println!("Login Succeeded");
    Ok(())
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    eprint!("{label}");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
