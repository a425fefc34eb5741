use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use crate::settings::Settings;

pub(crate) async fn run(matches: &ArgMatches, conf: Settings) -> Result<()> {
    let token = matches
        .value_of("token")
        .map(str::to_string)
        .or_else(|| conf.simplefin.setup_token.clone())
        .context("no setup token configured, pass --token or set simplefin.setup_token")?;

    info!("Claiming access URL from setup token.");
    let access = simplefin::claim(&token).await?;

    println!("Access URL: {}", access.url);
    println!("Username: {}", access.credentials.username);
    println!("Password: {}", access.credentials.password);

    Ok(())
}
