mod claim;
mod core;
mod display;
mod export;
mod settings;
mod window;

use anyhow::Result;
use clap::{arg, Command};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::settings::Settings;

static CLIENT_NAME: &str = "bursar";

async fn run() -> Result<()> {
    let app = Command::new(CLIENT_NAME)
        .about("The bursar utility pulls account and transaction data from a \
         SimpleFIN server and exports dated CSV files for budgeting tools.")
        .version("0.1.0")
        .subcommand_required(true)
        .allow_external_subcommands(false)
        .arg(arg!(CONFIG: -c --config [FILE] "Sets a custom config file"))
        .arg(arg!(verbose: -v --verbose "Enables debug logging"))
        .subcommand(Command::new("claim")
            .about("Exchanges a one-time setup token for an access URL and prints the credentials.")
            .arg(arg!(token: -t --token [TOKEN] "Base64 setup token, overrides any configured token.")))
        .subcommand(Command::new("export")
            .about("Fetches accounts with transactions and writes them to dated CSV files.")
            .arg(arg!(mode: <MODE> "Time window to fetch, one of Daily, Monthly, or All.")));

    let matches = app.get_matches();

    let default_level = if matches.is_present("verbose") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = Settings::new(matches.value_of("CONFIG"))?;

    match matches.subcommand() {
        Some(("claim", claim_matches)) => {
            claim::run(claim_matches, conf).await?;
        }
        Some(("export", export_matches)) => {
            export::run(export_matches, conf).await?;
        }
        None => unreachable!("subcommand is required"),
        _ => unreachable!(),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        println!("{}", err);
        std::process::exit(1);
    }
}
