use std::fs::File;

use anyhow::{Context, Result};
use chrono::prelude::*;
use clap::ArgMatches;
use serde::Serialize;
use simplefin::model::{AccountSet, AccountsRequest};
use simplefin::{Builder, Credentials};
use tracing::{info, warn};

use crate::settings::Settings;
use crate::window::Mode;
use crate::{core, display};

pub(crate) async fn run(matches: &ArgMatches, conf: Settings) -> Result<()> {
    let mode: Mode = matches
        .value_of("mode")
        .expect("MODE is required")
        .parse()?;

    let url = conf
        .simplefin
        .url
        .clone()
        .context("no access url configured, set simplefin.url")?;
    let username = conf
        .simplefin
        .username
        .clone()
        .context("no username configured, set simplefin.username")?;
    let password = conf
        .simplefin
        .password
        .clone()
        .context("no password configured, set simplefin.password")?;

    let client = Builder::new()
        .with_url(&url)
        .with_credentials(Credentials { username, password })
        .build()?;

    let request = AccountsRequest {
        start_date: Some(mode.window_start(Local::now())),
        balances_only: Some(false),
    };

    info!("Fetching accounts from {}.", url);
    let document = fetch_or_empty(&client, &request).await?;

    for error in &document.errors {
        warn!("Server reported: {}", error);
    }

    let today = Local::now().date_naive();

    if conf.debug {
        let path = dated_filename(&conf.output.json_file, today, "json");
        std::fs::write(&path, serde_json::to_string_pretty(&document)?)
            .with_context(|| format!("unable to write {}", path))?;
        info!("Wrote raw document to {}.", path);
    }

    export_document(&document, &conf, today)
}

/// Transforms the fetched document and writes the dated CSV files. An empty
/// dataset skips its write entirely, so a run without data leaves no file
/// behind.
fn export_document(document: &AccountSet, conf: &Settings, today: NaiveDate) -> Result<()> {
    let accounts = core::account_records(document);
    if accounts.is_empty() {
        info!("No accounts found.");
        return Ok(());
    }

    display::print_accounts(std::io::stdout(), &document.accounts)?;

    let path = dated_filename(&conf.output.accounts_file, today, "csv");
    write_csv(
        File::create(&path).with_context(|| format!("unable to create {}", path))?,
        &accounts,
    )?;
    info!("Wrote {} accounts to {}.", accounts.len(), path);

    let transactions = core::transaction_records(document);
    if transactions.is_empty() {
        info!("No transactions found.");
        return Ok(());
    }

    let path = dated_filename(&conf.output.transactions_file, today, "csv");
    write_csv(
        File::create(&path).with_context(|| format!("unable to create {}", path))?,
        &transactions,
    )?;
    info!("Wrote {} transactions to {}.", transactions.len(), path);

    Ok(())
}

/// Transport faults and non-200 responses degrade to an empty document so a
/// run without data exits as a no-op. Anything else, a 200 body that does
/// not parse included, propagates.
async fn fetch_or_empty(
    client: &simplefin::Client,
    request: &AccountsRequest,
) -> Result<AccountSet> {
    match client.accounts(request).await {
        Ok(document) => Ok(document),
        Err(err @ (simplefin::Error::Transport(_) | simplefin::Error::FetchRejected { .. })) => {
            warn!("Fetch failed, continuing with no data: {}", err);
            Ok(AccountSet::default())
        }
        Err(err) => Err(err.into()),
    }
}

fn dated_filename(base: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", base, date.format("%Y%m%d"), extension)
}

fn write_csv<W: std::io::Write, S: Serialize>(writer: W, records: &[S]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}
