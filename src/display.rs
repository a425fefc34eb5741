use std::io::Write;

use anyhow::Result;
use tabwriter::TabWriter;

use simplefin::model::Account;

pub fn print_accounts<T: std::io::Write>(wr: T, accounts: &[Account]) -> Result<()> {
    let mut tw = TabWriter::new(wr);
    writeln!(tw, "Account\tBalance\tCurrency\tTransactions")?;

    for account in accounts.iter() {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}",
            account.name,
            account.balance,
            account.currency,
            account.transactions.len(),
        )?;
    }

    tw.flush()?;

    Ok(())
}
