use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use simplefin::model::AccountSet;

use super::normalize_amount;

/// One row of the transactions export. `category`, `tags`, and `notes` are
/// emitted empty for manual enrichment downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TransactionRecord {
    pub date: String,
    pub amount: String,
    pub name: String,
    pub currency: String,
    pub category: String,
    pub tags: String,
    pub account: String,
    pub notes: String,
}

/// One row per transaction: accounts in API order, transactions within an
/// account in API order. Every row carries the name and currency of its
/// enclosing account so it is self-contained.
pub(crate) fn transaction_records(document: &AccountSet) -> Vec<TransactionRecord> {
    let mut records = vec![];

    for account in &document.accounts {
        for txn in &account.transactions {
            records.push(TransactionRecord {
                date: format_date(txn.transacted_at),
                amount: normalize_amount(&txn.amount),
                name: txn.description.clone(),
                currency: account.currency.clone(),
                category: String::new(),
                tags: String::new(),
                account: account.name.clone(),
                notes: String::new(),
            });
        }
    }

    records
}

/// Local-time MM/DD/YYYY, or empty when the server reported no timestamp.
/// A timestamp landing in an ambiguous local hour renders as the earlier
/// reading; only a missing or zero timestamp maps to the empty date.
fn format_date(transacted_at: Option<i64>) -> String {
    match transacted_at {
        None | Some(0) => String::new(),
        Some(ts) => Local
            .timestamp_opt(ts, 0)
            .earliest()
            .map(|date| date.format("%m/%d/%Y").to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use simplefin::model::{Account, AccountSet, Transaction};

    use super::*;

    fn document() -> AccountSet {
        AccountSet {
            accounts: vec![
                Account {
                    name: "Checking".to_string(),
                    currency: "USD".to_string(),
                    balance: "1204.54".to_string(),
                    ..Default::default()
                },
                Account {
                    name: "Savings".to_string(),
                    currency: "CAD".to_string(),
                    balance: "310.00".to_string(),
                    transactions: vec![
                        Transaction {
                            id: "txn-1".to_string(),
                            amount: "$-12.50".to_string(),
                            description: "Coffee".to_string(),
                            transacted_at: Some(1_700_000_000),
                            ..Default::default()
                        },
                        Transaction {
                            id: "txn-2".to_string(),
                            amount: "1,500.00".to_string(),
                            description: "Paycheck".to_string(),
                            transacted_at: None,
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_nested_transaction() {
        let records = transaction_records(&document());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Coffee");
        assert_eq!(records[1].name, "Paycheck");
    }

    #[test]
    fn rows_inherit_enclosing_account_name_and_currency() {
        let records = transaction_records(&document());

        for record in &records {
            assert_eq!(record.account, "Savings");
            assert_eq!(record.currency, "CAD");
        }
    }

    #[test]
    fn placeholder_columns_are_empty() {
        let records = transaction_records(&document());

        assert_eq!(records[0].category, "");
        assert_eq!(records[0].tags, "");
        assert_eq!(records[0].notes, "");
    }

    #[test]
    fn amounts_are_normalized() {
        let records = transaction_records(&document());

        assert_eq!(records[0].amount, "-12.50");
        assert_eq!(records[1].amount, "1500.00");
    }

    #[test]
    fn timestamp_renders_as_local_calendar_date() {
        let records = transaction_records(&document());
        let expected = Local
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
            .format("%m/%d/%Y")
            .to_string();

        assert_eq!(records[0].date, expected);
    }

    #[test]
    fn missing_or_zero_timestamp_renders_empty_date() {
        let records = transaction_records(&document());
        assert_eq!(records[1].date, "");

        assert_eq!(format_date(Some(0)), "");
        assert_eq!(format_date(None), "");
    }
}
