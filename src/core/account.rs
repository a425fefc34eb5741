use serde::{Deserialize, Serialize};
use simplefin::model::AccountSet;

use super::normalize_amount;

/// Account classification expected by the downstream budgeting importer.
const ACCOUNT_TYPE: &str = "Depository";

/// One row of the accounts export. The serde renames are the exact header
/// names the importer matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AccountRecord {
    #[serde(rename = "Account type")]
    pub account_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    pub balance: String,
    #[serde(rename = "Currency")]
    pub currency: String,
}

/// One row per account, preserving the order the server returned them in.
pub(crate) fn account_records(document: &AccountSet) -> Vec<AccountRecord> {
    document
        .accounts
        .iter()
        .map(|account| AccountRecord {
            account_type: ACCOUNT_TYPE.to_string(),
            name: account.name.clone(),
            balance: normalize_amount(&account.balance),
            currency: account.currency.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use simplefin::model::{Account, AccountSet};

    use super::*;

    fn document() -> AccountSet {
        AccountSet {
            accounts: vec![
                Account {
                    id: "chk-1".to_string(),
                    name: "Checking".to_string(),
                    currency: "USD".to_string(),
                    balance: "$1,204.54".to_string(),
                    ..Default::default()
                },
                Account {
                    id: "sav-1".to_string(),
                    name: "Savings".to_string(),
                    currency: "USD".to_string(),
                    balance: "310.00".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_account_in_input_order() {
        let records = account_records(&document());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Checking");
        assert_eq!(records[1].name, "Savings");
    }

    #[test]
    fn rows_carry_fixed_type_and_normalized_balance() {
        let records = account_records(&document());

        assert_eq!(records[0].account_type, "Depository");
        assert_eq!(records[0].balance, "1204.54");
        assert_eq!(records[0].currency, "USD");
        assert_eq!(records[1].balance, "310.00");
    }

    #[test]
    fn empty_document_produces_no_rows() {
        assert!(account_records(&AccountSet::default()).is_empty());
    }
}
