use serde::{Deserialize, Serialize};

/// Top-level document returned by the accounts endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSet {
    /// Human-readable error strings reported by the server alongside data.
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub currency: String,
    /// Decimal rendered as a string, exactly as the server sends it.
    pub balance: String,
    #[serde(
        rename = "available-balance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub available_balance: Option<String>,
    /// Epoch seconds of the instant the balance was computed.
    #[serde(rename = "balance-date", default, skip_serializing_if = "Option::is_none")]
    pub balance_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<Organization>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// The institution an account belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "sfin-url", default)]
    pub sfin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    /// Epoch seconds of the instant the transaction posted to the account.
    #[serde(default)]
    pub posted: i64,
    pub amount: String,
    pub description: String,
    /// Epoch seconds of the instant the transaction occurred, when the
    /// institution reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transacted_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
}

/// Query parameters for [`crate::Client::accounts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountsRequest {
    /// Include transactions on or after this epoch timestamp.
    pub start_date: Option<i64>,
    /// Request balances without transaction history.
    pub balances_only: Option<bool>,
}
