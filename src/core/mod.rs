mod account;
mod txn;

pub(crate) use account::{account_records, AccountRecord};
pub(crate) use txn::{transaction_records, TransactionRecord};

use rust_decimal::Decimal;

/// Strips digit-group separators and currency symbols so amounts parse as
/// plain decimals. Values that still fail to parse are passed through with
/// the symbols removed.
pub(crate) fn normalize_amount(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<Decimal>() {
        Ok(amount) => amount.to_string(),
        Err(_) => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_currency_symbols() {
        assert_eq!(normalize_amount("$1,204.54"), "1204.54");
        assert_eq!(normalize_amount("1,204.54"), "1204.54");
        assert_eq!(normalize_amount("USD 450"), "450");
    }

    #[test]
    fn preserves_sign_and_scale() {
        assert_eq!(normalize_amount("-12.50"), "-12.50");
        assert_eq!(normalize_amount("$-12.00"), "-12.00");
        assert_eq!(normalize_amount("0.00"), "0.00");
    }

    #[test]
    fn passes_through_unparseable_input_stripped() {
        assert_eq!(normalize_amount(""), "");
        assert_eq!(normalize_amount("N/A"), "");
        assert_eq!(normalize_amount("1.2.3"), "1.2.3");
    }
}
