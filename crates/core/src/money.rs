use rust_decimal::Decimal;

/// Format an amount for display: rupee prefix, two decimal places.
pub fn format_currency(amount: Decimal) -> String {
    format!("₹{:.2}", amount.round_dp(2))
}
