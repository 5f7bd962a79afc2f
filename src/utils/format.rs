//! Formatting utilities for prices and pricing options.

use catalog_core::PricingOption;

use crate::config::CURRENCY_SYMBOL;

/// Format an amount as US dollars (e.g., "$1,234.50").
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(whole), cents)
}

/// Insert `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display label for a pricing option.
pub fn pricing_label(option: PricingOption) -> &'static str {
    match option {
        PricingOption::BuyNow => "Buy Now",
        PricingOption::Free => "FREE",
        PricingOption::ViewOnly => "View Only",
    }
}

/// "1 item found" / "N items found".
pub fn results_count(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} item{} found", count, suffix)
}
