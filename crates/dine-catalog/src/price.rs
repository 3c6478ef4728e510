//! Price display.

/// Listing card price, e.g. `Rs 250.00`.
pub fn format_price(amount: f64) -> String {
    format!("Rs {:.2}", amount)
}

/// Add-on option price, e.g. `Rs. 50.00`.
pub fn format_option_price(amount: f64) -> String {
    format!("Rs. {:.2}", amount)
}
