//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::api::SERVER_BASE;

/// Format a price in Argentine pesos with thousands separators.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn price(value: f64) -> String {
    let cents = (value * 100.0).round();
    let negative = cents < 0.0;
    let cents = cents.abs() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}$ {grouped},{frac:02}")
}

/// Resolve a product image reference to a displayable URL. Uploaded images
/// are served by the API host under `/uploads/`.
#[must_use]
pub fn image_url(image: &str) -> String {
    if image.starts_with("/uploads/") {
        format!("{SERVER_BASE}{image}")
    } else {
        image.to_owned()
    }
}
