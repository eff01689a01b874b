//! Derived display fields shared by record types.

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Completed or healthy.
    Success,
    /// Waiting on something.
    Warning,
    /// Failed or blocked.
    Error,
    /// Informational.
    Info,
    /// Unknown status.
    Neutral,
}

impl StatusTone {
    /// Tone for a raw status value as served by the API.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "paid" | "completed" | "approved" | "in_stock" => Self::Success,
            "pending" | "processing" | "low_stock" => Self::Warning,
            "failed" | "rejected" | "cancelled" | "out_of_stock" => Self::Error,
            "refunded" | "draft" => Self::Info,
            _ => Self::Neutral,
        }
    }
}

/// Human label for a raw status value (`low_stock` -> `Low stock`).
pub fn status_label(status: &str) -> String {
    let spaced = status.trim().replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

/// Format a monetary amount with two decimals and thousands separators.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}
