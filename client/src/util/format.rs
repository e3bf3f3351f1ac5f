//! Display formatting for article metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Words per minute used when the backend omits `readingTime`.
const WORDS_PER_MINUTE: usize = 200;

/// `Mar 2, 2024`, or an em dash placeholder when the date is missing.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| "—".to_owned(), |d| d.format("%b %-d, %Y").to_string())
}

/// `N min read`, never less than one minute.
pub fn reading_time_label(minutes: Option<u64>, body: &str) -> String {
    let minutes = minutes
        .filter(|m| *m > 0)
        .unwrap_or_else(|| estimate_minutes(body));
    format!("{minutes} min read")
}

fn estimate_minutes(body: &str) -> u64 {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u64
}

/// Short counter label: `950`, `1.2k`, `3.4M`.
pub fn compact_count(value: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let scaled = |divisor: f64, suffix: &str| {
        let v = value as f64 / divisor;
        let text = format!("{v:.1}");
        format!("{}{suffix}", text.trim_end_matches(".0"))
    };
    match value {
        0..1_000 => value.to_string(),
        1_000..1_000_000 => scaled(1_000.0, "k"),
        _ => scaled(1_000_000.0, "M"),
    }
}
