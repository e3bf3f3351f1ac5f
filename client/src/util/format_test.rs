use super::*;

#[test]
fn format_date_renders_short_month() {
    let date = DateTime::parse_from_rfc3339("2024-03-02T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_date(Some(date)), "Mar 2, 2024");
}

#[test]
fn format_date_missing_is_placeholder() {
    assert_eq!(format_date(None), "—");
}

#[test]
fn reading_time_prefers_backend_value() {
    assert_eq!(reading_time_label(Some(6), ""), "6 min read");
}

#[test]
fn reading_time_estimates_from_body_with_one_minute_floor() {
    assert_eq!(reading_time_label(None, ""), "1 min read");
    assert_eq!(reading_time_label(Some(0), "a few words"), "1 min read");
    let body = "word ".repeat(450);
    assert_eq!(reading_time_label(None, &body), "3 min read");
}

#[test]
fn compact_count_scales_large_values() {
    assert_eq!(compact_count(0), "0");
    assert_eq!(compact_count(999), "999");
    assert_eq!(compact_count(1_000), "1k");
    assert_eq!(compact_count(1_240), "1.2k");
    assert_eq!(compact_count(3_400_000), "3.4M");
}
