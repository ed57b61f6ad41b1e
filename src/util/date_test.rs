use super::*;

// =============================================================
// parse_iso_date
// =============================================================

#[test]
fn parse_iso_date_accepts_the_feed_format() {
    let date = parse_iso_date("2025-01-19").expect("date should parse");
    assert_eq!(date.to_string(), "2025-01-19");
}

#[test]
fn parse_iso_date_rejects_malformed_input() {
    assert!(parse_iso_date("19/01/2025").is_err());
    assert!(parse_iso_date("not a date").is_err());
    assert!(parse_iso_date("").is_err());
}

#[test]
fn parse_iso_date_rejects_impossible_days() {
    assert!(parse_iso_date("2025-02-30").is_err());
}

// =============================================================
// format_display_date
// =============================================================

#[test]
fn format_display_date_renders_the_short_form() {
    let rendered = format_display_date("2025-01-19").expect("date should format");
    assert_eq!(rendered, "19 Jan 2025");
}

#[test]
fn format_display_date_drops_the_leading_zero_on_the_day() {
    let rendered = format_display_date("2025-01-07").expect("date should format");
    assert_eq!(rendered, "7 Jan 2025");
}

#[test]
fn format_display_date_propagates_parse_errors() {
    let err = format_display_date("2025-13-01").expect_err("month 13 should fail");
    assert!(matches!(err, DateError::Parse(_)));
}

// =============================================================
// today_display
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn today_display_is_none_off_browser() {
    assert!(today_display().is_none());
}
