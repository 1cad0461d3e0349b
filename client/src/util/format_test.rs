use super::*;

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_chars("  short text  ", 20), "short text");
    assert_eq!(truncate_chars("exactly", 7), "exactly");
}

#[test]
fn truncate_cuts_and_appends_ellipsis() {
    assert_eq!(truncate_chars("abcdefghij", 4), "abcd…");
    assert_eq!(truncate_chars("word word word", 10), "word word…");
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo wörld", 7), "héllo w…");
    assert_eq!(truncate_chars("🐛🐛🐛", 2), "🐛🐛…");
}

#[test]
fn description_preview_uses_fixed_budget() {
    let long = "x".repeat(DESCRIPTION_PREVIEW_CHARS + 40);
    let preview = description_preview(&long);
    assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 1);
    assert!(preview.ends_with('…'));
}

#[test]
fn created_at_formats_month_day_hour_minute() {
    assert_eq!(format_created_at("2026-10-01T09:05:00Z"), "Oct 1, 09:05 AM");
    assert_eq!(format_created_at("2026-03-17T21:40:12.123456Z"), "Mar 17, 09:40 PM");
}

#[test]
fn created_at_normalizes_offsets_to_utc() {
    assert_eq!(format_created_at("2026-10-01T12:00:00+02:00"), "Oct 1, 10:00 AM");
}

#[test]
fn created_at_passes_through_unparseable_input() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
    assert_eq!(format_created_at(""), "");
}
