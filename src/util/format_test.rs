use super::*;

// =============================================================
// Track and playlist times
// =============================================================

#[test]
fn track_time_pads_seconds() {
    assert_eq!(format_track_time(Some(210)), "3:30");
    assert_eq!(format_track_time(Some(185)), "3:05");
    assert_eq!(format_track_time(Some(59)), "0:59");
}

#[test]
fn track_time_placeholder_for_missing_or_zero() {
    assert_eq!(format_track_time(None), "-:--");
    assert_eq!(format_track_time(Some(0)), "-:--");
}

#[test]
fn running_time_with_and_without_hours() {
    assert_eq!(format_running_time(6120), "1h 42m");
    assert_eq!(format_running_time(3480), "58m");
    assert_eq!(format_running_time(3600), "1h 0m");
}

// =============================================================
// Counts
// =============================================================

#[test]
fn count_inserts_thousands_separators() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1532), "1,532");
    assert_eq!(format_count(1_234_567), "1,234,567");
    assert_eq!(format_count(100_000), "100,000");
}

#[test]
fn compact_uses_k_and_m_suffixes() {
    assert_eq!(format_compact(892), "892");
    assert_eq!(format_compact(45_200), "45.2K");
    assert_eq!(format_compact(1_500_000), "1.5M");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_formats_utc_calendar_day() {
    assert_eq!(format_date(0), "1970-01-01");
    assert_eq!(format_date(1_700_956_800_000), "2023-11-26");
}

#[test]
fn date_handles_pre_epoch_millis() {
    assert_eq!(format_date(-1), "1969-12-31");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}
