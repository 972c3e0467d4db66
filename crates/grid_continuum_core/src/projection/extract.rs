//! Value extraction: (record, mapping) -> grouping key.
//!
//! # Responsibility
//! - Derive one grouping key per record for any LATCH axis/facet pair.
//!
//! # Invariants
//! - Extraction is total: missing or malformed source data yields the
//!   axis's fixed fallback key, never a panic or an error.
//! - Extraction is pure for a fixed reference date.

use crate::model::axis::{AxisKind, AxisMapping};
use crate::model::record::Record;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Fallback key for absent categorical and geographic values.
pub const UNKNOWN_KEY: &str = "Unknown";
/// Alphabet key for records with an empty display name.
pub const EMPTY_NAME_KEY: &str = "A";

pub const FACET_YEAR: &str = "year";
pub const FACET_MONTH: &str = "month";
pub const FACET_STATUS: &str = "status";
pub const FACET_FOLDER: &str = "folder";
pub const FACET_PRIORITY: &str = "priority";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordinal priority tiers, most important first.
pub const PRIORITY_TIERS: [&str; 4] = ["High", "Medium", "Low", "None"];

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Extracts the grouping key using today's local date for fallbacks.
pub fn extract(record: &Record, mapping: &AxisMapping) -> String {
    extract_at(record, mapping, chrono::Local::now().date_naive())
}

/// Extracts the grouping key with an explicit fallback date.
///
/// Per-axis contract:
/// - `time`: `month` -> long month name; `year` or anything else -> year.
///   Missing/unparsable dates resolve to `today`.
/// - `category`: `status` -> status; anything else -> folder. `Unknown` if absent.
/// - `hierarchy`: `priority` -> High/Medium/Low/None tier; other facets -> `None`.
/// - `alphabet`: upper-cased first character of the name; empty name -> `A`.
/// - `location`: location name or `Unknown`.
pub fn extract_at(record: &Record, mapping: &AxisMapping, today: NaiveDate) -> String {
    match mapping.axis {
        AxisKind::Time => {
            let date = record
                .created_at
                .as_deref()
                .and_then(parse_temporal)
                .unwrap_or(today);
            time_key(date, mapping.facet.as_str())
        }
        AxisKind::Category => {
            let source = match mapping.facet.as_str() {
                FACET_STATUS => record.status.as_deref(),
                _ => record.folder.as_deref(),
            };
            text_or_unknown(source)
        }
        AxisKind::Hierarchy => match mapping.facet.as_str() {
            FACET_PRIORITY => priority_tier(record.priority).to_string(),
            _ => PRIORITY_TIERS[3].to_string(),
        },
        AxisKind::Alphabet => alphabet_key(record.name.as_str()),
        AxisKind::Location => text_or_unknown(record.location_name.as_deref()),
    }
}

/// Buckets a numeric priority: High (>=3), Medium (>=2), Low (>=1), None.
///
/// Missing and NaN priorities map to `None`.
pub fn priority_tier(priority: Option<f64>) -> &'static str {
    match priority {
        Some(value) if value >= 3.0 => PRIORITY_TIERS[0],
        Some(value) if value >= 2.0 => PRIORITY_TIERS[1],
        Some(value) if value >= 1.0 => PRIORITY_TIERS[2],
        _ => PRIORITY_TIERS[3],
    }
}

/// Returns the zero-based calendar index of a long month name.
pub fn month_index(name: &str) -> Option<usize> {
    MONTH_NAMES.iter().position(|month| *month == name)
}

/// Parses the temporal text formats records carry.
///
/// Accepts RFC 3339, naive `T`/space separated timestamps and plain dates.
pub fn parse_temporal(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn time_key(date: NaiveDate, facet: &str) -> String {
    match facet {
        FACET_MONTH => MONTH_NAMES[date.month0() as usize].to_string(),
        _ => format!("{:04}", date.year()),
    }
}

fn text_or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => UNKNOWN_KEY.to_string(),
    }
}

fn alphabet_key(name: &str) -> String {
    match name.trim_start().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => EMPTY_NAME_KEY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_at, month_index, parse_temporal, priority_tier, UNKNOWN_KEY};
    use crate::model::axis::{AxisKind, AxisMapping, Plane};
    use crate::model::record::Record;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 11, 20).expect("valid date")
    }

    fn key(record: &Record, axis: AxisKind, facet: &str) -> String {
        extract_at(record, &AxisMapping::new(Plane::X, axis, facet), today())
    }

    #[test]
    fn time_axis_reads_year_and_month() {
        let record = Record::new("r").created_at("2024-03-05T10:15:00Z");

        assert_eq!(key(&record, AxisKind::Time, "year"), "2024");
        assert_eq!(key(&record, AxisKind::Time, "month"), "March");
        assert_eq!(key(&record, AxisKind::Time, "week"), "2024");
        assert_eq!(key(&record, AxisKind::Time, ""), "2024");
    }

    #[test]
    fn time_axis_falls_back_to_reference_date() {
        let missing = Record::new("r");
        let garbage = Record::new("r").created_at("not a date");

        assert_eq!(key(&missing, AxisKind::Time, "year"), "2030");
        assert_eq!(key(&garbage, AxisKind::Time, "month"), "November");
    }

    #[test]
    fn parse_temporal_accepts_common_shapes() {
        let expected = NaiveDate::from_ymd_opt(2022, 1, 9);
        assert_eq!(parse_temporal("2022-01-09"), expected);
        assert_eq!(parse_temporal("2022-01-09 08:00:00"), expected);
        assert_eq!(parse_temporal("2022-01-09T08:00:00.250"), expected);
        assert_eq!(parse_temporal("2022-01-09T08:00:00+02:00"), expected);
        assert_eq!(parse_temporal("   "), None);
        assert_eq!(parse_temporal("2022-13-40"), None);
    }

    #[test]
    fn category_axis_uses_status_or_folder() {
        let record = Record::new("r").status("Done").folder("Work");

        assert_eq!(key(&record, AxisKind::Category, "status"), "Done");
        assert_eq!(key(&record, AxisKind::Category, "folder"), "Work");
        assert_eq!(key(&record, AxisKind::Category, "tag"), "Work");
    }

    #[test]
    fn category_axis_treats_blank_as_unknown() {
        let record = Record::new("r").status("   ");

        assert_eq!(key(&record, AxisKind::Category, "status"), UNKNOWN_KEY);
        assert_eq!(key(&record, AxisKind::Category, "folder"), UNKNOWN_KEY);
    }

    #[test]
    fn hierarchy_axis_buckets_priority_tiers() {
        assert_eq!(priority_tier(Some(5.0)), "High");
        assert_eq!(priority_tier(Some(3.0)), "High");
        assert_eq!(priority_tier(Some(2.5)), "Medium");
        assert_eq!(priority_tier(Some(1.0)), "Low");
        assert_eq!(priority_tier(Some(0.0)), "None");
        assert_eq!(priority_tier(Some(f64::NAN)), "None");
        assert_eq!(priority_tier(None), "None");

        let record = Record::new("r").priority(4.0);
        assert_eq!(key(&record, AxisKind::Hierarchy, "priority"), "High");
        assert_eq!(key(&record, AxisKind::Hierarchy, "depth"), "None");
    }

    #[test]
    fn alphabet_axis_upper_cases_first_character() {
        assert_eq!(key(&Record::new("banana"), AxisKind::Alphabet, ""), "B");
        assert_eq!(key(&Record::new("élan"), AxisKind::Alphabet, ""), "É");
        assert_eq!(key(&Record::new(""), AxisKind::Alphabet, ""), "A");
        assert_eq!(key(&Record::new("   "), AxisKind::Alphabet, ""), "A");
        assert_eq!(key(&Record::new("  kiwi"), AxisKind::Alphabet, ""), "K");
    }

    #[test]
    fn location_axis_falls_back_to_unknown() {
        let placed = Record::new("r").location("Oslo");

        assert_eq!(key(&placed, AxisKind::Location, "city"), "Oslo");
        assert_eq!(key(&Record::new("r"), AxisKind::Location, "city"), UNKNOWN_KEY);
    }

    #[test]
    fn month_index_matches_calendar() {
        assert_eq!(month_index("January"), Some(0));
        assert_eq!(month_index("December"), Some(11));
        assert_eq!(month_index("Smarch"), None);
    }
}
