//! Extraction patterns shared by the vendor adapters: direct reads with a
//! default, enum translation through a code table, and the numeric and
//! timestamp parsing rules every feed needs.

use super::extraction::{
    invalid, missing, unmapped, unsupported, Extraction, ExtractionError, FieldResult,
};
use super::record::{FieldAccess, RawRecord};
use super::translate::{CodeTable, Vocabulary};
use super::vendor::Vendor;
use crate::canonical::normalize_phone;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Mandatory text; absence is fatal for the whole record.
pub(crate) fn required_text(
    raw: &RawRecord,
    vendor: Vendor,
    field: &'static str,
    key: &'static str,
) -> FieldResult<String> {
    raw.text(key)
        .map(Extraction::ok)
        .ok_or(ExtractionError::MissingField { vendor, field, key })
}

pub(crate) fn text_or_default(
    raw: &RawRecord,
    key: &str,
    field: &str,
    default: &str,
) -> Extraction<String> {
    match raw.text(key) {
        Some(value) => Extraction::ok(value),
        None => Extraction::defaulted(default.to_string(), missing(field, default)),
    }
}

pub(crate) fn number_or_default(
    raw: &RawRecord,
    key: &str,
    field: &str,
    default: f64,
) -> Extraction<f64> {
    match raw.text(key) {
        None => Extraction::defaulted(default, missing(field, default)),
        Some(text) => match super::record::parse_number(&text) {
            Some(value) if value >= 0.0 => Extraction::ok(value),
            _ => Extraction::defaulted(default, invalid(field, &text, default)),
        },
    }
}

pub(crate) fn timestamp_or_default(
    raw: &RawRecord,
    key: &str,
    field: &str,
    default: DateTime<Utc>,
) -> Extraction<DateTime<Utc>> {
    match raw.text(key) {
        None => Extraction::defaulted(default, missing(field, default)),
        Some(text) => match parse_timestamp(&text) {
            Some(value) => Extraction::ok(value),
            None => Extraction::defaulted(default, invalid(field, &text, default)),
        },
    }
}

pub(crate) fn room_count_or_default(
    raw: &RawRecord,
    key: &str,
    field: &str,
    studio: &str,
    default: u32,
) -> Extraction<u32> {
    match raw.text(key) {
        None => Extraction::defaulted(default, missing(field, default)),
        Some(text) => match parse_room_count(&text, studio) {
            Some(count) => Extraction::ok(count),
            None => Extraction::defaulted(default, invalid(field, &text, default)),
        },
    }
}

/// Reads an enumerated value, checks it against the vendor's legal set and
/// translates it. Missing, illegal, and unmapped values all fall back.
pub(crate) fn translated_or_default<T>(
    raw: &RawRecord,
    key: &str,
    field: &str,
    legal: &[&str],
    table: &CodeTable<T>,
    default: T,
) -> Extraction<T>
where
    T: Copy + Send + Sync + fmt::Debug + 'static,
{
    translated_with(raw, key, field, legal, table, |value| value, default)
}

/// Like [`translated_or_default`] for tables whose target carries more than
/// the canonical field; `project` picks the part the field needs.
pub(crate) fn translated_with<T, U>(
    raw: &RawRecord,
    key: &str,
    field: &str,
    legal: &[&str],
    table: &CodeTable<T>,
    project: impl FnOnce(T) -> U,
    default: U,
) -> Extraction<U>
where
    T: Copy + Send + Sync + 'static,
    U: Copy + fmt::Debug,
{
    match raw.text(key) {
        None => Extraction::defaulted(default, missing(field, default)),
        Some(text) if !Vocabulary::is_legal(legal, &text) => {
            Extraction::defaulted(default, unsupported(field, &text, default))
        }
        Some(text) => match table.translate(&text) {
            Some(value) => Extraction::ok(project(value)),
            None => Extraction::defaulted(default, unmapped(field, &text, default)),
        },
    }
}

/// Legal, translatable value at `key`, without any fallback.
pub(crate) fn lookup<T>(
    raw: &RawRecord,
    key: &str,
    legal: &[&str],
    table: &CodeTable<T>,
) -> Option<T>
where
    T: Copy + Send + Sync + 'static,
{
    raw.text(key)
        .filter(|text| Vocabulary::is_legal(legal, text))
        .and_then(|text| table.translate(&text))
}

pub(crate) fn phone_or_default(
    raw: &RawRecord,
    key: &str,
    field: &str,
    default: &str,
) -> Extraction<String> {
    match raw.text(key).map(|text| normalize_phone(&text)) {
        Some(phone) if !phone.is_empty() => Extraction::ok(phone),
        _ => Extraction::defaulted(default.to_string(), missing(field, default)),
    }
}

/// Room counts as feeds publish them: `"3"`, `"7+"` (one more than the
/// number), or the vendor's studio token for zero.
pub fn parse_room_count(value: &str, studio: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case(studio) {
        return Some(0);
    }

    if let Some(base) = trimmed.strip_suffix('+') {
        return base.trim().parse::<u32>().ok()?.checked_add(1);
    }

    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }

    // "3.0" shows up when the feed was exported from a spreadsheet.
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|count| count.fract() == 0.0 && *count >= 0.0 && *count <= u32::MAX as f64)
        .map(|count| count as u32)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn room_count_handles_plus_suffix_and_studio() {
        assert_eq!(parse_room_count("7+", "studio"), Some(8));
        assert_eq!(parse_room_count("Studio", "studio"), Some(0));
        assert_eq!(parse_room_count("3", "studio"), Some(3));
        assert_eq!(parse_room_count("2.0", "studio"), Some(2));
        assert_eq!(parse_room_count("2.5", "studio"), None);
        assert_eq!(parse_room_count("many", "studio"), None);
    }

    #[test]
    fn parse_timestamp_supports_feed_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 8, 19, 52).unwrap();
        assert_eq!(parse_timestamp("2024-03-01 08:19:52"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T08:19:52Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T12:19:52+04:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert!(parse_timestamp("  ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn required_text_reports_vendor_field_and_key() {
        let record = json!({ "title_en": "  " });
        let err = required_text(&record, Vendor::PropertyFinder, "title", "title_en")
            .expect_err("blank title is fatal");
        assert_eq!(
            err,
            ExtractionError::MissingField {
                vendor: Vendor::PropertyFinder,
                field: "title",
                key: "title_en",
            }
        );
    }

    #[test]
    fn number_or_default_rejects_negative_values() {
        let record = json!({ "size": "-40" });
        let extracted = number_or_default(&record, "size", "builtInArea", 0.0);
        assert_eq!(extracted.data, 0.0);
        assert_eq!(
            extracted.errors,
            vec!["builtInArea: invalid value '-40', using default 0.0"]
        );
    }
}
