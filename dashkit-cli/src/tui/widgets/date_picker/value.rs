//! External value reconciliation
//!
//! The owner hands the date field whatever it currently holds: nothing, the
//! raw text the user typed, or a structured datetime. [`reconcile`] splits
//! that into the text the input displays and, when the text parses, the
//! date the calendar should show as selected.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// The owner's current value for a date field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExternalValue {
    #[default]
    Absent,
    /// Free text, possibly partial or invalid
    RawText(String),
    /// Already a datetime, never parsed back
    Structured(NaiveDateTime),
}

impl ExternalValue {
    /// Empty text counts as absent, like an unset form param
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            ExternalValue::Absent
        } else {
            ExternalValue::RawText(text)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ExternalValue::Absent)
    }
}

impl From<NaiveDateTime> for ExternalValue {
    fn from(value: NaiveDateTime) -> Self {
        ExternalValue::Structured(value)
    }
}

impl From<Option<String>> for ExternalValue {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from_text).unwrap_or_default()
    }
}

/// Calendar-side date/time fields
///
/// Fields are kept raw so that formatting never fails; use [`date`](Self::date)
/// or [`to_naive`](Self::to_naive) to get a checked chrono value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedDate {
    pub year: i32,
    /// 1-based
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl SelectedDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn from_date(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self::new(date.year(), date.month(), date.day(), hour, minute)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        Some(self.date()?.and_time(time))
    }
}

impl From<NaiveDateTime> for SelectedDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
        )
    }
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Canonical "YYYY-MM-DD HH:MM" rendering of the given fields
pub fn format_canonical(date: &SelectedDate) -> String {
    date.to_string()
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Lenient date/time parsing
///
/// Accepts RFC 3339 (converted to local time), the canonical format with or
/// without seconds, ISO-style `T` separators, slash-separated dates, bare
/// dates (local midnight) and RFC 2822. Returns None for anything else.
pub fn parse_loose(text: &str) -> Option<SelectedDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).naive_local().into());
    }

    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.into());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(SelectedDate::from_date(date, 0, 0));
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local().into())
}

/// Display text and calendar selection derived from an [`ExternalValue`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciled {
    /// Calendar selection, only when the owner supplied parseable text
    pub date_value: Option<SelectedDate>,
    /// What the text input shows
    pub string_value: Option<String>,
}

impl Reconciled {
    pub fn display_text(&self) -> &str {
        self.string_value.as_deref().unwrap_or("")
    }
}

/// Split an external value into input text and calendar selection
///
/// Structured values are formatted for display but do not seed the calendar.
pub fn reconcile(value: &ExternalValue) -> Reconciled {
    match value {
        ExternalValue::Absent => Reconciled::default(),
        ExternalValue::RawText(text) => Reconciled {
            date_value: parse_loose(text),
            string_value: Some(text.clone()),
        },
        ExternalValue::Structured(dt) => Reconciled {
            date_value: None,
            string_value: Some(format_canonical(&(*dt).into())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ndt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_format_zero_pads() {
        let date = SelectedDate::new(2024, 3, 5, 9, 7);
        assert_eq!(format_canonical(&date), "2024-03-05 09:07");
        assert_eq!(
            format_canonical(&SelectedDate::new(987, 1, 1, 0, 0)),
            "0987-01-01 00:00"
        );
    }

    #[test]
    fn test_format_is_total() {
        let bogus = SelectedDate::new(2024, 13, 0, 25, 61);
        assert_eq!(format_canonical(&bogus), "2024-13-00 25:61");
        assert!(bogus.date().is_none());
        assert!(bogus.to_naive().is_none());
    }

    #[test]
    fn test_parse_canonical_round_trips() {
        let parsed = parse_loose("2024-03-05 09:00").unwrap();
        assert_eq!(parsed, SelectedDate::new(2024, 3, 5, 9, 0));
        assert_eq!(format_canonical(&parsed), "2024-03-05 09:00");
    }

    #[test]
    fn test_parse_variants() {
        let expected = SelectedDate::new(2024, 3, 5, 9, 30);
        assert_eq!(parse_loose("2024-03-05T09:30"), Some(expected));
        assert_eq!(parse_loose("2024-03-05 09:30:00"), Some(expected));
        assert_eq!(parse_loose("2024-03-05T09:30:00.250"), Some(expected));
        assert_eq!(parse_loose("2024/03/05 09:30"), Some(expected));
        assert_eq!(parse_loose("  2024-03-05 09:30 "), Some(expected));
        assert_eq!(
            parse_loose("2024-03-05"),
            Some(SelectedDate::new(2024, 3, 5, 0, 0))
        );
    }

    #[test]
    fn test_parse_offset_forms_land_in_local_time() {
        let utc: DateTime<chrono::Utc> = "2024-03-05T09:30:00Z".parse().unwrap();
        let local = SelectedDate::from(utc.with_timezone(&Local).naive_local());
        assert_eq!(parse_loose("2024-03-05T09:30:00Z"), Some(local));
        assert_eq!(parse_loose("Tue, 05 Mar 2024 09:30:00 +0000"), Some(local));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_loose(""), None);
        assert_eq!(parse_loose("   "), None);
        assert_eq!(parse_loose("not a date"), None);
        assert_eq!(parse_loose("2024-02-30"), None);
        assert_eq!(parse_loose("2024-03-05 25:00"), None);
    }

    #[test]
    fn test_reconcile_absent() {
        let r = reconcile(&ExternalValue::Absent);
        assert_eq!(r.date_value, None);
        assert_eq!(r.string_value, None);
        assert_eq!(r.display_text(), "");
    }

    #[test]
    fn test_reconcile_parseable_text() {
        let r = reconcile(&ExternalValue::from_text("2024-03-05 09:00"));
        assert_eq!(r.date_value, Some(SelectedDate::new(2024, 3, 5, 9, 0)));
        assert_eq!(r.string_value.as_deref(), Some("2024-03-05 09:00"));
    }

    #[test]
    fn test_reconcile_partial_text_keeps_text() {
        let r = reconcile(&ExternalValue::from_text("2024-03-"));
        assert_eq!(r.date_value, None);
        assert_eq!(r.display_text(), "2024-03-");
    }

    #[test]
    fn test_reconcile_structured_does_not_seed() {
        let r = reconcile(&ExternalValue::from(ndt(2024, 12, 31, 23, 59)));
        assert_eq!(r.date_value, None);
        assert_eq!(r.string_value.as_deref(), Some("2024-12-31 23:59"));
    }

    #[test]
    fn test_external_value_from_text() {
        assert!(ExternalValue::from_text("").is_absent());
        assert!(ExternalValue::from(None::<String>).is_absent());
        assert_eq!(
            ExternalValue::from(Some("x".to_string())),
            ExternalValue::RawText("x".to_string())
        );
    }
}
