//! Time-of-day string normalization
//!
//! Time pickers hand us either "HH:MM" or "HH:MM:SS"; the backend wants the
//! three-field form. [`normalize`] is a shape check only and never fails.
//! [`parse_canonical`] is the strict counterpart for callers that need a
//! real clock value.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::defaults::DEFAULT_SECONDS_SUFFIX;
use crate::error::TimeFormatError;

// ASCII digits only; `\d` in the regex crate also matches other scripts.
static CANONICAL_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").expect("valid static time pattern"));

/// Observer for raw normalizer inputs
pub trait TimeTrace {
    fn record(&self, raw: Option<&str>);
}

/// Default trace: drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TimeTrace for NoTrace {
    fn record(&self, _raw: Option<&str>) {}
}

/// Emits each raw input as a `debug` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl TimeTrace for TracingTrace {
    fn record(&self, raw: Option<&str>) {
        debug!(raw = ?raw, "normalizing time");
    }
}

/// Bring a time string to HH:MM:SS shape.
///
/// Empty or missing input yields an empty string. Input that already looks
/// like HH:MM:SS is returned as is; anything else gets `:09` appended.
pub fn normalize(time: Option<&str>) -> String {
    normalize_with(&NoTrace, time)
}

/// Same as [`normalize`], reporting the raw input to `trace` first.
pub fn normalize_with<T: TimeTrace + ?Sized>(trace: &T, time: Option<&str>) -> String {
    trace.record(time);

    match time {
        None | Some("") => String::new(),
        Some(value) if is_canonical(value) => value.to_string(),
        Some(value) => format!("{value}{DEFAULT_SECONDS_SUFFIX}"),
    }
}

/// Whether `value` is exactly two digits, colon, two digits, colon, two digits
pub fn is_canonical(value: &str) -> bool {
    CANONICAL_TIME.is_match(value)
}

/// Strictly parse a canonical HH:MM:SS string into a clock time
pub fn parse_canonical(value: &str) -> Result<NaiveTime, TimeFormatError> {
    if !is_canonical(value) {
        return Err(TimeFormatError::NotCanonical(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| TimeFormatError::OutOfRange(value.to_string()))
}

pub fn format_canonical(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTrace {
        seen: RefCell<Vec<Option<String>>>,
    }

    impl TimeTrace for RecordingTrace {
        fn record(&self, raw: Option<&str>) {
            self.seen.borrow_mut().push(raw.map(str::to_string));
        }
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_missing_input_yields_empty_string() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_canonical_input_unchanged() {
        assert_eq!(normalize(Some("09:15:30")), "09:15:30");
        assert_eq!(normalize(Some("08:30:00")), "08:30:00");
    }

    #[test]
    fn test_hours_minutes_get_default_seconds() {
        assert_eq!(normalize(Some("09:15")), "09:15:09");
        assert_eq!(normalize(Some("08:30")), "08:30:09");
    }

    #[test]
    fn test_malformed_input_is_coerced_not_rejected() {
        assert_eq!(normalize(Some("bad-value")), "bad-value:09");
        assert_eq!(normalize(Some("abc")), "abc:09");
    }

    #[test]
    fn test_single_digit_fields_are_not_canonical() {
        assert_eq!(normalize(Some("9:5")), "9:5:09");
        assert_eq!(normalize(Some("8:3")), "8:3:09");
    }

    #[test]
    fn test_no_range_validation() {
        assert_eq!(normalize(Some("99:99:99")), "99:99:99");
        assert_eq!(normalize(Some("99:99")), "99:99:09");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(normalize(Some(" 09:15:30")), " 09:15:30:09");
        assert_eq!(normalize(Some("09:15:30\n")), "09:15:30\n:09");
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical() {
        for value in ["00:00:00", "23:59:59", "09:15:09"] {
            let once = normalize(Some(value));
            assert_eq!(normalize(Some(&once)), once);
        }
    }

    #[test]
    fn test_normalized_hh_mm_becomes_canonical() {
        let once = normalize(Some("17:45"));
        assert!(is_canonical(&once));
        assert_eq!(normalize(Some(&once)), once);
    }

    #[test]
    fn test_non_ascii_digits_are_not_canonical() {
        // Arabic-Indic digits
        assert!(!is_canonical("٠٩:١٥:٣٠"));
    }

    #[test]
    fn test_trace_sees_raw_input_once() {
        let trace = RecordingTrace::default();

        assert_eq!(normalize_with(&trace, Some("09:15")), "09:15:09");
        assert_eq!(normalize_with(&trace, None), "");

        let seen = trace.seen.borrow();
        assert_eq!(*seen, vec![Some("09:15".to_string()), None]);
    }

    #[test]
    fn test_trace_does_not_change_output() {
        let trace = RecordingTrace::default();
        for value in [None, Some(""), Some("09:15:30"), Some("bad")] {
            assert_eq!(normalize_with(&trace, value), normalize(value));
            assert_eq!(normalize_with(&TracingTrace, value), normalize(value));
        }
    }

    #[test]
    fn test_trace_usable_as_trait_object() {
        let trace: &dyn TimeTrace = &NoTrace;
        assert_eq!(normalize_with(trace, Some("07:00")), "07:00:09");
    }

    #[test]
    fn test_parse_canonical_valid() {
        let t = parse_canonical("09:15:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(9, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_canonical_rejects_short_form() {
        assert_eq!(
            parse_canonical("09:15"),
            Err(TimeFormatError::NotCanonical("09:15".to_string()))
        );
    }

    #[test]
    fn test_parse_canonical_rejects_impossible_clock() {
        assert_eq!(
            parse_canonical("99:99:99"),
            Err(TimeFormatError::OutOfRange("99:99:99".to_string()))
        );
        assert!(matches!(
            parse_canonical("24:00:00"),
            Err(TimeFormatError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format_canonical_pads_fields() {
        let t = NaiveTime::from_hms_opt(7, 5, 3).unwrap();
        let formatted = format_canonical(t);
        assert_eq!(formatted, "07:05:03");
        assert!(is_canonical(&formatted));
    }
}
