//! The one-year query window sent with every holiday request.
//!
//! Dates travel as `MM/DD/YYYY` strings. The window always starts today and
//! ends on the same month/day one year later; Feb 29 rolls over to Mar 1 of
//! the following year instead of clamping to Feb 28.

use chrono::{Datelike, NaiveDate};

const WIRE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn valid_from(&self) -> String {
        format_date(self.from)
    }

    pub fn valid_to(&self) -> String {
        format_date(self.to)
    }
}

/// Window for a query issued on `now`.
pub fn compute_range(now: NaiveDate) -> DateRange {
    DateRange {
        from: now,
        to: one_year_later(now),
    }
}

fn one_year_later(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Parse a strict `MM/DD/YYYY` string (zero-padded, four-digit year).
#[allow(dead_code)]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(s, WIRE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_spans_one_year() {
        let range = compute_range(date(2026, 10, 17));
        assert_eq!(range.valid_from(), "10/17/2026");
        assert_eq!(range.valid_to(), "10/17/2027");
    }

    #[test]
    fn test_range_pads_month_and_day() {
        let range = compute_range(date(2025, 1, 5));
        assert_eq!(range.valid_from(), "01/05/2025");
        assert_eq!(range.valid_to(), "01/05/2026");
    }

    #[test]
    fn test_range_same_month_day_across_year() {
        let mut d = date(2023, 1, 1);
        while d < date(2025, 1, 1) {
            let range = compute_range(d);
            assert_eq!(range.valid_from(), format_date(d));
            if !(d.month() == 2 && d.day() == 29) {
                assert_eq!(range.to.year(), d.year() + 1);
                assert_eq!(range.to.month(), d.month());
                assert_eq!(range.to.day(), d.day());
            }
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_leap_day_rolls_over_to_march_first() {
        let range = compute_range(date(2024, 2, 29));
        assert_eq!(range.valid_from(), "02/29/2024");
        assert_eq!(range.valid_to(), "03/01/2025");
    }

    #[test]
    fn test_leap_day_into_leap_year_is_kept() {
        // Year + 1 of a Feb 29 is never a leap year, but Feb 28 of a year
        // preceding a leap year must stay Feb 28.
        let range = compute_range(date(2027, 2, 28));
        assert_eq!(range.valid_to(), "02/28/2028");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for d in [date(2026, 10, 17), date(2024, 2, 29), date(1999, 12, 31), date(2000, 1, 1)] {
            assert_eq!(parse_date(&format_date(d)), Some(d));
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_date("1/5/2025"), None);
        assert_eq!(parse_date("2025-01-05"), None);
        assert_eq!(parse_date("13/01/2025"), None);
        assert_eq!(parse_date("02/30/2025"), None);
        assert_eq!(parse_date("01/05/+2025"), None);
        assert_eq!(parse_date(""), None);
    }
}
