//! Sequential record ids.

use chrono::{Datelike, NaiveDate};

/// Id layout: `<PREFIX>-[<year>-]<seq:03>`.
///
/// The sequence is the list length plus one. This stays unique only while
/// records are never deleted and a single client creates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdScheme {
    pub prefix: &'static str,
    pub with_year: bool,
}

impl IdScheme {
    pub const fn new(prefix: &'static str, with_year: bool) -> Self {
        Self { prefix, with_year }
    }

    /// Format an id for an explicit sequence number.
    pub fn format(&self, seq: usize, year: i32) -> String {
        if self.with_year {
            format!("{}-{}-{:03}", self.prefix, year, seq)
        } else {
            format!("{}-{:03}", self.prefix, seq)
        }
    }

    /// Id for the record appended to a list of `existing` records.
    pub fn next(&self, existing: usize, today: NaiveDate) -> String {
        self.format(existing + 1, today.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_format_with_year() {
        let scheme = IdScheme::new("RPT", true);
        assert_eq!(scheme.format(5, 2024), "RPT-2024-005");
    }

    #[test]
    fn test_format_without_year() {
        let scheme = IdScheme::new("BLT", false);
        assert_eq!(scheme.format(12, 2024), "BLT-012");
    }

    #[test]
    fn test_sequence_wider_than_padding() {
        let scheme = IdScheme::new("BLT", false);
        assert_eq!(scheme.format(1234, 2024), "BLT-1234");
    }

    #[test]
    fn test_next_uses_length_and_year() {
        let scheme = IdScheme::new("WRT", true);
        assert_eq!(scheme.next(4, day(2025, 3, 9)), "WRT-2025-005");
        assert_eq!(scheme.next(0, day(2025, 3, 9)), "WRT-2025-001");
    }
}
