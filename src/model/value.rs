//! Typed cell values
//!
//! Every column extractor produces a `CellValue`. The value knows how to
//! display itself and how to compare against another value of the same
//! column, so sorting stays type-aware without the table knowing the record.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// A single typed cell produced by a column extractor
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    /// Currency amount, displayed with two decimals
    Money(f64),
    /// Ratio already multiplied by 100
    Percent(f64),
    Date(NaiveDate),
    /// Enumerated status label (Paid, Pending, Active, ...)
    Status(&'static str),
    Flag(bool),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    /// String used both for drawing and for filter matching
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{:.0}", n)
                } else {
                    format!("{:.2}", n)
                }
            }
            CellValue::Money(n) => format!("{:.2}", n),
            CellValue::Percent(n) => format!("{:.1}%", n),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Status(s) => (*s).to_string(),
            CellValue::Flag(true) => "Yes".to_string(),
            CellValue::Flag(false) => "No".to_string(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Number(n) | CellValue::Money(n) | CellValue::Percent(n) => Some(*n),
            _ => None,
        }
    }

    /// Semantic ordering: numbers numerically, dates chronologically,
    /// text case-insensitively. Empty cells sort before anything else.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Less,
            (_, CellValue::Empty) => Ordering::Greater,
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Flag(a), CellValue::Flag(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => compare_text(&a.display(), &b.display()),
            },
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_numbers_compare_numerically() {
        // Lexicographic order would put "10" before "9"
        assert_eq!(
            CellValue::Integer(9).compare(&CellValue::Integer(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Money(2574.0).compare(&CellValue::Money(300.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Integer(3).compare(&CellValue::Number(2.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        assert_eq!(date(2024, 1, 31).compare(&date(2024, 2, 1)), Ordering::Less);
        assert_eq!(date(2023, 12, 1).compare(&date(2023, 12, 1)), Ordering::Equal);
    }

    #[test]
    fn test_text_compare_ignores_case_then_breaks_ties() {
        let apple = CellValue::text("apple");
        let banana = CellValue::text("Banana");
        assert_eq!(apple.compare(&banana), Ordering::Less);

        let upper = CellValue::text("Amy");
        let lower = CellValue::text("amy");
        assert_eq!(upper.compare(&lower), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(CellValue::Empty.compare(&CellValue::Integer(0)), Ordering::Less);
        assert_eq!(CellValue::text("a").compare(&CellValue::Empty), Ordering::Greater);
        assert!(CellValue::text("").is_empty());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(CellValue::Money(2674.0).display(), "2674.00");
        assert_eq!(CellValue::Percent(87.5).display(), "87.5%");
        assert_eq!(CellValue::Number(12.0).display(), "12");
        assert_eq!(CellValue::Number(12.25).display(), "12.25");
        assert_eq!(date(2024, 3, 9).display(), "2024-03-09");
        assert_eq!(CellValue::Flag(true).display(), "Yes");
        assert_eq!(CellValue::Empty.display(), "");
    }
}
