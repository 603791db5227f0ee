//! # Reports
//!
//! A listing is either a "nothing registered" message or its entries in
//! insertion order, optionally under a heading.
//!
//! ```text
//! Report { entries: [] }        → "No sales registered."
//! Report { entries: [a, b] }    → "=== Sales Report ===\n{a}\n{b}"
//! ```

use serde::Serialize;
use std::fmt;

/// Entries of one ledger listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<T> {
    #[serde(skip)]
    heading: Option<&'static str>,
    #[serde(skip)]
    empty_message: &'static str,
    entries: Vec<T>,
}

impl<T> Report<T> {
    pub fn new(empty_message: &'static str, entries: Vec<T>) -> Self {
        Report {
            heading: None,
            empty_message,
            entries,
        }
    }

    /// Adds a heading line printed above non-empty listings.
    pub fn with_heading(mut self, heading: &'static str) -> Self {
        self.heading = Some(heading);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{}", self.empty_message);
        }

        if let Some(heading) = self.heading {
            writeln!(f, "{}", heading)?;
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_shows_message() {
        let report: Report<String> = Report::new("No sales registered.", vec![]).with_heading("=== Sales ===");
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No sales registered.");
    }

    #[test]
    fn test_entries_in_order_under_heading() {
        let report = Report::new("nothing", vec!["a", "b"]).with_heading("== H ==");
        assert_eq!(report.len(), 2);
        assert_eq!(report.to_string(), "== H ==\na\nb");
    }

    #[test]
    fn test_serializes_entries_only() {
        let report = Report::new("nothing", vec![1, 2, 3]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"entries":[1,2,3]}"#);
    }
}
