// Date key module
// Canonical YYYY-MM-DD identifier for one planner day

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

const FORMAT: &str = "%Y-%m-%d";

/// Identifies one calendar day.
///
/// The rendered form is the storage key for that day's events and the
/// boundary within which events must not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `(year, month0)` pair of the month containing this day.
    pub fn month_position(&self) -> (i32, u32) {
        (self.0.year(), self.0.month0())
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = String;

    /// Only the zero-padded form is accepted, so each day has exactly one key.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(value, FORMAT)
            .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;
        let key = Self(date);

        if key.to_string() != value {
            return Err(format!(
                "Date '{}' is not in canonical form, use '{}'",
                value, key
            ));
        }

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_display() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(key.to_string(), "2024-03-05");
    }

    #[test]
    fn test_parse_canonical() {
        let key: DateKey = "2024-02-29".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test_case("2024-3-5" ; "unpadded")]
    #[test_case("2023-02-29" ; "not a leap year")]
    #[test_case("2024-13-01" ; "month out of range")]
    #[test_case("05/03/2024" ; "wrong layout")]
    #[test_case("" ; "empty")]
    fn test_parse_rejects(input: &str) {
        assert!(input.parse::<DateKey>().is_err());
    }

    #[test]
    fn test_month_position_is_zero_indexed() {
        let key: DateKey = "2024-12-31".parse().unwrap();
        assert_eq!(key.month_position(), (2024, 11));
    }

    #[test]
    fn test_ordering_follows_dates() {
        let earlier: DateKey = "2023-12-31".parse().unwrap();
        let later: DateKey = "2024-01-01".parse().unwrap();
        assert!(earlier < later);
    }
}
