//! Calendar date helpers for report filters

use crate::{GeekbotError, Result};
use chrono::{Local, NaiveDate, TimeZone};

/// Accepted format for `after`/`before` tool arguments
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a `YYYY-MM-DD` date to the Unix timestamp of local midnight.
///
/// When midnight does not exist locally (a DST gap), the earliest valid
/// instant of that day is used.
pub fn local_midnight_timestamp(date: &str) -> Result<i64> {
    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|e| {
        GeekbotError::InvalidArgument(format!(
            "'{date}' is not a valid date, expected YYYY-MM-DD ({e})"
        ))
    })?;

    (0..24)
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .find_map(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.timestamp())
        .ok_or_else(|| {
            GeekbotError::InvalidArgument(format!("'{date}' has no valid local time"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_midnight_timestamp() {
        let expected = Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
            .timestamp();

        assert_eq!(local_midnight_timestamp("2024-01-01").unwrap(), expected);
    }

    #[test]
    fn test_consecutive_days_are_about_a_day_apart() {
        let first = local_midnight_timestamp("2024-03-04").unwrap();
        let second = local_midnight_timestamp("2024-03-05").unwrap();
        let delta = second - first;
        assert!((82_800..=90_000).contains(&delta), "delta was {delta}");
    }

    #[test]
    fn test_rejects_non_dates() {
        for bad in ["not-a-date", "2024-13-01", "01/02/2024", "2024-02-30", ""] {
            let err = local_midnight_timestamp(bad).unwrap_err();
            assert!(
                matches!(err, GeekbotError::InvalidArgument(_)),
                "{bad} gave {err:?}"
            );
        }
    }
}
