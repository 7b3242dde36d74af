use chrono::{Days, NaiveDate};

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y.%m.%d";

/// `<prefix>-YYYY.MM.DD`, the naming scheme of time-partitioned indices.
pub fn index_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}", date.format(DATE_FORMAT))
}

/// The pair of daily indices a run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyIndices {
    /// Source of the mapping
    pub today: String,
    /// Destination, created if missing
    pub tomorrow: String,
}

impl DailyIndices {
    pub fn for_date(prefix: &str, today: NaiveDate) -> Result<Self, AppError> {
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| AppError::Date(format!("no day after {today}")))?;

        Ok(Self {
            today: index_name(prefix, today),
            tomorrow: index_name(prefix, tomorrow),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn names_today_and_tomorrow() {
        let indices = DailyIndices::for_date("logstash", ymd(2024, 3, 10)).unwrap();
        assert_eq!(indices.today, "logstash-2024.03.10");
        assert_eq!(indices.tomorrow, "logstash-2024.03.11");
    }

    #[test]
    fn rolls_over_month_and_year() {
        let indices = DailyIndices::for_date("logstash", ymd(2024, 4, 30)).unwrap();
        assert_eq!(indices.tomorrow, "logstash-2024.05.01");

        let indices = DailyIndices::for_date("events", ymd(2023, 12, 31)).unwrap();
        assert_eq!(indices.today, "events-2023.12.31");
        assert_eq!(indices.tomorrow, "events-2024.01.01");
    }

    #[test]
    fn handles_leap_days() {
        let leap = DailyIndices::for_date("logstash", ymd(2024, 2, 28)).unwrap();
        assert_eq!(leap.tomorrow, "logstash-2024.02.29");

        let common = DailyIndices::for_date("logstash", ymd(2023, 2, 28)).unwrap();
        assert_eq!(common.tomorrow, "logstash-2023.03.01");
    }

    #[test]
    fn tomorrow_is_always_the_next_day() {
        let mut day = ymd(2023, 1, 1);
        while day < ymd(2025, 1, 1) {
            let indices = DailyIndices::for_date("p", day).unwrap();
            let suffix = indices.tomorrow.strip_prefix("p-").unwrap();
            let parsed = NaiveDate::parse_from_str(suffix, DATE_FORMAT).unwrap();
            assert_eq!(parsed, day.succ_opt().unwrap());
            day = parsed;
        }
    }

    #[test]
    fn last_representable_day_is_an_error() {
        let err = DailyIndices::for_date("logstash", NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, AppError::Date(_)));
    }
}
