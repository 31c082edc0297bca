use chrono::{Datelike, Duration, NaiveDate};
use contracts::shared::record_filter::DateRangeBucket;

/// Inclusive calendar window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Resolve a calendar bucket to absolute dates.
///
/// `All` and `Overdue` have no fixed window and return `None`.
pub fn resolve(bucket: DateRangeBucket, today: NaiveDate) -> Option<DateWindow> {
    match bucket {
        DateRangeBucket::ThisWeek => {
            let start = start_of_week(today);
            Some(DateWindow {
                start,
                end: start + Duration::days(6),
            })
        }
        DateRangeBucket::ThisMonth => month_window(today.year(), today.month()),
        DateRangeBucket::NextMonth => {
            let (year, month) = if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            };
            month_window(year, month)
        }
        DateRangeBucket::All | DateRangeBucket::Overdue => None,
    }
}

/// Get start of week (Monday) for a given date
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Duration::days(days_from_monday as i64)
}

fn month_window(year: i32, month: u32) -> Option<DateWindow> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateWindow {
        start,
        end: next_start - Duration::days(1),
    })
}
