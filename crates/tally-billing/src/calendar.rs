//! Business-day counting policy.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tally_core::{ErrorInfo, TallyError};

/// Longest span, in days, that [`CalendarPolicy::count_business_days`] will walk.
pub const MAX_PERIOD_DAYS: i64 = 365 * 5;

/// Which days count as working days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPolicy {
    /// Days of the week that are never business days.
    #[serde(default = "default_weekends")]
    pub weekends: HashSet<Weekday>,
    /// Specific non-working dates.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
}

fn default_weekends() -> HashSet<Weekday> {
    [Weekday::Sat, Weekday::Sun].into_iter().collect()
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl CalendarPolicy {
    /// Monday to Friday, no holidays.
    pub fn standard() -> Self {
        Self {
            weekends: default_weekends(),
            holidays: BTreeSet::new(),
        }
    }

    /// Marks `date` as a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Returns whether `date` is neither a weekend day nor a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.weekends.contains(&date.weekday()) && !self.holidays.contains(&date)
    }

    /// Counts business days in `start..=end`.
    ///
    /// Returns `0` when `start` is after `end`. Spans longer than
    /// [`MAX_PERIOD_DAYS`] are rejected instead of walked.
    pub fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> Result<u64, TallyError> {
        if start > end {
            return Ok(0);
        }
        let span = (end - start).num_days();
        if span > MAX_PERIOD_DAYS {
            let info = ErrorInfo::new(
                "period-too-long",
                "calculation period exceeds the five year limit",
            )
            .with_context("start", start)
            .with_context("end", end)
            .with_context("days", span);
            return Err(TallyError::Calendar(info));
        }
        let count = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_business_day(*day))
            .count();
        Ok(count as u64)
    }
}
