use std::fmt;

use chrono::{Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// TimePeriod — Lookback window for the `after` query parameter
// ---------------------------------------------------------------------------

/// A user-selectable lookback window.
///
/// The start date is derived from the local calendar date every time it is
/// read, so two reads straddling midnight return different strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    OneWeek,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

/// How far a [`TimePeriod`] reaches back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Days(u64),
    Months(u32),
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::OneWeek,
        TimePeriod::OneMonth,
        TimePeriod::ThreeMonths,
        TimePeriod::SixMonths,
        TimePeriod::OneYear,
    ];

    pub fn offset(self) -> Offset {
        match self {
            TimePeriod::OneWeek => Offset::Days(7),
            TimePeriod::OneMonth => Offset::Months(1),
            TimePeriod::ThreeMonths => Offset::Months(3),
            TimePeriod::SixMonths => Offset::Months(6),
            TimePeriod::OneYear => Offset::Months(12),
        }
    }

    /// Short label for a segmented picker.
    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::OneWeek => "1W",
            TimePeriod::OneMonth => "1M",
            TimePeriod::ThreeMonths => "3M",
            TimePeriod::SixMonths => "6M",
            TimePeriod::OneYear => "1Y",
        }
    }

    /// The first day of the window ending on `today`.
    ///
    /// Month arithmetic clamps to the last day of a shorter month, so
    /// 31 March minus one month is the last day of February and 29 February
    /// minus one year is 28 February.
    pub fn start_date_from(self, today: NaiveDate) -> NaiveDate {
        let start = match self.offset() {
            Offset::Days(days) => today.checked_sub_days(Days::new(days)),
            Offset::Months(months) => today.checked_sub_months(Months::new(months)),
        };
        // Only reachable near the minimum representable date.
        start.unwrap_or(NaiveDate::MIN)
    }

    /// [`start_date_from`](Self::start_date_from) formatted as `dd-MM-yyyy`.
    pub fn start_date_string_from(self, today: NaiveDate) -> String {
        self.start_date_from(today)
            .format(config::DATE_FORMAT)
            .to_string()
    }

    /// Start date for a window ending on the current local date.
    pub fn start_date_string(self) -> String {
        self.start_date_string_from(Local::now().date_naive())
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
