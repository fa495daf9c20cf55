//! Time period arithmetic and query parameter construction.

use chrono::{Local, NaiveDate};
use covidon_sdk::models::{Offset, Region, TimePeriod};
use covidon_sdk::{build_parameters, QueryParameters};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// start_date_from
// ---------------------------------------------------------------------------

#[test]
fn one_week_is_seven_days() {
    let today = date(2021, 5, 8);
    assert_eq!(TimePeriod::OneWeek.start_date_from(today), date(2021, 5, 1));
}

#[test]
fn month_offsets_from_mid_month() {
    let today = date(2021, 5, 8);
    assert_eq!(TimePeriod::OneMonth.start_date_from(today), date(2021, 4, 8));
    assert_eq!(TimePeriod::ThreeMonths.start_date_from(today), date(2021, 2, 8));
    assert_eq!(TimePeriod::SixMonths.start_date_from(today), date(2020, 11, 8));
    assert_eq!(TimePeriod::OneYear.start_date_from(today), date(2020, 5, 8));
}

#[test]
fn month_offsets_clamp_to_month_end() {
    let today = date(2021, 3, 31);
    assert_eq!(TimePeriod::OneMonth.start_date_from(today), date(2021, 2, 28));
    assert_eq!(TimePeriod::ThreeMonths.start_date_from(today), date(2020, 12, 31));
    assert_eq!(TimePeriod::SixMonths.start_date_from(today), date(2020, 9, 30));
}

#[test]
fn leap_day_handling() {
    assert_eq!(
        TimePeriod::OneMonth.start_date_from(date(2020, 3, 31)),
        date(2020, 2, 29)
    );
    assert_eq!(
        TimePeriod::OneYear.start_date_from(date(2024, 2, 29)),
        date(2023, 2, 28)
    );
}

#[test]
fn week_crosses_year_boundary() {
    assert_eq!(
        TimePeriod::OneWeek.start_date_from(date(2021, 1, 3)),
        date(2020, 12, 27)
    );
}

#[test]
fn offsets_match_period() {
    assert_eq!(TimePeriod::OneWeek.offset(), Offset::Days(7));
    assert_eq!(TimePeriod::OneMonth.offset(), Offset::Months(1));
    assert_eq!(TimePeriod::ThreeMonths.offset(), Offset::Months(3));
    assert_eq!(TimePeriod::SixMonths.offset(), Offset::Months(6));
    assert_eq!(TimePeriod::OneYear.offset(), Offset::Months(12));
}

// ---------------------------------------------------------------------------
// formatting
// ---------------------------------------------------------------------------

#[test]
fn start_date_string_is_zero_padded() {
    let today = date(2021, 1, 16);
    assert_eq!(TimePeriod::OneWeek.start_date_string_from(today), "09-01-2021");
    assert_eq!(TimePeriod::OneMonth.start_date_string_from(today), "16-12-2020");
}

#[test]
fn start_date_string_uses_local_today() {
    for period in TimePeriod::ALL {
        let before = Local::now().date_naive();
        let actual = period.start_date_string();
        let after = Local::now().date_naive();
        assert!(
            actual == period.start_date_string_from(before)
                || actual == period.start_date_string_from(after),
            "{period:?} produced {actual}"
        );
    }
}

#[test]
fn labels() {
    let labels: Vec<&str> = TimePeriod::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["1W", "1M", "3M", "6M", "1Y"]);
}

// ---------------------------------------------------------------------------
// QueryParameters
// ---------------------------------------------------------------------------

#[test]
fn parameters_for_fixed_date() {
    let params = QueryParameters::on(Region::Toronto, TimePeriod::OneWeek, date(2021, 5, 8));
    assert_eq!(params.stat, "cases");
    assert_eq!(params.loc, "3595");
    assert_eq!(params.after, "01-05-2021");
}

#[test]
fn parameters_are_deterministic() {
    let today = date(2021, 5, 8);
    for region in Region::ALL {
        for period in TimePeriod::ALL {
            assert_eq!(
                QueryParameters::on(region, period, today),
                QueryParameters::on(region, period, today)
            );
        }
    }
}

#[test]
fn build_parameters_uses_region_identifier() {
    let params = build_parameters(Region::Ontario, TimePeriod::OneYear);
    assert_eq!(params.stat, "cases");
    assert_eq!(params.loc, "ON");
    assert_eq!(params.after.len(), "dd-mm-yyyy".len());
}
