//! Straight-line depreciation engine for the IT equipment inventory
//!
//! Assets depreciate linearly over a fixed five-year useful life. Two views
//! are derived from the same acquisition facts and deliberately disagree:
//! [`compute`] reports only depreciation already incurred (the per-year
//! columns of the inventory table), while [`projected_schedule`] reports the
//! full five-year projection regardless of elapsed time (the detail modal).
//! Both are pure functions of their inputs; `as_of` is always explicit.

use chrono::{Datelike, Months, NaiveDate};

/// Fixed useful life for every asset, in years
pub const USEFUL_LIFE_YEARS: u32 = 5;

/// Current depreciation state of an asset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Depreciation {
    pub yearly_depreciation: f64,
    /// Fractional years since purchase, clamped to [0, 5]
    pub years_elapsed: f64,
    pub book_value: f64,
    /// Depreciation already incurred per year 1..=5; zero beyond the elapsed span
    pub by_year: [f64; 5],
    pub is_fully_depreciated: bool,
}

/// One row of the projected five-year schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry {
    pub year: u32,
    pub depreciation: f64,
    pub book_value: f64,
}

/// Compute the current depreciation state of an asset.
///
/// Assets without a purchase date, without a cost, or with a non-positive
/// cost do not depreciate: every figure is zero and the asset is not
/// considered fully depreciated. The book value is always within
/// `[0, purchase_cost]`.
pub fn compute(
    purchase_date: Option<NaiveDate>,
    purchase_cost: Option<f64>,
    as_of: NaiveDate,
) -> Depreciation {
    let (date, cost) = match (purchase_date, purchase_cost) {
        (Some(date), Some(cost)) if cost > 0.0 => (date, cost),
        _ => return Depreciation::default(),
    };

    let yearly = cost / USEFUL_LIFE_YEARS as f64;
    let years_elapsed = years_between(date, as_of).clamp(0.0, USEFUL_LIFE_YEARS as f64);
    let book_value = (cost - yearly * years_elapsed).max(0.0);

    let mut by_year = [0.0; 5];
    for (i, slot) in by_year.iter_mut().enumerate() {
        if (i + 1) as f64 <= years_elapsed {
            *slot = yearly;
        }
    }

    Depreciation {
        yearly_depreciation: yearly,
        years_elapsed,
        book_value,
        by_year,
        is_fully_depreciated: years_elapsed >= USEFUL_LIFE_YEARS as f64,
    }
}

/// Projected five-year schedule, independent of elapsed time.
///
/// Always returns exactly five entries; all-zero entries when the
/// acquisition facts are missing or the cost is non-positive.
pub fn projected_schedule(
    purchase_date: Option<NaiveDate>,
    purchase_cost: Option<f64>,
) -> [ScheduleEntry; 5] {
    let cost = match (purchase_date, purchase_cost) {
        (Some(_), Some(cost)) if cost > 0.0 => cost,
        _ => {
            return std::array::from_fn(|i| ScheduleEntry {
                year: i as u32 + 1,
                depreciation: 0.0,
                book_value: 0.0,
            })
        }
    };

    let yearly = cost / USEFUL_LIFE_YEARS as f64;
    std::array::from_fn(|i| {
        let year = i as u32 + 1;
        ScheduleEntry {
            year,
            depreciation: yearly,
            book_value: (cost - yearly * year as f64).max(0.0),
        }
    })
}

/// Fractional calendar years between two dates: whole months plus a
/// day-based fraction of the partial month, divided by twelve. Negative when
/// `end` precedes `start`.
fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let mut whole = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut anchor = shift_months(start, whole);
    if anchor > end {
        whole -= 1;
        anchor = shift_months(start, whole);
    }
    let next = shift_months(start, whole + 1);
    let span = (next - anchor).num_days();
    let fraction = if span > 0 {
        (end - anchor).num_days() as f64 / span as f64
    } else {
        0.0
    };
    (whole as f64 + fraction) / 12.0
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_inputs_do_not_depreciate() {
        let as_of = date(2025, 6, 1);
        for (pd, pc) in [
            (None, Some(25000.0)),
            (Some(date(2023, 1, 1)), None),
            (Some(date(2023, 1, 1)), Some(0.0)),
            (Some(date(2023, 1, 1)), Some(-500.0)),
        ] {
            let result = compute(pd, pc, as_of);
            assert_eq!(result.yearly_depreciation, 0.0);
            assert_eq!(result.years_elapsed, 0.0);
            assert_eq!(result.book_value, 0.0);
            assert_eq!(result.by_year, [0.0; 5]);
            assert!(!result.is_fully_depreciated);
        }
    }

    #[test]
    fn half_life_asset() {
        // Exactly 2.5 years: 30 whole months
        let result = compute(Some(date(2023, 1, 1)), Some(25000.0), date(2025, 7, 1));
        assert_eq!(result.yearly_depreciation, 5000.0);
        assert_eq!(result.years_elapsed, 2.5);
        assert_eq!(result.book_value, 12500.0);
        assert!(!result.is_fully_depreciated);
        // Coarse view: only the two fully elapsed years show depreciation
        assert_eq!(result.by_year, [5000.0, 5000.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn fully_depreciated_at_five_years() {
        let result = compute(Some(date(2019, 6, 15)), Some(25000.0), date(2024, 6, 15));
        assert_eq!(result.years_elapsed, 5.0);
        assert_eq!(result.book_value, 0.0);
        assert!(result.is_fully_depreciated);
        assert_eq!(result.by_year, [5000.0; 5]);
    }

    #[test]
    fn elapsed_years_clamp_at_five() {
        let result = compute(Some(date(2010, 1, 1)), Some(10000.0), date(2024, 1, 1));
        assert_eq!(result.years_elapsed, 5.0);
        assert_eq!(result.book_value, 0.0);
        assert!(result.is_fully_depreciated);
    }

    #[test]
    fn future_purchase_has_no_elapsed_depreciation() {
        let result = compute(Some(date(2026, 1, 1)), Some(10000.0), date(2024, 1, 1));
        assert_eq!(result.years_elapsed, 0.0);
        assert_eq!(result.book_value, 10000.0);
        assert_eq!(result.by_year, [0.0; 5]);
    }

    #[test]
    fn projected_schedule_ignores_elapsed_time() {
        // Same table whether the asset is brand new or ancient
        let schedule = projected_schedule(Some(date(2024, 1, 1)), Some(25000.0));
        let expected = [
            (1, 5000.0, 20000.0),
            (2, 5000.0, 15000.0),
            (3, 5000.0, 10000.0),
            (4, 5000.0, 5000.0),
            (5, 5000.0, 0.0),
        ];
        for (entry, (year, depreciation, book_value)) in schedule.iter().zip(expected) {
            assert_eq!(entry.year, year);
            assert_eq!(entry.depreciation, depreciation);
            assert_eq!(entry.book_value, book_value);
        }
    }

    #[test]
    fn projected_schedule_is_zero_for_invalid_inputs() {
        let schedule = projected_schedule(None, Some(25000.0));
        assert_eq!(schedule.len(), 5);
        for (i, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.year, i as u32 + 1);
            assert_eq!(entry.depreciation, 0.0);
            assert_eq!(entry.book_value, 0.0);
        }
    }

    #[test]
    fn fractional_months_use_day_position() {
        // 18 months exactly
        let years = years_between(date(2023, 1, 10), date(2024, 7, 10));
        assert_eq!(years, 1.5);
        // Month-end clamping: Jan 31 + 1 month = Feb 28
        let years = years_between(date(2023, 1, 31), date(2023, 2, 28));
        assert!((years - 1.0 / 12.0).abs() < 1e-9);
    }
}
