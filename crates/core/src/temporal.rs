//! Pregnancy dating from the last menstrual period (LMP).
//!
//! All arithmetic is on calendar dates with no time-of-day or time zone component. A missing LMP
//! makes every derived value undefined: callers receive `None` and must not read that as
//! "zero weeks".

use crate::constants::{
    DAYS_PER_WEEK, FIRST_TRIMESTER_LAST_WEEK, PREGNANCY_TERM_DAYS, SECOND_TRIMESTER_LAST_WEEK,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Trimester of pregnancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

/// Expected delivery date: LMP + 280 days.
///
/// `None` when the result falls outside the supported calendar range.
pub fn expected_delivery_date(lmp: NaiveDate) -> Option<NaiveDate> {
    lmp.checked_add_days(Days::new(PREGNANCY_TERM_DAYS))
}

/// Completed gestational weeks on `today`.
///
/// An LMP in the future yields 0 rather than a negative age.
pub fn gestational_weeks(lmp: NaiveDate, today: NaiveDate) -> u32 {
    let elapsed_days = (today - lmp).num_days();
    if elapsed_days < 0 {
        tracing::debug!(%lmp, %today, "LMP is in the future; gestational age clamped to 0");
        return 0;
    }
    u32::try_from(elapsed_days / DAYS_PER_WEEK).unwrap_or(u32::MAX)
}

/// Trimester for a gestational week: 0–13 first, 14–28 second, 29 and later third.
pub fn trimester_for_week(week: u32) -> Trimester {
    if week <= FIRST_TRIMESTER_LAST_WEEK {
        Trimester::First
    } else if week <= SECOND_TRIMESTER_LAST_WEEK {
        Trimester::Second
    } else {
        Trimester::Third
    }
}

/// Every date-derived value for one pregnancy on a given day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PregnancyDates {
    pub last_menstrual_period: NaiveDate,
    pub expected_delivery_date: NaiveDate,
    pub gestational_weeks: u32,
    pub trimester: Trimester,
    /// Days from `today` until the expected delivery date; negative once overdue.
    pub days_until_delivery: i64,
}

impl PregnancyDates {
    /// Derive all dating values, or `None` when the LMP is unknown or too close to the end of
    /// the calendar for a delivery date to exist.
    pub fn derive(lmp: Option<NaiveDate>, today: NaiveDate) -> Option<Self> {
        let lmp = lmp?;
        let Some(edd) = expected_delivery_date(lmp) else {
            tracing::debug!(%lmp, "expected delivery date out of range");
            return None;
        };
        let weeks = gestational_weeks(lmp, today);

        Some(Self {
            last_menstrual_period: lmp,
            expected_delivery_date: edd,
            gestational_weeks: weeks,
            trimester: trimester_for_week(weeks),
            days_until_delivery: (edd - today).num_days(),
        })
    }
}
