//! Maternal tetanus-toxoid dose chain.

use crate::constants::TETANUS_DOSE_COUNT;
use chrono::NaiveDate;

/// Administration dates of doses 1 to 5, in order. `None` means the dose is still pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmunizationChain {
    doses: [Option<NaiveDate>; TETANUS_DOSE_COUNT],
}

impl ImmunizationChain {
    pub fn new(doses: [Option<NaiveDate>; TETANUS_DOSE_COUNT]) -> Self {
        Self { doses }
    }

    /// Chain built from the dates recorded so far, dose 1 first.
    ///
    /// Dates past the fifth are ignored.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut doses = [None; TETANUS_DOSE_COUNT];
        for (slot, date) in doses.iter_mut().zip(dates) {
            *slot = Some(date);
        }
        Self { doses }
    }

    pub fn doses(&self) -> &[Option<NaiveDate>; TETANUS_DOSE_COUNT] {
        &self.doses
    }

    /// Date of dose `number` (1-based), if recorded.
    pub fn dose(&self, number: usize) -> Option<NaiveDate> {
        number
            .checked_sub(1)
            .and_then(|idx| self.doses.get(idx).copied().flatten())
    }
}
