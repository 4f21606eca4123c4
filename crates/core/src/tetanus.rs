//! Maternal tetanus-toxoid dose scheduling.

use crate::components::ImmunizationChain;
use crate::thresholds::tetanus_interval_before;
use chrono::NaiveDate;
use serde::Serialize;

/// Where a chain stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TetanusSchedule {
    /// `dose` (1 to 5) is the next to give. Dose 1 has no due date: it is given at first
    /// contact.
    Pending {
        dose: usize,
        due_date: Option<NaiveDate>,
    },
    /// All five doses are dated.
    Complete,
}

impl TetanusSchedule {
    pub fn is_complete(&self) -> bool {
        matches!(self, TetanusSchedule::Complete)
    }
}

/// Next pending dose in the chain and when it is due.
///
/// The first undated dose is reported even if later doses carry dates. Such a chain is
/// inconsistent; it is logged and left as is.
pub fn next_tetanus_dose(chain: &ImmunizationChain) -> TetanusSchedule {
    let doses = chain.doses();
    let Some(missing_idx) = doses.iter().position(Option::is_none) else {
        return TetanusSchedule::Complete;
    };
    let dose = missing_idx + 1;

    if doses[missing_idx..].iter().any(Option::is_some) {
        tracing::warn!(
            pending_dose = dose,
            "tetanus chain has a later dose dated while an earlier one is missing"
        );
    }

    let due_date = match (chain.dose(dose - 1), tetanus_interval_before(dose)) {
        (Some(previous), Some(interval)) => interval.add_to(previous),
        _ => None,
    };

    TetanusSchedule::Pending { dose, due_date }
}
