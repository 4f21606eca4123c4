//! Obstetric record domain model.
//!
//! Only the fields the engine reasons about are carried here; contact details, partner
//! information and laboratory panels stay with the owning record store.

use chrono::NaiveDate;
use obstetric_types::NonEmptyText;

/// Snapshot of one pregnancy's obstetric record.
///
/// Risk predicates are independent booleans. Nothing here enforces mutual exclusion (a record
/// may carry both age flags if the source data says so).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstetricRecord {
    /// Date of the last menstrual period.
    pub last_menstrual_period: Option<NaiveDate>,
    pub parity: Option<u32>,
    pub gravidity: Option<u32>,
    /// Number of earlier pregnancies, whatever their outcome.
    pub prior_pregnancies: Option<u32>,

    pub age_under_16: bool,
    pub age_over_35: bool,
    /// Height below 150 cm.
    pub short_stature: bool,
    /// Parity of six or more.
    pub high_parity: bool,
    /// Cesarean at the previous delivery.
    pub prior_cesarean: bool,
    /// Stillbirth at the previous delivery.
    pub prior_stillbirth: bool,
    /// Sickle-cell disease, SS or SC genotype.
    pub hemoglobinopathy: bool,
    pub known_hypertension: bool,
    pub recurrent_miscarriage: bool,
    pub diabetes: bool,
    /// Free-text risk factors not covered by a flag.
    pub other_factors: Option<NonEmptyText>,
}
