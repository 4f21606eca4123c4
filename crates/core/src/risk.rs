//! Maternal risk-factor detection.
//!
//! Each predicate of the obstetric record maps to one labelled [`RiskFactor`]. Output order is
//! fixed by the declaration order of [`RiskFactor`], not by the order predicates are checked.

use crate::components::ObstetricRecord;
use crate::thresholds::{MAX_LOW_RISK_AGE, MIN_LOW_RISK_AGE};
use serde::{Deserialize, Serialize};

/// Recognised maternal risk factors, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    AgeUnder16,
    AgeOver35,
    ShortStature,
    HighParity,
    PriorCesarean,
    PriorStillbirth,
    Hemoglobinopathy,
    KnownHypertension,
    RecurrentMiscarriage,
    Diabetes,
    OtherFactors,
}

impl RiskFactor {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RiskFactor::AgeUnder16 => "age under 16",
            RiskFactor::AgeOver35 => "age over 35",
            RiskFactor::ShortStature => "stature under 150cm",
            RiskFactor::HighParity => "parity ≥ 6",
            RiskFactor::PriorCesarean => "prior cesarean",
            RiskFactor::PriorStillbirth => "prior stillbirth",
            RiskFactor::Hemoglobinopathy => "hemoglobinopathy SS/SC",
            RiskFactor::KnownHypertension => "known hypertension",
            RiskFactor::RecurrentMiscarriage => "recurrent miscarriage",
            RiskFactor::Diabetes => "diabetes",
            RiskFactor::OtherFactors => "other factors present",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scan a record for risk factors.
///
/// `patient_age` comes from the demographic record when known. When supplied it decides both
/// age rules and the record's own age flags are ignored; otherwise the flags are used. Every
/// other rule reads the record's flags.
pub fn detect_risk_factors(record: &ObstetricRecord, patient_age: Option<u32>) -> Vec<RiskFactor> {
    let (age_under_16, age_over_35) = match patient_age {
        Some(age) => {
            if (age < MIN_LOW_RISK_AGE) != record.age_under_16
                || (age > MAX_LOW_RISK_AGE) != record.age_over_35
            {
                tracing::debug!(age, "supplied age disagrees with recorded age flags");
            }
            (age < MIN_LOW_RISK_AGE, age > MAX_LOW_RISK_AGE)
        }
        None => (record.age_under_16, record.age_over_35),
    };

    let predicates = [
        (age_under_16, RiskFactor::AgeUnder16),
        (age_over_35, RiskFactor::AgeOver35),
        (record.short_stature, RiskFactor::ShortStature),
        (record.high_parity, RiskFactor::HighParity),
        (record.prior_cesarean, RiskFactor::PriorCesarean),
        (record.prior_stillbirth, RiskFactor::PriorStillbirth),
        (record.hemoglobinopathy, RiskFactor::Hemoglobinopathy),
        (record.known_hypertension, RiskFactor::KnownHypertension),
        (record.recurrent_miscarriage, RiskFactor::RecurrentMiscarriage),
        (record.diabetes, RiskFactor::Diabetes),
        (record.other_factors.is_some(), RiskFactor::OtherFactors),
    ];

    predicates
        .into_iter()
        .filter_map(|(present, factor)| present.then_some(factor))
        .collect()
}

/// Ordered human-readable labels for [`detect_risk_factors`].
pub fn risk_labels(record: &ObstetricRecord, patient_age: Option<u32>) -> Vec<&'static str> {
    detect_risk_factors(record, patient_age)
        .into_iter()
        .map(RiskFactor::label)
        .collect()
}

/// A pregnancy with at least one risk factor is followed as high-risk.
pub fn is_high_risk(record: &ObstetricRecord, patient_age: Option<u32>) -> bool {
    !detect_risk_factors(record, patient_age).is_empty()
}
