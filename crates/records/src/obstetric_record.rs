//! Obstetric record wire model and translation helpers.
//!
//! The file mirrors the obstetric tab of the patient chart: dating, obstetric history counts and
//! the risk checklist. Every checklist key is optional and defaults to unchecked.

use crate::{parse_wire, render_wire, RecordsResult};
use chrono::NaiveDate;
use obstetric_core::ObstetricRecord;
use obstetric_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// Obstetric record file operations.
///
/// Zero-sized type used for namespacing; all methods are associated functions.
pub struct ObstetricRecordFile;

impl ObstetricRecordFile {
    /// Parse an obstetric record from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::Translation`](crate::RecordsError::Translation) naming the
    /// failing path if a key is unknown or a value has the wrong type.
    pub fn parse(yaml_text: &str) -> RecordsResult<ObstetricRecord> {
        let wire: ObstetricRecordWire = parse_wire(yaml_text, "Obstetric record")?;
        Ok(wire_to_domain(wire))
    }

    pub fn render(record: &ObstetricRecord) -> RecordsResult<String> {
        render_wire(&domain_to_wire(record))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ObstetricRecordWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_menstrual_period: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gravidity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prior_pregnancies: Option<u32>,
    #[serde(default)]
    risk_factors: RiskChecklistWire,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
struct RiskChecklistWire {
    age_under_16: bool,
    age_over_35: bool,
    short_stature: bool,
    high_parity: bool,
    prior_cesarean: bool,
    prior_stillbirth: bool,
    hemoglobinopathy: bool,
    known_hypertension: bool,
    recurrent_miscarriage: bool,
    diabetes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_factors: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: ObstetricRecordWire) -> ObstetricRecord {
    let risks = wire.risk_factors;
    ObstetricRecord {
        last_menstrual_period: wire.last_menstrual_period,
        parity: wire.parity,
        gravidity: wire.gravidity,
        prior_pregnancies: wire.prior_pregnancies,
        age_under_16: risks.age_under_16,
        age_over_35: risks.age_over_35,
        short_stature: risks.short_stature,
        high_parity: risks.high_parity,
        prior_cesarean: risks.prior_cesarean,
        prior_stillbirth: risks.prior_stillbirth,
        hemoglobinopathy: risks.hemoglobinopathy,
        known_hypertension: risks.known_hypertension,
        recurrent_miscarriage: risks.recurrent_miscarriage,
        diabetes: risks.diabetes,
        // Blank text means the field was left empty on the form.
        other_factors: NonEmptyText::from_optional(risks.other_factors),
    }
}

fn domain_to_wire(record: &ObstetricRecord) -> ObstetricRecordWire {
    ObstetricRecordWire {
        last_menstrual_period: record.last_menstrual_period,
        parity: record.parity,
        gravidity: record.gravidity,
        prior_pregnancies: record.prior_pregnancies,
        risk_factors: RiskChecklistWire {
            age_under_16: record.age_under_16,
            age_over_35: record.age_over_35,
            short_stature: record.short_stature,
            high_parity: record.high_parity,
            prior_cesarean: record.prior_cesarean,
            prior_stillbirth: record.prior_stillbirth,
            hemoglobinopathy: record.hemoglobinopathy,
            known_hypertension: record.known_hypertension,
            recurrent_miscarriage: record.recurrent_miscarriage,
            diabetes: record.diabetes,
            other_factors: record
                .other_factors
                .as_ref()
                .map(|text| text.as_str().to_string()),
        },
    }
}
