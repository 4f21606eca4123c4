//! Post-partum vital observation wire model.

use crate::{parse_wire, render_wire, RecordsError, RecordsResult};
use obstetric_core::{
    BleedingQuality, Consciousness, PerinealState, UterineContraction, VitalObservation,
};
use serde::{Deserialize, Serialize};

/// Vital observation file operations.
pub struct VitalSigns;

impl VitalSigns {
    /// Parse one post-partum observation from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::Translation`] for unknown keys, wrong types or unknown category
    /// values, and [`RecordsError::InvalidInput`] for a temperature that is not a finite number.
    pub fn parse(yaml_text: &str) -> RecordsResult<VitalObservation> {
        let wire: VitalObservationWire = parse_wire(yaml_text, "Vital observation")?;

        if let Some(temperature) = wire.temperature {
            if !temperature.is_finite() {
                return Err(RecordsError::InvalidInput(format!(
                    "temperature must be a finite number, got {temperature}"
                )));
            }
        }

        Ok(VitalObservation {
            temperature: wire.temperature,
            systolic: wire.systolic,
            diastolic: wire.diastolic,
            pulse: wire.pulse,
            respiration_rate: wire.respiration_rate,
            bleeding_volume_ml: wire.bleeding_volume_ml,
            bleeding_quality: wire.bleeding_quality,
            contraction: wire.contraction,
            perineal_state: wire.perineal_state,
            consciousness: wire.consciousness,
        })
    }

    pub fn render(observation: &VitalObservation) -> RecordsResult<String> {
        let wire = VitalObservationWire {
            temperature: observation.temperature,
            systolic: observation.systolic,
            diastolic: observation.diastolic,
            pulse: observation.pulse,
            respiration_rate: observation.respiration_rate,
            bleeding_volume_ml: observation.bleeding_volume_ml,
            bleeding_quality: observation.bleeding_quality,
            contraction: observation.contraction,
            perineal_state: observation.perineal_state,
            consciousness: observation.consciousness,
        };
        render_wire(&wire)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
struct VitalObservationWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    systolic: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diastolic: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pulse: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    respiration_rate: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bleeding_volume_ml: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bleeding_quality: Option<BleedingQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contraction: Option<UterineContraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    perineal_state: Option<PerinealState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consciousness: Option<Consciousness>,
}
