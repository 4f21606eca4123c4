//! Post-partum vital-sign observation.
//!
//! One timed observation taken during the two-hour surveillance that follows delivery.

use serde::{Deserialize, Serialize};

/// Reported quality of post-partum bleeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BleedingQuality {
    Absent,
    Normal,
    Abundant,
    VeryAbundant,
}

impl BleedingQuality {
    /// Abundant or very abundant.
    pub fn is_heavy(self) -> bool {
        matches!(self, BleedingQuality::Abundant | BleedingQuality::VeryAbundant)
    }
}

/// Palpated quality of the uterine contraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UterineContraction {
    Present,
    Absent,
    Weak,
    Normal,
    Strong,
}

impl UterineContraction {
    /// Absent or weak, i.e. a uterus that is not clamping down.
    pub fn is_poor(self) -> bool {
        matches!(self, UterineContraction::Absent | UterineContraction::Weak)
    }
}

/// State of the perineum at observation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerinealState {
    Normal,
    Episiotomy,
    Tear,
    Hematoma,
    Infection,
}

/// Level of consciousness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consciousness {
    Normal,
    Confused,
    Drowsy,
    Coma,
}

/// A single post-partum observation. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VitalObservation {
    /// Body temperature in °C.
    pub temperature: Option<f64>,
    /// Systolic pressure in mmHg.
    pub systolic: Option<u16>,
    /// Diastolic pressure in mmHg.
    pub diastolic: Option<u16>,
    /// Pulse in beats per minute.
    pub pulse: Option<u16>,
    /// Breaths per minute.
    pub respiration_rate: Option<u16>,
    /// Estimated blood loss in mL.
    pub bleeding_volume_ml: Option<u32>,
    pub bleeding_quality: Option<BleedingQuality>,
    pub contraction: Option<UterineContraction>,
    pub perineal_state: Option<PerinealState>,
    pub consciousness: Option<Consciousness>,
}
