//! # Obstetric Core
//!
//! Clinical rules for maternity follow-up.
//!
//! This crate holds pure calculators over already-loaded records:
//! - Pregnancy dating from the last menstrual period
//! - Maternal risk-factor detection
//! - Newborn Apgar scoring
//! - Post-partum danger-sign detection
//! - Antenatal visit and tetanus-toxoid scheduling
//! - The maternity alert board
//!
//! **No I/O**: loading records, persistence and presentation belong to callers such as the
//! `obstetric-records` crate and the `obstetric` runner.

pub mod alerts;
pub mod antenatal;
pub mod apgar;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod postpartum;
pub mod risk;
pub mod severity;
pub mod temporal;
pub mod tetanus;
pub mod thresholds;

pub use alerts::{maternity_alerts, AlertContext, MaternityAlert, MaternityAlertKind};
pub use antenatal::{AntenatalOverview, NextVisit, VisitPanel, VisitSummary};
pub use apgar::{ApgarAssessment, ApgarBand, ApgarScore, ResuscitationUrgency};
pub use components::{
    ApgarObservation, ApgarSeries, ApgarTimePoint, BleedingQuality, Consciousness,
    ImmunizationChain, ObstetricRecord, PerinealState, UterineContraction, VisitRecord,
    VisitStatus, VitalObservation,
};
pub use config::{config_from_env_values, EngineConfig};
pub use engine::DecisionEngine;
pub use error::{EngineError, EngineResult};
pub use postpartum::{
    ObservationSlot, PostpartumAlert, PostpartumAlertKind, PostpartumRisk, VitalAssessment,
};
pub use risk::RiskFactor;
pub use severity::{AlertTag, Severity};
pub use temporal::{PregnancyDates, Trimester};
pub use tetanus::TetanusSchedule;

pub use obstetric_types::{ApgarSubScore, NonEmptyText};
