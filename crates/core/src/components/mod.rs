//! Inputs handed to the decision engine.
//!
//! These are read-only snapshots of larger clinical records, already loaded by whoever owns
//! persistence. Every optional measurement is an `Option` so "not measured" never masquerades
//! as zero.

pub mod apgar;
pub mod immunization;
pub mod obstetric_record;
pub mod visit;
pub mod vitals;

pub use apgar::{ApgarObservation, ApgarSeries, ApgarTimePoint};
pub use immunization::ImmunizationChain;
pub use obstetric_record::ObstetricRecord;
pub use visit::{VisitRecord, VisitStatus};
pub use vitals::{
    BleedingQuality, Consciousness, PerinealState, UterineContraction, VitalObservation,
};
