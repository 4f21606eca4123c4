//! The decision engine facade.

use crate::alerts::{self, AlertContext, MaternityAlert};
use crate::antenatal::{self, AntenatalOverview, NextVisit};
use crate::apgar::{self, ApgarAssessment, ApgarScore};
use crate::components::{
    ApgarObservation, ApgarSeries, ImmunizationChain, ObstetricRecord, VisitRecord,
    VitalObservation,
};
use crate::config::EngineConfig;
use crate::postpartum::{self, ObservationSlot, VitalAssessment};
use crate::risk::{self, RiskFactor};
use crate::temporal::PregnancyDates;
use crate::tetanus::{self, TetanusSchedule};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Entry point bundling every calculator with the configuration resolved at startup.
///
/// Cheap to clone; clones share the same configuration.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    cfg: Arc<EngineConfig>,
}

impl DecisionEngine {
    pub fn new(cfg: Arc<EngineConfig>) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Dating values for `lmp` on `today`, or `None` when the LMP is unknown.
    pub fn pregnancy_dates(
        &self,
        lmp: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Option<PregnancyDates> {
        PregnancyDates::derive(lmp, today)
    }

    pub fn risk_factors(
        &self,
        record: &ObstetricRecord,
        patient_age: Option<u32>,
    ) -> Vec<RiskFactor> {
        risk::detect_risk_factors(record, patient_age)
    }

    pub fn risk_labels(
        &self,
        record: &ObstetricRecord,
        patient_age: Option<u32>,
    ) -> Vec<&'static str> {
        risk::risk_labels(record, patient_age)
    }

    pub fn score_apgar(&self, observation: &ApgarObservation) -> ApgarScore {
        apgar::score_apgar(observation)
    }

    pub fn assess_apgar(&self, series: &ApgarSeries) -> ApgarAssessment {
        apgar::assess_series(series)
    }

    pub fn assess_vitals(&self, observation: &VitalObservation) -> VitalAssessment {
        postpartum::assess_observation(observation)
    }

    /// Post-partum observation slots using the configured window and interval.
    pub fn observation_schedule(&self, start: NaiveDateTime) -> Vec<ObservationSlot> {
        postpartum::observation_schedule(
            start,
            self.cfg.observation_window_minutes(),
            self.cfg.observation_interval_minutes(),
        )
    }

    pub fn next_visit(
        &self,
        visits: &[VisitRecord],
        last_visit_date: Option<NaiveDate>,
    ) -> NextVisit {
        antenatal::next_visit(visits, last_visit_date)
    }

    pub fn antenatal_overview(
        &self,
        visits: &[VisitRecord],
        last_visit_date: Option<NaiveDate>,
    ) -> AntenatalOverview {
        antenatal::antenatal_overview(visits, last_visit_date)
    }

    pub fn next_tetanus_dose(&self, chain: &ImmunizationChain) -> TetanusSchedule {
        tetanus::next_tetanus_dose(chain)
    }

    pub fn maternity_alerts(
        &self,
        ctx: &AlertContext<'_>,
        today: NaiveDate,
    ) -> Vec<MaternityAlert> {
        alerts::maternity_alerts(&self.cfg, ctx, today)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Arc::new(EngineConfig::default()))
    }
}
