//! Danger-sign detection during the immediate post-partum surveillance.
//!
//! Each observation is judged on its own. The monitor keeps no history; spotting a trend across
//! successive observations is left to the caller.

use crate::components::{BleedingQuality, Consciousness, VitalObservation};
use crate::severity::Severity;
use crate::thresholds::{
    RiskTrigger, VitalSign, ALTERED_CONSCIOUSNESS_SEVERITY, MODERATE_ESCALATION_COUNT,
    MODERATE_ESCALATION_SEVERITY, PLACENTAL_RETENTION_SEVERITY, POSTPARTUM_RISK_RULES,
    REPORTED_HEMORRHAGE_SEVERITY, VITAL_RULES,
};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Named post-partum danger signs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostpartumAlertKind {
    Hemorrhage,
    PlacentalRetention,
    AlteredConsciousness,
    Hypotension,
    Hypertension,
    Tachycardia,
    Hyperthermia,
    Hypothermia,
}

impl PostpartumAlertKind {
    pub fn label(self) -> &'static str {
        match self {
            PostpartumAlertKind::Hemorrhage => "postpartum hemorrhage",
            PostpartumAlertKind::PlacentalRetention => "placental retention risk",
            PostpartumAlertKind::AlteredConsciousness => "altered consciousness",
            PostpartumAlertKind::Hypotension => "hypotension",
            PostpartumAlertKind::Hypertension => "hypertension",
            PostpartumAlertKind::Tachycardia => "tachycardia",
            PostpartumAlertKind::Hyperthermia => "hyperthermia",
            PostpartumAlertKind::Hypothermia => "hypothermia",
        }
    }
}

/// Clinical risk a set of danger signs points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostpartumRisk {
    Hemorrhage,
    PostpartumHypertension,
    Infection,
    PlacentalRetention,
    SevereAnemia,
    PreeclampsiaOrShock,
}

impl PostpartumRisk {
    pub fn label(self) -> &'static str {
        match self {
            PostpartumRisk::Hemorrhage => "postpartum hemorrhage",
            PostpartumRisk::PostpartumHypertension => "postpartum hypertension",
            PostpartumRisk::Infection => "infection",
            PostpartumRisk::PlacentalRetention => "placental retention",
            PostpartumRisk::SevereAnemia => "severe anemia",
            PostpartumRisk::PreeclampsiaOrShock => "pre-eclampsia or shock",
        }
    }
}

/// One fired danger sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PostpartumAlert {
    pub kind: PostpartumAlertKind,
    pub severity: Severity,
    pub label: &'static str,
}

/// Alerts raised by one observation, the risks behind them and their combined severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VitalAssessment {
    pub alerts: Vec<PostpartumAlert>,
    /// In rule-table order, each risk once.
    pub risks: Vec<PostpartumRisk>,
    pub severity: Severity,
}

impl VitalAssessment {
    pub fn has(&self, kind: PostpartumAlertKind) -> bool {
        self.alerts.iter().any(|alert| alert.kind == kind)
    }

    /// Add an alert, keeping one entry per kind at its highest severity.
    fn raise(&mut self, kind: PostpartumAlertKind, severity: Severity) {
        match self.alerts.iter_mut().find(|alert| alert.kind == kind) {
            Some(existing) => existing.severity = existing.severity.max(severity),
            None => self.alerts.push(PostpartumAlert {
                kind,
                severity,
                label: kind.label(),
            }),
        }
    }
}

fn reading(observation: &VitalObservation, sign: VitalSign) -> Option<f64> {
    match sign {
        VitalSign::Temperature => observation.temperature,
        VitalSign::Systolic => observation.systolic.map(f64::from),
        VitalSign::Diastolic => observation.diastolic.map(f64::from),
        VitalSign::Pulse => observation.pulse.map(f64::from),
        VitalSign::BleedingVolume => observation.bleeding_volume_ml.map(f64::from),
    }
}

/// Evaluate one observation against the post-partum danger-sign rules.
///
/// Unmeasured fields never fire a rule. The overall severity is the highest alert severity,
/// raised to severe when two or more moderate alerts fire together. A bleeding volume above
/// 500 mL is critical on its own.
pub fn assess_observation(observation: &VitalObservation) -> VitalAssessment {
    let mut assessment = VitalAssessment::default();

    for rule in VITAL_RULES.iter() {
        if let Some(value) = reading(observation, rule.sign) {
            if rule.limit.breached_by(value) {
                assessment.raise(rule.alert, rule.severity);
            }
        }
    }

    if observation.bleeding_quality == Some(BleedingQuality::VeryAbundant) {
        assessment.raise(
            PostpartumAlertKind::Hemorrhage,
            REPORTED_HEMORRHAGE_SEVERITY,
        );
    }

    let heavy_bleeding = observation
        .bleeding_quality
        .is_some_and(BleedingQuality::is_heavy);
    let poor_contraction = observation.contraction.is_some_and(|c| c.is_poor());
    if heavy_bleeding && poor_contraction {
        assessment.raise(
            PostpartumAlertKind::PlacentalRetention,
            PLACENTAL_RETENTION_SEVERITY,
        );
    }

    if observation
        .consciousness
        .is_some_and(|c| c != Consciousness::Normal)
    {
        assessment.raise(
            PostpartumAlertKind::AlteredConsciousness,
            ALTERED_CONSCIOUSNESS_SEVERITY,
        );
    }

    for rule in POSTPARTUM_RISK_RULES.iter() {
        let triggered = match rule.trigger {
            RiskTrigger::Alert(kind) => assessment.has(kind),
            RiskTrigger::HeavyBleeding => heavy_bleeding,
            RiskTrigger::BleedingVolumeAbove(limit) => {
                observation.bleeding_volume_ml.is_some_and(|ml| ml > limit)
            }
        };
        if triggered && !assessment.risks.contains(&rule.risk) {
            assessment.risks.push(rule.risk);
        }
    }

    let highest = assessment
        .alerts
        .iter()
        .map(|alert| alert.severity)
        .max()
        .unwrap_or_default();
    let moderate_count = assessment
        .alerts
        .iter()
        .filter(|alert| alert.severity == Severity::Moderate)
        .count();

    assessment.severity = if moderate_count >= MODERATE_ESCALATION_COUNT {
        highest.max(MODERATE_ESCALATION_SEVERITY)
    } else {
        highest
    };

    if assessment.severity > Severity::Normal {
        tracing::debug!(
            severity = ?assessment.severity,
            alerts = assessment.alerts.len(),
            "post-partum danger signs detected"
        );
    }

    assessment
}

/// A planned observation time in the post-partum window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ObservationSlot {
    /// 1-based position in the plan.
    pub sequence: u32,
    pub at: NaiveDateTime,
    /// Minutes since the start of surveillance.
    pub elapsed_minutes: u32,
}

/// Observation times for a surveillance starting at `start`.
///
/// Slots are `interval_minutes` apart starting at `start` itself; `window_minutes /
/// interval_minutes` slots are produced (8 for the usual 120/15). A zero interval yields no
/// slots. Slots that would fall past the end of the calendar are dropped.
pub fn observation_schedule(
    start: NaiveDateTime,
    window_minutes: u32,
    interval_minutes: u32,
) -> Vec<ObservationSlot> {
    if interval_minutes == 0 {
        return Vec::new();
    }

    (0..window_minutes / interval_minutes)
        .map_while(|i| {
            let elapsed_minutes = i * interval_minutes;
            let at = start.checked_add_signed(Duration::minutes(i64::from(elapsed_minutes)))?;
            Some(ObservationSlot {
                sequence: i + 1,
                at,
                elapsed_minutes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::UterineContraction;
    use chrono::NaiveDate;

    fn kinds(assessment: &VitalAssessment) -> Vec<PostpartumAlertKind> {
        assessment.alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn empty_observation_is_normal() {
        let assessment = assess_observation(&VitalObservation::default());
        assert!(assessment.alerts.is_empty());
        assert_eq!(assessment.severity, Severity::Normal);
    }

    #[test]
    fn bleeding_volume_above_500_is_critical_alone() {
        let obs = VitalObservation {
            bleeding_volume_ml: Some(600),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(kinds(&assessment), vec![PostpartumAlertKind::Hemorrhage]);
        assert_eq!(assessment.severity, Severity::Critical);
    }

    #[test]
    fn bleeding_volume_of_exactly_500_does_not_fire() {
        let obs = VitalObservation {
            bleeding_volume_ml: Some(500),
            ..Default::default()
        };
        assert_eq!(assess_observation(&obs).severity, Severity::Normal);
    }

    #[test]
    fn fever_and_tachycardia_escalate_to_severe() {
        let obs = VitalObservation {
            temperature: Some(38.5),
            pulse: Some(110),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(
            kinds(&assessment),
            vec![
                PostpartumAlertKind::Hyperthermia,
                PostpartumAlertKind::Tachycardia
            ]
        );
        assert!(assessment
            .alerts
            .iter()
            .all(|a| a.severity == Severity::Moderate));
        assert_eq!(assessment.severity, Severity::Severe);
    }

    #[test]
    fn single_moderate_finding_stays_moderate() {
        let obs = VitalObservation {
            temperature: Some(35.5),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(kinds(&assessment), vec![PostpartumAlertKind::Hypothermia]);
        assert_eq!(assessment.severity, Severity::Moderate);
    }

    #[test]
    fn blood_pressure_rules() {
        let low = VitalObservation {
            systolic: Some(85),
            ..Default::default()
        };
        assert_eq!(
            kinds(&assess_observation(&low)),
            vec![PostpartumAlertKind::Hypotension]
        );

        let high_diastolic = VitalObservation {
            systolic: Some(130),
            diastolic: Some(95),
            ..Default::default()
        };
        assert_eq!(
            kinds(&assess_observation(&high_diastolic)),
            vec![PostpartumAlertKind::Hypertension]
        );
    }

    #[test]
    fn both_pressures_high_raise_one_hypertension_alert() {
        let obs = VitalObservation {
            systolic: Some(160),
            diastolic: Some(100),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(kinds(&assessment), vec![PostpartumAlertKind::Hypertension]);
        assert_eq!(assessment.severity, Severity::Moderate);
    }

    #[test]
    fn very_abundant_bleeding_without_volume_is_severe_hemorrhage() {
        let obs = VitalObservation {
            bleeding_quality: Some(BleedingQuality::VeryAbundant),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(kinds(&assessment), vec![PostpartumAlertKind::Hemorrhage]);
        assert_eq!(assessment.severity, Severity::Severe);
    }

    #[test]
    fn volume_breach_and_reported_bleeding_give_one_critical_alert() {
        let obs = VitalObservation {
            bleeding_volume_ml: Some(700),
            bleeding_quality: Some(BleedingQuality::VeryAbundant),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(assessment.alerts.len(), 1);
        assert_eq!(assessment.alerts[0].severity, Severity::Critical);
        assert_eq!(assessment.severity, Severity::Critical);
    }

    #[test]
    fn hemorrhage_volume_forces_critical_over_moderate_combination() {
        let obs = VitalObservation {
            temperature: Some(38.4),
            pulse: Some(120),
            systolic: Some(85),
            bleeding_volume_ml: Some(900),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(assessment.severity, Severity::Critical);
        assert!(assessment.has(PostpartumAlertKind::Hemorrhage));
        assert_eq!(assessment.alerts.len(), 4);
    }

    #[test]
    fn heavy_bleeding_with_poor_contraction_flags_retention() {
        let obs = VitalObservation {
            bleeding_quality: Some(BleedingQuality::Abundant),
            contraction: Some(UterineContraction::Weak),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(
            kinds(&assessment),
            vec![PostpartumAlertKind::PlacentalRetention]
        );
        assert_eq!(assessment.severity, Severity::Severe);

        let contracted = VitalObservation {
            contraction: Some(UterineContraction::Strong),
            ..obs
        };
        assert!(assess_observation(&contracted).alerts.is_empty());
    }

    #[test]
    fn altered_consciousness_is_critical() {
        let obs = VitalObservation {
            consciousness: Some(Consciousness::Drowsy),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(
            kinds(&assessment),
            vec![PostpartumAlertKind::AlteredConsciousness]
        );
        assert_eq!(assessment.severity, Severity::Critical);
    }

    #[test]
    fn unmeasured_fields_never_fire() {
        let obs = VitalObservation {
            respiration_rate: Some(40),
            consciousness: Some(Consciousness::Normal),
            bleeding_quality: Some(BleedingQuality::Normal),
            contraction: Some(UterineContraction::Absent),
            ..Default::default()
        };
        assert_eq!(assess_observation(&obs), VitalAssessment::default());
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let obs = VitalObservation {
            temperature: Some(39.0),
            systolic: Some(150),
            pulse: Some(104),
            ..Default::default()
        };
        assert_eq!(assess_observation(&obs), assess_observation(&obs));
    }

    #[test]
    fn schedule_covers_two_hours_every_fifteen_minutes() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10)
            .and_then(|d| d.and_hms_opt(14, 50, 0))
            .expect("valid datetime");
        let slots = observation_schedule(start, 120, 15);

        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].at, start);
        assert_eq!(slots[0].sequence, 1);
        assert_eq!(slots[1].elapsed_minutes, 15);
        assert_eq!(
            slots[7].at,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .and_then(|d| d.and_hms_opt(16, 35, 0))
                .expect("valid datetime")
        );
    }

    #[test]
    fn volume_above_1000_adds_severe_anemia_risk() {
        let obs = VitalObservation {
            bleeding_volume_ml: Some(1200),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(
            assessment.risks,
            vec![PostpartumRisk::Hemorrhage, PostpartumRisk::SevereAnemia]
        );
        assert_eq!(assessment.severity, Severity::Critical);

        let moderate_loss = VitalObservation {
            bleeding_volume_ml: Some(800),
            ..Default::default()
        };
        assert_eq!(
            assess_observation(&moderate_loss).risks,
            vec![PostpartumRisk::Hemorrhage]
        );
    }

    #[test]
    fn hypotension_points_to_hemorrhage() {
        let obs = VitalObservation {
            systolic: Some(85),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(assessment.risks, vec![PostpartumRisk::Hemorrhage]);
        assert!(!assessment.has(PostpartumAlertKind::Hemorrhage));
    }

    #[test]
    fn abundant_bleeding_alone_is_a_hemorrhage_risk_without_alert() {
        let obs = VitalObservation {
            bleeding_quality: Some(BleedingQuality::Abundant),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert!(assessment.alerts.is_empty());
        assert_eq!(assessment.severity, Severity::Normal);
        assert_eq!(assessment.risks, vec![PostpartumRisk::Hemorrhage]);
    }

    #[test]
    fn fever_hypertension_and_drowsiness_map_to_their_risks() {
        let obs = VitalObservation {
            temperature: Some(38.6),
            systolic: Some(150),
            consciousness: Some(Consciousness::Drowsy),
            ..Default::default()
        };
        let assessment = assess_observation(&obs);
        assert_eq!(
            assessment.risks,
            vec![
                PostpartumRisk::PostpartumHypertension,
                PostpartumRisk::Infection,
                PostpartumRisk::PreeclampsiaOrShock,
            ]
        );
    }

    #[test]
    fn retention_alert_carries_retention_risk() {
        let obs = VitalObservation {
            bleeding_quality: Some(BleedingQuality::Abundant),
            contraction: Some(UterineContraction::Absent),
            ..Default::default()
        };
        let risks = assess_observation(&obs).risks;
        assert!(risks.contains(&PostpartumRisk::PlacentalRetention));
        assert!(risks.contains(&PostpartumRisk::Hemorrhage));
    }

    #[test]
    fn schedule_stops_at_end_of_calendar() {
        let start = NaiveDate::MAX
            .and_hms_opt(23, 30, 0)
            .expect("valid datetime");
        let slots = observation_schedule(start, 120, 15);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].elapsed_minutes, 15);
    }

    #[test]
    fn schedule_with_zero_interval_is_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid datetime");
        assert!(observation_schedule(start, 120, 0).is_empty());
    }
}
