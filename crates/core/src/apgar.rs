//! Newborn Apgar scoring.
//!
//! A score is the plain sum of the five criteria. A criterion that was not recorded counts as 0,
//! which matches how the clinic's forms have always totalled partial entries. That default is
//! questionable clinically (an unmeasured sign is not a measured zero) and is kept only for
//! parity; `missing_criteria` on the result lets callers show that a total is partial.

use crate::components::{ApgarObservation, ApgarSeries, ApgarTimePoint};
use crate::severity::AlertTag;
use crate::thresholds::apgar_band_for;
use serde::{Deserialize, Serialize};

/// Severity band of an Apgar total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApgarBand {
    /// 7 to 10.
    Normal,
    /// 4 to 6: distress, resuscitation recommended.
    Moderate,
    /// 0 to 3: urgent resuscitation.
    Critical,
}

impl ApgarBand {
    pub fn tag(self) -> AlertTag {
        match self {
            ApgarBand::Normal => AlertTag::Success,
            ApgarBand::Moderate => AlertTag::Warning,
            ApgarBand::Critical => AlertTag::Error,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            ApgarBand::Normal => "good adaptation to extra-uterine life",
            ApgarBand::Moderate => "moderate adaptation, resuscitation recommended",
            ApgarBand::Critical => "poor adaptation, urgent resuscitation",
        }
    }
}

/// Scored Apgar observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ApgarScore {
    pub total: u16,
    pub band: ApgarBand,
    pub tag: AlertTag,
    pub interpretation: &'static str,
    /// Criteria that were not recorded and were counted as 0.
    pub missing_criteria: usize,
}

/// Sum of the five criteria, missing ones counting as 0.
///
/// Values are summed as given; nothing is clamped to `0..=2`.
pub fn apgar_total(observation: &ApgarObservation) -> u16 {
    observation
        .criteria()
        .iter()
        .map(|criterion| u16::from(criterion.unwrap_or(0)))
        .sum()
}

/// Score and classify one observation.
pub fn score_apgar(observation: &ApgarObservation) -> ApgarScore {
    let total = apgar_total(observation);
    let band = apgar_band_for(total);
    let missing_criteria = observation.missing_criteria();

    if missing_criteria > 0 {
        tracing::debug!(
            missing_criteria,
            total,
            "Apgar criteria missing; counted as 0"
        );
    }

    ApgarScore {
        total,
        band,
        tag: band.tag(),
        interpretation: band.interpretation(),
        missing_criteria,
    }
}

/// How quickly a newborn needs resuscitation, from least to most urgent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResuscitationUrgency {
    #[default]
    None,
    /// Moderate score at 1 or 5 minutes.
    Urgent,
    /// Critical score at 1 or 5 minutes.
    Immediate,
}

impl ResuscitationUrgency {
    fn for_band(band: ApgarBand) -> Self {
        match band {
            ApgarBand::Normal => ResuscitationUrgency::None,
            ApgarBand::Moderate => ResuscitationUrgency::Urgent,
            ApgarBand::Critical => ResuscitationUrgency::Immediate,
        }
    }
}

/// Scores for every recorded time point of one newborn plus the resulting urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ApgarAssessment {
    pub one_minute: Option<ApgarScore>,
    pub five_minutes: Option<ApgarScore>,
    pub ten_minutes: Option<ApgarScore>,
    pub urgency: ResuscitationUrgency,
    /// Time point that set `urgency`, the earliest one on a tie.
    pub urgency_source: Option<ApgarTimePoint>,
}

impl ApgarAssessment {
    /// The 5-minute total, which drives escalation decisions.
    pub fn primary_score(&self) -> Option<u16> {
        self.five_minutes.map(|score| score.total)
    }

    pub fn get(&self, time_point: ApgarTimePoint) -> Option<&ApgarScore> {
        match time_point {
            ApgarTimePoint::OneMinute => self.one_minute.as_ref(),
            ApgarTimePoint::FiveMinutes => self.five_minutes.as_ref(),
            ApgarTimePoint::TenMinutes => self.ten_minutes.as_ref(),
        }
    }
}

/// Score each recorded time point independently and derive the resuscitation urgency.
///
/// Only the 1- and 5-minute scores escalate; the 10-minute score is reported but never raises
/// the urgency.
pub fn assess_series(series: &ApgarSeries) -> ApgarAssessment {
    let one_minute = series.one_minute.as_ref().map(score_apgar);
    let five_minutes = series.five_minutes.as_ref().map(score_apgar);
    let ten_minutes = series.ten_minutes.as_ref().map(score_apgar);

    let mut urgency = ResuscitationUrgency::None;
    let mut urgency_source = None;
    for (time_point, score) in [
        (ApgarTimePoint::OneMinute, one_minute),
        (ApgarTimePoint::FiveMinutes, five_minutes),
    ] {
        let Some(score) = score else { continue };
        let candidate = ResuscitationUrgency::for_band(score.band);
        if candidate > urgency {
            urgency = candidate;
            urgency_source = Some(time_point);
        }
    }

    if urgency > ResuscitationUrgency::None {
        tracing::debug!(?urgency, ?urgency_source, "newborn needs resuscitation");
    }

    ApgarAssessment {
        one_minute,
        five_minutes,
        ten_minutes,
        urgency,
        urgency_source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_marks_are_normal() {
        let score = score_apgar(&ApgarObservation::complete(2, 2, 2, 2, 2));
        assert_eq!(score.total, 10);
        assert_eq!(score.band, ApgarBand::Normal);
        assert_eq!(score.tag, AlertTag::Success);
        assert_eq!(score.missing_criteria, 0);
    }

    #[test]
    fn four_is_moderate() {
        let score = score_apgar(&ApgarObservation::complete(1, 1, 1, 1, 0));
        assert_eq!(score.total, 4);
        assert_eq!(score.band, ApgarBand::Moderate);
        assert_eq!(score.tag, AlertTag::Warning);
    }

    #[test]
    fn zero_is_critical() {
        let score = score_apgar(&ApgarObservation::complete(0, 0, 0, 0, 0));
        assert_eq!(score.total, 0);
        assert_eq!(score.band, ApgarBand::Critical);
        assert_eq!(score.tag, AlertTag::Error);
        assert!(score.interpretation.contains("urgent"));
    }

    #[test]
    fn total_equals_sum_of_criteria() {
        for r in 0..=2 {
            for h in 0..=2 {
                for c in 0..=2 {
                    let obs = ApgarObservation::complete(r, h, 1, 2, c);
                    assert_eq!(apgar_total(&obs), u16::from(r + h + 1 + 2 + c));
                }
            }
        }
    }

    #[test]
    fn missing_criteria_count_as_zero() {
        let obs = ApgarObservation {
            respiration: Some(2),
            heart_rate: Some(2),
            tone: Some(2),
            reflex: None,
            color: None,
        };
        let score = score_apgar(&obs);
        assert_eq!(score.total, 6);
        assert_eq!(score.band, ApgarBand::Moderate);
        assert_eq!(score.missing_criteria, 2);
    }

    #[test]
    fn out_of_range_criteria_are_not_clamped() {
        let obs = ApgarObservation::complete(3, 2, 2, 2, 2);
        let score = score_apgar(&obs);
        assert_eq!(score.total, 11);
        assert_eq!(score.band, ApgarBand::Critical);
    }

    #[test]
    fn healthy_series_needs_no_resuscitation() {
        let series = ApgarSeries {
            one_minute: Some(ApgarObservation::complete(2, 2, 1, 1, 1)),
            five_minutes: Some(ApgarObservation::complete(2, 2, 2, 2, 1)),
            ten_minutes: Some(ApgarObservation::complete(2, 2, 2, 2, 2)),
        };
        let assessment = assess_series(&series);
        assert_eq!(assessment.urgency, ResuscitationUrgency::None);
        assert_eq!(assessment.urgency_source, None);
        assert_eq!(assessment.primary_score(), Some(9));
    }

    #[test]
    fn critical_one_minute_outranks_moderate_five_minutes() {
        let series = ApgarSeries {
            one_minute: Some(ApgarObservation::complete(0, 1, 0, 1, 0)),
            five_minutes: Some(ApgarObservation::complete(1, 1, 1, 1, 1)),
            ten_minutes: None,
        };
        let assessment = assess_series(&series);
        assert_eq!(assessment.urgency, ResuscitationUrgency::Immediate);
        assert_eq!(assessment.urgency_source, Some(ApgarTimePoint::OneMinute));
        assert!(ResuscitationUrgency::Immediate > ResuscitationUrgency::Urgent);
    }

    #[test]
    fn moderate_five_minutes_is_urgent() {
        let series = ApgarSeries {
            one_minute: Some(ApgarObservation::complete(2, 2, 2, 1, 1)),
            five_minutes: Some(ApgarObservation::complete(1, 2, 1, 1, 0)),
            ten_minutes: None,
        };
        let assessment = assess_series(&series);
        assert_eq!(assessment.urgency, ResuscitationUrgency::Urgent);
        assert_eq!(assessment.urgency_source, Some(ApgarTimePoint::FiveMinutes));
    }

    #[test]
    fn ten_minute_score_never_escalates() {
        let series = ApgarSeries {
            one_minute: None,
            five_minutes: None,
            ten_minutes: Some(ApgarObservation::complete(0, 0, 0, 0, 0)),
        };
        let assessment = assess_series(&series);
        assert_eq!(assessment.urgency, ResuscitationUrgency::None);
        assert_eq!(
            assessment.get(ApgarTimePoint::TenMinutes).map(|s| s.band),
            Some(ApgarBand::Critical)
        );
        assert_eq!(assessment.primary_score(), None);
    }
}
