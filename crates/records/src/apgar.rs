//! Newborn Apgar series wire model.
//!
//! Sub-scores are range-checked here with [`ApgarSubScore`]; a value outside `0..=2` is a
//! data-entry error and the whole document is rejected with the path of the bad score. Omitted
//! criteria stay omitted and are handled by the scorer.

use crate::{parse_wire, render_wire, RecordsError, RecordsResult};
use obstetric_core::{ApgarObservation, ApgarSeries};
use obstetric_types::ApgarSubScore;
use serde::{Deserialize, Serialize};

/// Apgar series file operations.
pub struct NewbornApgar;

impl NewbornApgar {
    /// Parse an Apgar series from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::Translation`](crate::RecordsError::Translation) if a key is
    /// unknown or a sub-score is not an integer in `0..=2`.
    pub fn parse(yaml_text: &str) -> RecordsResult<ApgarSeries> {
        let wire: ApgarSeriesWire = parse_wire(yaml_text, "Apgar series")?;
        Ok(ApgarSeries {
            one_minute: wire.one_minute.map(observation_to_domain),
            five_minutes: wire.five_minutes.map(observation_to_domain),
            ten_minutes: wire.ten_minutes.map(observation_to_domain),
        })
    }

    /// Render an Apgar series as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::InvalidInput`] naming the time point and criterion if a
    /// sub-score is outside `0..=2`.
    pub fn render(series: &ApgarSeries) -> RecordsResult<String> {
        let wire = ApgarSeriesWire {
            one_minute: to_wire("one_minute", series.one_minute.as_ref())?,
            five_minutes: to_wire("five_minutes", series.five_minutes.as_ref())?,
            ten_minutes: to_wire("ten_minutes", series.ten_minutes.as_ref())?,
        };
        render_wire(&wire)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ApgarSeriesWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    one_minute: Option<ApgarObservationWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    five_minutes: Option<ApgarObservationWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ten_minutes: Option<ApgarObservationWire>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
struct ApgarObservationWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    respiration: Option<ApgarSubScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heart_rate: Option<ApgarSubScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tone: Option<ApgarSubScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reflex: Option<ApgarSubScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<ApgarSubScore>,
}

fn observation_to_domain(wire: ApgarObservationWire) -> ApgarObservation {
    ApgarObservation {
        respiration: wire.respiration.map(u8::from),
        heart_rate: wire.heart_rate.map(u8::from),
        tone: wire.tone.map(u8::from),
        reflex: wire.reflex.map(u8::from),
        color: wire.color.map(u8::from),
    }
}

fn to_wire(
    time_point: &str,
    observation: Option<&ApgarObservation>,
) -> RecordsResult<Option<ApgarObservationWire>> {
    observation
        .map(|obs| observation_to_wire(time_point, obs))
        .transpose()
}

fn observation_to_wire(
    time_point: &str,
    observation: &ApgarObservation,
) -> RecordsResult<ApgarObservationWire> {
    let score = |criterion: &str, value: Option<u8>| {
        value
            .map(|v| ApgarSubScore::new(i64::from(v)))
            .transpose()
            .map_err(|e| RecordsError::InvalidInput(format!("{time_point}.{criterion}: {e}")))
    };
    Ok(ApgarObservationWire {
        respiration: score("respiration", observation.respiration)?,
        heart_rate: score("heart_rate", observation.heart_rate)?,
        tone: score("tone", observation.tone)?,
        reflex: score("reflex", observation.reflex)?,
        color: score("color", observation.color)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_series_with_partial_observation() {
        let input = r#"one_minute:
  respiration: 1
  heart_rate: 2
  tone: 1
  reflex: 1
  color: 0
five_minutes:
  respiration: 2
  heart_rate: 2
  tone: 2
"#;
        let series = NewbornApgar::parse(input).expect("parse yaml");
        assert_eq!(
            series.one_minute,
            Some(ApgarObservation::complete(1, 2, 1, 1, 0))
        );
        let five = series.five_minutes.expect("five-minute score");
        assert_eq!(five.missing_criteria(), 2);
        assert_eq!(series.ten_minutes, None);
    }

    #[test]
    fn rejects_out_of_range_sub_score_with_path() {
        let input = r#"five_minutes:
  respiration: 3
"#;
        let err = NewbornApgar::parse(input).expect_err("should reject score");
        match err {
            RecordsError::Translation(msg) => {
                assert!(msg.contains("five_minutes.respiration"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_sub_score() {
        let input = r#"one_minute:
  tone: -1
"#;
        assert!(NewbornApgar::parse(input).is_err());
    }

    #[test]
    fn rejects_unknown_time_point() {
        let input = r#"twenty_minutes:
  tone: 2
"#;
        let err = NewbornApgar::parse(input).expect_err("should reject key");
        assert!(matches!(err, RecordsError::Translation(msg) if msg.contains("twenty_minutes")));
    }

    #[test]
    fn render_writes_only_recorded_scores() {
        let series = ApgarSeries {
            one_minute: Some(ApgarObservation::complete(2, 2, 2, 2, 1)),
            ..Default::default()
        };
        let yaml = NewbornApgar::render(&series).expect("render");
        assert!(yaml.contains("one_minute"));
        assert!(!yaml.contains("five_minutes"));
        assert_eq!(NewbornApgar::parse(&yaml).expect("reparse"), series);
    }

    #[test]
    fn render_rejects_out_of_range_sub_score() {
        let series = ApgarSeries {
            five_minutes: Some(ApgarObservation::complete(3, 2, 2, 2, 2)),
            ..Default::default()
        };
        let err = NewbornApgar::render(&series).expect_err("should reject score");
        assert!(
            matches!(
                &err,
                RecordsError::InvalidInput(msg) if msg.contains("five_minutes.respiration")
            ),
            "{err:?}"
        );
    }
}
