//! Antenatal visit list wire model.
//!
//! The file holds the visits of one pregnancy under a `visits` key. Sequence numbers start at
//! 1; gaps are allowed but duplicates are not.

use crate::{parse_wire, render_wire, RecordsError, RecordsResult};
use chrono::NaiveDate;
use obstetric_core::{VisitRecord, VisitStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Visit list file operations.
pub struct AntenatalVisits;

impl AntenatalVisits {
    /// Parse a visit list from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::Translation`] for schema mismatches and
    /// [`RecordsError::InvalidInput`] for a sequence number of 0 or a repeated sequence number.
    pub fn parse(yaml_text: &str) -> RecordsResult<Vec<VisitRecord>> {
        let wire: VisitListWire = parse_wire(yaml_text, "Visit list")?;

        let mut seen = HashSet::new();
        let mut visits = Vec::with_capacity(wire.visits.len());
        for (idx, visit) in wire.visits.into_iter().enumerate() {
            if visit.sequence == 0 {
                return Err(RecordsError::InvalidInput(format!(
                    "visits[{idx}].sequence must start at 1"
                )));
            }
            if !seen.insert(visit.sequence) {
                return Err(RecordsError::InvalidInput(format!(
                    "visits[{idx}].sequence {} appears more than once",
                    visit.sequence
                )));
            }
            visits.push(VisitRecord {
                sequence: visit.sequence,
                date: visit.date,
                gestational_week: visit.gestational_week,
                status: visit.status,
                systolic: visit.systolic,
                diastolic: visit.diastolic,
            });
        }

        Ok(visits)
    }

    pub fn render(visits: &[VisitRecord]) -> RecordsResult<String> {
        let wire = VisitListWire {
            visits: visits
                .iter()
                .map(|visit| VisitWire {
                    sequence: visit.sequence,
                    date: visit.date,
                    gestational_week: visit.gestational_week,
                    status: visit.status,
                    systolic: visit.systolic,
                    diastolic: visit.diastolic,
                })
                .collect(),
        };
        render_wire(&wire)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct VisitListWire {
    #[serde(default)]
    visits: Vec<VisitWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct VisitWire {
    sequence: u32,
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gestational_week: Option<u32>,
    status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    systolic: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diastolic: Option<u16>,
}
