//! Antenatal visit history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a numbered antenatal consultation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    InProgress,
    Completed,
    Missed,
    Cancelled,
}

/// One antenatal consultation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    /// 1-based visit number. Gaps are tolerated.
    pub sequence: u32,
    pub date: NaiveDate,
    /// Gestational week at the visit, when it was recorded.
    pub gestational_week: Option<u32>,
    pub status: VisitStatus,
    /// Systolic pressure measured at the visit, mmHg.
    pub systolic: Option<u16>,
    /// Diastolic pressure measured at the visit, mmHg.
    pub diastolic: Option<u16>,
}

impl VisitRecord {
    pub fn new(sequence: u32, date: NaiveDate, status: VisitStatus) -> Self {
        Self {
            sequence,
            date,
            gestational_week: None,
            status,
            systolic: None,
            diastolic: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == VisitStatus::Completed
    }
}
