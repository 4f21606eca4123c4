//! Newborn Apgar observations.

use serde::{Deserialize, Serialize};

/// Canonical minutes after birth at which an Apgar score is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApgarTimePoint {
    OneMinute,
    FiveMinutes,
    TenMinutes,
}

impl ApgarTimePoint {
    pub const ALL: [ApgarTimePoint; 3] = [
        ApgarTimePoint::OneMinute,
        ApgarTimePoint::FiveMinutes,
        ApgarTimePoint::TenMinutes,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            ApgarTimePoint::OneMinute => 1,
            ApgarTimePoint::FiveMinutes => 5,
            ApgarTimePoint::TenMinutes => 10,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            1 => Some(ApgarTimePoint::OneMinute),
            5 => Some(ApgarTimePoint::FiveMinutes),
            10 => Some(ApgarTimePoint::TenMinutes),
            _ => None,
        }
    }
}

/// The five Apgar criteria observed at one time point.
///
/// Each criterion is expected in `0..=2`. Values are carried as captured; bounds are checked
/// at data entry (see `obstetric_types::ApgarSubScore`), not by the scorer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApgarObservation {
    pub respiration: Option<u8>,
    pub heart_rate: Option<u8>,
    pub tone: Option<u8>,
    pub reflex: Option<u8>,
    pub color: Option<u8>,
}

impl ApgarObservation {
    /// Observation with every criterion recorded.
    pub fn complete(respiration: u8, heart_rate: u8, tone: u8, reflex: u8, color: u8) -> Self {
        Self {
            respiration: Some(respiration),
            heart_rate: Some(heart_rate),
            tone: Some(tone),
            reflex: Some(reflex),
            color: Some(color),
        }
    }

    /// Criteria in a fixed order: respiration, heart rate, tone, reflex, color.
    pub fn criteria(&self) -> [Option<u8>; 5] {
        [
            self.respiration,
            self.heart_rate,
            self.tone,
            self.reflex,
            self.color,
        ]
    }

    pub fn missing_criteria(&self) -> usize {
        self.criteria().iter().filter(|c| c.is_none()).count()
    }
}

/// Apgar observations for one newborn, by time point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApgarSeries {
    pub one_minute: Option<ApgarObservation>,
    pub five_minutes: Option<ApgarObservation>,
    pub ten_minutes: Option<ApgarObservation>,
}

impl ApgarSeries {
    pub fn get(&self, time_point: ApgarTimePoint) -> Option<&ApgarObservation> {
        match time_point {
            ApgarTimePoint::OneMinute => self.one_minute.as_ref(),
            ApgarTimePoint::FiveMinutes => self.five_minutes.as_ref(),
            ApgarTimePoint::TenMinutes => self.ten_minutes.as_ref(),
        }
    }

    pub fn set(&mut self, time_point: ApgarTimePoint, observation: ApgarObservation) {
        let slot = match time_point {
            ApgarTimePoint::OneMinute => &mut self.one_minute,
            ApgarTimePoint::FiveMinutes => &mut self.five_minutes,
            ApgarTimePoint::TenMinutes => &mut self.ten_minutes,
        };
        *slot = Some(observation);
    }
}
