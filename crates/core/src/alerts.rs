//! Follow-up alerts for one pregnancy.
//!
//! These feed the maternity alert board: each one asks a midwife to act (call back a patient,
//! prepare for delivery, review a newborn) and carries the tag used to colour it.

use crate::antenatal::missed_visit_count;
use crate::apgar::apgar_total;
use crate::components::{ApgarSeries, ObstetricRecord, VisitRecord};
use crate::config::EngineConfig;
use crate::risk::risk_labels;
use crate::severity::AlertTag;
use crate::temporal::PregnancyDates;
use crate::thresholds::{ANTENATAL_DIASTOLIC_LIMIT, ANTENATAL_SYSTOLIC_LIMIT};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaternityAlertKind {
    MissedVisits,
    HighRiskPregnancy,
    DeliveryDueSoon,
    LowApgar,
    RaisedBloodPressure,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaternityAlert {
    pub kind: MaternityAlertKind,
    pub tag: AlertTag,
    pub message: String,
}

impl MaternityAlert {
    fn new(kind: MaternityAlertKind, tag: AlertTag, message: String) -> Self {
        Self { kind, tag, message }
    }
}

/// Records the alert board looks at for one pregnancy.
#[derive(Clone, Copy, Debug)]
pub struct AlertContext<'a> {
    pub record: &'a ObstetricRecord,
    /// Age from the demographic record, when known.
    pub patient_age: Option<u32>,
    pub visits: &'a [VisitRecord],
    /// Newborn scores, once delivered.
    pub apgar: Option<&'a ApgarSeries>,
}

impl<'a> AlertContext<'a> {
    pub fn new(record: &'a ObstetricRecord) -> Self {
        Self {
            record,
            patient_age: None,
            visits: &[],
            apgar: None,
        }
    }
}

/// Alerts raised for one pregnancy on `today`, in board order.
pub fn maternity_alerts(
    cfg: &EngineConfig,
    ctx: &AlertContext<'_>,
    today: NaiveDate,
) -> Vec<MaternityAlert> {
    let mut alerts = Vec::new();

    let missed = missed_visit_count(ctx.visits);
    if missed > 0 {
        alerts.push(MaternityAlert::new(
            MaternityAlertKind::MissedVisits,
            AlertTag::Warning,
            format!("{missed} missed antenatal visit(s)"),
        ));
    }

    let labels = risk_labels(ctx.record, ctx.patient_age);
    if !labels.is_empty() {
        alerts.push(MaternityAlert::new(
            MaternityAlertKind::HighRiskPregnancy,
            AlertTag::Error,
            format!("high-risk pregnancy: {}", labels.join(", ")),
        ));
    }

    if let Some(dates) = PregnancyDates::derive(ctx.record.last_menstrual_period, today) {
        let days = dates.days_until_delivery;
        if (0..=i64::from(cfg.delivery_window_days())).contains(&days) {
            alerts.push(MaternityAlert::new(
                MaternityAlertKind::DeliveryDueSoon,
                AlertTag::Warning,
                format!(
                    "delivery due in {days} day(s), on {}",
                    dates.expected_delivery_date
                ),
            ));
        }
    }

    if let Some(five_minutes) = ctx.apgar.and_then(|series| series.five_minutes.as_ref()) {
        let total = apgar_total(five_minutes);
        let threshold = u16::from(cfg.low_apgar_threshold());
        if total < threshold {
            alerts.push(MaternityAlert::new(
                MaternityAlertKind::LowApgar,
                AlertTag::Error,
                format!("5-minute Apgar {total} below {threshold}"),
            ));
        }
    }

    let last_completed = ctx
        .visits
        .iter()
        .filter(|visit| visit.is_completed())
        .max_by_key(|visit| (visit.date, visit.sequence));
    if let Some(visit) = last_completed {
        let systolic_raised = visit
            .systolic
            .is_some_and(|value| value >= ANTENATAL_SYSTOLIC_LIMIT);
        let diastolic_raised = visit
            .diastolic
            .is_some_and(|value| value >= ANTENATAL_DIASTOLIC_LIMIT);
        if systolic_raised || diastolic_raised {
            alerts.push(MaternityAlert::new(
                MaternityAlertKind::RaisedBloodPressure,
                AlertTag::Error,
                format!(
                    "blood pressure {}/{} mmHg at visit {}",
                    reading_text(visit.systolic),
                    reading_text(visit.diastolic),
                    visit.sequence
                ),
            ));
        }
    }

    if !alerts.is_empty() {
        tracing::debug!(count = alerts.len(), "maternity alerts raised");
    }

    alerts
}

fn reading_text(value: Option<u16>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}
