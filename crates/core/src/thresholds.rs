//! Declarative threshold tables.
//!
//! Every numeric cut-off the engine applies is listed here, keyed by the value it classifies.
//! The calculators walk these tables rather than embedding the numbers in their branching, so
//! the tables can be checked on their own and adjusted in one place.

use crate::apgar::ApgarBand;
use crate::postpartum::{PostpartumAlertKind, PostpartumRisk};
use crate::severity::Severity;
use chrono::{Days, Months, NaiveDate};

// ============================================================================
// Apgar
// ============================================================================

/// Highest attainable Apgar total (five criteria scored 0 to 2).
pub const APGAR_MAX_TOTAL: u16 = 10;

/// An inclusive range of Apgar totals mapped to a band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApgarBandRule {
    pub min: u16,
    pub max: u16,
    pub band: ApgarBand,
}

pub const APGAR_BANDS: [ApgarBandRule; 3] = [
    ApgarBandRule {
        min: 7,
        max: 10,
        band: ApgarBand::Normal,
    },
    ApgarBandRule {
        min: 4,
        max: 6,
        band: ApgarBand::Moderate,
    },
    ApgarBandRule {
        min: 0,
        max: 3,
        band: ApgarBand::Critical,
    },
];

/// Band for an Apgar total.
///
/// Totals outside every row (only possible with unvalidated sub-scores) fall through to
/// critical.
pub fn apgar_band_for(total: u16) -> ApgarBand {
    APGAR_BANDS
        .iter()
        .find(|rule| (rule.min..=rule.max).contains(&total))
        .map(|rule| rule.band)
        .unwrap_or(ApgarBand::Critical)
}

// ============================================================================
// Post-partum vital signs
// ============================================================================

/// Measured quantity a vital rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalSign {
    Temperature,
    Systolic,
    Diastolic,
    Pulse,
    BleedingVolume,
}

/// Strict comparison against a limit. Values equal to the limit never fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Limit {
    Above(f64),
    Below(f64),
}

impl Limit {
    pub fn breached_by(self, value: f64) -> bool {
        match self {
            Limit::Above(limit) => value > limit,
            Limit::Below(limit) => value < limit,
        }
    }
}

/// One numeric post-partum threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VitalRule {
    pub sign: VitalSign,
    pub limit: Limit,
    pub alert: PostpartumAlertKind,
    pub severity: Severity,
}

pub const VITAL_RULES: [VitalRule; 7] = [
    VitalRule {
        sign: VitalSign::Temperature,
        limit: Limit::Above(38.0),
        alert: PostpartumAlertKind::Hyperthermia,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::Temperature,
        limit: Limit::Below(36.0),
        alert: PostpartumAlertKind::Hypothermia,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::Systolic,
        limit: Limit::Below(90.0),
        alert: PostpartumAlertKind::Hypotension,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::Systolic,
        limit: Limit::Above(140.0),
        alert: PostpartumAlertKind::Hypertension,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::Diastolic,
        limit: Limit::Above(90.0),
        alert: PostpartumAlertKind::Hypertension,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::Pulse,
        limit: Limit::Above(100.0),
        alert: PostpartumAlertKind::Tachycardia,
        severity: Severity::Moderate,
    },
    VitalRule {
        sign: VitalSign::BleedingVolume,
        limit: Limit::Above(500.0),
        alert: PostpartumAlertKind::Hemorrhage,
        severity: Severity::Critical,
    },
];

/// Hemorrhage reported as very abundant bleeding without a volume breach.
pub const REPORTED_HEMORRHAGE_SEVERITY: Severity = Severity::Severe;

/// Heavy bleeding with a poorly contracted uterus.
pub const PLACENTAL_RETENTION_SEVERITY: Severity = Severity::Severe;

/// Any level of consciousness other than normal.
pub const ALTERED_CONSCIOUSNESS_SEVERITY: Severity = Severity::Critical;

/// Number of simultaneous moderate alerts that escalates the overall severity.
pub const MODERATE_ESCALATION_COUNT: usize = 2;

/// Overall severity reached once [`MODERATE_ESCALATION_COUNT`] moderate alerts fire together.
pub const MODERATE_ESCALATION_SEVERITY: Severity = Severity::Severe;

/// What links a post-partum finding to the clinical risk behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTrigger {
    /// The named alert fired.
    Alert(PostpartumAlertKind),
    /// Bleeding reported as abundant or very abundant.
    HeavyBleeding,
    /// Bleeding volume strictly above the given mL.
    BleedingVolumeAbove(u32),
}

/// One post-partum risk rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostpartumRiskRule {
    pub trigger: RiskTrigger,
    pub risk: PostpartumRisk,
}

/// Bleeding volume (mL) above which severe anemia is expected.
pub const SEVERE_ANEMIA_BLEEDING_ML: u32 = 1000;

/// Several rules may name the same risk; it is reported once.
pub const POSTPARTUM_RISK_RULES: [PostpartumRiskRule; 8] = [
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::Hemorrhage),
        risk: PostpartumRisk::Hemorrhage,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::HeavyBleeding,
        risk: PostpartumRisk::Hemorrhage,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::Hypotension),
        risk: PostpartumRisk::Hemorrhage,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::Hypertension),
        risk: PostpartumRisk::PostpartumHypertension,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::Hyperthermia),
        risk: PostpartumRisk::Infection,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::PlacentalRetention),
        risk: PostpartumRisk::PlacentalRetention,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::BleedingVolumeAbove(SEVERE_ANEMIA_BLEEDING_ML),
        risk: PostpartumRisk::SevereAnemia,
    },
    PostpartumRiskRule {
        trigger: RiskTrigger::Alert(PostpartumAlertKind::AlteredConsciousness),
        risk: PostpartumRisk::PreeclampsiaOrShock,
    },
];

// ============================================================================
// Maternal age
// ============================================================================

/// Youngest age (years) not flagged as an adolescent pregnancy.
pub const MIN_LOW_RISK_AGE: u32 = 16;

/// Oldest age (years) not flagged as an advanced maternal age.
pub const MAX_LOW_RISK_AGE: u32 = 35;

// ============================================================================
// Antenatal visits
// ============================================================================

/// Interval applied after a visit, from `from_visit` onwards until the next row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitInterval {
    pub from_visit: u32,
    pub days: u64,
}

/// Sorted by `from_visit`.
pub const VISIT_INTERVALS: [VisitInterval; 3] = [
    VisitInterval {
        from_visit: 1,
        days: 28,
    },
    VisitInterval {
        from_visit: 3,
        days: 14,
    },
    VisitInterval {
        from_visit: 4,
        days: 7,
    },
];

/// Days until the next visit after visit number `visit`. `None` for visit 0.
pub fn visit_interval_days(visit: u32) -> Option<u64> {
    VISIT_INTERVALS
        .iter()
        .rev()
        .find(|row| row.from_visit <= visit)
        .map(|row| row.days)
}

/// Systolic pressure at or above which an antenatal reading counts as raised (mmHg).
pub const ANTENATAL_SYSTOLIC_LIMIT: u16 = 140;

/// Diastolic pressure at or above which an antenatal reading counts as raised (mmHg).
pub const ANTENATAL_DIASTOLIC_LIMIT: u16 = 90;

// ============================================================================
// Tetanus toxoid
// ============================================================================

/// Gap between a dose and the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoseInterval {
    Days(u64),
    Months(u32),
}

impl DoseInterval {
    /// Calendar date `self` after `date`.
    ///
    /// Month arithmetic keeps the day of month, clamping to the last day of shorter months
    /// (31 August + 6 months is 28 or 29 February). `None` only if the result leaves chrono's
    /// supported range.
    pub fn add_to(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            DoseInterval::Days(days) => date.checked_add_days(Days::new(days)),
            DoseInterval::Months(months) => date.checked_add_months(Months::new(months)),
        }
    }
}

/// Interval preceding dose `n`, stored at index `n - 2` (dose 1 has no predecessor).
pub const TETANUS_INTERVALS: [DoseInterval; 4] = [
    DoseInterval::Days(28),
    DoseInterval::Months(6),
    DoseInterval::Months(12),
    DoseInterval::Months(12),
];

/// Interval between dose `dose - 1` and `dose`, for doses 2 to 5.
pub fn tetanus_interval_before(dose: usize) -> Option<DoseInterval> {
    dose.checked_sub(2)
        .and_then(|idx| TETANUS_INTERVALS.get(idx).copied())
}
