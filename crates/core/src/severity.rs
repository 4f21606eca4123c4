//! Severity scales shared by the calculators.

use serde::{Deserialize, Serialize};

/// Clinical severity of a post-partum finding, ordered from least to most severe.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Moderate,
    Severe,
    Critical,
}

/// Presentation tag attached to a classification, used to colour alerts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTag {
    Success,
    Warning,
    Error,
}
