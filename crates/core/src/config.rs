//! Engine runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! [`DecisionEngine`](crate::DecisionEngine). The calculators never read process-wide environment
//! variables themselves, so results stay reproducible across threads and test harnesses.

use crate::constants::{
    DEFAULT_DELIVERY_WINDOW_DAYS, DEFAULT_LOW_APGAR_THRESHOLD,
    DEFAULT_OBSERVATION_INTERVAL_MINUTES, DEFAULT_OBSERVATION_WINDOW_MINUTES,
};
use crate::thresholds::APGAR_MAX_TOTAL;
use crate::{EngineError, EngineResult};
use std::str::FromStr;

/// Engine configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    low_apgar_threshold: u8,
    delivery_window_days: u32,
    observation_window_minutes: u32,
    observation_interval_minutes: u32,
}

impl EngineConfig {
    /// Create a new `EngineConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if:
    /// - `low_apgar_threshold` is above the maximum Apgar total of 10,
    /// - `observation_interval_minutes` is zero,
    /// - the interval is longer than the observation window.
    pub fn new(
        low_apgar_threshold: u8,
        delivery_window_days: u32,
        observation_window_minutes: u32,
        observation_interval_minutes: u32,
    ) -> EngineResult<Self> {
        if u16::from(low_apgar_threshold) > APGAR_MAX_TOTAL {
            return Err(EngineError::InvalidInput(format!(
                "low_apgar_threshold cannot exceed {APGAR_MAX_TOTAL}, got {low_apgar_threshold}"
            )));
        }

        if observation_interval_minutes == 0 {
            return Err(EngineError::InvalidInput(
                "observation_interval_minutes cannot be zero".into(),
            ));
        }

        if observation_interval_minutes > observation_window_minutes {
            return Err(EngineError::InvalidInput(format!(
                "observation_interval_minutes ({observation_interval_minutes}) exceeds \
                 observation_window_minutes ({observation_window_minutes})"
            )));
        }

        Ok(Self {
            low_apgar_threshold,
            delivery_window_days,
            observation_window_minutes,
            observation_interval_minutes,
        })
    }

    pub fn low_apgar_threshold(&self) -> u8 {
        self.low_apgar_threshold
    }

    pub fn delivery_window_days(&self) -> u32 {
        self.delivery_window_days
    }

    pub fn observation_window_minutes(&self) -> u32 {
        self.observation_window_minutes
    }

    pub fn observation_interval_minutes(&self) -> u32 {
        self.observation_interval_minutes
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            low_apgar_threshold: DEFAULT_LOW_APGAR_THRESHOLD,
            delivery_window_days: DEFAULT_DELIVERY_WINDOW_DAYS,
            observation_window_minutes: DEFAULT_OBSERVATION_WINDOW_MINUTES,
            observation_interval_minutes: DEFAULT_OBSERVATION_INTERVAL_MINUTES,
        }
    }
}

/// Parse an optional environment value, falling back to `default` when unset or blank.
///
/// `name` is only used to label the error.
pub fn setting_from_env_value<T>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> EngineResult<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|source| EngineError::InvalidConfigValue {
                name,
                value: raw,
                source,
            }),
    }
}

/// Build an [`EngineConfig`] from optional raw values, as read from the environment.
///
/// Each value falls back to its default when absent or blank; the combined result is then
/// validated by [`EngineConfig::new`].
pub fn config_from_env_values(
    low_apgar_threshold: Option<String>,
    delivery_window_days: Option<String>,
    observation_window_minutes: Option<String>,
    observation_interval_minutes: Option<String>,
) -> EngineResult<EngineConfig> {
    use crate::constants::{
        DELIVERY_WINDOW_DAYS_ENV, LOW_APGAR_THRESHOLD_ENV, OBSERVATION_INTERVAL_MINUTES_ENV,
        OBSERVATION_WINDOW_MINUTES_ENV,
    };

    EngineConfig::new(
        setting_from_env_value(
            LOW_APGAR_THRESHOLD_ENV,
            low_apgar_threshold,
            DEFAULT_LOW_APGAR_THRESHOLD,
        )?,
        setting_from_env_value(
            DELIVERY_WINDOW_DAYS_ENV,
            delivery_window_days,
            DEFAULT_DELIVERY_WINDOW_DAYS,
        )?,
        setting_from_env_value(
            OBSERVATION_WINDOW_MINUTES_ENV,
            observation_window_minutes,
            DEFAULT_OBSERVATION_WINDOW_MINUTES,
        )?,
        setting_from_env_value(
            OBSERVATION_INTERVAL_MINUTES_ENV,
            observation_interval_minutes,
            DEFAULT_OBSERVATION_INTERVAL_MINUTES,
        )?,
    )
}
