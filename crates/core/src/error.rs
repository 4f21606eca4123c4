//! Errors raised while setting up the engine.
//!
//! The calculators themselves never fail: missing or inconsistent clinical data resolves to a
//! documented default or an explicit `None`. Only configuration can be rejected.

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration value for {name}: {value:?}")]
    InvalidConfigValue {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
