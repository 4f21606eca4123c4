//! Record-file boundary for the obstetric decision engine.
//!
//! This crate provides **wire models** and **translation helpers** for the YAML snapshots a
//! clinic exports for one pregnancy:
//! - the obstetric record
//! - the newborn Apgar series
//! - a post-partum vital observation
//! - the antenatal visit list
//! - the tetanus-toxoid dose chain
//!
//! Wire structs are strict (`deny_unknown_fields`) and private; callers only see the domain
//! types from `obstetric-core`. Data-entry validation (Apgar sub-score range, blank free text)
//! happens here, before anything reaches the calculators.

pub mod apgar;
pub mod obstetric_record;
pub mod tetanus;
pub mod visits;
pub mod vitals;

// Re-export facades
pub use apgar::NewbornApgar;
pub use obstetric_record::ObstetricRecordFile;
pub use tetanus::TetanusChain;
pub use visits::AntenatalVisits;
pub use vitals::VitalSigns;

/// Errors returned by the record-file boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`RecordsError`].
pub type RecordsResult<T> = Result<T, RecordsError>;

/// Deserialize `yaml_text` into a wire struct, naming the failing path on mismatch.
///
/// `what` labels the document kind in the error message.
pub(crate) fn parse_wire<W>(yaml_text: &str, what: &str) -> RecordsResult<W>
where
    W: serde::de::DeserializeOwned,
{
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    serde_path_to_error::deserialize::<_, W>(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        RecordsError::Translation(format!("{what} schema mismatch at {path}: {source}"))
    })
}

/// Serialize a wire struct to YAML.
pub(crate) fn render_wire<W>(wire: &W) -> RecordsResult<String>
where
    W: serde::Serialize,
{
    Ok(serde_yaml::to_string(wire)?)
}
