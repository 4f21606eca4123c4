//! Validated primitives shared by the obstetric crates.
//!
//! These types are checked once at the data-entry boundary so the calculators downstream can
//! take plain values without re-validating them.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating validated score types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoreError {
    /// An Apgar sub-score outside the closed range 0..=2.
    #[error("Apgar sub-score must be between 0 and 2, got {0}")]
    OutOfRange(i64),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds a `NonEmptyText` from optional free text, treating blank input as absent.
    ///
    /// Clinical forms routinely submit `""` for an untouched text box; this collapses that case
    /// into `None` instead of an error.
    pub fn from_optional(input: Option<impl AsRef<str>>) -> Option<Self> {
        input.and_then(|text| Self::new(text).ok())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A single Apgar criterion score, guaranteed to lie in `0..=2`.
///
/// The scorer itself never clamps or rejects values; range checking belongs to whoever captures
/// the observation, and this type is how that capture step proves it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApgarSubScore(u8);

impl ApgarSubScore {
    /// Highest value a single criterion can take.
    pub const MAX: u8 = 2;

    /// Validates a raw sub-score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::OutOfRange`] for anything below 0 or above 2.
    pub fn new(value: i64) -> Result<Self, ScoreError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(ScoreError::OutOfRange(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<ApgarSubScore> for u8 {
    fn from(score: ApgarSubScore) -> Self {
        score.0
    }
}

impl serde::Serialize for ApgarSubScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ApgarSubScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        ApgarSubScore::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  gestational diabetes in 2019 ").expect("valid text");
        assert_eq!(text.as_str(), "gestational diabetes in 2019");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
    }

    #[test]
    fn from_optional_collapses_blank_to_none() {
        assert_eq!(NonEmptyText::from_optional(None::<&str>), None);
        assert_eq!(NonEmptyText::from_optional(Some("")), None);
        assert_eq!(NonEmptyText::from_optional(Some(" \t")), None);
        assert_eq!(
            NonEmptyText::from_optional(Some("asthma")).map(|t| t.to_string()),
            Some("asthma".to_string())
        );
    }

    #[test]
    fn sub_score_accepts_zero_to_two() {
        for raw in 0..=2 {
            let score = ApgarSubScore::new(raw).expect("in range");
            assert_eq!(i64::from(score.value()), raw);
        }
    }

    #[test]
    fn sub_score_rejects_out_of_range() {
        assert_eq!(ApgarSubScore::new(3), Err(ScoreError::OutOfRange(3)));
        assert_eq!(ApgarSubScore::new(-1), Err(ScoreError::OutOfRange(-1)));
        assert_eq!(ApgarSubScore::new(256), Err(ScoreError::OutOfRange(256)));
    }
}
