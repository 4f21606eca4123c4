//! Tetanus-toxoid dose chain wire model.
//!
//! Doses are keyed `dose_1` to `dose_5`; a missing key or `null` means the dose has not been
//! given. Out-of-order chains are accepted as recorded; the scheduler reports them.

use crate::{parse_wire, render_wire, RecordsResult};
use chrono::NaiveDate;
use obstetric_core::ImmunizationChain;
use serde::{Deserialize, Serialize};

/// Tetanus chain file operations.
pub struct TetanusChain;

impl TetanusChain {
    pub fn parse(yaml_text: &str) -> RecordsResult<ImmunizationChain> {
        let wire: TetanusChainWire = parse_wire(yaml_text, "Tetanus chain")?;
        Ok(ImmunizationChain::new([
            wire.dose_1,
            wire.dose_2,
            wire.dose_3,
            wire.dose_4,
            wire.dose_5,
        ]))
    }

    pub fn render(chain: &ImmunizationChain) -> RecordsResult<String> {
        let [dose_1, dose_2, dose_3, dose_4, dose_5] = *chain.doses();
        render_wire(&TetanusChainWire {
            dose_1,
            dose_2,
            dose_3,
            dose_4,
            dose_5,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
struct TetanusChainWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    dose_1: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dose_2: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dose_3: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dose_4: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dose_5: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordsError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_partial_chain() {
        let input = r#"dose_1: 2024-01-01
dose_2: 2024-01-29
dose_3: null
"#;
        let chain = TetanusChain::parse(input).expect("parse yaml");
        assert_eq!(chain.dose(1), Some(date(2024, 1, 1)));
        assert_eq!(chain.dose(2), Some(date(2024, 1, 29)));
        assert_eq!(chain.dose(3), None);
    }

    #[test]
    fn keeps_out_of_order_chain_as_recorded() {
        let chain = TetanusChain::parse("dose_3: 2024-08-01\n").expect("parse yaml");
        assert_eq!(chain.dose(1), None);
        assert_eq!(chain.dose(3), Some(date(2024, 8, 1)));
    }

    #[test]
    fn rejects_sixth_dose() {
        let err = TetanusChain::parse("dose_6: 2024-01-01\n").expect_err("should reject key");
        assert!(matches!(err, RecordsError::Translation(msg) if msg.contains("dose_6")));
    }

    #[test]
    fn rendered_chain_parses_back() {
        let chain = ImmunizationChain::from_dates([date(2023, 8, 31), date(2023, 9, 28)]);
        let yaml = TetanusChain::render(&chain).expect("render");
        assert!(!yaml.contains("dose_3"));
        assert_eq!(TetanusChain::parse(&yaml).expect("reparse"), chain);
    }
}
