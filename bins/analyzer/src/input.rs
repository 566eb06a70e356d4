//! Trial balance input decoding.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use liasse_core::analysis::CompanyProfile;
use liasse_core::balance::BalanceEntry;
use liasse_shared::{AppError, AppResult};

use crate::cli::InputArgs;

/// Decoded input of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Current period balance.
    pub current: Vec<BalanceEntry>,
    /// Prior period balance, possibly empty.
    pub prior: Vec<BalanceEntry>,
    /// Regime code or label carried by the bundle.
    pub regime: Option<String>,
    /// Company profile carried by the bundle.
    pub company: CompanyProfile,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Entries(Vec<BalanceEntry>),
    Bundle(Bundle),
}

#[derive(Deserialize)]
struct Bundle {
    #[serde(default, alias = "balance")]
    current: Vec<BalanceEntry>,
    #[serde(default, alias = "balance_n1")]
    prior: Vec<BalanceEntry>,
    #[serde(default)]
    regime: Option<String>,
    #[serde(default, alias = "entreprise")]
    company: CompanyProfile,
}

impl From<RawInput> for Input {
    fn from(raw: RawInput) -> Self {
        match raw {
            RawInput::Entries(current) => Self {
                current,
                ..Self::default()
            },
            RawInput::Bundle(bundle) => Self {
                current: bundle.current,
                prior: bundle.prior,
                regime: bundle.regime,
                company: bundle.company,
            },
        }
    }
}

/// Decodes a bare entry array or a bundle object.
pub fn decode(raw: &str) -> AppResult<Input> {
    serde_json::from_str::<RawInput>(raw)
        .map(Input::from)
        .map_err(|err| AppError::InvalidInput(err.to_string()))
}

/// Reads and decodes one file.
pub fn read(path: &Path) -> anyhow::Result<Input> {
    let raw = std::fs::read_to_string(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input = decode(&raw).with_context(|| format!("Failed to decode {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        entries = input.current.len(),
        prior_entries = input.prior.len(),
        "Loaded trial balance"
    );
    Ok(input)
}

/// Loads the input of a command, with an optional separate prior file.
pub fn load(args: &InputArgs) -> anyhow::Result<Input> {
    let mut input = read(&args.file)?;
    if let Some(prior) = &args.prior {
        input.prior = read(prior)?.current;
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_bare_array_with_french_keys() {
        let input = decode(
            r#"[{"compte": "701", "libelle": "Ventes", "solde_credit": 1000000}]"#,
        )
        .unwrap();

        assert_eq!(input.current.len(), 1);
        assert_eq!(input.current[0].account, "701");
        assert_eq!(input.current[0].credit_balance, dec!(1000000));
        assert!(input.prior.is_empty());
        assert!(input.regime.is_none());
    }

    #[test]
    fn test_decode_bundle() {
        let input = decode(
            r#"{
                "current": [{"account": "521", "debit_balance": "250000"}],
                "balance_n1": [{"account": "521", "debit_balance": "200000"}],
                "regime": "FORFAITAIRE",
                "entreprise": {"denomination": "ACME SARL", "effectif_permanent": 3}
            }"#,
        )
        .unwrap();

        assert_eq!(input.current[0].debit_balance, dec!(250000));
        assert_eq!(input.prior[0].debit_balance, dec!(200000));
        assert_eq!(input.regime.as_deref(), Some("FORFAITAIRE"));
        assert_eq!(input.company.name, "ACME SARL");
        assert_eq!(input.company.permanent_staff, 3);
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.exit_code(), 65);
    }
}
