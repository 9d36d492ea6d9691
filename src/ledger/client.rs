// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Operator-funded Hedera client.

use hedera::{AccountBalanceQuery, AccountId, Client, PrivateKey};

/// Tinybars per whole hbar.
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// Convert whole hbars to tinybars.
///
/// Rejects amounts whose tinybar representation does not fit in an
/// `i64` instead of wrapping.
pub fn whole_hbar_to_tinybars(hbars: i64) -> Result<i64, LedgerError> {
    hbars
        .checked_mul(TINYBARS_PER_HBAR)
        .ok_or_else(|| LedgerError::InvalidEntityId(format!("hbar amount out of range: {hbars}")))
}

/// Errors that can occur during Hedera network operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid entity id: {0}")]
    InvalidEntityId(String),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Hedera SDK error: {0}")]
    Sdk(String),

    #[error("Receipt missing expected field: {0}")]
    MissingReceiptField(&'static str),
}

impl From<hedera::Error> for LedgerError {
    fn from(e: hedera::Error) -> Self {
        LedgerError::Sdk(e.to_string())
    }
}

/// Balance of an account, with all figures rendered as strings so
/// clients never lose precision to floating point.
#[derive(Debug, Clone)]
pub struct BalanceSummary {
    /// Whole-hbar figure (may carry a fractional part).
    pub hbars: String,
    /// Exact balance in tinybars.
    pub tinybars: String,
    /// Token balances keyed by token id, rendered as a single string.
    pub tokens: String,
}

/// Handle to the Hedera network, bound to the operator account.
///
/// The operator pays for and authorizes every transaction the service
/// submits. Cheap to share behind an `Arc`.
pub struct HederaHandle {
    pub(crate) client: Client,
    pub(crate) operator_id: AccountId,
    pub(crate) operator_key: PrivateKey,
}

impl HederaHandle {
    /// Connect to the named network and install the operator.
    pub fn new(network: &str, operator_id: &str, operator_key: &str) -> Result<Self, LedgerError> {
        let client = match network {
            "mainnet" => Client::for_mainnet(),
            _ => Client::for_testnet(),
        };

        let operator_id: AccountId = operator_id
            .parse()
            .map_err(|e| LedgerError::InvalidEntityId(format!("operator id: {e}")))?;
        let operator_key: PrivateKey = operator_key
            .parse()
            .map_err(|e| LedgerError::InvalidKey(format!("operator key: {e}")))?;

        client.set_operator(operator_id, operator_key.clone());

        Ok(Self {
            client,
            operator_id,
            operator_key,
        })
    }

    /// The operator account id as a string (`0.0.x`).
    pub fn operator_id_string(&self) -> String {
        self.operator_id.to_string()
    }

    /// Whether the operator account can act as a payer.
    ///
    /// Account `0.0.0` is not a real account and can never pay fees.
    pub fn operator_configured(&self) -> bool {
        self.operator_id.num != 0
    }

    /// Query the balance of an account.
    pub async fn account_balance(&self, account_id: &str) -> Result<BalanceSummary, LedgerError> {
        let account: AccountId = account_id
            .parse()
            .map_err(|e| LedgerError::InvalidEntityId(format!("account id: {e}")))?;

        let balance = AccountBalanceQuery::new()
            .account_id(account)
            .execute(&self.client)
            .await?;

        let tinybars = balance.hbars.to_tinybars();

        Ok(BalanceSummary {
            hbars: format_hbars(tinybars),
            tinybars: tinybars.to_string(),
            #[allow(deprecated)]
            tokens: format!("{:?}", balance.tokens),
        })
    }
}

/// Render a tinybar amount as a whole-hbar decimal string.
fn format_hbars(tinybars: i64) -> String {
    let whole = tinybars / TINYBARS_PER_HBAR;
    let frac = (tinybars % TINYBARS_PER_HBAR).abs();
    if frac == 0 {
        whole.to_string()
    } else {
        let frac_str = format!("{frac:08}");
        let trimmed = frac_str.trim_end_matches('0');
        format!("{whole}.{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hbar_conversion() {
        assert_eq!(whole_hbar_to_tinybars(0).unwrap(), 0);
        assert_eq!(whole_hbar_to_tinybars(1).unwrap(), 100_000_000);
        assert_eq!(whole_hbar_to_tinybars(10).unwrap(), 1_000_000_000);
    }

    #[test]
    fn whole_hbar_conversion_rejects_overflow() {
        assert!(matches!(
            whole_hbar_to_tinybars(i64::MAX),
            Err(LedgerError::InvalidEntityId(_))
        ));
        assert!(matches!(
            whole_hbar_to_tinybars(92_233_720_369),
            Err(LedgerError::InvalidEntityId(_))
        ));
        // Largest amount that still fits.
        assert!(whole_hbar_to_tinybars(92_233_720_368).is_ok());
    }

    #[tokio::test]
    async fn operator_zero_account_is_not_configured() {
        const TEST_KEY: &str =
            "302e020100300506032b657004220420db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";

        let handle = HederaHandle::new("testnet", "0.0.2", TEST_KEY).unwrap();
        assert!(handle.operator_configured());

        let zero = HederaHandle::new("testnet", "0.0.0", TEST_KEY).unwrap();
        assert!(!zero.operator_configured());
    }

    #[test]
    fn format_hbars_renders_decimals() {
        assert_eq!(format_hbars(0), "0");
        assert_eq!(format_hbars(100_000_000), "1");
        assert_eq!(format_hbars(150_000_000), "1.5");
        assert_eq!(format_hbars(123_456_789), "1.23456789");
        assert_eq!(format_hbars(1), "0.00000001");
    }
}
