// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Account creation and alias funding.

use hedera::{AccountCreateTransaction, AccountId, AccountInfoQuery, Hbar, PrivateKey, TransferTransaction};

use super::client::{whole_hbar_to_tinybars, HederaHandle, LedgerError};

/// A freshly created Hedera account.
///
/// The private key is generated server-side and handed back to the
/// caller exactly once; it is never persisted.
#[derive(Debug, Clone)]
pub struct CreatedAccount {
    pub account_id: String,
    pub public_key: String,
    pub private_key: String,
}

impl HederaHandle {
    /// Create a new account with a fresh ed25519 key pair.
    ///
    /// The operator funds the initial balance and pays the fee.
    pub async fn create_account(
        &self,
        initial_balance_hbar: i64,
        memo: Option<String>,
    ) -> Result<CreatedAccount, LedgerError> {
        let new_key = PrivateKey::generate_ed25519();

        let initial_balance = Hbar::from_tinybars(whole_hbar_to_tinybars(initial_balance_hbar)?);

        let mut tx = AccountCreateTransaction::new();
        tx.key(new_key.public_key()).initial_balance(initial_balance);
        if let Some(memo) = memo {
            tx.account_memo(memo);
        }
        tx.sign(self.operator_key.clone()).sign(new_key.clone());

        let response = tx.execute(&self.client).await?;
        let receipt = response.get_receipt(&self.client).await?;

        let account_id = receipt
            .account_id
            .ok_or(LedgerError::MissingReceiptField("account_id"))?;

        Ok(CreatedAccount {
            account_id: account_id.to_string(),
            public_key: new_key.public_key().to_string(),
            private_key: new_key.to_string(),
        })
    }

    /// Send hbars from the operator to an alias derived from an EVM
    /// address. The first transfer to an alias triggers auto-creation
    /// of a hollow account on the network.
    pub async fn fund_alias(
        &self,
        evm_address: &str,
        whole_hbar: i64,
    ) -> Result<String, LedgerError> {
        let alias = alias_account_id(evm_address)?;
        let tinybars = whole_hbar_to_tinybars(whole_hbar)?;

        let mut tx = TransferTransaction::new();
        tx.hbar_transfer(self.operator_id, Hbar::from_tinybars(-tinybars))
            .hbar_transfer(alias, Hbar::from_tinybars(tinybars))
            .sign(self.operator_key.clone());

        let response = tx.execute(&self.client).await?;
        response.get_receipt(&self.client).await?;

        Ok(response.transaction_id.to_string())
    }

    /// Resolve the numeric account id behind an EVM-address alias.
    ///
    /// Only succeeds once the alias has received a transfer and the
    /// hollow account exists.
    pub async fn account_id_for_alias(&self, evm_address: &str) -> Result<String, LedgerError> {
        let alias = alias_account_id(evm_address)?;

        let info = AccountInfoQuery::new()
            .account_id(alias)
            .execute(&self.client)
            .await?;

        Ok(info.account_id.to_string())
    }
}

/// Build an alias `AccountId` from an EVM address string.
pub fn alias_account_id(evm_address: &str) -> Result<AccountId, LedgerError> {
    let hex = evm_address
        .strip_prefix("0x")
        .unwrap_or(evm_address)
        .to_lowercase();

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LedgerError::InvalidEntityId(format!(
            "not an EVM address: {evm_address}"
        )));
    }

    format!("0.0.{hex}")
        .parse()
        .map_err(|e| LedgerError::InvalidEntityId(format!("alias account: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_accepts_prefixed_and_bare_addresses() {
        let addr = "0x00000000000000000000000000000000000004d2";
        assert!(alias_account_id(addr).is_ok());
        assert!(alias_account_id(&addr[2..]).is_ok());
    }

    #[test]
    fn alias_rejects_short_and_non_hex_input() {
        assert!(alias_account_id("0x1234").is_err());
        assert!(alias_account_id("not-an-address").is_err());
        assert!(alias_account_id("0xzz000000000000000000000000000000000004d2").is_err());
    }
}
