// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Token creation, minting, and transfers.

use hedera::{
    PrivateKey, TokenCreateTransaction, TokenId, TokenMintTransaction, TokenSupplyType, TokenType,
    TransferTransaction,
};

use super::client::{HederaHandle, LedgerError};

/// Kind of token being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Fungible,
    NonFungible,
}

impl TokenClass {
    /// Parse the wire representation (`FUNGIBLE_COMMON` or
    /// `NON_FUNGIBLE_UNIQUE`, case-insensitive).
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        match s.to_uppercase().as_str() {
            "FUNGIBLE_COMMON" => Ok(Self::Fungible),
            "NON_FUNGIBLE_UNIQUE" => Ok(Self::NonFungible),
            other => Err(LedgerError::InvalidEntityId(format!(
                "unknown token type: {other}"
            ))),
        }
    }

    fn to_sdk(self) -> TokenType {
        match self {
            Self::Fungible => TokenType::FungibleCommon,
            Self::NonFungible => TokenType::NonFungibleUnique,
        }
    }
}

/// Supply model of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyClass {
    Finite,
    Infinite,
}

impl SupplyClass {
    /// Parse the wire representation (`FINITE` or `INFINITE`,
    /// case-insensitive).
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        match s.to_uppercase().as_str() {
            "FINITE" => Ok(Self::Finite),
            "INFINITE" => Ok(Self::Infinite),
            other => Err(LedgerError::InvalidEntityId(format!(
                "unknown supply type: {other}"
            ))),
        }
    }

    fn to_sdk(self) -> TokenSupplyType {
        match self {
            Self::Finite => TokenSupplyType::Finite,
            Self::Infinite => TokenSupplyType::Infinite,
        }
    }
}

/// Optional keys attached to a new token, as serialized private keys.
#[derive(Debug, Clone, Default)]
pub struct TokenKeys {
    pub admin: Option<String>,
    pub supply: Option<String>,
    pub freeze: Option<String>,
    pub wipe: Option<String>,
    pub kyc: Option<String>,
    pub pause: Option<String>,
}

/// Everything needed to create a token.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub initial_supply: u64,
    pub max_supply: u64,
    pub token_class: TokenClass,
    pub supply_class: SupplyClass,
    pub freeze_default: bool,
    /// Treasury account. Defaults to the operator when absent.
    pub treasury_account_id: Option<String>,
    pub keys: TokenKeys,
}

/// Result of a token creation.
#[derive(Debug, Clone)]
pub struct CreatedToken {
    pub token_id: String,
    pub transaction_id: String,
}

/// Result of a mint.
#[derive(Debug, Clone)]
pub struct MintOutcome {
    pub new_total_supply: u64,
    pub transaction_id: String,
}

fn parse_private_key(label: &'static str, s: &str) -> Result<PrivateKey, LedgerError> {
    s.parse()
        .map_err(|e| LedgerError::InvalidKey(format!("{label}: {e}")))
}

impl HederaHandle {
    /// Create a token on the network.
    ///
    /// The operator signs as payer. When the treasury is the operator
    /// account (the default) its signature covers the treasury
    /// requirement too; an external treasury would have to co-sign out
    /// of band. The admin key co-signs when one is supplied.
    pub async fn create_token(&self, spec: &TokenSpec) -> Result<CreatedToken, LedgerError> {
        let treasury = match &spec.treasury_account_id {
            Some(id) => id
                .parse()
                .map_err(|e| LedgerError::InvalidEntityId(format!("treasury: {e}")))?,
            None => self.operator_id,
        };

        let mut tx = TokenCreateTransaction::new();
        tx.name(spec.name.clone())
            .symbol(spec.symbol.clone())
            .decimals(spec.decimals)
            .initial_supply(spec.initial_supply)
            .token_type(spec.token_class.to_sdk())
            .token_supply_type(spec.supply_class.to_sdk())
            .freeze_default(spec.freeze_default)
            .treasury_account_id(treasury);

        if spec.supply_class == SupplyClass::Finite {
            tx.max_supply(spec.max_supply);
        }

        if let Some(admin) = &spec.keys.admin {
            let key = parse_private_key("admin key", admin)?;
            tx.admin_key(key.public_key());
            tx.sign(key);
        }
        if let Some(supply) = &spec.keys.supply {
            let key = parse_private_key("supply key", supply)?;
            tx.supply_key(key.public_key());
        }
        if let Some(freeze) = &spec.keys.freeze {
            let key = parse_private_key("freeze key", freeze)?;
            tx.freeze_key(key.public_key());
        }
        if let Some(wipe) = &spec.keys.wipe {
            let key = parse_private_key("wipe key", wipe)?;
            tx.wipe_key(key.public_key());
        }
        if let Some(kyc) = &spec.keys.kyc {
            let key = parse_private_key("kyc key", kyc)?;
            tx.kyc_key(key.public_key());
        }
        if let Some(pause) = &spec.keys.pause {
            let key = parse_private_key("pause key", pause)?;
            tx.pause_key(key.public_key());
        }

        if treasury == self.operator_id {
            tx.sign(self.operator_key.clone());
        }

        let response = tx.execute(&self.client).await?;
        let receipt = response.get_receipt(&self.client).await?;

        let token_id = receipt
            .token_id
            .ok_or(LedgerError::MissingReceiptField("token_id"))?;

        Ok(CreatedToken {
            token_id: token_id.to_string(),
            transaction_id: response.transaction_id.to_string(),
        })
    }

    /// Mint additional supply of a fungible token.
    ///
    /// Requires the token's supply key.
    pub async fn mint_token(
        &self,
        token_id: &str,
        amount: u64,
        supply_key: &str,
    ) -> Result<MintOutcome, LedgerError> {
        let token: TokenId = token_id
            .parse()
            .map_err(|e| LedgerError::InvalidEntityId(format!("token id: {e}")))?;
        let key = parse_private_key("supply key", supply_key)?;

        let mut tx = TokenMintTransaction::new();
        tx.token_id(token)
            .amount(amount)
            .sign(self.operator_key.clone())
            .sign(key);

        let response = tx.execute(&self.client).await?;
        let receipt = response.get_receipt(&self.client).await?;

        Ok(MintOutcome {
            new_total_supply: receipt.total_supply,
            transaction_id: response.transaction_id.to_string(),
        })
    }

    /// Transfer fungible token units from the operator to a recipient.
    pub async fn transfer_token(
        &self,
        token_id: &str,
        recipient: &str,
        amount: i64,
    ) -> Result<String, LedgerError> {
        let token: TokenId = token_id
            .parse()
            .map_err(|e| LedgerError::InvalidEntityId(format!("token id: {e}")))?;
        let to = recipient
            .parse()
            .map_err(|e| LedgerError::InvalidEntityId(format!("recipient: {e}")))?;

        let mut tx = TransferTransaction::new();
        tx.token_transfer(token, self.operator_id, -amount)
            .token_transfer(token, to, amount)
            .sign(self.operator_key.clone());

        let response = tx.execute(&self.client).await?;
        response.get_receipt(&self.client).await?;

        Ok(response.transaction_id.to_string())
    }
}
