//! Records returned by the CSPR.cloud API.
//!
//! Every field is optional: the API omits or nulls fields freely depending on
//! the record's age and the `includes` used, and a missing field must never
//! fail a whole page.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::types::Amount;

/// Account with balances and staking state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Account {
    pub public_key: Option<String>,
    pub account_hash: Option<String>,
    pub main_purse_uref: Option<String>,
    pub balance: Option<Amount>,
    pub staked_balance: Option<Amount>,
    pub delegated_balance: Option<Amount>,
    pub undelegated_balance: Option<Amount>,
    pub auction_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Block {
    pub block_hash: Option<String>,
    pub block_height: Option<u64>,
    pub parent_block_hash: Option<String>,
    pub state_root_hash: Option<String>,
    pub era_id: Option<u64>,
    pub proposer_public_key: Option<String>,
    pub native_transfers_number: Option<u64>,
    pub contract_calls_number: Option<u64>,
    pub is_switch_block: Option<bool>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Deploy {
    pub deploy_hash: Option<String>,
    pub block_hash: Option<String>,
    pub block_height: Option<u64>,
    pub caller_public_key: Option<String>,
    pub status: Option<String>,
    pub cost: Option<Amount>,
    pub payment_amount: Option<Amount>,
    pub contract_hash: Option<String>,
    pub contract_package_hash: Option<String>,
    pub error_message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Native transfers made by the deploy, when requested
    pub transfers: Option<Vec<Transfer>>,
}

/// Native CSPR transfer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub deploy_hash: Option<String>,
    pub block_height: Option<u64>,
    pub initiator_account_hash: Option<String>,
    pub from_purse_public_key: Option<String>,
    pub to_public_key: Option<String>,
    pub to_account_hash: Option<String>,
    pub amount: Option<Amount>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transfer {
    /// Sender, falling back to the initiating account hash
    pub fn sender(&self) -> Option<&str> {
        self.from_purse_public_key
            .as_deref()
            .or(self.initiator_account_hash.as_deref())
    }

    /// Recipient, falling back to the account hash
    pub fn recipient(&self) -> Option<&str> {
        self.to_public_key
            .as_deref()
            .or(self.to_account_hash.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Delegation {
    /// Delegator
    pub public_key: Option<String>,
    pub validator_public_key: Option<String>,
    pub stake: Option<Amount>,
}

/// Era reward paid to a delegator or a validator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Reward {
    pub public_key: Option<String>,
    pub validator_public_key: Option<String>,
    pub era_id: Option<u64>,
    pub amount: Option<Amount>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Bidder {
    pub public_key: Option<String>,
    pub rank: Option<u32>,
    pub is_active: Option<bool>,
    pub fee: Option<f64>,
    pub self_stake: Option<Amount>,
    pub total_stake: Option<Amount>,
    pub self_share: Option<Amount>,
    pub network_share: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Validator {
    pub public_key: Option<String>,
    pub era_id: Option<u64>,
    pub rank: Option<u32>,
    pub is_active: Option<bool>,
    pub fee: Option<f64>,
    pub delegators_number: Option<u64>,
    pub self_stake: Option<Amount>,
    pub delegators_stake: Option<Amount>,
    pub total_stake: Option<Amount>,
    pub self_share: Option<f64>,
    pub network_share: Option<f64>,
}

/// Per-era validator performance score
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Performance {
    pub public_key: Option<String>,
    pub era_id: Option<u64>,
    pub score: Option<f64>,
    pub average_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuctionMetrics {
    pub current_era_id: Option<u64>,
    pub active_validator_number: Option<u64>,
    pub total_bids_number: Option<u64>,
    pub active_bids_number: Option<u64>,
    pub total_active_era_stake: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Supply {
    pub token: Option<String>,
    pub total: Option<Amount>,
    pub circulating: Option<Amount>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Reference-table entry (`{id, name}`): execution types, contract types,
/// DEXes, NFT standards and the like
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedEntry {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CsprNameResolution {
    pub name: Option<String>,
    pub name_token_id: Option<String>,
    pub resolved_hash: Option<String>,
    pub is_primary: Option<bool>,
    pub expires_at: Option<String>,
}

/// Deploy waiting for more approvals
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwaitingDeploy {
    pub deploy_hash: Option<String>,
    pub deploy: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencyRate {
    pub currency_id: Option<u32>,
    pub amount: Option<f64>,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub id: Option<u32>,
    pub code: Option<String>,
    pub type_id: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Swap {
    pub transaction_hash: Option<String>,
    pub sender_public_key: Option<String>,
    pub sender_hash: Option<String>,
    pub token0_contract_package_hash: Option<String>,
    pub token1_contract_package_hash: Option<String>,
    pub amount0_in: Option<Amount>,
    pub amount1_in: Option<Amount>,
    pub amount0_out: Option<Amount>,
    pub amount1_out: Option<Amount>,
    pub dex_id: Option<u32>,
    pub block_height: Option<u64>,
    pub timestamp: Option<String>,
}

/// Public info about an exchange or other custodial account
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CentralizedAccountInfo {
    pub account_hash: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContractPackage {
    pub contract_package_hash: Option<String>,
    pub owner_public_key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub deploys_number: Option<u64>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contract {
    pub contract_hash: Option<String>,
    pub contract_package_hash: Option<String>,
    pub deploy_hash: Option<String>,
    pub block_height: Option<u64>,
    pub contract_type_id: Option<u32>,
    pub contract_version: Option<u32>,
    pub is_disabled: Option<bool>,
    pub timestamp: Option<DateTime<Utc>>,
    pub contract_package: Option<ContractPackage>,
}

/// Aggregated cost statistics of one entry point
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryPointCosts {
    pub deploys_num: Option<u64>,
    pub since: Option<DateTime<Utc>>,
    pub avg_cost: Option<Amount>,
    pub min_cost: Option<Amount>,
    pub max_cost: Option<Amount>,
    pub avg_payment_amount: Option<Amount>,
    pub min_payment_amount: Option<Amount>,
    pub max_payment_amount: Option<Amount>,
}

/// Fungible token balance of one owner
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FtOwnership {
    pub contract_package_hash: Option<String>,
    pub owner_hash: Option<String>,
    pub balance: Option<Amount>,
    pub contract_package: Option<ContractPackage>,
}

/// Fungible token transfer, mint or burn
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FtAction {
    pub deploy_hash: Option<String>,
    pub contract_package_hash: Option<String>,
    pub from_public_key: Option<String>,
    pub from_hash: Option<String>,
    pub to_public_key: Option<String>,
    pub to_hash: Option<String>,
    pub amount: Option<Amount>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl FtAction {
    pub fn sender(&self) -> Option<&str> {
        self.from_public_key.as_deref().or(self.from_hash.as_deref())
    }

    pub fn recipient(&self) -> Option<&str> {
        self.to_public_key.as_deref().or(self.to_hash.as_deref())
    }
}

/// Token price point. Currency rates carry `currency_id`, DEX rates carry
/// `target_token_contract_package_hash`; daily aggregates carry `date`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FtRate {
    pub token_contract_package_hash: Option<String>,
    pub target_token_contract_package_hash: Option<String>,
    pub currency_id: Option<u32>,
    pub amount: Option<f64>,
    pub volume: Option<Amount>,
    pub dex_id: Option<u32>,
    pub transaction_hash: Option<String>,
    pub timestamp: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NftToken {
    pub contract_package_hash: Option<String>,
    pub token_id: Option<String>,
    pub owner_public_key: Option<String>,
    pub owner_hash: Option<String>,
    pub is_burned: Option<bool>,
    pub block_height: Option<u64>,
    pub token_standard_id: Option<u32>,
    pub timestamp: Option<DateTime<Utc>>,
    pub contract_package: Option<ContractPackage>,
}

impl NftToken {
    pub fn owner(&self) -> Option<&str> {
        self.owner_public_key.as_deref().or(self.owner_hash.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NftAction {
    pub deploy_hash: Option<String>,
    pub contract_package_hash: Option<String>,
    pub token_id: Option<String>,
    pub from_public_key: Option<String>,
    pub from_hash: Option<String>,
    pub to_public_key: Option<String>,
    pub to_hash: Option<String>,
    pub nft_action_id: Option<u32>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl NftAction {
    pub fn sender(&self) -> Option<&str> {
        self.from_public_key.as_deref().or(self.from_hash.as_deref())
    }

    pub fn recipient(&self) -> Option<&str> {
        self.to_public_key.as_deref().or(self.to_hash.as_deref())
    }
}

/// Number of NFTs an owner holds in one collection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NftOwnership {
    pub contract_package_hash: Option<String>,
    pub owner_public_key: Option<String>,
    pub owner_hash: Option<String>,
    pub tokens_number: Option<u64>,
    pub contract_package: Option<ContractPackage>,
}

impl NftOwnership {
    pub fn owner(&self) -> Option<&str> {
        self.owner_public_key.as_deref().or(self.owner_hash.as_deref())
    }
}
