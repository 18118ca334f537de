//! Static tool catalog: names, descriptions, arguments and the action phrase
//! used in `Error <action>: <message>` lines.

use serde_json::{json, Map, Value};

use crate::protocol::McpTool;

/// JSON type of a tool argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Integer { default: u32 },
}

/// One tool argument
#[derive(Debug, Clone, Copy)]
pub struct ToolParam {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ToolParam {
    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::Text,
            required: true,
        }
    }

    pub const fn optional_text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::Text,
            required: false,
        }
    }

    pub const fn integer(name: &'static str, description: &'static str, default: u32) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::Integer { default },
            required: false,
        }
    }

    fn schema(&self) -> Value {
        match self.kind {
            ParamKind::Text => json!({
                "type": "string",
                "description": self.description,
            }),
            ParamKind::Integer { default } => json!({
                "type": "integer",
                "description": self.description,
                "default": default,
            }),
        }
    }
}

/// A tool as exposed to MCP clients
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Gerund phrase for error lines, e.g. "retrieving account info"
    pub action: &'static str,
    pub params: &'static [ToolParam],
}

impl ToolDescriptor {
    /// MCP definition with a JSON-Schema input schema
    pub fn to_mcp_tool(&self) -> McpTool {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(param.name.to_string(), param.schema());
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }

        McpTool {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: Value::Object(schema),
        }
    }
}

/// Find a tool by name
pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// MCP definitions of every tool
pub fn mcp_tools() -> Vec<McpTool> {
    TOOLS.iter().map(ToolDescriptor::to_mcp_tool).collect()
}

const PAGE: ToolParam = ToolParam::integer("page", "Page number (default: 1)", 1);
const PAGE_SIZE: ToolParam = ToolParam::integer(
    "pageSize",
    "Number of results per page (default: 10, max: 250)",
    10,
);

const ACCOUNT_IDENTIFIER: ToolParam = ToolParam::text(
    "accountIdentifier",
    "The public key or account hash of the account",
);
const ACCOUNT_OR_HASH: ToolParam =
    ToolParam::text("accountIdentifier", "The public key or account hash");
const ACCOUNT_KEY: ToolParam = ToolParam::text("publicKey", "The public key of the account");
const VALIDATOR_KEY: ToolParam = ToolParam::text("publicKey", "The public key of the validator");
const BLOCK_HASH: ToolParam = ToolParam::text("blockHash", "The block hash");
const DEPLOY_HASH: ToolParam = ToolParam::text("deployHash", "The deploy hash");
const CONTRACT_HASH: ToolParam = ToolParam::text("contractHash", "The contract hash");
const PACKAGE_HASH: ToolParam = ToolParam::text("contractPackageHash", "The contract package hash");
const TOKEN_PACKAGE: ToolParam = ToolParam::text(
    "contractPackageHash",
    "The contract package hash of the fungible token",
);
const COLLECTION_PACKAGE: ToolParam = ToolParam::text(
    "contractPackageHash",
    "The contract package hash of the NFT collection",
);
const TOKEN_ID: ToolParam = ToolParam::text("tokenId", "The token ID");
const CURRENCY_ID: ToolParam = ToolParam::text("currencyId", "The currency ID (e.g., 1 for USD)");
const CURRENCY_FILTER: ToolParam =
    ToolParam::optional_text("currencyId", "Optional currency ID to filter by");
const TARGET_FILTER: ToolParam = ToolParam::optional_text(
    "targetContractPackageHash",
    "Optional target token contract package hash",
);

const NONE: &[ToolParam] = &[];
const PAGED: &[ToolParam] = &[PAGE, PAGE_SIZE];
const ACCOUNT_LOOKUP: &[ToolParam] = &[ACCOUNT_IDENTIFIER];
const ACCOUNT_PAGED: &[ToolParam] = &[ACCOUNT_KEY, PAGE, PAGE_SIZE];
const ACCOUNT_OR_HASH_PAGED: &[ToolParam] = &[ACCOUNT_OR_HASH, PAGE, PAGE_SIZE];
const VALIDATOR_LOOKUP: &[ToolParam] = &[VALIDATOR_KEY];
const VALIDATOR_PAGED: &[ToolParam] = &[VALIDATOR_KEY, PAGE, PAGE_SIZE];
const TOKEN_PAGED: &[ToolParam] = &[TOKEN_PACKAGE, PAGE, PAGE_SIZE];
const PACKAGE_PAGED: &[ToolParam] = &[PACKAGE_HASH, PAGE, PAGE_SIZE];

/// Every tool the server offers
pub static TOOLS: &[ToolDescriptor] = &[
    // Accounts
    ToolDescriptor {
        name: "get_account_info",
        description: "Get detailed information about a Casper Network account by public key or account hash, including balance, staking info, and delegation status.",
        action: "retrieving account info",
        params: ACCOUNT_LOOKUP,
    },
    ToolDescriptor {
        name: "get_account_balance",
        description: "Get the CSPR balance of a Casper Network account.",
        action: "retrieving account balance",
        params: ACCOUNT_LOOKUP,
    },
    ToolDescriptor {
        name: "get_account_deploys",
        description: "Get recent deploys (transactions) for a Casper Network account.",
        action: "retrieving account deploys",
        params: ACCOUNT_PAGED,
    },
    ToolDescriptor {
        name: "get_account_delegations",
        description: "Get delegation information for a Casper Network account, showing which validators the account has delegated to.",
        action: "retrieving account delegations",
        params: ACCOUNT_PAGED,
    },
    ToolDescriptor {
        name: "get_accounts",
        description: "Get a paginated list of all accounts on the Casper Network.",
        action: "retrieving accounts",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_account_contract_packages",
        description: "Get contract packages deployed by a Casper Network account.",
        action: "retrieving account contract packages",
        params: ACCOUNT_PAGED,
    },
    ToolDescriptor {
        name: "get_account_delegation_rewards",
        description: "Get delegation rewards for a Casper Network account.",
        action: "retrieving account delegation rewards",
        params: ACCOUNT_PAGED,
    },
    ToolDescriptor {
        name: "get_total_account_delegation_rewards",
        description: "Get the total delegation rewards for a Casper Network account.",
        action: "retrieving total account delegation rewards",
        params: &[ACCOUNT_KEY],
    },
    ToolDescriptor {
        name: "get_total_validator_delegator_rewards",
        description: "Get the total delegation rewards paid out by a validator to its delegators.",
        action: "retrieving total validator delegator rewards",
        params: VALIDATOR_LOOKUP,
    },
    // Blocks
    ToolDescriptor {
        name: "get_block",
        description: "Get detailed information about a specific Casper Network block by its hash.",
        action: "retrieving block",
        params: &[BLOCK_HASH],
    },
    ToolDescriptor {
        name: "get_latest_blocks",
        description: "Get the latest blocks from the Casper Network.",
        action: "retrieving latest blocks",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_validator_blocks",
        description: "Get blocks proposed by a specific validator on the Casper Network.",
        action: "retrieving validator blocks",
        params: VALIDATOR_PAGED,
    },
    // Deploys
    ToolDescriptor {
        name: "get_deploy",
        description: "Get detailed information about a specific Casper Network deploy (transaction) by its hash.",
        action: "retrieving deploy",
        params: &[DEPLOY_HASH],
    },
    ToolDescriptor {
        name: "get_deploys",
        description: "Get a paginated list of all deploys (transactions) on the Casper Network.",
        action: "retrieving deploys",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_block_deploys",
        description: "Get deploys (transactions) included in a specific block on the Casper Network.",
        action: "retrieving block deploys",
        params: &[BLOCK_HASH, PAGE, PAGE_SIZE],
    },
    ToolDescriptor {
        name: "get_deploy_execution_types",
        description: "Get the list of deploy execution types on the Casper Network.",
        action: "retrieving deploy execution types",
        params: NONE,
    },
    // Transfers
    ToolDescriptor {
        name: "get_transfers",
        description: "Get native CSPR transfer history for a Casper Network account.",
        action: "retrieving transfers",
        params: ACCOUNT_OR_HASH_PAGED,
    },
    ToolDescriptor {
        name: "get_deploy_transfers",
        description: "Get native CSPR transfers for a specific deploy on the Casper Network.",
        action: "retrieving deploy transfers",
        params: &[DEPLOY_HASH, PAGE, PAGE_SIZE],
    },
    // Names and awaiting deploys
    ToolDescriptor {
        name: "resolve_cspr_name",
        description: "Resolve a CSPR.name to an account hash on the Casper Network.",
        action: "resolving CSPR.name",
        params: &[ToolParam::text("name", "The CSPR.name to resolve (e.g., 'alice.cspr')")],
    },
    ToolDescriptor {
        name: "get_awaiting_deploy",
        description: "Get an awaiting deploy by its deploy hash on the Casper Network.",
        action: "retrieving awaiting deploy",
        params: &[DEPLOY_HASH],
    },
    ToolDescriptor {
        name: "create_awaiting_deploy",
        description: "Create an awaiting deploy on the Casper Network. Submits a deploy JSON for multi-signature collection.",
        action: "creating awaiting deploy",
        params: &[ToolParam::text("deployJson", "The deploy JSON string")],
    },
    ToolDescriptor {
        name: "add_awaiting_deploy_approval",
        description: "Add an approval (signature) to an awaiting deploy on the Casper Network.",
        action: "adding approval to awaiting deploy",
        params: &[
            DEPLOY_HASH,
            ToolParam::text("signer", "The signer's public key"),
            ToolParam::text("signature", "The signature"),
        ],
    },
    // Bidders
    ToolDescriptor {
        name: "get_bidder",
        description: "Get information about a specific bidder on the Casper Network by public key.",
        action: "retrieving bidder",
        params: &[ToolParam::text("publicKey", "The public key of the bidder")],
    },
    ToolDescriptor {
        name: "get_bidders",
        description: "Get a list of bidders on the Casper Network.",
        action: "retrieving bidders",
        params: PAGED,
    },
    // Validators
    ToolDescriptor {
        name: "get_validators",
        description: "Get a list of validators on the Casper Network with their stake, fee, and performance info.",
        action: "retrieving validators",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_validator_info",
        description: "Get detailed information about a specific Casper Network validator by public key.",
        action: "retrieving validator info",
        params: &[ToolParam::text("publicKey", "The validator's public key")],
    },
    ToolDescriptor {
        name: "get_validator_delegations",
        description: "Get delegations to a specific validator on the Casper Network.",
        action: "retrieving validator delegations",
        params: VALIDATOR_PAGED,
    },
    ToolDescriptor {
        name: "get_validator_rewards",
        description: "Get rewards earned by a specific validator on the Casper Network.",
        action: "retrieving validator rewards",
        params: VALIDATOR_PAGED,
    },
    ToolDescriptor {
        name: "get_validator_total_rewards",
        description: "Get the total rewards earned by a validator on the Casper Network.",
        action: "retrieving validator total rewards",
        params: VALIDATOR_LOOKUP,
    },
    ToolDescriptor {
        name: "get_historical_validator_performance",
        description: "Get historical performance scores for a specific validator on the Casper Network.",
        action: "retrieving validator performance",
        params: VALIDATOR_PAGED,
    },
    ToolDescriptor {
        name: "get_historical_validator_average_performance",
        description: "Get historical average performance for a specific validator on the Casper Network.",
        action: "retrieving validator average performance",
        params: VALIDATOR_PAGED,
    },
    ToolDescriptor {
        name: "get_historical_validators_average_performance",
        description: "Get historical average performance for all validators on the Casper Network.",
        action: "retrieving validators average performance",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_validator_era_rewards",
        description: "Get validator rewards aggregated by era on the Casper Network.",
        action: "retrieving validator era rewards",
        params: VALIDATOR_PAGED,
    },
    // Network
    ToolDescriptor {
        name: "get_network_status",
        description: "Get current Casper Network status including active validators, era info, and total stake.",
        action: "retrieving network status",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_era_info",
        description: "Get current Casper Network era information from auction metrics.",
        action: "retrieving era info",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_supply_info",
        description: "Get CSPR token supply information including total and circulating supply.",
        action: "retrieving supply info",
        params: NONE,
    },
    // Currency rates
    ToolDescriptor {
        name: "get_current_currency_rate",
        description: "Get the current CSPR exchange rate for a specific currency.",
        action: "retrieving currency rate",
        params: &[CURRENCY_ID],
    },
    ToolDescriptor {
        name: "get_historical_currency_rates",
        description: "Get historical CSPR exchange rates for a specific currency.",
        action: "retrieving historical currency rates",
        params: &[CURRENCY_ID, PAGE, PAGE_SIZE],
    },
    ToolDescriptor {
        name: "get_currencies",
        description: "Get a list of supported currencies for CSPR exchange rates.",
        action: "retrieving currencies",
        params: PAGED,
    },
    // DEX
    ToolDescriptor {
        name: "get_dexes",
        description: "Get a list of all decentralized exchanges (DEXes) on the Casper Network.",
        action: "retrieving DEXes",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_swaps",
        description: "Get a paginated list of token swaps on the Casper Network DEXes.",
        action: "retrieving swaps",
        params: PAGED,
    },
    // Centralized accounts
    ToolDescriptor {
        name: "get_centralized_account_info",
        description: "Get centralized account information for a Casper Network account by account hash.",
        action: "retrieving centralized account info",
        params: &[ToolParam::text("accountHash", "The account hash")],
    },
    ToolDescriptor {
        name: "get_centralized_accounts",
        description: "Get a list of centralized account information entries on the Casper Network.",
        action: "retrieving centralized accounts",
        params: PAGED,
    },
    // Contracts
    ToolDescriptor {
        name: "get_contract",
        description: "Get information about a Casper Network smart contract by its hash.",
        action: "retrieving contract",
        params: &[CONTRACT_HASH],
    },
    ToolDescriptor {
        name: "get_contract_entry_points",
        description: "Get the entry points (callable functions) of a Casper Network smart contract.",
        action: "retrieving contract entry points",
        params: &[CONTRACT_HASH],
    },
    ToolDescriptor {
        name: "get_contracts",
        description: "Get a paginated list of all contracts on the Casper Network.",
        action: "retrieving contracts",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_contract_types",
        description: "Get the list of contract types on the Casper Network.",
        action: "retrieving contract types",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_contract_entry_point_costs",
        description: "Get cost statistics for a specific contract entry point on the Casper Network.",
        action: "retrieving entry point costs",
        params: &[
            CONTRACT_HASH,
            ToolParam::text("entryPointName", "The entry point name"),
        ],
    },
    ToolDescriptor {
        name: "get_contract_packages",
        description: "Get a paginated list of contract packages on the Casper Network.",
        action: "retrieving contract packages",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_contracts_by_contract_package",
        description: "Get contracts belonging to a specific contract package on the Casper Network.",
        action: "retrieving contracts by package",
        params: PACKAGE_PAGED,
    },
    // Fungible tokens
    ToolDescriptor {
        name: "get_ft_token_info",
        description: "Get information about a fungible token (CEP-18) contract package on the Casper Network.",
        action: "retrieving token info",
        params: &[TOKEN_PACKAGE],
    },
    ToolDescriptor {
        name: "get_ft_token_holders",
        description: "Get the holders (ownership list) of a fungible token on the Casper Network.",
        action: "retrieving token holders",
        params: TOKEN_PAGED,
    },
    ToolDescriptor {
        name: "get_account_ft_balances",
        description: "Get fungible token balances for a Casper Network account.",
        action: "retrieving account FT balances",
        params: ACCOUNT_OR_HASH_PAGED,
    },
    ToolDescriptor {
        name: "get_fungible_token_actions",
        description: "Get fungible token actions (transfers, mints, burns) on the Casper Network.",
        action: "retrieving fungible token actions",
        params: PAGED,
    },
    ToolDescriptor {
        name: "get_account_fungible_token_actions",
        description: "Get fungible token actions for a specific account on the Casper Network.",
        action: "retrieving account fungible token actions",
        params: ACCOUNT_OR_HASH_PAGED,
    },
    ToolDescriptor {
        name: "get_contract_package_fungible_token_actions",
        description: "Get fungible token actions for a specific contract package on the Casper Network.",
        action: "retrieving contract package FT actions",
        params: PACKAGE_PAGED,
    },
    // Fungible token rates
    ToolDescriptor {
        name: "get_ft_rate_latest",
        description: "Get the latest fungible token rate for a contract package on the Casper Network.",
        action: "retrieving FT rate",
        params: &[TOKEN_PACKAGE, CURRENCY_FILTER],
    },
    ToolDescriptor {
        name: "get_ft_rates",
        description: "Get historical fungible token rates for a contract package on the Casper Network.",
        action: "retrieving FT rates",
        params: TOKEN_PAGED,
    },
    ToolDescriptor {
        name: "get_ft_daily_rate_latest",
        description: "Get the latest daily aggregated fungible token rate on the Casper Network.",
        action: "retrieving daily FT rate",
        params: &[TOKEN_PACKAGE, CURRENCY_FILTER],
    },
    ToolDescriptor {
        name: "get_ft_daily_rates",
        description: "Get historical daily aggregated fungible token rates on the Casper Network.",
        action: "retrieving daily FT rates",
        params: TOKEN_PAGED,
    },
    ToolDescriptor {
        name: "get_ft_dex_rate_latest",
        description: "Get the latest token-to-token DEX rate for a fungible token on the Casper Network.",
        action: "retrieving FT DEX rate",
        params: &[TOKEN_PACKAGE, TARGET_FILTER],
    },
    ToolDescriptor {
        name: "get_ft_dex_rates",
        description: "Get historical token-to-token DEX rates for a fungible token on the Casper Network.",
        action: "retrieving FT DEX rates",
        params: TOKEN_PAGED,
    },
    ToolDescriptor {
        name: "get_ft_daily_dex_rate_latest",
        description: "Get the latest daily token-to-token DEX rate for a fungible token on the Casper Network.",
        action: "retrieving daily FT DEX rate",
        params: &[TOKEN_PACKAGE, TARGET_FILTER],
    },
    ToolDescriptor {
        name: "get_ft_daily_dex_rates",
        description: "Get historical daily token-to-token DEX rates for a fungible token on the Casper Network.",
        action: "retrieving daily FT DEX rates",
        params: TOKEN_PAGED,
    },
    // NFTs
    ToolDescriptor {
        name: "get_nft_collection",
        description: "Get information about an NFT collection (contract package) on the Casper Network.",
        action: "retrieving NFT collection",
        params: &[COLLECTION_PACKAGE, PAGE, PAGE_SIZE],
    },
    ToolDescriptor {
        name: "get_account_nfts",
        description: "Get NFTs owned by a Casper Network account.",
        action: "retrieving account NFTs",
        params: ACCOUNT_OR_HASH_PAGED,
    },
    ToolDescriptor {
        name: "get_nft",
        description: "Get a specific NFT by contract package hash and token ID on the Casper Network.",
        action: "retrieving NFT",
        params: &[COLLECTION_PACKAGE, TOKEN_ID],
    },
    ToolDescriptor {
        name: "get_nft_standards",
        description: "Get the list of NFT standards supported on the Casper Network.",
        action: "retrieving NFT standards",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_nft_metadata_statuses",
        description: "Get the list of offchain NFT metadata statuses on the Casper Network.",
        action: "retrieving NFT metadata statuses",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_nft_actions_for_token",
        description: "Get NFT actions for a specific token in a collection on the Casper Network.",
        action: "retrieving NFT token actions",
        params: &[COLLECTION_PACKAGE, TOKEN_ID, PAGE, PAGE_SIZE],
    },
    ToolDescriptor {
        name: "get_account_nft_actions",
        description: "Get NFT actions for a specific account on the Casper Network.",
        action: "retrieving account NFT actions",
        params: ACCOUNT_OR_HASH_PAGED,
    },
    ToolDescriptor {
        name: "get_contract_package_nft_actions",
        description: "Get NFT actions for a specific contract package on the Casper Network.",
        action: "retrieving contract package NFT actions",
        params: PACKAGE_PAGED,
    },
    ToolDescriptor {
        name: "get_nft_action_types",
        description: "Get the list of NFT action types on the Casper Network.",
        action: "retrieving NFT action types",
        params: NONE,
    },
    ToolDescriptor {
        name: "get_contract_package_nft_ownership",
        description: "Get NFT ownership distribution for a specific contract package on the Casper Network.",
        action: "retrieving NFT ownership",
        params: PACKAGE_PAGED,
    },
    ToolDescriptor {
        name: "get_account_nft_ownership",
        description: "Get NFT ownership summary for a specific account on the Casper Network.",
        action: "retrieving account NFT ownership",
        params: ACCOUNT_OR_HASH_PAGED,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_complete_and_unique() {
        assert_eq!(TOOLS.len(), 75);

        let names: HashSet<_> = TOOLS.iter().map(|tool| tool.name).collect();
        assert_eq!(names.len(), TOOLS.len());

        for tool in TOOLS {
            assert!(tool.name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
            assert!(!tool.action.is_empty());
        }
    }

    #[test]
    fn test_paged_tool_schema() {
        let tool = find("get_account_deploys").unwrap().to_mcp_tool();
        let schema = tool.input_schema;

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["publicKey"]["type"], "string");
        assert_eq!(schema["properties"]["page"]["type"], "integer");
        assert_eq!(schema["properties"]["page"]["default"], 1);
        assert_eq!(schema["properties"]["pageSize"]["default"], 10);
        assert_eq!(schema["required"], json!(["publicKey"]));
    }

    #[test]
    fn test_optional_filters_are_not_required() {
        let schema = find("get_ft_rate_latest").unwrap().to_mcp_tool().input_schema;
        assert_eq!(schema["required"], json!(["contractPackageHash"]));
        assert_eq!(schema["properties"]["currencyId"]["type"], "string");

        let schema = find("get_network_status").unwrap().to_mcp_tool().input_schema;
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn test_unknown_tool() {
        assert!(find("get_weather").is_none());
        assert_eq!(mcp_tools().len(), TOOLS.len());
    }
}
