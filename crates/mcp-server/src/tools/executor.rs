//! Execute MCP tools against CSPR.cloud

use cspr_cloud::{CsprCloud, Network, NetworkEndpoint};
use serde_json::Value;
use tracing::{debug, warn};

use super::args::ToolArgs;
use super::catalog::{self, ToolDescriptor};
use super::render::{conclude, ReportResult, ToolError};
use super::reports::{
    accounts, blocks, contracts, deploys, market, names, network, nft, rates, tokens, transfers,
    validators,
};
use crate::protocol::{McpError, McpTool, ToolCallResult};

/// Executor for MCP tools
pub struct ToolExecutor {
    cloud: CsprCloud,
    network: Network,
}

impl ToolExecutor {
    pub fn new(cloud: CsprCloud, network: Network) -> Self {
        Self { cloud, network }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Definitions advertised by `tools/list`
    pub fn tools(&self) -> Vec<McpTool> {
        catalog::mcp_tools()
    }

    /// Execute a tool by name.
    ///
    /// Only unknown tools and undecodable arguments are protocol errors.
    /// Everything the upstream call produces, failures included, comes back
    /// as the text of a successful result.
    pub async fn execute(
        &self,
        tool_name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolCallResult, McpError> {
        let descriptor = catalog::find(tool_name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {}", tool_name)))?;
        let args = ToolArgs::from_value(arguments)?;

        debug!("Executing tool {} on {}", descriptor.name, self.network);

        let api = self.cloud.endpoint(self.network);
        let outcome = dispatch(api, descriptor, &args).await?;

        if let Err(e @ (ToolError::Upstream(_) | ToolError::Json(_))) = &outcome {
            warn!("Tool {} failed: {}", descriptor.name, e);
        }

        Ok(ToolCallResult::text(conclude(descriptor.action, outcome)))
    }
}

async fn dispatch(
    api: &NetworkEndpoint,
    tool: &ToolDescriptor,
    args: &ToolArgs,
) -> Result<ReportResult, McpError> {
    let page = args.page();

    Ok(match tool.name {
        // Accounts
        "get_account_info" => accounts::account_info(api, &args.text("accountIdentifier")?).await,
        "get_account_balance" => {
            accounts::account_balance(api, &args.text("accountIdentifier")?).await
        }
        "get_account_deploys" => {
            accounts::account_deploys(api, &args.text("publicKey")?, page).await
        }
        "get_account_delegations" => {
            accounts::account_delegations(api, &args.text("publicKey")?, page).await
        }
        "get_accounts" => accounts::accounts(api, page).await,
        "get_account_contract_packages" => {
            accounts::account_contract_packages(api, &args.text("publicKey")?, page).await
        }
        "get_account_delegation_rewards" => {
            accounts::account_delegation_rewards(api, &args.text("publicKey")?, page).await
        }
        "get_total_account_delegation_rewards" => {
            accounts::total_account_delegation_rewards(api, &args.text("publicKey")?).await
        }
        "get_total_validator_delegator_rewards" => {
            accounts::total_validator_delegator_rewards(api, &args.text("publicKey")?).await
        }

        // Blocks
        "get_block" => blocks::block(api, &args.text("blockHash")?).await,
        "get_latest_blocks" => blocks::latest_blocks(api, page).await,
        "get_validator_blocks" => {
            blocks::validator_blocks(api, &args.text("publicKey")?, page).await
        }

        // Deploys
        "get_deploy" => deploys::deploy(api, &args.text("deployHash")?).await,
        "get_deploys" => deploys::deploys(api, page).await,
        "get_block_deploys" => deploys::block_deploys(api, &args.text("blockHash")?, page).await,
        "get_deploy_execution_types" => deploys::deploy_execution_types(api).await,

        // Transfers
        "get_transfers" => {
            transfers::account_transfers(api, &args.text("accountIdentifier")?, page).await
        }
        "get_deploy_transfers" => {
            transfers::deploy_transfers(api, &args.text("deployHash")?, page).await
        }

        // CSPR.name
        "resolve_cspr_name" => names::resolve_cspr_name(api, &args.text("name")?).await,

        // Awaiting deploys
        "get_awaiting_deploy" => deploys::awaiting_deploy(api, &args.text("deployHash")?).await,
        "create_awaiting_deploy" => {
            deploys::create_awaiting_deploy(api, &args.text("deployJson")?).await
        }
        "add_awaiting_deploy_approval" => {
            deploys::add_awaiting_deploy_approval(
                api,
                &args.text("deployHash")?,
                &args.text("signer")?,
                &args.text("signature")?,
            )
            .await
        }

        // Bidders
        "get_bidder" => validators::bidder(api, &args.text("publicKey")?).await,
        "get_bidders" => validators::bidders(api, page).await,

        // Validators
        "get_validators" => validators::validators(api, page).await,
        "get_validator_info" => validators::validator_info(api, &args.text("publicKey")?).await,
        "get_validator_delegations" => {
            validators::validator_delegations(api, &args.text("publicKey")?, page).await
        }
        "get_validator_rewards" => {
            validators::validator_rewards(api, &args.text("publicKey")?, page).await
        }
        "get_validator_total_rewards" => {
            validators::validator_total_rewards(api, &args.text("publicKey")?).await
        }
        "get_historical_validator_performance" => {
            validators::validator_performance(api, &args.text("publicKey")?, page).await
        }
        "get_historical_validator_average_performance" => {
            validators::validator_average_performance(api, &args.text("publicKey")?, page).await
        }
        "get_historical_validators_average_performance" => {
            validators::validators_average_performance(api, page).await
        }
        "get_validator_era_rewards" => {
            validators::validator_era_rewards(api, &args.text("publicKey")?, page).await
        }

        // Network
        "get_network_status" => network::network_status(api).await,
        "get_era_info" => network::era_info(api).await,
        "get_supply_info" => network::supply_info(api).await,

        // Currency rates
        "get_current_currency_rate" => {
            market::current_currency_rate(api, &args.text("currencyId")?).await
        }
        "get_historical_currency_rates" => {
            market::historical_currency_rates(api, &args.text("currencyId")?, page).await
        }
        "get_currencies" => market::currencies(api, page).await,

        // DEX
        "get_dexes" => market::dexes(api).await,
        "get_swaps" => market::swaps(api, page).await,

        // Centralized accounts
        "get_centralized_account_info" => {
            names::centralized_account_info(api, &args.text("accountHash")?).await
        }
        "get_centralized_accounts" => names::centralized_accounts(api, page).await,

        // Contracts
        "get_contract" => contracts::contract(api, &args.text("contractHash")?).await,
        "get_contract_entry_points" => {
            contracts::contract_entry_points(api, &args.text("contractHash")?).await
        }
        "get_contracts" => contracts::contracts(api, page).await,
        "get_contract_types" => contracts::contract_types(api).await,
        "get_contract_entry_point_costs" => {
            contracts::entry_point_costs(
                api,
                &args.text("contractHash")?,
                &args.text("entryPointName")?,
            )
            .await
        }
        "get_contract_packages" => contracts::contract_packages(api, page).await,
        "get_contracts_by_contract_package" => {
            contracts::contracts_by_package(api, &args.text("contractPackageHash")?, page).await
        }

        // Fungible tokens
        "get_ft_token_info" => tokens::token_info(api, &args.text("contractPackageHash")?).await,
        "get_ft_token_holders" => {
            tokens::token_holders(api, &args.text("contractPackageHash")?, page).await
        }
        "get_account_ft_balances" => {
            tokens::account_balances(api, &args.text("accountIdentifier")?, page).await
        }
        "get_fungible_token_actions" => tokens::actions(api, page).await,
        "get_account_fungible_token_actions" => {
            tokens::account_actions(api, &args.text("accountIdentifier")?, page).await
        }
        "get_contract_package_fungible_token_actions" => {
            tokens::package_actions(api, &args.text("contractPackageHash")?, page).await
        }

        // FT rates
        "get_ft_rate_latest" => {
            let currency = args.optional_text("currencyId");
            rates::rate_latest(api, &args.text("contractPackageHash")?, currency.as_deref()).await
        }
        "get_ft_rates" => rates::rates(api, &args.text("contractPackageHash")?, page).await,
        "get_ft_daily_rate_latest" => {
            let currency = args.optional_text("currencyId");
            rates::daily_rate_latest(api, &args.text("contractPackageHash")?, currency.as_deref())
                .await
        }
        "get_ft_daily_rates" => {
            rates::daily_rates(api, &args.text("contractPackageHash")?, page).await
        }
        "get_ft_dex_rate_latest" => {
            let target = args.optional_text("targetContractPackageHash");
            rates::dex_rate_latest(api, &args.text("contractPackageHash")?, target.as_deref()).await
        }
        "get_ft_dex_rates" => rates::dex_rates(api, &args.text("contractPackageHash")?, page).await,
        "get_ft_daily_dex_rate_latest" => {
            let target = args.optional_text("targetContractPackageHash");
            rates::daily_dex_rate_latest(api, &args.text("contractPackageHash")?, target.as_deref())
                .await
        }
        "get_ft_daily_dex_rates" => {
            rates::daily_dex_rates(api, &args.text("contractPackageHash")?, page).await
        }

        // NFTs
        "get_nft_collection" => {
            nft::collection(api, &args.text("contractPackageHash")?, page).await
        }
        "get_account_nfts" => nft::account_nfts(api, &args.text("accountIdentifier")?, page).await,
        "get_nft" => {
            nft::nft(api, &args.text("contractPackageHash")?, &args.text("tokenId")?).await
        }
        "get_nft_standards" => nft::standards(api).await,
        "get_nft_metadata_statuses" => nft::metadata_statuses(api).await,
        "get_nft_actions_for_token" => {
            nft::token_actions(
                api,
                &args.text("contractPackageHash")?,
                &args.text("tokenId")?,
                page,
            )
            .await
        }
        "get_account_nft_actions" => {
            nft::account_actions(api, &args.text("accountIdentifier")?, page).await
        }
        "get_contract_package_nft_actions" => {
            nft::package_actions(api, &args.text("contractPackageHash")?, page).await
        }
        "get_nft_action_types" => nft::action_types(api).await,
        "get_contract_package_nft_ownership" => {
            nft::package_ownership(api, &args.text("contractPackageHash")?, page).await
        }
        "get_account_nft_ownership" => {
            nft::account_ownership(api, &args.text("accountIdentifier")?, page).await
        }

        other => return Err(McpError::internal_error(format!("Tool has no handler: {}", other))),
    })
}
