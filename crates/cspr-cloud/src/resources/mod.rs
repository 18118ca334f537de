//! Sub-resources of a network endpoint, one accessor per API area

mod accounts;
mod chain;
mod contracts;
mod market;
mod staking;
mod tokens;

pub use accounts::{Accounts, CentralizedAccounts, CsprNames};
pub use chain::{AwaitingDeploys, Blocks, Deploys, Transfers};
pub use contracts::Contracts;
pub use market::{Dex, Rates, Swaps};
pub use staking::{Auction, Bidders, Delegations, Supply, Validators};
pub use tokens::{Ft, Nft};
