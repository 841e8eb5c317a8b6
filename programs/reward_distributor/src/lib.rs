use anchor_lang::prelude::*;

declare_id!("7Rw4DqSxvF9pKLGHbDN3gtU2yYmZcA8eJQ5TnVWk1o6H");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Reward Distributor Program
 *
 * Periodically releases tokens from a reward vault to holders of a tracked SPL
 * asset, proportionally to each holder's balance. A holder is paid
 * floor(reward_pool * holder_balance / eligible_supply), where reward_pool
 * is the vault balance and eligible_supply is the mint supply held outside
 * the vault, both captured when the round opened.
 *
 * Key Features:
 * - Interval-gated rounds: a new round opens at most once per distribution interval
 * - At most one payout per holder per round, many holders per round
 * - Integer-only share math with a u128 intermediate
 * - Permissionless distribution, authority-gated configuration
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: configuration and round state, one per tracked asset
 * - Vault Authority PDA: program-wide signer of vault transfers
 * - Reward Vault PDA: token account holding the tokens awaiting distribution
 * - Claim Status PDAs: last round each holder was paid in
 *
 * Workflow:
 * 1. Authority initializes the distributor for an asset
 * 2. Anyone funds the vault
 * 3. Anyone requests a holder's distribution, opening a round when due
 * 4. Authority may close a round early or update the configuration
 */
#[program]
pub mod reward_distributor {
    use super::*;

    /**
     * Creates the distributor, its vault and the shared vault authority
     *
     * @param args - Optional interval (default 600s) and minimum holder balance
     *
     * Access Control: Signer becomes the authority
     */
    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        handle_initialize(ctx, args)
    }

    /**
     * Deposits tracked-asset tokens into the reward vault
     *
     * @param amount - Amount to deposit, must be positive
     *
     * Access Control: Any token holder
     */
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        handle_fund_vault(ctx, amount)
    }

    /**
     * Pays one holder their share of the current round
     *
     * Opens a new round when none is running or the interval has elapsed.
     * Returns the transfer receipt as return data.
     *
     * Access Control: Permissionless
     */
    pub fn distribute_rewards(ctx: Context<DistributeRewards>) -> Result<TransferReceipt> {
        handle_distribute_rewards(ctx)
    }

    /**
     * Ends the open round early
     *
     * Access Control: Authority only
     */
    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        handle_close_round(ctx)
    }

    /**
     * Changes authority, interval or minimum holder balance
     *
     * Access Control: Authority only
     */
    pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
        handle_update_config(ctx, args)
    }
}
