use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use super::round_state::*;

/**
 * Main distributor state account
 *
 * Configuration and round progress for the rewards paid to holders of one
 * tracked asset.
 *
 * Derivation: ["distributor", asset_mint]
 *
 * Lifecycle:
 * 1. Created during initialize (sticky `initialized` flag)
 * 2. Round state updated by every successful distribute_rewards
 * 3. Configuration updated by the authority through update_config
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct DistributorState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set once by initialize, a second initialize fails with AlreadyInitialized
    pub initialized: bool,

    /// Identity permitted to reconfigure the distributor and close rounds
    pub authority: Pubkey,

    /// Mint of the tracked asset, immutable
    /// - Holder balances of this mint determine the payouts
    /// - The vault holds and pays out this same mint
    pub asset_mint: Pubkey,

    /// Reward vault token account
    /// - Derived from: ["vault", distributor_key]
    pub vault: Pubkey,

    /// Minimum seconds between two round openings, always > 0
    pub distribution_interval: i64,

    /// Holders below this balance are rejected, 0 disables the check
    /// - Only gates who is paid; balances below it still count in the
    ///   round's eligible supply, so a round with a threshold set is not
    ///   fully drained by the holders above it
    pub min_holder_balance: u64,

    /// Round progress
    pub round: RoundState,

    /// Total paid out over the distributor lifetime
    pub total_distributed: u64,
}

/// Validated runtime configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributorConfig {
    pub distribution_interval: i64,
    pub min_holder_balance: u64,
}

impl DistributorConfig {
    /// Fills defaults for missing values and rejects a non-positive interval
    pub fn resolve(distribution_interval: Option<i64>, min_holder_balance: Option<u64>) -> Result<Self> {
        let distribution_interval = distribution_interval.unwrap_or(DEFAULT_DISTRIBUTION_INTERVAL);
        require!(distribution_interval > 0, RewardDistributorError::InvalidConfig);
        Ok(DistributorConfig {
            distribution_interval,
            min_holder_balance: min_holder_balance.unwrap_or(0),
        })
    }
}

impl DistributorState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + serialized size
    pub const LEN: usize = 8 + DistributorState::INIT_SPACE;

    /// Fails with AlreadyInitialized before looking at the supplied configuration
    pub fn initialize(
        &mut self,
        bump: u8,
        authority: Pubkey,
        asset_mint: Pubkey,
        vault: Pubkey,
        distribution_interval: Option<i64>,
        min_holder_balance: Option<u64>,
    ) -> Result<()> {
        require!(!self.initialized, RewardDistributorError::AlreadyInitialized);
        let config = DistributorConfig::resolve(distribution_interval, min_holder_balance)?;

        self.bump = bump;
        self.initialized = true;
        self.authority = authority;
        self.asset_mint = asset_mint;
        self.vault = vault;
        self.distribution_interval = config.distribution_interval;
        self.min_holder_balance = config.min_holder_balance;
        self.round = RoundState::NotStarted;
        self.total_distributed = 0;
        Ok(())
    }

    /// Applies an authority-approved change; round progress is left untouched
    pub fn update_config(
        &mut self,
        new_authority: Option<Pubkey>,
        distribution_interval: Option<i64>,
        min_holder_balance: Option<u64>,
    ) -> Result<()> {
        let config = DistributorConfig::resolve(
            Some(distribution_interval.unwrap_or(self.distribution_interval)),
            Some(min_holder_balance.unwrap_or(self.min_holder_balance)),
        )?;
        let authority = new_authority.unwrap_or(self.authority);
        require!(authority != Pubkey::default(), RewardDistributorError::InvalidConfig);

        self.authority = authority;
        self.distribution_interval = config.distribution_interval;
        self.min_holder_balance = config.min_holder_balance;
        Ok(())
    }

    /// Only the current authority may reconfigure or close rounds
    pub fn ensure_authority(&self, signer: &Pubkey) -> Result<()> {
        require!(self.initialized, RewardDistributorError::NotInitialized);
        require_keys_eq!(*signer, self.authority, RewardDistributorError::Unauthorized);
        Ok(())
    }

    /// A deposit needs an initialized distributor and a positive amount
    pub fn ensure_deposit(&self, amount: u64) -> Result<()> {
        require!(self.initialized, RewardDistributorError::NotInitialized);
        require!(amount > 0, RewardDistributorError::InvalidAmount);
        Ok(())
    }

    pub fn round_id(&self) -> u64 {
        self.round.round_id()
    }

    pub fn ensure_round_open(&self, now: i64, snapshot: RoundSnapshot) -> Result<RoundTicket> {
        self.round.ensure_round_open(now, self.distribution_interval, snapshot)
    }

    /// Lifetime total after paying `amount`
    pub fn total_after(&self, amount: u64) -> Result<u64> {
        self.total_distributed
            .checked_add(amount)
            .ok_or_else(|| error!(RewardDistributorError::Overflow))
    }

    /// Writes back a round whose payout has already been transferred
    pub fn commit_round(&mut self, round: Round, total_distributed: u64) {
        self.round = RoundState::Open { round };
        self.total_distributed = total_distributed;
    }

    pub fn close_round(&mut self) -> Result<Round> {
        self.round.close()
    }
}
