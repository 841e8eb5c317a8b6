use anchor_lang::prelude::*;

/// Event emitted when a distributor is initialized
#[event]
pub struct DistributorInitialized {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Authority allowed to manage the distributor
    pub authority: Pubkey,
    /// Mint of the tracked asset
    pub asset_mint: Pubkey,
    /// Reward vault address
    pub vault: Pubkey,
    /// Minimum seconds between two round openings
    pub distribution_interval: i64,
    /// Minimum holder balance to receive a payout
    pub min_holder_balance: u64,
}

/// Event emitted when tokens are deposited into the reward vault
#[event]
pub struct VaultFunded {
    pub distributor: Pubkey,
    pub funder: Pubkey,
    /// Amount deposited in this transaction
    pub amount: u64,
    /// Vault balance after the deposit
    pub vault_balance: u64,
}

/// Event emitted when a new distribution round opens
#[event]
pub struct RoundOpened {
    pub distributor: Pubkey,
    pub round_id: u64,
    pub start_time: i64,
    /// Vault balance snapshotted for the round
    pub reward_pool: u64,
    /// Supply held outside the vault, snapshotted for the round
    pub eligible_supply: u64,
}

/// Event emitted for every successful payout
#[event]
pub struct RewardsDistributed {
    pub distributor: Pubkey,
    pub round_id: u64,
    pub holder: Pubkey,
    /// Holder balance the share was computed from
    pub holder_balance: u64,
    /// Amount paid to the holder, may be zero
    pub amount: u64,
    /// Total paid out in this round so far
    pub round_distributed: u64,
    pub vault_balance_after: u64,
}

/// Event emitted when the authority ends a round early
#[event]
pub struct RoundClosed {
    pub distributor: Pubkey,
    pub round_id: u64,
    pub closed_at: i64,
    pub distributed: u64,
    pub claim_count: u32,
}

/// Event emitted when the authority changes the configuration
#[event]
pub struct ConfigUpdated {
    pub distributor: Pubkey,
    pub authority: Pubkey,
    pub distribution_interval: i64,
    pub min_holder_balance: u64,
}
