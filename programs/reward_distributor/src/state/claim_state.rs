use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Per-holder claim record
 *
 * Tracks the last round a holder was recorded in. A claim is only valid for
 * the round it names, so opening a new round implicitly clears every claim
 * without touching these accounts.
 *
 * Derivation: ["claim", distributor_key, holder_key]
 *
 * Lifecycle:
 * 1. Created on the holder's first distribution (using init_if_needed)
 * 2. Updated with each payout in a later round
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ClaimStatus {
    /// Holder this record belongs to
    pub holder: Pubkey,

    /// Last round the holder was recorded in, 0 if never
    pub last_claimed_round: u64,

    /// Amount paid in that round
    pub last_amount: u64,

    /// Total amount received by this holder (cumulative)
    pub total_claimed: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + serialized size
    pub const LEN: usize = 8 + ClaimStatus::INIT_SPACE;

    pub fn has_claimed(&self, round_id: u64) -> bool {
        round_id != 0 && self.last_claimed_round == round_id
    }

    pub fn ensure_unclaimed(&self, round_id: u64) -> Result<()> {
        require!(!self.has_claimed(round_id), RewardDistributorError::AlreadyClaimed);
        Ok(())
    }

    /// The record as it will look once `amount` is paid to `holder` in `round_id`
    pub fn prepare_claim(&self, round_id: u64, holder: Pubkey, amount: u64) -> Result<ClaimStatus> {
        self.ensure_unclaimed(round_id)?;
        Ok(ClaimStatus {
            holder,
            last_claimed_round: round_id,
            last_amount: amount,
            total_claimed: self
                .total_claimed
                .checked_add(amount)
                .ok_or(RewardDistributorError::Overflow)?,
        })
    }
}
