use anchor_lang::prelude::*;
use crate::error::*;

/**
 * A single interval-gated distribution round
 *
 * The vault balance and the eligible supply are captured when the round opens,
 * so every holder paid in the same round is measured against the same snapshot.
 */
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Round {
    /// Monotonic round counter, the first round is 1
    pub id: u64,

    /// Unix timestamp at which the round opened
    pub start_time: i64,

    /// Vault balance when the round opened
    /// - Upper bound for everything paid out during the round
    pub reward_pool: u64,

    /// Mint supply held outside the vault when the round opened
    /// - Denominator of every proportional share in the round
    pub eligible_supply: u64,

    /// Amount paid out so far in this round
    pub distributed: u64,

    /// Number of holders recorded in this round (zero payouts included)
    pub claim_count: u32,
}

impl Round {
    pub fn open(id: u64, start_time: i64, snapshot: RoundSnapshot) -> Self {
        Round {
            id,
            start_time,
            reward_pool: snapshot.reward_pool,
            eligible_supply: snapshot.eligible_supply,
            distributed: 0,
            claim_count: 0,
        }
    }

    /// Part of the reward pool that has not been paid out yet
    pub fn remaining(&self) -> u64 {
        self.reward_pool.saturating_sub(self.distributed)
    }

    /// Whether `interval` seconds have passed since this round opened
    pub fn interval_elapsed(&self, now: i64, interval: i64) -> bool {
        now.saturating_sub(self.start_time) >= interval
    }

    /// Accounts one claim against the round, never exceeding the reward pool
    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        if amount > self.remaining() {
            msg!(
                "Payout {} exceeds round {} remaining {}",
                amount,
                self.id,
                self.remaining()
            );
            return err!(RewardDistributorError::InsufficientVaultBalance);
        }
        self.distributed = self
            .distributed
            .checked_add(amount)
            .ok_or(RewardDistributorError::Overflow)?;
        self.claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(RewardDistributorError::Overflow)?;
        Ok(())
    }
}

/// Balances read from the ledger, used only if a new round has to open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub reward_pool: u64,
    pub eligible_supply: u64,
}

/// Round progress of a distributor
///
/// `NotStarted` is always eligible to open, so the very first request after
/// initialization never waits for an interval.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    NotStarted,
    Open { round: Round },
    Closed { round: Round },
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::NotStarted
    }
}

/// Round selected for a distribution request, not yet written back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTicket {
    pub round: Round,
    /// True when serving the request opens a new round
    pub opened: bool,
}

impl RoundState {
    /// Id of the latest round, 0 before the first round opened
    pub fn round_id(&self) -> u64 {
        match self {
            RoundState::NotStarted => 0,
            RoundState::Open { round } | RoundState::Closed { round } => round.id,
        }
    }

    pub fn open_round(&self) -> Option<&Round> {
        match self {
            RoundState::Open { round } => Some(round),
            _ => None,
        }
    }

    /**
     * Picks the round a request at `now` is served in
     *
     * - No round yet: opens round 1
     * - Open round still inside its interval: joins it
     * - Open round past its interval: opens the next round
     * - Closed round: opens the next round once the interval elapsed,
     *   otherwise fails with IntervalNotElapsed
     *
     * Nothing is written; the caller commits the ticket after the payout succeeded.
     */
    pub fn ensure_round_open(
        &self,
        now: i64,
        interval: i64,
        snapshot: RoundSnapshot,
    ) -> Result<RoundTicket> {
        let previous = match self {
            RoundState::NotStarted => {
                return Ok(RoundTicket {
                    round: Round::open(1, now, snapshot),
                    opened: true,
                })
            }
            RoundState::Open { round } => {
                if !round.interval_elapsed(now, interval) {
                    return Ok(RoundTicket {
                        round: *round,
                        opened: false,
                    });
                }
                round
            }
            RoundState::Closed { round } => {
                require!(
                    round.interval_elapsed(now, interval),
                    RewardDistributorError::IntervalNotElapsed
                );
                round
            }
        };

        let next_id = previous
            .id
            .checked_add(1)
            .ok_or(RewardDistributorError::Overflow)?;
        Ok(RoundTicket {
            round: Round::open(next_id, now, snapshot),
            opened: true,
        })
    }

    /// Ends the open round, keeping its figures for the interval check
    pub fn close(&mut self) -> Result<Round> {
        let round = *self
            .open_round()
            .ok_or(RewardDistributorError::RoundNotOpen)?;
        *self = RoundState::Closed { round };
        Ok(round)
    }
}
