use anchor_lang::prelude::*;
use crate::error::*;

/// Proportional share of `vault_balance` owed to a holder of `holder_balance`
/// out of `total_supply`: floor(vault_balance * holder_balance / total_supply).
///
/// The product is taken in u128 and the quotient must fit back into u64;
/// nothing wraps.
pub fn compute_share(holder_balance: u64, total_supply: u64, vault_balance: u64) -> Result<u64> {
    require!(total_supply > 0, RewardDistributorError::DivisionByZero);

    let share = (vault_balance as u128)
        .checked_mul(holder_balance as u128)
        .ok_or(RewardDistributorError::Overflow)?
        .checked_div(total_supply as u128)
        .ok_or(RewardDistributorError::DivisionByZero)?;

    u64::try_from(share).map_err(|_| error!(RewardDistributorError::Overflow))
}

/// Supply that earns rewards: everything minted except what sits in the vault.
///
/// Holdings below the distributor's `min_holder_balance` are not subtracted;
/// those holders are refused a payout but their balances stay in the
/// denominator, and the share they would have received remains in the vault.
pub fn eligible_supply(total_supply: u64, vault_balance: u64) -> Result<u64> {
    total_supply
        .checked_sub(vault_balance)
        .ok_or_else(|| error!(RewardDistributorError::Overflow))
}
