use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/// Result of a single distribution, also returned as instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub round_id: u64,
    pub holder: Pubkey,
    /// Amount paid, zero when the holder's share rounds down to nothing
    pub amount: u64,
    pub vault_balance_after: u64,
}

/// Everything a distribution produced, for the receipt and the emitted events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionOutcome {
    pub receipt: TransferReceipt,
    /// Round state after the payout
    pub round: Round,
    /// True when this request opened the round
    pub round_opened: bool,
    pub holder_balance: u64,
}

/**
 * Account context for distributing rewards to one holder
 *
 * Permissionless: any payer can crank a distribution for any holder. The
 * holder does not sign; the claim PDA is keyed by the holder wallet so the
 * same holder cannot be paid twice in a round through different callers.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    /// The distributor account for the tracked asset
    /// - Round state is updated on success
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), distributor.asset_mint.as_ref()],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, DistributorState>,

    /// Claim record for this holder
    /// - Derived from: ["claim", distributor_key, holder_key]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Reward vault, must be the one recorded at initialization
    #[account(mut, address = distributor.vault)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Signs the vault transfer through its seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED.as_bytes()],
        bump = vault_authority.bump,
    )]
    pub vault_authority: Account<'info, VaultAuthority>,

    /// CHECK: Only used as the owner of holder_token_account and in the claim PDA seeds
    pub holder: UncheckedAccount<'info>,

    /// Holder's token account of the tracked asset
    /// - Its balance determines the share, the payout lands here
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = holder,
        token::token_program = token_program,
        constraint = holder_token_account.key() != vault.key() @ RewardDistributorError::Unauthorized
    )]
    pub holder_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
        constraint = asset_mint.key() == distributor.asset_mint @ RewardDistributorError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// Pays for the claim record on the holder's first distribution
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_distribute_rewards(ctx: Context<DistributeRewards>) -> Result<TransferReceipt> {
    let now = Clock::get()?.unix_timestamp;
    let holder = ctx.accounts.holder.key();
    let distributor_key = ctx.accounts.distributor.key();

    let bump_seed = [ctx.accounts.vault_authority.bump];
    let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED.as_bytes(), &bump_seed];
    let signer: &[&[&[u8]]] = &[seeds];

    let outcome = {
        let accounts = &mut *ctx.accounts;
        let mut ledger = SplTokenLedger {
            vault: &mut accounts.vault,
            holder_token_account: &mut accounts.holder_token_account,
            asset_mint: &accounts.asset_mint,
            vault_authority: accounts.vault_authority.to_account_info(),
            token_program: accounts.token_program.to_account_info(),
            signer_seeds: signer,
        };
        process_distribution(
            &mut accounts.distributor,
            &mut accounts.claim_status,
            &mut ledger,
            holder,
            now,
        )?
    };

    if outcome.round_opened {
        msg!("Round {} opened at {}", outcome.round.id, outcome.round.start_time);
        emit_cpi!(RoundOpened {
            distributor: distributor_key,
            round_id: outcome.round.id,
            start_time: outcome.round.start_time,
            reward_pool: outcome.round.reward_pool,
            eligible_supply: outcome.round.eligible_supply,
        });
    }

    emit_cpi!(RewardsDistributed {
        distributor: distributor_key,
        round_id: outcome.receipt.round_id,
        holder,
        holder_balance: outcome.holder_balance,
        amount: outcome.receipt.amount,
        round_distributed: outcome.round.distributed,
        vault_balance_after: outcome.receipt.vault_balance_after,
    });

    Ok(outcome.receipt)
}

/**
 * Pays one holder their proportional share of the current round
 *
 * 1. Select the round: join the open one or open the next (interval gate)
 * 2. Reject a holder already recorded in that round
 * 3. Compute floor(reward_pool * holder_balance / eligible_supply)
 * 4. Transfer from the vault, skipped for a zero amount
 * 5. Commit round progress and the claim record
 *
 * Steps 1-3 have no side effects. State is written only after the transfer
 * succeeded, so any failure leaves the distributor and claim record as they were.
 */
pub fn process_distribution<L: RewardLedger>(
    distributor: &mut DistributorState,
    claim_status: &mut ClaimStatus,
    ledger: &mut L,
    holder: Pubkey,
    now: i64,
) -> Result<DistributionOutcome> {
    require!(distributor.initialized, RewardDistributorError::NotInitialized);

    // ===== ROUND GATE =====

    let vault_balance = ledger.vault_balance()?;
    let snapshot = RoundSnapshot {
        reward_pool: vault_balance,
        eligible_supply: eligible_supply(ledger.total_supply()?, vault_balance)?,
    };
    let RoundTicket { mut round, opened } = distributor.ensure_round_open(now, snapshot)?;
    claim_status.ensure_unclaimed(round.id)?;

    // ===== PAYOUT =====

    let holder_balance = ledger.holder_balance()?;
    require!(
        holder_balance >= distributor.min_holder_balance,
        RewardDistributorError::BelowMinimumBalance
    );

    let amount = compute_share(holder_balance, round.eligible_supply, round.reward_pool)?;
    if amount > round.remaining() || amount > vault_balance {
        msg!(
            "Payout {} in round {} exceeds round remaining {} or vault balance {}",
            amount,
            round.id,
            round.remaining(),
            vault_balance
        );
        return err!(RewardDistributorError::InsufficientVaultBalance);
    }

    round.record_payout(amount)?;
    let total_distributed = distributor.total_after(amount)?;
    let claim = claim_status.prepare_claim(round.id, holder, amount)?;

    // ===== TRANSFER =====

    if amount > 0 {
        ledger.transfer_to_holder(amount)?;
    }
    let vault_balance_after = ledger.vault_balance()?;

    // ===== COMMIT =====

    distributor.commit_round(round, total_distributed);
    *claim_status = claim;

    Ok(DistributionOutcome {
        receipt: TransferReceipt {
            round_id: round.id,
            holder,
            amount,
            vault_balance_after,
        },
        round,
        round_opened: opened,
        holder_balance,
    })
}
