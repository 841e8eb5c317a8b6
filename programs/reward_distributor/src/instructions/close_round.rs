use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for closing the open round
 *
 * Ends the current round before its interval runs out. Holders not yet paid in
 * it can no longer claim from its snapshot, and the next round still has to
 * wait for the interval counted from the closed round's start.
 *
 * Access Control: Distributor authority only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseRound<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), distributor.asset_mint.as_ref()],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, DistributorState>,

    pub authority: Signer<'info>,
}

pub fn handle_close_round(ctx: Context<CloseRound>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.ensure_authority(&ctx.accounts.authority.key())?;

    let closed_at = Clock::get()?.unix_timestamp;
    let round = distributor.close_round()?;
    msg!("Round {} closed after {} claims", round.id, round.claim_count);

    emit_cpi!(RoundClosed {
        distributor: distributor.key(),
        round_id: round.id,
        closed_at,
        distributed: round.distributed,
        claim_count: round.claim_count,
    });

    Ok(())
}
