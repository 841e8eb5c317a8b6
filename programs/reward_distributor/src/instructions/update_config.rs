use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/// Configuration changes, absent fields keep their current value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct UpdateConfigArgs {
    pub new_authority: Option<Pubkey>,
    pub distribution_interval: Option<i64>,
    pub min_holder_balance: Option<u64>,
}

/**
 * Account context for updating the distributor configuration
 *
 * Business Logic:
 * - Interval must stay positive, the authority cannot be the default key
 * - A new interval applies to the next round opening, the open round keeps running
 *
 * Access Control: Distributor authority only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), distributor.asset_mint.as_ref()],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, DistributorState>,

    pub authority: Signer<'info>,
}

pub fn handle_update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.ensure_authority(&ctx.accounts.authority.key())?;

    distributor.update_config(
        args.new_authority,
        args.distribution_interval,
        args.min_holder_balance,
    )?;
    msg!("Config updated during round {}", distributor.round_id());

    emit_cpi!(ConfigUpdated {
        distributor: distributor.key(),
        authority: distributor.authority,
        distribution_interval: distributor.distribution_interval,
        min_holder_balance: distributor.min_holder_balance,
    });

    Ok(())
}
