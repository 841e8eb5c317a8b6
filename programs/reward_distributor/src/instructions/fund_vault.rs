use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::TokenTransfer;

/**
 * Account context for funding the reward vault
 *
 * Moves tracked-asset tokens from a funder into the distributor's vault.
 * Deposits made while a round is open only count from the next round on,
 * since the running round pays out of its snapshot.
 *
 * Access Control: Anyone holding the tracked asset
 */
#[event_cpi]
#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        seeds = [DISTRIBUTOR_SEED.as_bytes(), distributor.asset_mint.as_ref()],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, DistributorState>,

    /// Reward vault, must be the one recorded at initialization
    #[account(mut, address = distributor.vault)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Funder's token account of the tracked asset
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
        constraint = asset_mint.key() == distributor.asset_mint @ RewardDistributorError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    pub funder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    ctx.accounts.distributor.ensure_deposit(amount)?;

    TokenTransfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
        mint: ctx.accounts.asset_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    }
    .invoke(amount, ctx.accounts.asset_mint.decimals)?;

    ctx.accounts.vault.reload()?;

    emit_cpi!(VaultFunded {
        distributor: ctx.accounts.distributor.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}
