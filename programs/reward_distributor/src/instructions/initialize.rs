use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/// Optional configuration supplied at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct InitializeArgs {
    /// Seconds between round openings, DEFAULT_DISTRIBUTION_INTERVAL if absent
    pub distribution_interval: Option<i64>,
    /// Minimum holder balance to be paid, 0 if absent
    pub min_holder_balance: Option<u64>,
}

/**
 * Account context for initializing a distributor
 *
 * Creates, for one tracked asset:
 * - The distributor PDA holding configuration and round progress
 * - The reward vault PDA, a token account of the tracked asset
 * - The program-wide vault authority PDA, if no distributor created it yet
 *
 * All three use init_if_needed so a repeated call reaches the handler and fails
 * with AlreadyInitialized instead of a generic account-in-use error.
 *
 * Access Control: The signer becomes the distributor authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The distributor account (PDA)
    /// - Derived from: ["distributor", asset_mint]
    #[account(
        init_if_needed,
        payer = authority,
        space = DistributorState::LEN,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), asset_mint.key().as_ref()],
        bump
    )]
    pub distributor: Account<'info, DistributorState>,

    /// Vault authority (PDA) shared by all distributors
    /// - Derived from: ["vault_authority"]
    #[account(
        init_if_needed,
        payer = authority,
        space = VaultAuthority::LEN,
        seeds = [VAULT_AUTHORITY_SEED.as_bytes()],
        bump
    )]
    pub vault_authority: Account<'info, VaultAuthority>,

    /// Reward vault (PDA) holding the tokens awaiting distribution
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = asset_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the tracked asset
    #[account(mint::token_program = token_program)]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// Authority of the new distributor, pays for account creation
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let distributor_key = ctx.accounts.distributor.key();
    let distributor = &mut ctx.accounts.distributor;

    distributor.initialize(
        ctx.bumps.distributor,
        ctx.accounts.authority.key(),
        ctx.accounts.asset_mint.key(),
        ctx.accounts.vault.key(),
        args.distribution_interval,
        args.min_holder_balance,
    )?;

    ctx.accounts.vault_authority.bump = ctx.bumps.vault_authority;

    emit_cpi!(DistributorInitialized {
        distributor: distributor_key,
        authority: distributor.authority,
        asset_mint: distributor.asset_mint,
        vault: distributor.vault,
        distribution_interval: distributor.distribution_interval,
        min_holder_balance: distributor.min_holder_balance,
    });

    Ok(())
}
