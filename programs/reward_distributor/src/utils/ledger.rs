use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};
use crate::error::*;
use super::token::TokenTransfer;

/// Balance reads and vault transfers for one distribution request.
///
/// The distribution logic only talks to the fungible-asset ledger through this
/// trait; on chain it is backed by token accounts and a `transfer_checked` CPI.
pub trait RewardLedger {
    /// Holder's balance of the tracked asset
    fn holder_balance(&self) -> Result<u64>;

    /// Tracked asset sitting in the reward vault
    fn vault_balance(&self) -> Result<u64>;

    /// Total minted supply of the tracked asset
    fn total_supply(&self) -> Result<u64>;

    /// Moves `amount` from the vault to the holder
    fn transfer_to_holder(&mut self, amount: u64) -> Result<()>;
}

/// Ledger backed by the accounts of a `distribute_rewards` instruction
pub struct SplTokenLedger<'a, 'info> {
    pub vault: &'a mut InterfaceAccount<'info, TokenAccount>,
    pub holder_token_account: &'a mut InterfaceAccount<'info, TokenAccount>,
    pub asset_mint: &'a InterfaceAccount<'info, Mint>,
    pub vault_authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    /// Vault authority PDA seeds
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl RewardLedger for SplTokenLedger<'_, '_> {
    fn holder_balance(&self) -> Result<u64> {
        Ok(self.holder_token_account.amount)
    }

    fn vault_balance(&self) -> Result<u64> {
        Ok(self.vault.amount)
    }

    fn total_supply(&self) -> Result<u64> {
        Ok(self.asset_mint.supply)
    }

    fn transfer_to_holder(&mut self, amount: u64) -> Result<()> {
        if self.vault.amount < amount {
            msg!("Vault holds {} but {} was requested", self.vault.amount, amount);
            return err!(RewardDistributorError::InsufficientVaultBalance);
        }

        TokenTransfer {
            from: self.vault.to_account_info(),
            to: self.holder_token_account.to_account_info(),
            authority: self.vault_authority.clone(),
            mint: self.asset_mint.to_account_info(),
            token_program: self.token_program.clone(),
        }
        .invoke_signed(amount, self.asset_mint.decimals, self.signer_seeds)?;

        // Balances read after this point must reflect the CPI
        self.vault.reload()?;
        self.holder_token_account.reload()?;
        Ok(())
    }
}
