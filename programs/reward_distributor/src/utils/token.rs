use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Accounts of a `transfer_checked` CPI, works for both SPL Token and Token 2022
pub struct TokenTransfer<'info> {
    pub from: AccountInfo<'info>,
    pub to: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

impl<'info> TokenTransfer<'info> {
    /// Transfer authorized by a signer of the outer transaction
    pub fn invoke(self, amount: u64, decimals: u8) -> Result<()> {
        let (program, accounts) = self.into_cpi_parts();
        transfer_checked(CpiContext::new(program, accounts), amount, decimals)
    }

    /// Transfer authorized by a program PDA
    pub fn invoke_signed(self, amount: u64, decimals: u8, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        let (program, accounts) = self.into_cpi_parts();
        transfer_checked(
            CpiContext::new_with_signer(program, accounts, signer_seeds),
            amount,
            decimals,
        )
    }

    fn into_cpi_parts(self) -> (AccountInfo<'info>, TransferChecked<'info>) {
        (
            self.token_program,
            TransferChecked {
                from: self.from,
                mint: self.mint,
                to: self.to,
                authority: self.authority,
            },
        )
    }
}
