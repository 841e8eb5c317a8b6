//! PDA derivation helpers, shared by clients and tests.

use anchor_lang::prelude::*;
use crate::constants::*;

pub fn find_distributor_address(asset_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[DISTRIBUTOR_SEED.as_bytes(), asset_mint.as_ref()],
        &crate::ID,
    )
}

pub fn find_vault_authority_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED.as_bytes()], &crate::ID)
}

pub fn find_vault_address(distributor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_SEED.as_bytes(), distributor.as_ref()],
        &crate::ID,
    )
}

pub fn find_claim_status_address(distributor: &Pubkey, holder: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), distributor.as_ref(), holder.as_ref()],
        &crate::ID,
    )
}
