use anchor_lang::prelude::*;

/**
 * Program-wide vault authority record
 *
 * Owns every reward vault. It has no private key: vault transfers are signed
 * with its PDA seeds, so ownership is proven by derivation alone.
 *
 * Derivation: ["vault_authority"]
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VaultAuthority {
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VaultAuthority {
    pub const LEN: usize = 8 + VaultAuthority::INIT_SPACE;
}
