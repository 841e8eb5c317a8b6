use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing defaults and PDA seeds used throughout the reward distributor program.
 */

/// ===== TIMING CONSTANTS =====

/// Default minimum spacing between two distribution rounds (10 minutes)
/// - Applied by initialize when no interval is supplied
/// - Value: 10 minutes * 60 seconds = 600 seconds
#[constant]
pub const DEFAULT_DISTRIBUTION_INTERVAL: i64 = 10 * 60;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", asset_mint]
/// - One distributor per tracked asset
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for the program-wide vault authority PDA
/// - Used in: ["vault_authority"]
/// - Signs every vault transfer, no private key exists for it
pub const VAULT_AUTHORITY_SEED: &str = "vault_authority";

/// Seed for reward vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - Token account of the tracked asset owned by the vault authority
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, holder_key]
/// - Stores the last round a holder was paid in, which prevents double payment
pub const CLAIM_SEED: &str = "claim";
