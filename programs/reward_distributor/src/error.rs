use anchor_lang::prelude::*;

#[error_code]
pub enum RewardDistributorError {
    // Configuration errors
    #[msg("Distributor already initialized for this asset")]
    AlreadyInitialized,
    #[msg("Invalid distributor configuration")]
    InvalidConfig,
    #[msg("Distributor not initialized")]
    NotInitialized,

    // Access control errors
    #[msg("Only the distributor authority can perform this action")]
    Unauthorized,

    // Round gate errors
    #[msg("Not enough time has passed since last distribution")]
    IntervalNotElapsed,
    #[msg("Holder already claimed in the current round")]
    AlreadyClaimed,
    #[msg("No distribution round is open")]
    RoundNotOpen,
    #[msg("Holder balance is below the distribution minimum")]
    BelowMinimumBalance,

    // Arithmetic errors
    #[msg("Eligible supply is zero")]
    DivisionByZero,
    #[msg("Arithmetic overflow")]
    Overflow,

    // Resource errors
    #[msg("Insufficient vault balance for this payout")]
    InsufficientVaultBalance,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Token mint does not match distributor's asset mint")]
    TokenMintMismatch,
}
