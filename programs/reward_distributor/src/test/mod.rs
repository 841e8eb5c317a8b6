pub mod mock_ledger;

mod test_payout;
mod test_round;

use anchor_lang::error::Error;
use crate::error::RewardDistributorError;

/// Asserts that `result` failed with exactly `expected`
pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: RewardDistributorError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
