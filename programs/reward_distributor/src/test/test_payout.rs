use crate::error::RewardDistributorError;
use crate::utils::{compute_share, eligible_supply};
use super::assert_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_is_floor_of_proportion() {
        assert_eq!(compute_share(1_000, 3_000, 3_000).unwrap(), 1_000);
        assert_eq!(compute_share(2_000, 3_000, 3_000).unwrap(), 2_000);
        assert_eq!(compute_share(1, 3, 10).unwrap(), 3);
        assert_eq!(compute_share(2, 3, 10).unwrap(), 6);
        assert_eq!(compute_share(0, 3_000, 3_000).unwrap(), 0);
        assert_eq!(compute_share(1_000, 3_000, 0).unwrap(), 0);
    }

    #[test]
    fn test_zero_supply_is_rejected() {
        assert_error(compute_share(0, 0, 3_000), RewardDistributorError::DivisionByZero);
        assert_error(compute_share(10, 0, 0), RewardDistributorError::DivisionByZero);
    }

    #[test]
    fn test_wide_intermediate_does_not_wrap() {
        // u64::MAX * u64::MAX only fits in the u128 intermediate
        assert_eq!(compute_share(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
        assert_eq!(
            compute_share(u64::MAX / 2, u64::MAX, 1_000_000_000_000).unwrap(),
            499_999_999_999
        );
    }

    #[test]
    fn test_share_above_u64_is_rejected() {
        // Holder balance above the supply makes the quotient exceed the vault
        assert_error(compute_share(u64::MAX, 1, 2), RewardDistributorError::Overflow);
    }

    #[test]
    fn test_proportional_shares_stay_within_one_unit() {
        let balances: [u64; 6] = [1, 7, 1_000, 33_333, 250_000, 1_715_659];
        let supply: u64 = balances.iter().sum();
        let pool: u64 = 987_654_321;

        let mut paid = 0u64;
        for balance in balances {
            let share = compute_share(balance, supply, pool).unwrap();
            // share * supply <= pool * balance < (share + 1) * supply
            let scaled = pool as u128 * balance as u128;
            assert!(share as u128 * supply as u128 <= scaled);
            assert!(scaled < (share as u128 + 1) * supply as u128);
            paid += share;
        }
        assert!(paid <= pool);
        assert!(pool - paid < balances.len() as u64);
    }

    #[test]
    fn test_double_balance_gets_double_share() {
        let (holder_a, holder_b) = (1_000u64, 2_000u64);
        for pool in [3_000u64, 3_001, 10_000, 123_456_789] {
            let share_a = compute_share(holder_a, 3_000, pool).unwrap();
            let share_b = compute_share(holder_b, 3_000, pool).unwrap();
            assert!(share_b.abs_diff(2 * share_a) <= 1, "pool {}: {} vs {}", pool, share_a, share_b);
        }
    }

    #[test]
    fn test_eligible_supply_excludes_vault() {
        assert_eq!(eligible_supply(6_000, 3_000).unwrap(), 3_000);
        assert_eq!(eligible_supply(3_000, 3_000).unwrap(), 0);
        assert_error(eligible_supply(1_000, 2_000), RewardDistributorError::Overflow);
    }
}
