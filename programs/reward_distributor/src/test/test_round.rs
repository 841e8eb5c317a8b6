use crate::error::RewardDistributorError;
use crate::state::*;
use super::assert_error;

const INTERVAL: i64 = 600;

fn snapshot(reward_pool: u64, eligible_supply: u64) -> RoundSnapshot {
    RoundSnapshot {
        reward_pool,
        eligible_supply,
    }
}

fn open_state(id: u64, start_time: i64) -> RoundState {
    RoundState::Open {
        round: Round::open(id, start_time, snapshot(3000, 3000)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_round_opens_without_waiting() {
        let state = RoundState::NotStarted;
        assert_eq!(state.round_id(), 0);

        // Any timestamp is eligible, there is no previous round to compare with
        for now in [0, 1, INTERVAL - 1, 1_700_000_000] {
            let ticket = state.ensure_round_open(now, INTERVAL, snapshot(10, 20)).unwrap();
            assert!(ticket.opened);
            assert_eq!(ticket.round.id, 1);
            assert_eq!(ticket.round.start_time, now);
            assert_eq!(ticket.round.reward_pool, 10);
            assert_eq!(ticket.round.eligible_supply, 20);
            assert_eq!(ticket.round.distributed, 0);
        }
    }

    #[test]
    fn test_open_round_is_joined_within_interval() {
        let state = open_state(3, 1_000);

        let ticket = state
            .ensure_round_open(1_000 + INTERVAL - 1, INTERVAL, snapshot(1, 1))
            .unwrap();
        assert!(!ticket.opened);
        assert_eq!(ticket.round.id, 3);
        assert_eq!(ticket.round.start_time, 1_000);
        // The running round keeps its own snapshot
        assert_eq!(ticket.round.reward_pool, 3000);
    }

    #[test]
    fn test_next_round_opens_once_interval_elapsed() {
        let state = open_state(3, 1_000);

        let ticket = state
            .ensure_round_open(1_000 + INTERVAL, INTERVAL, snapshot(50, 100))
            .unwrap();
        assert!(ticket.opened);
        assert_eq!(ticket.round.id, 4);
        assert_eq!(ticket.round.start_time, 1_000 + INTERVAL);
        assert_eq!(ticket.round.reward_pool, 50);
        assert_eq!(ticket.round.eligible_supply, 100);
    }

    #[test]
    fn test_clock_behind_round_start_joins_open_round() {
        let state = open_state(2, 5_000);

        let ticket = state.ensure_round_open(4_000, INTERVAL, snapshot(1, 1)).unwrap();
        assert!(!ticket.opened);
        assert_eq!(ticket.round.start_time, 5_000);
    }

    #[test]
    fn test_closed_round_gates_next_opening() {
        let mut state = open_state(1, 1_000);
        let closed = state.close().unwrap();
        assert_eq!(closed.id, 1);
        assert_eq!(state, RoundState::Closed { round: closed });
        assert!(state.open_round().is_none());

        assert_error(
            state.ensure_round_open(1_000 + INTERVAL - 1, INTERVAL, snapshot(1, 1)),
            RewardDistributorError::IntervalNotElapsed,
        );

        let ticket = state
            .ensure_round_open(1_000 + INTERVAL, INTERVAL, snapshot(1, 1))
            .unwrap();
        assert!(ticket.opened);
        assert_eq!(ticket.round.id, 2);
    }

    #[test]
    fn test_close_requires_open_round() {
        let mut state = RoundState::NotStarted;
        assert_error(state.close(), RewardDistributorError::RoundNotOpen);

        let mut state = open_state(1, 0);
        state.close().unwrap();
        assert_error(state.close(), RewardDistributorError::RoundNotOpen);
    }

    #[test]
    fn test_round_start_never_decreases() {
        let mut state = RoundState::NotStarted;
        let mut last_start = i64::MIN;

        for now in [100, 200, 700, 650, 1_300, 1_299, 2_000] {
            let ticket = state.ensure_round_open(now, INTERVAL, snapshot(1, 1)).unwrap();
            assert!(ticket.round.start_time >= last_start);
            last_start = ticket.round.start_time;
            state = RoundState::Open { round: ticket.round };
        }
        // Rounds opened at 100, 700, 1300 and 2000
        assert_eq!(state.round_id(), 4);
    }

    #[test]
    fn test_round_id_overflow_is_rejected() {
        let state = open_state(u64::MAX, 0);
        assert_error(
            state.ensure_round_open(INTERVAL, INTERVAL, snapshot(1, 1)),
            RewardDistributorError::Overflow,
        );
    }

    #[test]
    fn test_record_payout_never_exceeds_reward_pool() {
        let mut round = Round::open(1, 0, snapshot(100, 1_000));

        round.record_payout(60).unwrap();
        round.record_payout(0).unwrap();
        assert_eq!(round.remaining(), 40);
        assert_eq!(round.claim_count, 2);

        assert_error(round.record_payout(41), RewardDistributorError::InsufficientVaultBalance);
        assert_eq!(round.distributed, 60);

        round.record_payout(40).unwrap();
        assert_eq!(round.remaining(), 0);
    }
}
