//! Linear cliff-vesting math (pure; no clock or account access).
//!
//! - unlocked(now) = 0 before the cliff, total at/after the end, otherwise
//!   floor(total * (now - start) / (end - start))
//! - claimable(now) = unlocked(now) - total_withdrawn
//!
//! Floor division under-disburses mid-schedule by at most the integer
//! remainder; the end-time branch sweeps the full allocation.

use crate::error::VestingError;

/// Creation-time schedule validation: `start <= cliff <= end`, `start < end`
/// (an instant schedule is rejected rather than special-cased), `total > 0`.
pub fn validate_schedule(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
) -> Result<(), VestingError> {
    if total_amount == 0 {
        return Err(VestingError::InvalidSchedule);
    }
    if start_time > cliff_time || cliff_time > end_time {
        return Err(VestingError::InvalidSchedule);
    }
    if start_time == end_time {
        return Err(VestingError::InvalidSchedule);
    }
    Ok(())
}

/// Cumulative entitlement as of `now`, per the linear schedule.
pub fn unlocked_amount(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
    now: i64,
) -> Result<u64, VestingError> {
    if now < cliff_time {
        return Ok(0);
    }
    if now >= end_time {
        return Ok(total_amount);
    }

    // Here cliff <= now < end; a stored schedule also satisfies
    // start <= cliff and start < end, so elapsed and duration are positive.
    let elapsed = now
        .checked_sub(start_time)
        .ok_or(VestingError::MathOverflow)?;
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < 0 || duration <= 0 {
        return Err(VestingError::InvalidSchedule);
    }

    let unlocked = (total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / duration as u128;
    u64::try_from(unlocked).map_err(|_| VestingError::MathOverflow)
}

/// Unlocked amount minus what was already withdrawn. Never negative while
/// the withdrawal counter only grows by prior claimable amounts.
pub fn claimable_amount(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
    total_withdrawn: u64,
    now: i64,
) -> Result<u64, VestingError> {
    let unlocked = unlocked_amount(start_time, cliff_time, end_time, total_amount, now)?;
    unlocked
        .checked_sub(total_withdrawn)
        .ok_or(VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 0;
    const CLIFF: i64 = 100;
    const END: i64 = 1000;
    const TOTAL: u64 = 1000;

    fn unlocked(now: i64) -> u64 {
        unlocked_amount(START, CLIFF, END, TOTAL, now).unwrap()
    }

    #[test]
    fn zero_before_cliff() {
        assert_eq!(unlocked(START), 0);
        assert_eq!(unlocked(50), 0);
        assert_eq!(unlocked(CLIFF - 1), 0);
    }

    #[test]
    fn linear_from_cliff_onward() {
        assert_eq!(unlocked(CLIFF), 100);
        assert_eq!(unlocked(550), 550);
        assert_eq!(unlocked(END - 1), 999);
    }

    #[test]
    fn full_amount_at_and_after_end() {
        assert_eq!(unlocked(END), TOTAL);
        assert_eq!(unlocked(END + 1), TOTAL);
        assert_eq!(unlocked(i64::MAX), TOTAL);
    }

    #[test]
    fn non_decreasing_in_time() {
        let mut prev = 0;
        for now in (START - 10)..=(END + 10) {
            let u = unlocked(now);
            assert!(u >= prev, "unlocked decreased at now={now}");
            prev = u;
        }
        assert_eq!(prev, TOTAL);
    }

    #[test]
    fn floor_division_never_over_disburses() {
        // 7 tokens over 3 seconds: 2, 4, then dust swept at the end.
        assert_eq!(unlocked_amount(0, 0, 3, 7, 1).unwrap(), 2);
        assert_eq!(unlocked_amount(0, 0, 3, 7, 2).unwrap(), 4);
        assert_eq!(unlocked_amount(0, 0, 3, 7, 3).unwrap(), 7);
    }

    #[test]
    fn claimable_tracks_withdrawals() {
        // Claim at now=100 takes 100; at now=550 another 450 is claimable;
        // past the end the remainder tops the total up exactly.
        let first = claimable_amount(START, CLIFF, END, TOTAL, 0, 100).unwrap();
        assert_eq!(first, 100);
        let second = claimable_amount(START, CLIFF, END, TOTAL, first, 550).unwrap();
        assert_eq!(second, 450);
        let withdrawn = first + second;
        let rest = claimable_amount(START, CLIFF, END, TOTAL, withdrawn, END + 1).unwrap();
        assert_eq!(withdrawn + rest, TOTAL);
    }

    #[test]
    fn immediate_repeat_claim_yields_zero() {
        let amount = claimable_amount(START, CLIFF, END, TOTAL, 0, 550).unwrap();
        assert_eq!(
            claimable_amount(START, CLIFF, END, TOTAL, amount, 550).unwrap(),
            0
        );
    }

    #[test]
    fn sequential_claims_sum_to_total_exactly() {
        let mut withdrawn = 0u64;
        for now in [100, 101, 250, 999, 1000, 5000] {
            withdrawn += claimable_amount(START, CLIFF, END, TOTAL, withdrawn, now).unwrap();
            assert!(withdrawn <= TOTAL);
        }
        assert_eq!(withdrawn, TOTAL);
    }

    #[test]
    fn large_values_widen_through_u128() {
        let total = u64::MAX;
        let end = i64::MAX;
        let u = unlocked_amount(0, 0, end, total, end / 2).unwrap();
        assert!(u < total);
        assert!(u >= total / 2 - 1);
    }

    #[test]
    fn validate_accepts_well_ordered_schedules() {
        assert!(validate_schedule(0, 100, 1000, 1000).is_ok());
        // cliff may coincide with either endpoint
        assert!(validate_schedule(0, 0, 1000, 1).is_ok());
        assert!(validate_schedule(0, 1000, 1000, 1).is_ok());
    }

    #[test]
    fn validate_rejects_bad_orderings_and_amounts() {
        // end before cliff
        assert!(matches!(
            validate_schedule(0, 100, 50, 1000),
            Err(VestingError::InvalidSchedule)
        ));
        // cliff before start
        assert!(matches!(
            validate_schedule(100, 50, 1000, 1000),
            Err(VestingError::InvalidSchedule)
        ));
        // zero allocation
        assert!(matches!(
            validate_schedule(0, 100, 1000, 0),
            Err(VestingError::InvalidSchedule)
        ));
        // instant schedule
        assert!(matches!(
            validate_schedule(100, 100, 100, 1000),
            Err(VestingError::InvalidSchedule)
        ));
    }
}
