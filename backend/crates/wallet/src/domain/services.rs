//! Domain Services
//!
//! Pure domain logic for claim cadence, challenge generation, and the daily
//! window the claim cap is counted over.

use chrono::{DateTime, NaiveTime, Utc};
use rand::Rng;

/// Smallest operand a challenge may use
pub const CHALLENGE_OPERAND_MIN: i32 = 1;

/// Largest operand a challenge may use
pub const CHALLENGE_OPERAND_MAX: i32 = 20;

/// Draw a pair of operands for an arithmetic challenge
pub fn generate_operands() -> (i32, i32) {
    let mut rng = rand::thread_rng();
    (
        rng.gen_range(CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX),
        rng.gen_range(CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX),
    )
}

/// Check whether the claim with this 1-based daily ordinal must carry a
/// verified challenge. With `every_n = 10` the 10th, 20th, ... claims of the
/// day are gated; `every_n = 0` disables the gate entirely.
pub fn is_challenge_slot(claim_number: u32, every_n: u32) -> bool {
    if every_n == 0 {
        return false;
    }
    claim_number % every_n == 0
}

/// Start of the UTC day containing `now`. Daily claim counts reset at this
/// boundary for everyone at once, regardless of client timezone.
pub fn utc_day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_operands_stay_in_range() {
        for _ in 0..100 {
            let (left, right) = generate_operands();
            assert!((CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX).contains(&left));
            assert!((CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX).contains(&right));
        }
    }

    #[test]
    fn test_challenge_slots_every_ten() {
        assert!(!is_challenge_slot(1, 10));
        assert!(!is_challenge_slot(9, 10));
        assert!(is_challenge_slot(10, 10));
        assert!(!is_challenge_slot(11, 10));
        assert!(is_challenge_slot(20, 10));
        assert!(is_challenge_slot(50, 10));
    }

    #[test]
    fn test_zero_cadence_disables_the_gate() {
        for n in 1..=50 {
            assert!(!is_challenge_slot(n, 0));
        }
    }

    #[test]
    fn test_utc_day_start_truncates() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let start = utc_day_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_midnight_is_its_own_day_start() {
        let midnight = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(utc_day_start(midnight), midnight);
    }
}
