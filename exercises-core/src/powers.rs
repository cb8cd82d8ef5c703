//! Lazy power sequence
//!
//! Produces `base^0, base^1, base^2, ...` on demand and stops for good the
//! first time a power exceeds the inclusive limit. A power that does not fit
//! in an `i64` also ends the sequence, in either direction: for a negative
//! base the first unrepresentable power may be below the limit, and the
//! sequence still stops there.

use core::iter::FusedIterator;

/// Iterator over successive powers of `base` bounded by `limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerSequence {
    base: i64,
    limit: i64,
    exponent: u32,
    exhausted: bool,
}

impl PowerSequence {
    /// Create a sequence starting at exponent 0
    pub const fn new(base: i64, limit: i64) -> Self {
        Self {
            base,
            limit,
            exponent: 0,
            exhausted: false,
        }
    }

    /// Get the base
    pub const fn base(&self) -> i64 {
        self.base
    }

    /// Get the inclusive upper bound
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// Whether the sequence has ended
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether the sequence will keep producing values forever
    ///
    /// Only bases 0, 1 and -1 with a limit of at least 1 never end.
    pub const fn is_unbounded(&self) -> bool {
        !self.exhausted && matches!(self.base, -1..=1) && self.limit >= 1
    }
}

impl Iterator for PowerSequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.exhausted {
            return None;
        }

        match self.base.checked_pow(self.exponent) {
            Some(candidate) if candidate <= self.limit => {
                // saturates only for bases 0, 1 and -1
                self.exponent = self.exponent.saturating_add(1);
                Some(candidate)
            }
            _ => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl FusedIterator for PowerSequence {}

/// Powers of `base` up to and including `limit`
pub const fn powers(base: i64, limit: i64) -> PowerSequence {
    PowerSequence::new(base, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers_of_two() {
        let values: Vec<i64> = powers(2, 10).collect();
        assert_eq!(values, vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let values: Vec<i64> = powers(3, 27).collect();
        assert_eq!(values, vec![1, 3, 9, 27]);
    }

    #[test]
    fn test_empty_when_one_exceeds_limit() {
        let mut seq = PowerSequence::new(5, 0);
        assert!(!seq.is_exhausted());
        assert_eq!(seq.next(), None);
        assert!(seq.is_exhausted());

        assert_eq!(powers(2, -100).count(), 0);
    }

    #[test]
    fn test_single_value() {
        let values: Vec<i64> = powers(3, 1).collect();
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_negative_base() {
        let values: Vec<i64> = powers(-2, 10).collect();
        assert_eq!(values, vec![1, -2, 4, -8]);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut seq = powers(2, 10);
        assert_eq!(seq.by_ref().count(), 4);
        for _ in 0..5 {
            assert_eq!(seq.next(), None);
        }
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_lazy_unbounded() {
        // 1^n never exceeds the limit
        let values: Vec<i64> = powers(1, 1).take(1000).collect();
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| v == 1));

        let zeros: Vec<i64> = powers(0, 1).take(4).collect();
        assert_eq!(zeros, vec![1, 0, 0, 0]);

        let signs: Vec<i64> = powers(-1, 1).take(4).collect();
        assert_eq!(signs, vec![1, -1, 1, -1]);
    }

    #[test]
    fn test_zero_base_below_one() {
        // 0^0 is 1, already above the limit
        assert_eq!(powers(0, 0).count(), 0);
        assert_eq!(powers(0, -5).count(), 0);
    }

    #[test]
    fn test_unbounded_detection() {
        assert!(powers(1, 1).is_unbounded());
        assert!(powers(0, 7).is_unbounded());
        assert!(powers(-1, i64::MAX).is_unbounded());
        assert!(!powers(1, 0).is_unbounded());
        assert!(!powers(2, i64::MAX).is_unbounded());
        assert!(!powers(-2, 10).is_unbounded());

        let mut seq = powers(1, 0);
        assert_eq!(seq.next(), None);
        assert!(!seq.is_unbounded());
    }

    #[test]
    fn test_overflow_ends_sequence() {
        let values: Vec<i64> = powers(10, i64::MAX).collect();
        assert_eq!(values.len(), 19);
        assert_eq!(values.last(), Some(&1_000_000_000_000_000_000));

        let values: Vec<i64> = powers(2, i64::MAX).collect();
        assert_eq!(values.last(), Some(&(1 << 62)));
    }

    #[test]
    fn test_negative_overflow_ends_sequence() {
        // (-7)^23 is below i64::MIN, so the sequence stops after (-7)^22
        let mut seq = powers(-7, i64::MAX);
        let values: Vec<i64> = seq.by_ref().collect();
        assert_eq!(values.len(), 23);
        assert_eq!(values.last(), Some(&3_909_821_048_582_988_049));
        assert_eq!(values[21], -558_545_864_083_284_007);
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_fresh_sequence_restarts() {
        let mut first = powers(3, 100);
        first.next();
        first.next();
        assert_eq!(first.next(), Some(9));
        assert_eq!(powers(3, 100).next(), Some(1));
    }
}
