//! Greedy coin change
//!
//! Splits an amount in cents into quarters, dimes, nickels and pennies,
//! largest denomination first.

use crate::error::{ExerciseError, Result};

/// Coin denominations in cents, largest first
pub const DENOMINATIONS: [u32; 4] = [25, 10, 5, 1];

/// Number of coins used for each denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoinBreakdown {
    /// Counts aligned with [`DENOMINATIONS`]
    counts: [u64; 4],
}

impl CoinBreakdown {
    /// Get the coin count for a denomination, or `None` for an unknown one
    pub fn get(&self, denomination: u32) -> Option<u64> {
        DENOMINATIONS
            .iter()
            .position(|&d| d == denomination)
            .map(|index| self.counts[index])
    }

    /// Iterate `(denomination, count)` pairs, largest denomination first
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        DENOMINATIONS.iter().copied().zip(self.counts.iter().copied())
    }

    /// Total number of coins
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Amount in cents these coins add up to
    pub fn amount(&self) -> u64 {
        self.iter().map(|(d, count)| u64::from(d) * count).sum()
    }

    /// Copy into a map keyed by denomination
    #[cfg(feature = "alloc")]
    pub fn to_map(&self) -> hashbrown::HashMap<u32, u64> {
        self.iter().collect()
    }
}

/// Break `amount` cents into the fewest US coins
///
/// Fails with [`ExerciseError::NegativeAmount`] when `amount` is below zero.
pub fn change(amount: i64) -> Result<CoinBreakdown> {
    let mut remaining = u64::try_from(amount).map_err(|_| ExerciseError::NegativeAmount)?;

    let mut counts = [0u64; 4];
    for (count, &denomination) in counts.iter_mut().zip(DENOMINATIONS.iter()) {
        let denomination = u64::from(denomination);
        *count = remaining / denomination;
        remaining %= denomination;
    }

    Ok(CoinBreakdown { counts })
}
