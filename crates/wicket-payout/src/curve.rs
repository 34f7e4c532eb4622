//! Position-to-percentage payout curve.
//!
//! The curve maps each finishing position of an `N`-entrant field to a
//! percentage of the prize pool, summing to 100. Small fields use fixed
//! splits; larger fields reserve 80% for the top three, pay position 4 a
//! flat 10%, and spread the last 10% over positions 5+ via a decreasing
//! multiplier band with one-decimal rounding at every step. The rounding
//! cadence is part of the contract: downstream payout amounts must
//! reproduce it exactly.

use wicket_core::constants::{
    BAND_BASE_MULTIPLIER, BAND_END, BAND_MULTIPLIER_STEP, CURVE_SUM_TOLERANCE, DUO_SPLIT,
    FOURTH_PLACE_SHARE, SOLO_SPLIT, TAIL_POOL_SHARE, TOP_THREE_SPLIT, TRIO_SPLIT,
};

/// Round to one decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Payout percentages for a field, indexed by 1-based finishing position.
///
/// Built fresh per settlement from the field size alone; it knows nothing
/// about ties or actual participants.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageCurve {
    shares: Vec<f64>,
}

impl PercentageCurve {
    /// Build the curve for a field of `n` entrants.
    ///
    /// `n = 0` is a caller contract violation and yields an empty curve.
    pub fn for_field(n: usize) -> Self {
        let shares = match n {
            0 => Vec::new(),
            1 => SOLO_SPLIT.to_vec(),
            2 => DUO_SPLIT.to_vec(),
            3 => TRIO_SPLIT.to_vec(),
            _ => banded_shares(n),
        };
        let mut curve = Self { shares };
        curve.correct_drift();
        curve
    }

    /// Share for a 1-based position. Out-of-range positions pay nothing.
    pub fn share(&self, position: usize) -> f64 {
        if position == 0 {
            return 0.0;
        }
        self.shares.get(position - 1).copied().unwrap_or(0.0)
    }

    /// Sum of shares over the inclusive position range `[start, end]`.
    pub fn range_sum(&self, start: usize, end: usize) -> f64 {
        (start..=end).map(|pos| self.share(pos)).sum()
    }

    /// Sum of all shares. 100 within [`CURVE_SUM_TOLERANCE`] for any field.
    pub fn total(&self) -> f64 {
        self.shares.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Fold any drift beyond the tolerance into position 1 so the curve
    /// sums to 100.
    fn correct_drift(&mut self) {
        if self.shares.is_empty() {
            return;
        }
        let drift = 100.0 - self.total();
        if drift.abs() > CURVE_SUM_TOLERANCE {
            self.shares[0] += round1(drift);
        }
    }
}

/// Shares for fields of four or more.
///
/// Positions 5 through min(10, n) each take
/// `(remaining / (n - 4)) * (1.5 - (pos - 5) * 0.25)` rounded to one
/// decimal, with `remaining` decremented after every assignment while the
/// divisor stays fixed at the original position count. When the band closes
/// the field (n <= 10) its last position absorbs the exact balance; when
/// n = 4 the balance folds into position 4. Beyond position 10 the leftover
/// splits evenly.
fn banded_shares(n: usize) -> Vec<f64> {
    debug_assert!(n >= 4);

    let mut shares = TOP_THREE_SPLIT.to_vec();
    shares.push(FOURTH_PLACE_SHARE);
    let mut remaining = TAIL_POOL_SHARE;

    if n == 4 {
        shares[3] += remaining;
        return shares;
    }

    let divisor = (n - 4) as f64;
    let band_end = n.min(BAND_END);

    for pos in 5..=band_end {
        if n <= BAND_END && pos == band_end {
            shares.push(round1(remaining));
            remaining = 0.0;
            break;
        }
        let multiplier = BAND_BASE_MULTIPLIER - (pos - 5) as f64 * BAND_MULTIPLIER_STEP;
        let share = round1(remaining / divisor * multiplier);
        shares.push(share);
        remaining -= share;
    }

    if n > BAND_END {
        let per_position = remaining / (n - BAND_END) as f64;
        shares.extend(std::iter::repeat(per_position).take(n - BAND_END));
    }

    shares
}
