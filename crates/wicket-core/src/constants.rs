//! Payout curve constants. All shares are percentages of the total pool.

/// Sole entrant takes the whole pool.
pub const SOLO_SPLIT: [f64; 1] = [100.0];

/// Two-entrant split.
pub const DUO_SPLIT: [f64; 2] = [70.0, 30.0];

/// Three-entrant split.
pub const TRIO_SPLIT: [f64; 3] = [50.0, 30.0, 20.0];

/// Top-three shares for fields of four or more (80% of the pool).
pub const TOP_THREE_SPLIT: [f64; 3] = [40.0, 25.0, 15.0];

/// Flat share for position 4 in fields of four or more.
pub const FOURTH_PLACE_SHARE: f64 = 10.0;

/// Balance left for positions 5 onward after the top four are paid.
pub const TAIL_POOL_SHARE: f64 = 10.0;

/// Last position of the multiplier band. Positions beyond it split the
/// leftover balance evenly.
pub const BAND_END: usize = 10;

/// Multiplier applied at position 5, the start of the band.
pub const BAND_BASE_MULTIPLIER: f64 = 1.5;

/// Multiplier decrease per position across the band.
pub const BAND_MULTIPLIER_STEP: f64 = 0.25;

/// Maximum tolerated drift of the curve sum from 100 before position 1
/// absorbs the residual.
pub const CURVE_SUM_TOLERANCE: f64 = 0.1;
