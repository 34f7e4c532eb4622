//! # wicket-payout — tie-aware prize distribution engine.
//!
//! Two pure pieces compose into the engine:
//! - **Percentage curve** ([`curve`]): maps each finishing position of an
//!   N-entrant field to a percentage of the pool, always summing to 100.
//! - **Tie-aware allocation** ([`grouping`] + [`engine`]): ranks
//!   participants, merges the curve percentages of tied positions, splits
//!   them equally, and emits the payout list plus an audit-trail
//!   explanation.
//!
//! The engine is synchronous and side-effect free. It computes *how much*
//! each wallet is owed; executing the transfers is the settlement
//! component's job, behind the [`PrizeAllocator`](wicket_core::traits::PrizeAllocator)
//! seam.

pub mod curve;
pub mod engine;
pub mod grouping;

pub use curve::PercentageCurve;
pub use engine::PayoutEngine;
pub use grouping::{rank_participants, PositionGroup};
