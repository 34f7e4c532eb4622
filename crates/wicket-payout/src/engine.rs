//! Payout engine implementing the [`PrizeAllocator`] trait.
//!
//! Walks the ranked position groups against the percentage curve, merges
//! the percentages of tied positions, splits them equally, and emits the
//! final payout list plus a human-readable audit trail. Participants
//! without a wallet address are skipped from the payout list but recorded
//! in the explanation with the amount they would have received.

use tracing::{debug, trace};

use wicket_core::error::PayoutError;
use wicket_core::traits::PrizeAllocator;
use wicket_core::types::{Distribution, DistributionResult, Participant};

use crate::curve::PercentageCurve;
use crate::grouping::{rank_participants, PositionGroup};

/// Explanation returned for an empty field.
pub const EMPTY_FIELD_EXPLANATION: &str = "No teams to distribute prizes to.";

/// The production prize allocator.
///
/// Stateless and side-effect free; one instance can settle any number of
/// contests concurrently.
#[derive(Debug, Clone, Default)]
pub struct PayoutEngine;

impl PayoutEngine {
    /// Create a new PayoutEngine.
    pub fn new() -> Self {
        Self
    }
}

/// Parse the pool boundary text into a non-negative finite amount.
fn parse_pool(total_pool: &str) -> Result<f64, PayoutError> {
    let pool: f64 = total_pool
        .trim()
        .parse()
        .map_err(|_| PayoutError::InvalidPoolAmount(total_pool.to_string()))?;
    if !pool.is_finite() {
        return Err(PayoutError::InvalidPoolAmount(total_pool.to_string()));
    }
    if pool < 0.0 {
        return Err(PayoutError::NegativePoolAmount(pool));
    }
    Ok(pool)
}

/// Shorten a wallet address for display: `0x1234...abcd`.
fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// One group's resolved allocation.
struct GroupAllocation<'a> {
    group: &'a PositionGroup,
    merged_percent: f64,
    per_participant_percent: f64,
    per_participant_amount: f64,
}

fn allocate_group<'a>(
    group: &'a PositionGroup,
    curve: &PercentageCurve,
    pool: f64,
) -> GroupAllocation<'a> {
    let merged_percent = curve.range_sum(group.start_position, group.end_position());
    let per_participant_percent = merged_percent / group.size() as f64;
    let per_participant_amount = pool * per_participant_percent / 100.0;
    GroupAllocation {
        group,
        merged_percent,
        per_participant_percent,
        per_participant_amount,
    }
}

impl PrizeAllocator for PayoutEngine {
    fn compute_distribution(
        &self,
        participants: &[Participant],
        total_pool: &str,
    ) -> Result<DistributionResult, PayoutError> {
        if participants.is_empty() {
            return Ok(DistributionResult {
                distributions: Vec::new(),
                explanation: EMPTY_FIELD_EXPLANATION.to_string(),
            });
        }

        let pool = parse_pool(total_pool)?;
        let field_size = participants.len();
        debug!(teams = field_size, pool, "computing prize distribution");

        let curve = PercentageCurve::for_field(field_size);
        let groups = rank_participants(participants);

        let mut distributions = Vec::with_capacity(field_size);
        let mut group_lines = Vec::new();
        let mut participant_lines = Vec::new();
        let mut distributed_total = 0.0;
        let mut skipped = 0usize;

        for group in &groups {
            let allocation = allocate_group(group, &curve, pool);
            trace!(
                start = group.start_position,
                end = group.end_position(),
                percent = allocation.per_participant_percent,
                "allocated position group"
            );
            group_lines.extend(describe_group(&allocation, &curve));

            for member in &group.members {
                let amount = allocation.per_participant_amount;
                match member.wallet() {
                    Some(address) => {
                        distributions.push(Distribution {
                            wallet_address: address.to_string(),
                            prize_amount: amount,
                        });
                        distributed_total += amount;
                        participant_lines.push(format!(
                            "{} ({}): {amount:.2}",
                            member.team_name,
                            short_address(address)
                        ));
                    }
                    None => {
                        skipped += 1;
                        participant_lines.push(format!(
                            "{} (no wallet address): would have received {amount:.2}, skipped",
                            member.team_name
                        ));
                    }
                }
            }
        }

        let explanation = render_explanation(
            pool,
            &group_lines,
            &participant_lines,
            distributed_total,
            skipped,
        );

        Ok(DistributionResult {
            distributions,
            explanation,
        })
    }
}

/// Per-group explanation line(s): the allocation itself, plus a tie
/// annotation naming each merged position's pre-split percentage.
fn describe_group(allocation: &GroupAllocation<'_>, curve: &PercentageCurve) -> Vec<String> {
    let group = allocation.group;
    let start = group.start_position;
    let end = group.end_position();

    if !group.is_tied() {
        return vec![format!(
            "Position {start}: {} ({} pts) -> {:.1}% = {:.2}",
            group.members[0].team_name,
            group.score,
            allocation.per_participant_percent,
            allocation.per_participant_amount,
        )];
    }

    let merged: Vec<String> = (start..=end)
        .map(|pos| format!("{:.1}%", curve.share(pos)))
        .collect();
    vec![
        format!(
            "Positions {start}-{end}: {} teams tied at {} pts -> {:.1}% combined, {:.1}% each = {:.2} each",
            group.size(),
            group.score,
            allocation.merged_percent,
            allocation.per_participant_percent,
            allocation.per_participant_amount,
        ),
        format!(
            "Tie handling: Combined prizes for positions {start}-{end} ({}) split equally",
            merged.join(" + ")
        ),
    ]
}

fn render_explanation(
    pool: f64,
    group_lines: &[String],
    participant_lines: &[String],
    distributed_total: f64,
    skipped: usize,
) -> String {
    let distributed_percent = if pool > 0.0 {
        distributed_total / pool * 100.0
    } else {
        0.0
    };

    let mut lines = Vec::with_capacity(group_lines.len() + participant_lines.len() + 4);
    lines.push(format!("Total prize pool: {pool:.2}"));
    lines.extend(group_lines.iter().cloned());
    lines.extend(participant_lines.iter().cloned());
    lines.push(format!(
        "Total distributed: {distributed_total:.2} ({distributed_percent:.1}% of pool)"
    ));
    if skipped > 0 {
        lines.push(format!(
            "{skipped} team(s) have no wallet address and were skipped."
        ));
    }
    lines.join("\n")
}
