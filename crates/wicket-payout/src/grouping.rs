//! Score ranking and tie grouping.
//!
//! Participants are sorted descending by score and partitioned into groups
//! of exact score equality. A group of k participants starting at position
//! p occupies positions p..p+k-1; the groups are contiguous and together
//! cover positions 1..N.
//!
//! The sort is stable, so the upstream relative order among tied
//! participants survives into the explanation. Payout amounts never depend
//! on it: everyone in a group is paid the same.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use wicket_core::types::Participant;

/// Participants tied on one score value, with the position range they occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup {
    /// First (best) 1-based position the group occupies.
    pub start_position: usize,
    /// The shared score.
    pub score: f64,
    /// Members in upstream relative order.
    pub members: Vec<Participant>,
}

impl PositionGroup {
    /// Last 1-based position the group occupies.
    pub fn end_position(&self) -> usize {
        self.start_position + self.members.len() - 1
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_tied(&self) -> bool {
        self.members.len() > 1
    }
}

/// Sort participants descending by score and partition them into
/// [`PositionGroup`]s of exact score equality.
pub fn rank_participants(participants: &[Participant]) -> Vec<PositionGroup> {
    let mut sorted: Vec<Participant> = participants.to_vec();
    sorted.sort_by_key(|p| Reverse(OrderedFloat(p.total_points)));

    let mut groups = Vec::new();
    let mut start_position = 1;
    for chunk in
        sorted.chunk_by(|a, b| OrderedFloat(a.total_points) == OrderedFloat(b.total_points))
    {
        groups.push(PositionGroup {
            start_position,
            score: chunk[0].total_points,
            members: chunk.to_vec(),
        });
        start_position += chunk.len();
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn team(id: &str, points: f64) -> Participant {
        Participant {
            id: id.to_string(),
            team_name: format!("Team {id}"),
            total_points: points,
            wallet_address: None,
        }
    }

    #[test]
    fn empty_field_has_no_groups() {
        assert!(rank_participants(&[]).is_empty());
    }

    #[test]
    fn distinct_scores_one_group_each() {
        let field = [team("a", 80.0), team("b", 100.0), team("c", 60.0)];
        let groups = rank_participants(&field);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].score, 100.0);
        assert_eq!(groups[0].start_position, 1);
        assert_eq!(groups[1].score, 80.0);
        assert_eq!(groups[1].start_position, 2);
        assert_eq!(groups[2].score, 60.0);
        assert_eq!(groups[2].start_position, 3);
    }

    #[test]
    fn tied_scores_share_a_group() {
        let field = [
            team("a", 100.0),
            team("b", 90.0),
            team("c", 90.0),
            team("d", 70.0),
        ];
        let groups = rank_participants(&field);
        assert_eq!(groups.len(), 3);
        let tied = &groups[1];
        assert_eq!(tied.start_position, 2);
        assert_eq!(tied.end_position(), 3);
        assert_eq!(tied.size(), 2);
        assert!(tied.is_tied());
        // Following group resumes after the occupied range.
        assert_eq!(groups[2].start_position, 4);
    }

    #[test]
    fn all_tied_single_group() {
        let field = [team("a", 50.0), team("b", 50.0), team("c", 50.0)];
        let groups = rank_participants(&field);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].start_position, 1);
        assert_eq!(groups[0].end_position(), 3);
    }

    #[test]
    fn stable_order_within_ties() {
        let field = [team("first", 90.0), team("second", 90.0)];
        let groups = rank_participants(&field);
        assert_eq!(groups[0].members[0].id, "first");
        assert_eq!(groups[0].members[1].id, "second");
    }

    #[test]
    fn grouping_is_exact_equality() {
        // Scores one ulp apart are different groups.
        let near = 90.0 + f64::EPSILON * 64.0;
        let field = [team("a", near), team("b", 90.0)];
        let groups = rank_participants(&field);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members[0].id, "a");
    }

    // --- proptest ---

    fn arb_field() -> impl Strategy<Value = Vec<Participant>> {
        // Half-point scores in a narrow range to force plenty of ties.
        prop::collection::vec(0u32..40, 0..50).prop_map(|scores| {
            scores
                .into_iter()
                .enumerate()
                .map(|(i, s)| team(&format!("t{i}"), s as f64 * 0.5))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn groups_cover_positions_exactly(field in arb_field()) {
            let groups = rank_participants(&field);
            let mut next = 1usize;
            for group in &groups {
                prop_assert_eq!(group.start_position, next);
                prop_assert_eq!(group.end_position(), next + group.size() - 1);
                next += group.size();
            }
            prop_assert_eq!(next - 1, field.len());
        }

        #[test]
        fn group_scores_strictly_descending(field in arb_field()) {
            let groups = rank_participants(&field);
            for pair in groups.windows(2) {
                prop_assert!(pair[0].score > pair[1].score);
            }
        }

        #[test]
        fn every_member_matches_group_score(field in arb_field()) {
            let groups = rank_participants(&field);
            for group in &groups {
                for member in &group.members {
                    prop_assert_eq!(member.total_points, group.score);
                }
            }
        }
    }
}
