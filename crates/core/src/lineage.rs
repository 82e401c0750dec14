//! Parent-child link rules and generation propagation planning.
//!
//! Creating a link re-derives the child's generation from its parent and
//! cascades that change down every descendant chain. The traversal here is
//! a pure planner over a link snapshot: it decides which members get which
//! generation, and the repository applies the whole plan plus the link
//! insert in one transaction. A failed request therefore changes nothing.

use std::collections::{HashSet, VecDeque};

use crate::error::CoreError;
use crate::types::DbId;

/// One directed parent-child link, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    pub parent_id: DbId,
    pub child_id: DbId,
}

/// A single pending generation write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationUpdate {
    pub member_id: DbId,
    pub generation: i32,
}

/// The result of planning a propagation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Writes in visit order; the linked child is always first.
    pub updates: Vec<GenerationUpdate>,
    /// Members reached a second time during the sweep. Correct acyclic data
    /// never produces these; a non-empty list means diamond ancestry inside
    /// one descendant chain or a cycle, and is worth a warning upstream.
    pub revisited: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Endpoint validation
// ---------------------------------------------------------------------------

/// Reject a link whose parent and child are the same member.
pub fn validate_link_endpoints(parent_id: DbId, child_id: DbId) -> Result<(), CoreError> {
    if parent_id == child_id {
        return Err(CoreError::Validation(
            "A member cannot be their own parent".to_string(),
        ));
    }
    Ok(())
}

/// Reject a marriage between a member and themselves.
pub fn validate_spouse_pair(spouse1_id: DbId, spouse2_id: DbId) -> Result<(), CoreError> {
    if spouse1_id == spouse2_id {
        return Err(CoreError::Validation(
            "A member cannot be married to themselves".to_string(),
        ));
    }
    Ok(())
}

/// Minimum order index for a marriage (1 = first marriage).
pub const MIN_ORDER_INDEX: i32 = 1;

/// Reject a non-positive marriage order index.
pub fn validate_order_index(order_index: i32) -> Result<(), CoreError> {
    if order_index < MIN_ORDER_INDEX {
        return Err(CoreError::Validation(
            "Order index must be at least 1".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Propagation planning
// ---------------------------------------------------------------------------

/// Plan the generation writes for a newly linked child.
///
/// `links` is the link set as it stood before the new link was inserted;
/// `child_generation` is the child's re-derived generation (parent's + 1).
/// The sweep is breadth-first from the child, assigning each visited
/// member's generation as its visit-parent's + 1. One growing visited set
/// spans the whole pass, so each member is written at most once and cyclic
/// or diamond-shaped data terminates; members reached again are reported in
/// [`GenerationPlan::revisited`] instead of being re-queued.
///
/// Re-running the planner over the same inputs yields the same plan: the
/// computation re-derives values and never increments stored state.
pub fn plan_generation_updates(
    links: &[ParentLink],
    child_id: DbId,
    child_generation: i32,
) -> GenerationPlan {
    let mut plan = GenerationPlan {
        updates: vec![GenerationUpdate {
            member_id: child_id,
            generation: child_generation,
        }],
        revisited: Vec::new(),
    };

    let mut visited: HashSet<DbId> = HashSet::from([child_id]);
    let mut queue: VecDeque<(DbId, i32)> = VecDeque::from([(child_id, child_generation)]);

    while let Some((member_id, generation)) = queue.pop_front() {
        for link in links.iter().filter(|l| l.parent_id == member_id) {
            if visited.insert(link.child_id) {
                plan.updates.push(GenerationUpdate {
                    member_id: link.child_id,
                    generation: generation + 1,
                });
                queue.push_back((link.child_id, generation + 1));
            } else if !plan.revisited.contains(&link.child_id) {
                plan.revisited.push(link.child_id);
            }
        }
    }

    plan
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn link(parent_id: DbId, child_id: DbId) -> ParentLink {
        ParentLink {
            parent_id,
            child_id,
        }
    }

    fn update(member_id: DbId, generation: i32) -> GenerationUpdate {
        GenerationUpdate {
            member_id,
            generation,
        }
    }

    // -- endpoint validation -------------------------------------------------

    #[test]
    fn self_link_rejected() {
        assert_matches!(validate_link_endpoints(7, 7), Err(CoreError::Validation(_)));
        assert!(validate_link_endpoints(7, 8).is_ok());
    }

    #[test]
    fn self_marriage_rejected() {
        assert_matches!(validate_spouse_pair(3, 3), Err(CoreError::Validation(_)));
        assert!(validate_spouse_pair(3, 4).is_ok());
    }

    #[test]
    fn non_positive_order_index_rejected() {
        assert_matches!(validate_order_index(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_order_index(-2), Err(CoreError::Validation(_)));
        assert!(validate_order_index(1).is_ok());
    }

    // -- plan_generation_updates ---------------------------------------------

    #[test]
    fn leaf_child_plans_only_its_own_write() {
        let plan = plan_generation_updates(&[], 5, 3);
        assert_eq!(plan.updates, vec![update(5, 3)]);
        assert!(plan.revisited.is_empty());
    }

    #[test]
    fn direct_children_follow_the_child() {
        let links = [link(5, 6), link(5, 7)];
        let plan = plan_generation_updates(&links, 5, 2);
        assert_eq!(plan.updates, vec![update(5, 2), update(6, 3), update(7, 3)]);
    }

    #[test]
    fn cascade_reaches_every_descendant_level() {
        // C gets generation 3; E under C, G under E.
        let links = [link(3, 5), link(5, 7)];
        let plan = plan_generation_updates(&links, 3, 3);
        assert_eq!(plan.updates, vec![update(3, 3), update(5, 4), update(7, 5)]);
    }

    #[test]
    fn siblings_at_same_depth_get_same_generation() {
        // C parents both E and F.
        let links = [link(3, 5), link(3, 6), link(5, 8)];
        let plan = plan_generation_updates(&links, 3, 3);
        assert_eq!(
            plan.updates,
            vec![update(3, 3), update(5, 4), update(6, 4), update(8, 5)]
        );
    }

    #[test]
    fn unrelated_links_stay_untouched() {
        let links = [link(1, 2), link(9, 10)];
        let plan = plan_generation_updates(&links, 2, 2);
        assert_eq!(plan.updates, vec![update(2, 2)]);
    }

    #[test]
    fn diamond_descendant_written_once_and_reported() {
        // Both children of 1 parent the same grandchild 4.
        let links = [link(1, 2), link(1, 3), link(2, 4), link(3, 4)];
        let plan = plan_generation_updates(&links, 1, 2);
        assert_eq!(
            plan.updates,
            vec![update(1, 2), update(2, 3), update(3, 3), update(4, 4)]
        );
        assert_eq!(plan.revisited, vec![4]);
    }

    #[test]
    fn cyclic_links_terminate_and_report() {
        let links = [link(1, 2), link(2, 3), link(3, 1)];
        let plan = plan_generation_updates(&links, 1, 1);
        assert_eq!(plan.updates, vec![update(1, 1), update(2, 2), update(3, 3)]);
        assert_eq!(plan.revisited, vec![1]);
    }

    #[test]
    fn replanning_same_inputs_is_identical() {
        let links = [link(1, 2), link(2, 3)];
        let first = plan_generation_updates(&links, 1, 4);
        let second = plan_generation_updates(&links, 1, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn monotonicity_holds_across_planned_updates() {
        let links = [link(1, 2), link(1, 3), link(2, 4), link(4, 5)];
        let plan = plan_generation_updates(&links, 1, 2);

        let generation_of = |id: DbId| {
            plan.updates
                .iter()
                .find(|u| u.member_id == id)
                .map(|u| u.generation)
        };
        for l in &links {
            let (Some(parent), Some(child)) =
                (generation_of(l.parent_id), generation_of(l.child_id))
            else {
                continue;
            };
            assert_eq!(child, parent + 1, "edge {} -> {}", l.parent_id, l.child_id);
        }
    }
}
