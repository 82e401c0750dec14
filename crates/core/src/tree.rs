//! Family tree reconstruction.
//!
//! Transforms the flat relational form (members, parent-child links,
//! marriages) into a single rooted tree of [`TreeNode`]s. The tree is
//! rebuilt from scratch on every call and never cached; callers hand in a
//! consistent snapshot of all three record sets and serialize the result.
//!
//! Placement rules:
//! - The root is the ranked generation-1 member (male first, then birth
//!   order), skipping members who married into the family as `spouse2`.
//! - Each child is placed under exactly one parent: the parent of the
//!   earliest-recorded link for that child. Other parent links remain
//!   relationship data but create no second placement.
//! - A node also shows the children claimed by its spouses, so a couple's
//!   children are visible from whichever partner carries the node.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::lineage::ParentLink;
use crate::member::GENDER_MALE;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Access to the member fields tree construction needs. Implemented by the
/// database row type; kept as a trait so this crate stays storage-free.
pub trait TreePerson {
    fn id(&self) -> DbId;
    fn full_name(&self) -> &str;
    fn gender(&self) -> &str;
    fn generation(&self) -> i32;
    fn birth_order(&self) -> i32;
}

/// One marriage record, as stored: directed spouse1 → spouse2 with an
/// ordering index among a person's unions.
#[derive(Debug, Clone, PartialEq)]
pub struct MarriageRecord {
    pub spouse1_id: DbId,
    pub spouse2_id: DbId,
    pub marriage_date: Option<String>,
    pub order_index: i32,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A spouse attached to a tree node: the partner's payload plus the marriage
/// metadata used for display ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpouseEntry<M> {
    pub member: M,
    pub marriage_date: Option<String>,
    pub order_index: i32,
}

/// One member placed in the reconstructed tree. Ephemeral: built per read,
/// serialized, discarded. Spouses are attached entries, never nodes of
/// their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<M> {
    pub member: M,
    pub spouses: Vec<SpouseEntry<M>>,
    pub children: Vec<TreeNode<M>>,
    pub generation: i32,
}

// ---------------------------------------------------------------------------
// Tree construction
// ---------------------------------------------------------------------------

struct TreeIndex<'a, M> {
    members: HashMap<DbId, &'a M>,
    /// parent id → ids of the children this parent claimed (first link wins).
    children_of: HashMap<DbId, Vec<DbId>>,
    spouses_of: HashMap<DbId, Vec<SpouseEntry<M>>>,
}

/// Build the family tree from a full snapshot of members, parent-child
/// links, and marriages.
///
/// Returns `None` when there are no members or no generation-1 member to
/// root the tree at. Links or marriages referencing unknown member ids are
/// ignored. Cyclic link data is tolerated: a branch that would revisit an
/// ancestor is cut there.
pub fn build_family_tree<M>(
    members: &[M],
    links: &[ParentLink],
    marriages: &[MarriageRecord],
) -> Option<TreeNode<M>>
where
    M: TreePerson + Clone,
{
    let member_map: HashMap<DbId, &M> = members.iter().map(|m| (m.id(), m)).collect();

    // First-recorded link claims the child; later links for the same child
    // carry relationship data only and create no second placement.
    let mut children_of: HashMap<DbId, Vec<DbId>> = HashMap::new();
    let mut claimed_by: HashMap<DbId, DbId> = HashMap::new();
    for link in links {
        if !claimed_by.contains_key(&link.child_id) {
            claimed_by.insert(link.child_id, link.parent_id);
            children_of.entry(link.parent_id).or_default().push(link.child_id);
        }
    }

    // Merge both marriage sides into one spouse list per member. A marriage
    // whose partner id resolves to no member contributes nothing.
    let mut spouses_of: HashMap<DbId, Vec<SpouseEntry<M>>> = HashMap::new();
    for marriage in marriages {
        if let Some(partner) = member_map.get(&marriage.spouse2_id) {
            spouses_of
                .entry(marriage.spouse1_id)
                .or_default()
                .push(SpouseEntry {
                    member: (*partner).clone(),
                    marriage_date: marriage.marriage_date.clone(),
                    order_index: marriage.order_index,
                });
        }
        if let Some(partner) = member_map.get(&marriage.spouse1_id) {
            spouses_of
                .entry(marriage.spouse2_id)
                .or_default()
                .push(SpouseEntry {
                    member: (*partner).clone(),
                    marriage_date: marriage.marriage_date.clone(),
                    order_index: marriage.order_index,
                });
        }
    }

    // Rank generation-1 members: male first, then ascending birth order.
    // The sort is stable, so equal keys keep their snapshot order.
    let mut gen1: Vec<&M> = members.iter().filter(|m| m.generation() == 1).collect();
    gen1.sort_by(|a, b| {
        let a_male = a.gender() == GENDER_MALE;
        let b_male = b.gender() == GENDER_MALE;
        b_male
            .cmp(&a_male)
            .then(a.birth_order().cmp(&b.birth_order()))
    });
    if gen1.is_empty() {
        return None;
    }

    // Members recorded as spouse2 married into the family and must not root
    // the tree. If that excludes every candidate, fall back to the best-
    // ranked one so a tree still comes back.
    let married_in: HashSet<DbId> = marriages.iter().map(|m| m.spouse2_id).collect();
    let root = gen1
        .iter()
        .find(|m| !married_in.contains(&m.id()))
        .copied()
        .unwrap_or(gen1[0]);

    let index = TreeIndex {
        members: member_map,
        children_of,
        spouses_of,
    };
    build_node(&index, root.id(), &HashSet::new())
}

/// Assemble the node for one member, recursing into its claimed children.
///
/// `path` holds the ancestor ids of the current branch. Each child recursion
/// gets its own copy, so sibling branches never share visitation state; a
/// child already on the path is skipped, which bounds cyclic data.
fn build_node<M>(
    index: &TreeIndex<'_, M>,
    member_id: DbId,
    path: &HashSet<DbId>,
) -> Option<TreeNode<M>>
where
    M: TreePerson + Clone,
{
    if path.contains(&member_id) {
        return None;
    }
    let member = (*index.members.get(&member_id)?).clone();

    let mut branch = path.clone();
    branch.insert(member_id);

    let mut spouses = index
        .spouses_of
        .get(&member_id)
        .cloned()
        .unwrap_or_default();
    spouses.sort_by_key(|s| s.order_index);

    // Own claimed children first, then children claimed by each spouse,
    // deduplicated against what is already collected.
    let mut child_ids: Vec<DbId> = index
        .children_of
        .get(&member_id)
        .cloned()
        .unwrap_or_default();
    for spouse in &spouses {
        if let Some(spouse_children) = index.children_of.get(&spouse.member.id()) {
            for &child_id in spouse_children {
                if !child_ids.contains(&child_id) {
                    child_ids.push(child_id);
                }
            }
        }
    }

    let mut ordered: Vec<(DbId, i32)> = child_ids
        .into_iter()
        .filter_map(|child_id| {
            index
                .members
                .get(&child_id)
                .map(|m| (child_id, m.birth_order()))
        })
        .collect();
    ordered.sort_by_key(|&(_, birth_order)| birth_order);

    let children: Vec<TreeNode<M>> = ordered
        .into_iter()
        .filter_map(|(child_id, _)| build_node(index, child_id, &branch))
        .collect();

    let generation = member.generation();
    Some(TreeNode {
        member,
        spouses,
        children,
        generation,
    })
}

// ---------------------------------------------------------------------------
// Search helpers
// ---------------------------------------------------------------------------

/// Collect the ids of every member (nodes and spouses) whose full name
/// case-insensitively contains `query`. An empty or whitespace-only query
/// matches nothing.
pub fn search_tree<M: TreePerson>(node: &TreeNode<M>, query: &str) -> HashSet<DbId> {
    let mut matched = HashSet::new();
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return matched;
    }
    search_into(node, &needle, &mut matched);
    matched
}

fn search_into<M: TreePerson>(node: &TreeNode<M>, needle: &str, matched: &mut HashSet<DbId>) {
    if node.member.full_name().to_lowercase().contains(needle) {
        matched.insert(node.member.id());
    }
    for spouse in &node.spouses {
        if spouse.member.full_name().to_lowercase().contains(needle) {
            matched.insert(spouse.member.id());
        }
    }
    for child in &node.children {
        search_into(child, needle, matched);
    }
}

/// Compute which nodes a collapsed tree view must expand to reveal every
/// match: the matched ids themselves plus every node whose subtree (spouses
/// included) contains a match. Always a superset of `matched`.
pub fn find_expanded_ids<M: TreePerson>(
    node: &TreeNode<M>,
    matched: &HashSet<DbId>,
) -> HashSet<DbId> {
    let mut expanded: HashSet<DbId> = matched.iter().copied().collect();
    mark_expanded(node, matched, &mut expanded);
    expanded
}

fn mark_expanded<M: TreePerson>(
    node: &TreeNode<M>,
    matched: &HashSet<DbId>,
    expanded: &mut HashSet<DbId>,
) -> bool {
    let mut has_match = matched.contains(&node.member.id())
        || node
            .spouses
            .iter()
            .any(|s| matched.contains(&s.member.id()));

    for child in &node.children {
        if mark_expanded(child, matched, expanded) {
            has_match = true;
        }
    }

    if has_match {
        expanded.insert(node.member.id());
    }
    has_match
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
