//! Per-frontier pruning index used during a single skyline query.
//!
//! The index maps `(source, frontier)` to the vectors of paths already seen
//! from `source` to `frontier`. A candidate dominated by a stored vector is not
//! expanded. The index is a heuristic: it keys on the frontier only, so it can
//! discard a candidate whose own simple extensions would have survived.

use std::collections::HashMap;

use crate::attributes::AttributeVector;
use crate::config::PruningMode;
use crate::graph::NodeId;

#[derive(Debug, Clone)]
pub struct PartialSkylineIndex {
    mode: PruningMode,
    entries: HashMap<(NodeId, NodeId), Vec<AttributeVector>>,
}

impl PartialSkylineIndex {
    pub fn new(mode: PruningMode) -> Self {
        Self {
            mode,
            entries: HashMap::new(),
        }
    }

    pub fn mode(&self) -> PruningMode {
        self.mode
    }

    /// Stored vectors for `(source, node)`. Holds at most one vector in
    /// [`PruningMode::SingleSlot`].
    pub fn get(&self, source: NodeId, node: NodeId) -> Option<&[AttributeVector]> {
        self.entries.get(&(source, node)).map(Vec::as_slice)
    }

    /// Whether any stored vector for `(source, node)` dominates `candidate`.
    pub fn dominates(&self, source: NodeId, node: NodeId, candidate: &AttributeVector) -> bool {
        self.get(source, node)
            .is_some_and(|stored| stored.iter().any(|vector| vector.dominates(candidate)))
    }

    /// Record `vector` for `(source, node)`.
    ///
    /// Single-slot mode overwrites whatever was stored. Skyline mode ignores a
    /// vector that is dominated by or equal to a member, and otherwise inserts
    /// it and evicts the members it dominates.
    pub fn update(&mut self, source: NodeId, node: NodeId, vector: AttributeVector) {
        let slot = self.entries.entry((source, node)).or_default();
        match self.mode {
            PruningMode::SingleSlot => {
                slot.clear();
                slot.push(vector);
            }
            PruningMode::Skyline => {
                skyline_insert(slot, vector);
            }
        }
    }

    /// Number of `(source, frontier)` keys with stored vectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insert `vector` into a skyline set. Returns `false` when it was rejected.
pub(crate) fn skyline_insert(set: &mut Vec<AttributeVector>, vector: AttributeVector) -> bool {
    if set
        .iter()
        .any(|member| member == &vector || member.dominates(&vector))
    {
        return false;
    }
    set.retain(|member| !vector.dominates(member));
    set.push(vector);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[f64]) -> AttributeVector {
        AttributeVector::new(values.to_vec())
    }

    #[test]
    fn empty_index_prunes_nothing() {
        let index = PartialSkylineIndex::new(PruningMode::Skyline);
        assert!(index.get(0, 1).is_none());
        assert!(!index.dominates(0, 1, &v(&[1.0, 1.0])));
        assert!(index.is_empty());
    }

    #[test]
    fn single_slot_overwrites_unconditionally() {
        let mut index = PartialSkylineIndex::new(PruningMode::SingleSlot);
        index.update(0, 3, v(&[1.0, 5.0]));
        index.update(0, 3, v(&[5.0, 1.0]));

        assert_eq!(index.get(0, 3), Some(&[v(&[5.0, 1.0])][..]));
        // The weaker survivor no longer covers what the first vector did.
        assert!(!index.dominates(0, 3, &v(&[2.0, 6.0])));
    }

    #[test]
    fn skyline_keeps_incomparable_vectors() {
        let mut index = PartialSkylineIndex::new(PruningMode::Skyline);
        index.update(0, 3, v(&[1.0, 5.0]));
        index.update(0, 3, v(&[5.0, 1.0]));

        assert_eq!(index.get(0, 3).map(<[_]>::len), Some(2));
        assert!(index.dominates(0, 3, &v(&[2.0, 6.0])));
        assert!(index.dominates(0, 3, &v(&[6.0, 2.0])));
    }

    #[test]
    fn skyline_evicts_dominated_members() {
        let mut index = PartialSkylineIndex::new(PruningMode::Skyline);
        index.update(0, 3, v(&[4.0, 4.0]));
        index.update(0, 3, v(&[9.0, 1.0]));
        index.update(0, 3, v(&[2.0, 2.0]));

        assert_eq!(
            index.get(0, 3),
            Some(&[v(&[9.0, 1.0]), v(&[2.0, 2.0])][..])
        );
    }

    #[test]
    fn keys_are_separate_per_frontier() {
        let mut index = PartialSkylineIndex::new(PruningMode::SingleSlot);
        index.update(0, 1, v(&[1.0]));
        index.update(0, 2, v(&[9.0]));
        assert!(index.dominates(0, 1, &v(&[2.0])));
        assert!(index.dominates(0, 2, &v(&[10.0])));
        assert!(!index.dominates(0, 2, &v(&[9.0])));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn skyline_insert_rejects_equal_and_dominated() {
        let mut set = vec![v(&[1.0, 1.0])];
        assert!(!skyline_insert(&mut set, v(&[1.0, 1.0])));
        assert!(!skyline_insert(&mut set, v(&[2.0, 1.0])));
        assert!(skyline_insert(&mut set, v(&[0.0, 3.0])));
        assert_eq!(set.len(), 2);
    }
}
