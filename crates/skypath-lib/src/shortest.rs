//! Single-objective shortest path, used as a baseline when benchmarking the
//! skyline search. Its output is never merged into a skyline result.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::iter::successors;

use serde::Serialize;

use crate::attributes::AttributeVector;
use crate::error::{Error, Result};
use crate::graph::{GraphModel, NodeId};

/// Scalar projection of an attribute vector minimised by Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Sum of all components.
    #[default]
    Total,
    /// A single component, by index.
    Dimension(usize),
}

impl Objective {
    fn weight(self, attributes: &AttributeVector) -> f64 {
        match self {
            Objective::Total => attributes.as_slice().iter().sum(),
            Objective::Dimension(index) => attributes.as_slice()[index],
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Total => f.write_str("total"),
            Objective::Dimension(index) => write!(f, "dimension {index}"),
        }
    }
}

/// Dijkstra search over a scalar projection of the edge attributes.
///
/// Edge weights are assumed non-negative under the chosen objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathFinder {
    objective: Objective,
}

impl ShortestPathFinder {
    pub fn new(objective: Objective) -> Self {
        Self { objective }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Lowest-weight path from `start` to `goal`, or `None` when unreachable.
    ///
    /// Fails with [`Error::InvalidObjective`] when the objective names a
    /// dimension the graph does not have.
    pub fn find<G>(&self, graph: &G, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>>
    where
        G: GraphModel + ?Sized,
    {
        if let Objective::Dimension(index) = self.objective {
            if index >= graph.dimension() {
                return Err(Error::InvalidObjective {
                    index,
                    dimension: graph.dimension(),
                });
            }
        }
        if start == goal {
            return Ok(Some(vec![start]));
        }

        let mut distances: HashMap<NodeId, f64> = HashMap::from([(start, 0.0)]);
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut frontier = BinaryHeap::from([Reverse((FloatOrd(0.0), start))]);

        while let Some(Reverse((FloatOrd(distance), node))) = frontier.pop() {
            if distances.get(&node).is_some_and(|best| *best < distance) {
                continue;
            }
            if node == goal {
                return Ok(Some(walk_back(&parents, start, goal)));
            }

            for edge in graph.neighbours(node) {
                let cost = distance + self.objective.weight(&edge.attributes);
                let settled = distances
                    .get(&edge.target)
                    .is_some_and(|known| *known <= cost);
                if !settled {
                    distances.insert(edge.target, cost);
                    parents.insert(edge.target, node);
                    frontier.push(Reverse((FloatOrd(cost), edge.target)));
                }
            }
        }

        Ok(None)
    }
}

/// Follow parent links from `goal` back to `start`.
fn walk_back(parents: &HashMap<NodeId, NodeId>, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path: Vec<NodeId> = successors(Some(goal), |node| {
        if *node == start {
            None
        } else {
            parents.get(node).copied()
        }
    })
    .collect();
    path.reverse();
    path
}

/// Total order over path costs so they can key the heap.
#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
