//! Attribute vectors, Pareto dominance, and path aggregation.
//!
//! Every edge carries an [`AttributeVector`] of fixed dimension. Lower values
//! are better in every dimension. A path's vector is produced by folding its
//! edge vectors with an [`Aggregator`] in traversal order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{GraphModel, NodeId};

/// Fixed-length vector of edge or path costs (minimisation on every dimension).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeVector(Vec<f64>);

impl AttributeVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Pareto dominance: `self` is no worse than `other` in every dimension and
    /// strictly better in at least one.
    ///
    /// # Panics
    ///
    /// Panics when the vectors have different lengths. Graph construction
    /// enforces a single dimension, so a mismatch here is a caller bug.
    pub fn dominates(&self, other: &Self) -> bool {
        assert_eq!(
            self.len(),
            other.len(),
            "dominance check between vectors of different dimension"
        );

        let mut strictly_better = false;
        for (a, b) in self.0.iter().zip(&other.0) {
            if a > b {
                return false;
            }
            if a < b {
                strictly_better = true;
            }
        }
        strictly_better
    }

    /// Neither vector dominates the other.
    pub fn is_incomparable(&self, other: &Self) -> bool {
        !self.dominates(other) && !other.dominates(self)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "aggregating vectors of different dimension"
        );
        Self(self.0.iter().zip(&other.0).map(|(a, b)| op(*a, *b)).collect())
    }
}

impl From<Vec<f64>> for AttributeVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl fmt::Display for AttributeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Reduces edge vectors into a path vector.
///
/// Implementations must be associative. They are always applied in path
/// traversal order and need not be commutative.
pub trait Aggregator {
    /// Combine the vector of a path prefix with the vector of the next edge.
    fn combine(&self, prefix: &AttributeVector, next: &AttributeVector) -> AttributeVector;

    /// Fold an ordered sequence of edge vectors. Returns `None` for an empty
    /// sequence and the single vector unchanged for a one-edge path.
    fn aggregate<'a, I>(&self, vectors: I) -> Option<AttributeVector>
    where
        I: IntoIterator<Item = &'a AttributeVector>,
    {
        let mut iter = vectors.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |acc, next| self.combine(&acc, next)))
    }
}

/// Elementwise sum. The default aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumAggregator;

impl Aggregator for SumAggregator {
    fn combine(&self, prefix: &AttributeVector, next: &AttributeVector) -> AttributeVector {
        prefix.zip_with(next, |a, b| a + b)
    }
}

/// Elementwise maximum, for bottleneck-style attributes (worst hop wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAggregator;

impl Aggregator for MaxAggregator {
    fn combine(&self, prefix: &AttributeVector, next: &AttributeVector) -> AttributeVector {
        prefix.zip_with(next, f64::max)
    }
}

/// Aggregate the edge vectors along `path`.
///
/// Fails with [`Error::MissingEdge`] if two consecutive nodes are not joined by
/// an edge, and with [`Error::EmptyPath`] if the path has fewer than two nodes.
pub fn path_attributes<G, A>(graph: &G, aggregator: &A, path: &[NodeId]) -> Result<AttributeVector>
where
    G: GraphModel + ?Sized,
    A: Aggregator,
{
    let edges = path
        .windows(2)
        .map(|pair| graph.edge_attributes(pair[0], pair[1]))
        .collect::<Result<Vec<_>>>()?;

    aggregator
        .aggregate(edges)
        .ok_or(Error::EmptyPath)
}
