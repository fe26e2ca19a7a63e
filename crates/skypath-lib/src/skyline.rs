//! Skyline path search.
//!
//! [`SkylineEngine`] enumerates simple paths from a source to a target by
//! depth-first search and keeps the ones whose aggregated attribute vector is
//! not Pareto-dominated. Two checks keep the search tractable:
//!
//! 1. the [`PartialSkylineIndex`], which drops a candidate prefix when a
//!    previously seen prefix to the same frontier node dominates it;
//! 2. the result set itself, which drops a candidate prefix dominated by a
//!    complete path already accepted (valid for aggregators that never
//!    improve a vector when extending a path, such as sums of non-negative
//!    costs or maxima).
//!
//! All mutable search state lives in a per-query context, so one engine can
//! answer any number of queries, including from several threads at once.
//!
//! # Example
//!
//! ```
//! use skypath_lib::{EngineConfig, Graph, SkylineEngine};
//!
//! let mut builder = Graph::builder(2);
//! for node in [0, 1, 2] {
//!     builder.add_node(node)?;
//! }
//! builder.add_edge(0, 1, vec![1.0, 4.0])?;
//! builder.add_edge(1, 2, vec![1.0, 4.0])?;
//! builder.add_edge(0, 2, vec![5.0, 1.0])?;
//!
//! let engine = SkylineEngine::new(builder.build(), EngineConfig::new(2))?;
//! let paths = engine.query_paths(0, 2)?;
//! assert_eq!(paths.len(), 2);
//! # Ok::<(), skypath_lib::Error>(())
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::attributes::{Aggregator, AttributeVector, SumAggregator};
use crate::config::{EngineConfig, PruningMode};
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphModel, NodeId};
use crate::partial::PartialSkylineIndex;

/// Endpoints of a skyline query. Either may be absent, which fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkylineRequest {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
}

impl SkylineRequest {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
        }
    }

    /// Check the endpoints against `graph` and return them.
    ///
    /// Checks run in order: missing source, missing target, identical
    /// endpoints, unknown source, unknown target.
    pub fn validate<G: GraphModel + ?Sized>(&self, graph: &G) -> Result<(NodeId, NodeId)> {
        let source = self.source.ok_or(Error::MissingArgument { argument: "source" })?;
        let target = self.target.ok_or(Error::MissingArgument { argument: "target" })?;

        if source == target {
            return Err(Error::IdenticalEndpoints { node: source });
        }
        for node in [source, target] {
            if !graph.contains_node(node) {
                return Err(Error::UnknownNode { node });
            }
        }

        Ok((source, target))
    }
}

/// Simple path accepted into the skyline, with its aggregated attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkylinePath {
    pub nodes: Vec<NodeId>,
    pub attributes: AttributeVector,
}

impl SkylinePath {
    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Counters collected while a query runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Frames pushed onto the search stack (excluding the source).
    pub expanded: usize,
    /// Candidates rejected by the partial skyline index.
    pub partial_prunes: usize,
    /// Candidates rejected because an accepted path dominates them.
    pub full_prunes: usize,
    /// Complete paths recorded on reaching the target.
    pub arrivals: usize,
    /// Accepted paths later removed because a new arrival dominated them.
    pub evicted: usize,
}

/// Outcome of a skyline query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkylineResult {
    pub source: NodeId,
    pub target: NodeId,
    pub pruning: PruningMode,
    /// Skyline paths in the order the search discovered them.
    pub paths: Vec<SkylinePath>,
    pub stats: QueryStats,
}

/// Multi-criteria path search over a [`GraphModel`].
#[derive(Debug, Clone)]
pub struct SkylineEngine<G = Graph, A = SumAggregator> {
    graph: G,
    config: EngineConfig,
    aggregator: A,
}

impl<G: GraphModel> SkylineEngine<G, SumAggregator> {
    /// Create an engine summing edge vectors along each path.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the configured dimension
    /// differs from the graph's.
    pub fn new(graph: G, config: EngineConfig) -> Result<Self> {
        if graph.dimension() != config.dimension {
            return Err(Error::DimensionMismatch {
                expected: config.dimension,
                actual: graph.dimension(),
            });
        }

        Ok(Self {
            graph,
            config,
            aggregator: SumAggregator,
        })
    }
}

impl<G: GraphModel, A: Aggregator> SkylineEngine<G, A> {
    /// Replace the aggregator used to combine edge vectors.
    pub fn with_aggregator<B: Aggregator>(self, aggregator: B) -> SkylineEngine<G, B> {
        SkylineEngine {
            graph: self.graph,
            config: self.config,
            aggregator,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Skyline paths from `source` to `target`, in discovery order.
    pub fn query_paths(&self, source: NodeId, target: NodeId) -> Result<Vec<SkylinePath>> {
        self.query(&SkylineRequest::new(source, target))
            .map(|result| result.paths)
    }

    /// Run a full skyline query and return the paths with search statistics.
    pub fn query(&self, request: &SkylineRequest) -> Result<SkylineResult> {
        let (source, target) = request.validate(&self.graph)?;

        let mut context = QueryContext::new(source, target, self.config.pruning);
        self.expand(&mut context);

        debug!(
            "skyline {} -> {}: {} paths ({} expanded, {} partial prunes, {} full prunes, {} evicted)",
            source,
            target,
            context.paths.len(),
            context.stats.expanded,
            context.stats.partial_prunes,
            context.stats.full_prunes,
            context.stats.evicted,
        );

        Ok(SkylineResult {
            source,
            target,
            pruning: self.config.pruning,
            paths: context.paths,
            stats: context.stats,
        })
    }

    fn expand(&self, context: &mut QueryContext) {
        let mut frames = vec![Frame {
            node: context.source,
            prefix: None,
            cursor: 0,
        }];
        context.on_path.insert(context.source);

        while let Some(frame) = frames.last_mut() {
            let Some(edge) = self.graph.neighbours(frame.node).get(frame.cursor) else {
                context.on_path.remove(&frame.node);
                frames.pop();
                continue;
            };
            frame.cursor += 1;

            let next = edge.target;
            if context.on_path.contains(&next) {
                continue;
            }

            let candidate = match &frame.prefix {
                Some(prefix) => self.aggregator.combine(prefix, &edge.attributes),
                None => edge.attributes.clone(),
            };

            if context.partial.dominates(context.source, next, &candidate) {
                trace!("partial prune at {} with {}", next, candidate);
                context.stats.partial_prunes += 1;
                continue;
            }
            context
                .partial
                .update(context.source, next, candidate.clone());

            if context.is_dominated(&candidate) {
                trace!("full prune at {} with {}", next, candidate);
                context.stats.full_prunes += 1;
                continue;
            }

            if next == context.target {
                let nodes = frames
                    .iter()
                    .map(|frame| frame.node)
                    .chain(std::iter::once(next))
                    .collect();
                context.arrive(nodes, candidate);
                continue;
            }

            context.stats.expanded += 1;
            context.on_path.insert(next);
            frames.push(Frame {
                node: next,
                prefix: Some(candidate),
                cursor: 0,
            });
        }
    }
}

/// Position in the depth-first search: a node on the current path, the
/// aggregated vector of the path up to it, and the next neighbour to try.
struct Frame {
    node: NodeId,
    prefix: Option<AttributeVector>,
    cursor: usize,
}

/// Working state owned by exactly one query.
struct QueryContext {
    source: NodeId,
    target: NodeId,
    mode: PruningMode,
    on_path: HashSet<NodeId>,
    partial: PartialSkylineIndex,
    paths: Vec<SkylinePath>,
    stats: QueryStats,
}

impl QueryContext {
    fn new(source: NodeId, target: NodeId, mode: PruningMode) -> Self {
        Self {
            source,
            target,
            mode,
            on_path: HashSet::new(),
            partial: PartialSkylineIndex::new(mode),
            paths: Vec::new(),
            stats: QueryStats::default(),
        }
    }

    fn is_dominated(&self, candidate: &AttributeVector) -> bool {
        self.paths
            .iter()
            .any(|path| path.attributes.dominates(candidate))
    }

    fn arrive(&mut self, nodes: Vec<NodeId>, attributes: AttributeVector) {
        if self.paths.iter().any(|path| path.nodes == nodes) {
            return;
        }

        if self.mode == PruningMode::Skyline {
            let before = self.paths.len();
            self.paths
                .retain(|path| !attributes.dominates(&path.attributes));
            self.stats.evicted += before - self.paths.len();
        }

        trace!("arrived via {:?} with {}", nodes, attributes);
        self.stats.arrivals += 1;
        self.paths.push(SkylinePath { nodes, attributes });
    }
}
