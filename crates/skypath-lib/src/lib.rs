//! Skyline path library entry points.
//!
//! This crate builds attributed graphs, loads them from text, and answers
//! skyline path queries: every simple path between two nodes whose attribute
//! vector is not Pareto-dominated by another. Higher-level consumers (the CLI,
//! benchmarks) should only depend on the items exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod attributes;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod partial;
pub mod shortest;
pub mod skyline;

pub use attributes::{path_attributes, Aggregator, AttributeVector, MaxAggregator, SumAggregator};
pub use config::{EngineConfig, PruningMode};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, GraphModel, NodeId};
pub use loader::{load_graph, parse_graph, LoadOptions};
pub use output::{BaselineSummary, RenderMode, SkylineEntry, SkylineSummary};
pub use partial::PartialSkylineIndex;
pub use shortest::{Objective, ShortestPathFinder};
pub use skyline::{QueryStats, SkylineEngine, SkylinePath, SkylineRequest, SkylineResult};
