//! Subcommand handlers and the graph arguments they share.

mod query;
mod shortest;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use skypath_lib::{load_graph, EngineConfig, Graph, LoadOptions, NodeId, Objective, PruningMode};

pub use query::{handle_query, QueryArgs};
pub use shortest::{handle_shortest, ShortestArgs};

/// Arguments describing where the graph comes from and how to read it.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge list: `source,target,a1,...,aD` per line.
    #[arg(long)]
    pub edges: PathBuf,

    /// Optional node list, one identifier per line.
    #[arg(long)]
    pub nodes: Option<PathBuf>,

    /// Number of attributes per edge. Overrides the config file.
    #[arg(long)]
    pub dimension: Option<usize>,

    /// JSON engine configuration file.
    #[arg(long, env = "SKYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat every edge as traversable in both directions.
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    /// Resolve the engine configuration from `--config` and `--dimension`.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match (&self.config, self.dimension) {
            (Some(path), _) => EngineConfig::from_path(path)
                .with_context(|| format!("failed to read engine config {}", path.display()))?,
            (None, Some(dimension)) => EngineConfig::new(dimension),
            (None, None) => bail!("either --dimension or --config must be provided"),
        };
        if let Some(dimension) = self.dimension {
            config.dimension = dimension;
        }
        Ok(config)
    }

    pub fn load(&self, dimension: usize) -> Result<Graph> {
        let options = LoadOptions {
            undirected: self.undirected,
        };
        load_graph(self.nodes.as_deref(), &self.edges, dimension, options)
            .with_context(|| format!("failed to load graph from {}", self.edges.display()))
    }
}

/// Query endpoints. Both are optional at the parser level so that a missing
/// endpoint is reported by the library.
#[derive(Args, Debug, Clone)]
pub struct EndpointArgs {
    /// Source node id.
    #[arg(long = "from", allow_hyphen_values = true)]
    pub from: Option<NodeId>,

    /// Destination node id.
    #[arg(long = "to", allow_hyphen_values = true)]
    pub to: Option<NodeId>,
}

/// Pruning strategy accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PruningArg {
    SingleSlot,
    Skyline,
}

impl From<PruningArg> for PruningMode {
    fn from(value: PruningArg) -> Self {
        match value {
            PruningArg::SingleSlot => PruningMode::SingleSlot,
            PruningArg::Skyline => PruningMode::Skyline,
        }
    }
}

/// Parse `total` or a zero-based dimension index.
pub fn parse_objective(value: &str) -> std::result::Result<Objective, String> {
    if value.eq_ignore_ascii_case("total") {
        return Ok(Objective::Total);
    }
    value
        .parse::<usize>()
        .map(Objective::Dimension)
        .map_err(|_| format!("expected 'total' or a dimension index, got '{value}'"))
}
