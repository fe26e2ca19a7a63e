use std::fmt::Write;

use serde::Serialize;

use crate::attributes::AttributeVector;
use crate::config::PruningMode;
use crate::graph::NodeId;
use crate::shortest::Objective;
use crate::skyline::{QueryStats, SkylineResult};

/// Presentation style for turning a [`SkylineSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Header plus one numbered block per path.
    PlainText,
    /// One line per path: nodes joined by arrows, then the vector.
    Compact,
}

/// Skyline path as presented to consumers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkylineEntry {
    pub index: usize,
    pub hops: usize,
    pub nodes: Vec<NodeId>,
    pub attributes: AttributeVector,
}

/// Single-objective baseline reported next to a skyline for comparison.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BaselineSummary {
    pub objective: Objective,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeVector>,
    /// Whether the baseline path is also one of the skyline paths.
    pub in_skyline: bool,
}

/// Structured representation of a skyline query that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkylineSummary {
    pub source: NodeId,
    pub target: NodeId,
    pub pruning: PruningMode,
    pub count: usize,
    pub paths: Vec<SkylineEntry>,
    pub stats: QueryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineSummary>,
}

impl SkylineSummary {
    pub fn from_result(result: &SkylineResult) -> Self {
        let paths = result
            .paths
            .iter()
            .enumerate()
            .map(|(index, path)| SkylineEntry {
                index: index + 1,
                hops: path.hop_count(),
                nodes: path.nodes.clone(),
                attributes: path.attributes.clone(),
            })
            .collect::<Vec<_>>();

        Self {
            source: result.source,
            target: result.target,
            pruning: result.pruning,
            count: paths.len(),
            paths,
            stats: result.stats,
            baseline: None,
        }
    }

    /// Attach a baseline path. `attributes` is the aggregated vector of `nodes`.
    pub fn with_baseline(
        mut self,
        objective: Objective,
        nodes: Option<Vec<NodeId>>,
        attributes: Option<AttributeVector>,
    ) -> Self {
        let in_skyline = nodes
            .as_ref()
            .is_some_and(|nodes| self.paths.iter().any(|entry| &entry.nodes == nodes));
        self.baseline = Some(BaselineSummary {
            objective,
            nodes,
            attributes,
            in_skyline,
        });
        self
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Skyline: {} -> {} ({} paths, pruning: {})",
            self.source, self.target, self.count, self.pruning
        );

        for entry in &self.paths {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({} hops)",
                entry.index,
                join_nodes(&entry.nodes),
                entry.hops
            );
            let _ = writeln!(buffer, "     attributes: {}", entry.attributes);
        }

        if let Some(baseline) = &self.baseline {
            match (&baseline.nodes, &baseline.attributes) {
                (Some(nodes), Some(attributes)) => {
                    let _ = writeln!(
                        buffer,
                        "Shortest ({}): {} {}{}",
                        baseline.objective,
                        join_nodes(nodes),
                        attributes,
                        if baseline.in_skyline {
                            ""
                        } else {
                            " [not in skyline]"
                        }
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "Shortest ({}): unreachable", baseline.objective);
                }
            }
        }

        let _ = writeln!(
            buffer,
            "Search: {} expanded, {} partial prunes, {} full prunes, {} evicted",
            self.stats.expanded,
            self.stats.partial_prunes,
            self.stats.full_prunes,
            self.stats.evicted
        );

        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        for entry in &self.paths {
            let _ = writeln!(buffer, "{} {}", join_nodes(&entry.nodes), entry.attributes);
        }
        buffer
    }
}

fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
