//! `shortest` command: single-objective Dijkstra over the same graph input.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use skypath_cli::output::{print_timing, render_shortest, OutputFormat, ShortestSummary};
use skypath_lib::{path_attributes, Objective, ShortestPathFinder, SkylineRequest, SumAggregator};

use super::{parse_objective, EndpointArgs, GraphArgs};

#[derive(Args, Debug, Clone)]
pub struct ShortestArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub endpoints: EndpointArgs,

    /// Objective to minimise: `total` or a dimension index.
    #[arg(long, default_value = "total", value_parser = parse_objective)]
    pub objective: Objective,
}

pub fn handle_shortest(args: &ShortestArgs, format: OutputFormat) -> Result<()> {
    let config = args.graph.engine_config()?;
    let graph = args.graph.load(config.dimension)?;

    let request = SkylineRequest {
        source: args.endpoints.from,
        target: args.endpoints.to,
    };
    let (source, target) = request
        .validate(&graph)
        .context("invalid shortest path query")?;

    let started = Instant::now();
    let nodes = ShortestPathFinder::new(args.objective)
        .find(&graph, source, target)
        .context("shortest path query failed")?;
    let elapsed = started.elapsed();

    let attributes = nodes
        .as_deref()
        .map(|nodes| path_attributes(&graph, &SumAggregator, nodes))
        .transpose()
        .context("failed to aggregate shortest path attributes")?;

    let summary = ShortestSummary {
        source,
        target,
        objective: args.objective,
        nodes,
        attributes,
    };
    render_shortest(&summary, format).context("failed to write shortest path output")?;

    if format == OutputFormat::Text {
        print_timing("Shortest search", elapsed);
    }
    Ok(())
}
