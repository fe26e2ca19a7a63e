//! `query` command: skyline paths with an optional shortest path baseline.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use skypath_cli::output::{print_timing, render_skyline, OutputFormat};
use skypath_lib::{
    path_attributes, Objective, ShortestPathFinder, SkylineEngine, SkylineRequest, SkylineSummary,
};

use super::{parse_objective, EndpointArgs, GraphArgs, PruningArg};

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub endpoints: EndpointArgs,

    /// Partial skyline strategy. Overrides the config file.
    #[arg(long, value_enum)]
    pub pruning: Option<PruningArg>,

    /// Also run a single-objective Dijkstra search and report it.
    #[arg(long)]
    pub compare_shortest: bool,

    /// Objective for the baseline: `total` or a dimension index.
    #[arg(long, default_value = "total", value_parser = parse_objective)]
    pub objective: Objective,
}

pub fn handle_query(args: &QueryArgs, format: OutputFormat) -> Result<()> {
    let mut config = args.graph.engine_config()?;
    if let Some(pruning) = args.pruning {
        config.pruning = pruning.into();
    }
    let graph = args.graph.load(config.dimension)?;
    let engine = SkylineEngine::new(graph, config).context("failed to configure skyline engine")?;

    let request = SkylineRequest {
        source: args.endpoints.from,
        target: args.endpoints.to,
    };
    let started = Instant::now();
    let result = engine.query(&request).context("skyline query failed")?;
    let skyline_elapsed = started.elapsed();
    info!(
        "found {} skyline paths in {:?}",
        result.paths.len(),
        skyline_elapsed
    );

    let mut summary = SkylineSummary::from_result(&result);
    let mut shortest_elapsed = None;
    if args.compare_shortest {
        let started = Instant::now();
        let nodes = ShortestPathFinder::new(args.objective)
            .find(engine.graph(), result.source, result.target)
            .context("shortest path query failed")?;
        shortest_elapsed = Some(started.elapsed());

        let attributes = nodes
            .as_deref()
            .map(|nodes| path_attributes(engine.graph(), engine.aggregator(), nodes))
            .transpose()
            .context("failed to aggregate shortest path attributes")?;
        summary = summary.with_baseline(args.objective, nodes, attributes);
    }

    render_skyline(&summary, format).context("failed to write skyline output")?;

    if format == OutputFormat::Text {
        print_timing("Skyline search", skyline_elapsed);
        if let Some(elapsed) = shortest_elapsed {
            print_timing("Shortest search", elapsed);
        }
    }

    Ok(())
}
