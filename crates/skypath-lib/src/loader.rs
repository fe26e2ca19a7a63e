//! Graph ingestion from comma-separated text.
//!
//! Two inputs are accepted, both without a header row, with `#` comment lines
//! and surrounding whitespace ignored:
//!
//! - a node list, one identifier per record (extra columns are ignored);
//! - an edge list, `source,target,a1,...,aD` per record.
//!
//! When no node list is supplied the node set is taken from the edge list in
//! order of first appearance.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::attributes::AttributeVector;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder, NodeId};

/// Options applied while building a graph from text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Insert every edge in both directions.
    pub undirected: bool,
}

/// Load a graph from an optional node file and an edge file.
pub fn load_graph(
    nodes: Option<&Path>,
    edges: &Path,
    dimension: usize,
    options: LoadOptions,
) -> Result<Graph> {
    let node_file = nodes.map(File::open).transpose()?;
    let edge_file = File::open(edges)?;
    let graph = parse_graph(node_file, edge_file, dimension, options)?;

    debug!(
        "loaded graph from {}: {} nodes, {} edges",
        edges.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parse a graph from in-memory or streamed text.
pub fn parse_graph<N: Read, E: Read>(
    nodes: Option<N>,
    edges: E,
    dimension: usize,
    options: LoadOptions,
) -> Result<Graph> {
    let mut builder = GraphBuilder::new(dimension);
    let declared = nodes.is_some();

    if let Some(reader) = nodes {
        read_nodes(reader, &mut builder)?;
    }
    read_edges(edges, &mut builder, declared, options)?;

    Ok(builder.build())
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn read_nodes<R: Read>(reader: R, builder: &mut GraphBuilder) -> Result<()> {
    for record in csv_reader(reader).records() {
        let record = record?;
        let line = line_of(&record);
        let node = parse_node(&record, 0, line)?;
        builder
            .add_node(node)
            .map_err(|err| format_error(line, err))?;
    }
    Ok(())
}

fn read_edges<R: Read>(
    reader: R,
    builder: &mut GraphBuilder,
    declared: bool,
    options: LoadOptions,
) -> Result<()> {
    let expected = builder.dimension() + 2;

    for record in csv_reader(reader).records() {
        let record = record?;
        let line = line_of(&record);
        if record.len() != expected {
            return Err(Error::GraphFormat {
                line,
                message: format!("expected {} fields, found {}", expected, record.len()),
            });
        }

        let from = parse_node(&record, 0, line)?;
        let to = parse_node(&record, 1, line)?;
        let attributes = record
            .iter()
            .skip(2)
            .map(|field| {
                field.parse::<f64>().map_err(|_| Error::GraphFormat {
                    line,
                    message: format!("invalid attribute value '{field}'"),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(AttributeVector::new)?;

        if !declared {
            builder.ensure_node(from).ensure_node(to);
        }

        let added = if options.undirected {
            builder.add_undirected_edge(from, to, attributes)
        } else {
            builder.add_edge(from, to, attributes)
        };
        added.map_err(|err| format_error(line, err))?;
    }
    Ok(())
}

fn parse_node(record: &StringRecord, index: usize, line: u64) -> Result<NodeId> {
    let field = record.get(index).unwrap_or_default();
    field.parse().map_err(|_| Error::GraphFormat {
        line,
        message: format!("invalid node id '{field}'"),
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

fn format_error(line: u64, err: Error) -> Error {
    Error::GraphFormat {
        line,
        message: err.to_string(),
    }
}
