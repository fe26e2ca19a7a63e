//! Output formatting for skyline and shortest path results.

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use skypath_lib::{AttributeVector, NodeId, Objective, RenderMode, SkylineSummary};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header, numbered paths with their vectors, and search statistics.
    #[default]
    Text,
    /// One line per path.
    Compact,
    /// Pretty-printed JSON document.
    Json,
}

/// Result of a single-objective shortest path query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShortestSummary {
    pub source: NodeId,
    pub target: NodeId,
    pub objective: Objective,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeVector>,
}

impl ShortestSummary {
    fn render_text(&self) -> String {
        match (&self.nodes, &self.attributes) {
            (Some(nodes), Some(attributes)) => format!(
                "Shortest ({}): {} {}\n",
                self.objective,
                join_nodes(nodes),
                attributes
            ),
            _ => format!(
                "Shortest ({}): no path from {} to {}\n",
                self.objective, self.source, self.target
            ),
        }
    }

    fn render_compact(&self) -> String {
        match (&self.nodes, &self.attributes) {
            (Some(nodes), Some(attributes)) => format!("{} {}\n", join_nodes(nodes), attributes),
            _ => String::new(),
        }
    }
}

/// Render a skyline summary to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_skyline(summary: &SkylineSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_stdout(&summary.render(RenderMode::PlainText)),
        OutputFormat::Compact => write_stdout(&summary.render(RenderMode::Compact)),
        OutputFormat::Json => render_json(summary),
    }
}

/// Render a shortest path summary to stdout.
pub fn render_shortest(summary: &ShortestSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_stdout(&summary.render_text()),
        OutputFormat::Compact => write_stdout(&summary.render_compact()),
        OutputFormat::Json => render_json(summary),
    }
}

/// Print the timing line shown after text output.
pub fn print_timing(label: &str, elapsed: Duration) {
    println!("{}: {}", label, format_elapsed(elapsed));
}

/// Human-readable duration with a unit suited to its magnitude.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        format!("{}µs", elapsed.as_micros())
    } else if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
