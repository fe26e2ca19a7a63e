mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skypath_cli::output::OutputFormat;

use commands::{QueryArgs, ShortestArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Skyline path search over attributed graphs")]
struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every non-dominated simple path between two nodes.
    Query(QueryArgs),
    /// Find the single lowest-cost path for one objective.
    Shortest(ShortestArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Query(args) => commands::handle_query(&args, cli.format),
        Command::Shortest(args) => commands::handle_shortest(&args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
