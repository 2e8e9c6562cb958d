//! CLI entry point for the `tgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tinygraph::cli::commands;
use tinygraph::{FormatOptions, GraphError};

#[derive(Parser)]
#[command(
    name = "tgraph",
    about = "Inspect and convert JSON, TGF and GML graphs"
)]
struct Cli {
    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Indentation unit for JSON and GML output
    #[arg(long, default_value = "  ")]
    indent: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
    },
    /// Convert a graph file to another format
    Convert {
        /// Path to the input graph file
        input: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
        /// Output format: json, tgf or gml
        #[arg(long)]
        to: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List nodes without incoming edges
    Roots {
        /// Path to the graph file
        file: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
    },
    /// List nodes without outgoing edges
    Terminals {
        /// Path to the graph file
        file: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
    },
    /// Walk the graph depth-first from a node
    Traverse {
        /// Path to the graph file
        file: PathBuf,
        /// Id of the start node
        start_id: i64,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
    },
    /// Remove a node and its edges
    RemoveNode {
        /// Path to the graph file
        file: PathBuf,
        /// Id of the node to remove
        node_id: i64,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
        /// Output format: json, tgf or gml
        #[arg(long)]
        to: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Sort nodes and edges by degree
    Sort {
        /// Path to the graph file
        file: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<String>,
        /// Output format: json, tgf or gml
        #[arg(long)]
        to: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let json = cli.json;
    let options = FormatOptions::default().with_indent(cli.indent);

    let result = match cli.command {
        Commands::Info { file, from } => commands::cmd_info(&file, from.as_deref(), json),
        Commands::Convert {
            input,
            from,
            to,
            output,
        } => commands::cmd_convert(
            &input,
            from.as_deref(),
            output.as_deref(),
            to.as_deref(),
            &options,
        ),
        Commands::Roots { file, from } => commands::cmd_roots(&file, from.as_deref(), json),
        Commands::Terminals { file, from } => {
            commands::cmd_terminals(&file, from.as_deref(), json)
        }
        Commands::Traverse {
            file,
            start_id,
            from,
        } => commands::cmd_traverse(&file, from.as_deref(), start_id, json),
        Commands::RemoveNode {
            file,
            node_id,
            from,
            to,
            output,
        } => commands::cmd_remove_node(
            &file,
            from.as_deref(),
            node_id,
            output.as_deref(),
            to.as_deref(),
            &options,
        ),
        Commands::Sort {
            file,
            from,
            to,
            output,
        } => commands::cmd_sort(
            &file,
            from.as_deref(),
            output.as_deref(),
            to.as_deref(),
            &options,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Syntax { .. }
            | GraphError::UnknownFormat(_)
            | GraphError::Unrepresentable { .. }
            | GraphError::Json(_) => 2,
            GraphError::NodeOwnedElsewhere
            | GraphError::EdgeOwnedElsewhere
            | GraphError::NodeNotInGraph
            | GraphError::EdgeNotInGraph
            | GraphError::EdgeSourceNotInGraph
            | GraphError::EdgeTargetNotInGraph
            | GraphError::SelfLoop => 3,
            GraphError::NotImplemented(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
