//! Collapse linear chains in a directed edge list.
//!
//! Reads `SOURCE<TAB>TARGET` lines, eliminates every vertex with exactly one
//! incoming and one outgoing edge by connecting its neighbors directly, and
//! emits the reduced edge list. One pass; rerun to contract chains whose
//! interior vertices only become pass-throughs as a result of an earlier run.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

pub mod contract;
pub mod digraph;
pub mod error;

pub use contract::contract_chains;
pub use digraph::DirectedGraph;
pub use error::UnchopError;

#[derive(Parser, Debug, Clone)]
#[command(name = "unchop")]
pub struct Args {
    /// Input edge-list files, one SOURCE<TAB>TARGET edge per line;
    /// reads stdin when omitted
    pub inputs: Vec<String>,
    /// Write the reduced edge list to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
    /// Report contraction progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Insert every edge line from `reader` into `graph`. `path` labels parse
/// errors. Lines are trimmed of surrounding whitespace before splitting; a
/// line that does not hold exactly two tab-separated tokens is fatal.
pub fn load_edges<R: Read>(
    graph: &mut DirectedGraph,
    reader: R,
    path: &str,
) -> Result<(), UnchopError> {
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        let mut fields = trimmed.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(v), Some(w), None) => graph.add_edge(v, w),
            _ => {
                return Err(UnchopError::MalformedLine {
                    path: path.to_string(),
                    line_no: i + 1,
                    line: trimmed.to_string(),
                })
            }
        }
    }
    Ok(())
}

/// Emit one `SOURCE<TAB>TARGET` line per remaining edge: vertices in
/// first-insertion order, each vertex's edges in out-adjacency order.
pub fn write_edges<W: Write>(graph: &DirectedGraph, mut out: W) -> Result<(), UnchopError> {
    for v in graph.vertices() {
        for w in graph.adjacent_out_of(v)? {
            writeln!(out, "{}\t{}", v, w)?;
        }
    }
    Ok(())
}

/// Build the graph from the inputs, contract pass-through vertices, emit the
/// surviving edges.
pub fn run_unchop(args: Args) -> Result<(), UnchopError> {
    let mut graph = DirectedGraph::new();

    if args.inputs.is_empty() {
        load_edges(&mut graph, io::stdin().lock(), "<stdin>")?;
    } else {
        for path in &args.inputs {
            load_edges(&mut graph, File::open(path)?, path)?;
        }
    }

    if args.verbose {
        eprintln!(
            "[unchop] loaded {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }

    let removed = contract_chains(&mut graph)?;

    if args.verbose {
        eprintln!(
            "[unchop] contracted {} pass-through vertices, {} vertices and {} edges remain",
            removed,
            graph.vertex_count(),
            graph.edge_count()
        );
        if graph.vertex_count() > 0 {
            eprintln!("{}", graph);
        }
    }

    match &args.output {
        Some(path) => write_edges(&graph, File::create(path)?)?,
        None => write_edges(&graph, io::stdout().lock())?,
    }

    Ok(())
}
