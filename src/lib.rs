//! Divisive community detection on large sparse undirected graphs via
//! Girvan-Newman edge-betweenness removal.
//!
//! Pipeline:
//! - Identifier remapping ([`idmap`]) - arbitrary raw labels to contiguous ids.
//! - CSR compression ([`csr`], via [`radix`]) - doubly-stored sparse adjacency.
//! - Sampling ([`sample`]) - degree-ranked BFS source selection.
//! - BFS + Brandes accumulation ([`bfs`]) - per-edge betweenness credit.
//! - The outer loop ([`girvan_newman`]) - cut, re-label, repeat until `k`.
//! - Community labelling ([`unionfind`]) - disjoint-set partition of `[0, n)`.
//!
//! Text I/O lives in [`io`]; the typed error taxonomy lives in [`error`].

pub mod bfs;
pub mod csr;
pub mod error;
pub mod girvan_newman;
pub mod idmap;
pub mod io;
pub mod radix;
pub mod sample;
pub mod unionfind;

pub use error::{GraphError, Result};
pub use girvan_newman::RunReport;

use std::path::Path;

/// Validated run configuration: everything the CLI needs to collect before
/// the core ever touches the graph.
pub struct Config<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub k: usize,
    pub rate: f64,
}

/// Run the full pipeline: read the edge list, build the CSR graph, run the
/// Girvan-Newman loop, and write the community assignment.
///
/// Validates `k >= 1` and `rate` in `(0, 1]` before doing any work.
pub fn run(config: &Config) -> Result<RunReport> {
    if config.k == 0 {
        return Err(GraphError::InvalidInput(
            "target community count k must be at least 1".to_string(),
        ));
    }
    if !(config.rate > 0.0 && config.rate <= 1.0) {
        return Err(GraphError::InvalidInput(format!(
            "sample rate {} is out of range (0, 1]",
            config.rate
        )));
    }

    let pairs = io::read_edge_list(config.input)?;
    let idmap = idmap::build_idmap(&pairs)?;

    if config.k > idmap.original_ids.len() {
        return Err(GraphError::InvalidInput(format!(
            "k={} exceeds the graph's {} nodes",
            config.k,
            idmap.original_ids.len()
        )));
    }

    let mut graph = csr::Csr::build(idmap.original_ids.len(), idmap.edges);
    let (report, partition) = girvan_newman::run(&mut graph, config.k, config.rate)?;

    let mut community_of = vec![0u32; graph.n];
    for (label, members) in partition.communities.iter().enumerate() {
        for &v in members {
            community_of[v as usize] = label as u32;
        }
    }

    io::write_communities(config.output, &idmap.original_ids, &community_of)?;

    if !report.reached_target {
        return Err(GraphError::Unsatisfiable(format!(
            "only {} of {} requested communities reached; no positive-betweenness edge remains",
            report.communities, config.k
        )));
    }

    Ok(report)
}
