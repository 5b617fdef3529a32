//! The Girvan-Newman outer loop: sampled betweenness, tie-broken maximum
//! selection, cut, and connectivity re-evaluation until `k` components
//! appear or no positive-betweenness edge remains.

use tracing::{info, warn};

use crate::bfs::BfsScratch;
use crate::csr::Csr;
use crate::error::{GraphError, Result};
use crate::sample;
use crate::unionfind::{label_components, Partition};

/// Outcome of one run of community detection.
pub struct RunReport {
    pub iterations: u32,
    pub edges_cut: u32,
    pub communities: usize,
    /// `true` if the loop stopped because `k` was reached, `false` if it
    /// stopped early because no positive-betweenness edge remained.
    pub reached_target: bool,
}

/// Run the outer loop to completion, mutating `csr` in place (each cut is
/// recorded on the graph) and returning the final partition.
///
/// `k` must already be validated by the caller (`1 <= k <= n`); `rate` must
/// already be validated to lie in `(0, 1]`.
pub fn run(csr: &mut Csr, k: usize, rate: f64) -> Result<(RunReport, Partition)> {
    if k == 0 || k > csr.n {
        return Err(GraphError::InvalidInput(format!(
            "target community count k={} is out of range for a graph with {} nodes",
            k, csr.n
        )));
    }

    let sources = sample::sample(csr, rate);
    let mut scratch = BfsScratch::new(csr.n);

    let mut iteration = 0u32;
    let mut partition = label_components(csr);

    while partition.len() < k {
        iteration += 1;
        csr.reset_betweenness();

        for &s in &sources {
            scratch.bfs(csr, s);
            scratch.accumulate(csr);
        }

        let Some(edge) = csr.select_max() else {
            warn!(
                iteration,
                communities = partition.len(),
                target = k,
                "no positive-betweenness edge remains; stopping short of k"
            );
            return Ok((
                RunReport {
                    iterations: iteration.saturating_sub(1),
                    edges_cut: iteration.saturating_sub(1),
                    communities: partition.len(),
                    reached_target: false,
                },
                partition,
            ));
        };

        csr.cut(edge, iteration);
        partition = label_components(csr);
        info!(
            iteration,
            cut_edge = edge,
            communities = partition.len(),
            "cut highest-betweenness edge"
        );
    }

    Ok((
        RunReport {
            iterations: iteration,
            edges_cut: iteration,
            communities: partition.len(),
            reached_target: true,
        },
        partition,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::Csr;

    #[test]
    fn triangle_split_cuts_lowest_id_edge_first_then_one_more() {
        // 1,2,3 -> contiguous 0,1,2; edges (0,1)=0 (1,2)=1 (0,2)=2. The
        // triangle is symmetric, so every tie resolves to the smallest id.
        let mut csr = Csr::build(3, vec![(0, 1, 0), (1, 2, 1), (0, 2, 2)]);
        let (report, partition) = run(&mut csr, 2, 1.0).unwrap();
        assert!(report.reached_target);
        assert_eq!(report.iterations, 2);
        assert_eq!(partition.len(), 2);
        assert!(csr.is_cut(0), "first cut should be the lowest-id edge");
        assert!(csr.is_cut(1), "second cut should be the next-lowest-id edge");
        assert!(!csr.is_cut(2));
    }

    #[test]
    fn barbell_cuts_the_bridge_first() {
        // triangles {0,1,2} and {3,4,5}, bridge 2-3 is edge id 6
        let mut csr = Csr::build(
            6,
            vec![
                (0, 1, 0),
                (1, 2, 1),
                (0, 2, 2),
                (3, 4, 3),
                (4, 5, 4),
                (3, 5, 5),
                (2, 3, 6),
            ],
        );
        let (report, partition) = run(&mut csr, 2, 1.0).unwrap();
        assert_eq!(report.iterations, 1);
        assert!(csr.is_cut(6));
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn path_graph_splits_into_three_contiguous_pieces() {
        // 0-1-2-3-4-5
        let mut csr = Csr::build(
            6,
            vec![(0, 1, 0), (1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 5, 4)],
        );
        let (report, partition) = run(&mut csr, 3, 1.0).unwrap();
        assert!(report.reached_target);
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn already_disconnected_graph_needs_zero_cuts() {
        let mut csr = Csr::build(4, vec![(0, 1, 0), (2, 3, 1)]);
        let (report, partition) = run(&mut csr, 2, 1.0).unwrap();
        assert_eq!(report.iterations, 0);
        assert_eq!(report.edges_cut, 0);
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn star_cuts_lowest_id_spoke_for_determinism() {
        let mut csr = Csr::build(5, vec![(0, 1, 0), (0, 2, 1), (0, 3, 2), (0, 4, 3)]);
        let (report, _partition) = run(&mut csr, 2, 1.0).unwrap();
        assert!(report.reached_target);
        assert!(csr.is_cut(0), "lowest edge id spoke should be cut first");
    }

    #[test]
    fn unsatisfiable_k_stops_short_when_sampling_misses_a_component() {
        // Triangle {0,1,2} fully sampled, pendant pair {3,4} sampled never
        // (rate=0.5 keeps only the three highest-degree nodes). The pendant
        // edge's betweenness stays at zero forever, so k=5 (every node its
        // own community) can never be reached: the run stops at 4.
        let mut csr = Csr::build(5, vec![(0, 1, 0), (1, 2, 1), (0, 2, 2), (3, 4, 3)]);
        let (report, partition) = run(&mut csr, 5, 0.5).unwrap();
        assert!(!report.reached_target);
        assert_eq!(partition.len(), 4);
        assert!(!csr.is_cut(3), "the never-sampled pendant edge is never cut");
    }

    #[test]
    fn rejects_k_out_of_range() {
        let mut csr = Csr::build(2, vec![(0, 1, 0)]);
        assert!(run(&mut csr, 0, 1.0).is_err());
        assert!(run(&mut csr, 3, 1.0).is_err());
    }
}
