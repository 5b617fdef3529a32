//! Compressed-row adjacency for a sparse, undirected, doubly-stored graph.
//!
//! Each undirected edge `{u,v}` is stored twice -- once in `u`'s slice, once
//! in `v`'s -- both copies carrying the same edge id. This trades 2x memory
//! for O(degree) neighbor enumeration; storage is never deduplicated, since
//! Brandes' accumulation needs both directed views of one edge id.

use rustc_hash::FxHashMap;

use crate::idmap::RemappedEdge;
use crate::radix::{radix_sort_by, Column};

/// Sparse undirected graph in compressed-row form, plus the scratch arrays
/// used by sampling and the outer Girvan-Newman loop.
pub struct Csr {
    pub n: usize,
    pub m: usize,
    /// `offset[v] .. offset[v+1]` bounds v's slice in `neighbor`/`edge_id`.
    pub offsets: Vec<u32>,
    /// Parallel to `edge_id`; 2m entries.
    pub heads: Vec<u32>,
    /// Parallel to `heads`; both directed copies of one undirected edge share an id.
    pub edge_id: Vec<u32>,
    /// Betweenness accumulator. A negative value encodes "cut at iteration -x".
    pub edge_bet: Vec<f64>,
    /// `min(u,v), max(u,v) -> edge id`, populated once at build time.
    pub pair_index: FxHashMap<(u32, u32), u32>,
}

impl Csr {
    /// Build the doubly-stored CSR from a remapped edge list (arbitrary order).
    pub fn build(n: usize, mut edges: Vec<RemappedEdge>) -> Self {
        let m = edges.len();

        let mut pair_index = FxHashMap::default();
        pair_index.reserve(m);
        for &(u, v, id) in &edges {
            let key = if u < v { (u, v) } else { (v, u) };
            pair_index.insert(key, id);
        }

        // Duplicate each undirected edge into both directed records.
        let mut directed: Vec<RemappedEdge> = Vec::with_capacity(2 * m);
        for &(u, v, id) in &edges {
            directed.push((u, v, id));
            directed.push((v, u, id));
        }
        edges.clear();
        edges.shrink_to_fit();

        radix_sort_by(&mut directed, Column::I);

        let mut offsets = vec![0u32; n + 1];
        let mut heads = vec![0u32; 2 * m];
        let mut edge_id = vec![0u32; 2 * m];

        let mut cursor = 0usize;
        for v in 0..n {
            offsets[v] = cursor as u32;
            while cursor < directed.len() && directed[cursor].0 as usize == v {
                heads[cursor] = directed[cursor].1;
                edge_id[cursor] = directed[cursor].2;
                cursor += 1;
            }
        }
        offsets[n] = cursor as u32;

        Csr {
            n,
            m,
            offsets,
            heads,
            edge_id,
            edge_bet: vec![0.0; m],
            pair_index,
        }
    }

    /// `v`'s neighbor slice indices into `heads`/`edge_id`.
    #[inline]
    pub fn neighbor_range(&self, v: usize) -> std::ops::Range<usize> {
        self.offsets[v] as usize..self.offsets[v + 1] as usize
    }

    #[inline]
    pub fn degree(&self, v: usize) -> u32 {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    pub fn is_cut(&self, edge: u32) -> bool {
        self.edge_bet[edge as usize] < 0.0
    }

    /// Edge id for canonical pair `(min(u,v), max(u,v))`, if the edge exists.
    pub fn edge_between(&self, u: u32, v: u32) -> Option<u32> {
        let key = if u < v { (u, v) } else { (v, u) };
        self.pair_index.get(&key).copied()
    }

    /// Reset `edge_bet` to zero ahead of a fresh Brandes accumulation pass,
    /// preserving negative cut sentinels.
    pub fn reset_betweenness(&mut self) {
        for v in self.edge_bet.iter_mut() {
            if *v >= 0.0 {
                *v = 0.0;
            }
        }
    }

    /// Mark `edge` as removed at the given iteration. CSR arrays and the pair
    /// index are left untouched -- readers skip cut edges explicitly.
    pub fn cut(&mut self, edge: u32, iteration: u32) {
        debug_assert!(iteration >= 1, "iteration numbers start at 1");
        self.edge_bet[edge as usize] = -(iteration as f64);
    }

    /// The maximum-betweenness uncut edge, ties broken by smallest edge id.
    /// `None` once no positive-betweenness edge remains.
    pub fn select_max(&self) -> Option<u32> {
        let mut best: Option<(f64, u32)> = None;
        for (id, &bet) in self.edge_bet.iter().enumerate() {
            if bet <= 0.0 {
                continue;
            }
            match best {
                Some((best_bet, best_id)) => {
                    if bet > best_bet || (bet == best_bet && (id as u32) < best_id) {
                        best = Some((bet, id as u32));
                    }
                }
                None => best = Some((bet, id as u32)),
            }
        }
        best.map(|(_, id)| id)
    }
}
