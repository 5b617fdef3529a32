//! Single-source BFS over the uncut graph, with the shortest-path DAG
//! bookkeeping (`sigma`, `predecessors`, `stack`) that Brandes' accumulation
//! needs, plus the dependency back-propagation itself.
//!
//! The scratch arrays are allocated once by the caller and reset between
//! sources to avoid per-source allocation churn.

use std::collections::VecDeque;

use crate::csr::Csr;

/// Reusable BFS + shortest-path-DAG scratch state for one graph of size `n`.
pub struct BfsScratch {
    pub distance: Vec<i64>,
    pub parent: Vec<i64>,
    pub sigma: Vec<u64>,
    pub predecessors: Vec<Vec<u32>>,
    pub stack: Vec<u32>,
    queue: VecDeque<u32>,
    delta: Vec<f64>,
}

impl BfsScratch {
    pub fn new(n: usize) -> Self {
        BfsScratch {
            distance: vec![-1; n],
            parent: vec![-1; n],
            sigma: vec![0; n],
            predecessors: vec![Vec::new(); n],
            stack: Vec::with_capacity(n),
            queue: VecDeque::new(),
            delta: vec![0.0; n],
        }
    }

    /// Zero `sigma`, set `distance`/`parent` to "undiscovered", and clear
    /// `stack` and every `predecessors[v]`, preserving allocated capacity.
    fn reset(&mut self) {
        for d in self.distance.iter_mut() {
            *d = -1;
        }
        for p in self.parent.iter_mut() {
            *p = -1;
        }
        for s in self.sigma.iter_mut() {
            *s = 0;
        }
        for preds in self.predecessors.iter_mut() {
            preds.clear();
        }
        self.stack.clear();
        self.queue.clear();
    }

    /// Run BFS from `source` over `csr`'s uncut edges, populating
    /// `distance`, `parent`, `sigma`, `predecessors`, and `stack`.
    pub fn bfs(&mut self, csr: &Csr, source: u32) {
        self.reset();

        let s = source as usize;
        self.distance[s] = 0;
        self.sigma[s] = 1;
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            self.stack.push(u);
            let ui = u as usize;
            for i in csr.neighbor_range(ui) {
                let edge = csr.edge_id[i];
                if csr.is_cut(edge) {
                    continue;
                }
                let w = csr.heads[i];
                let wi = w as usize;
                if self.distance[wi] < 0 {
                    self.distance[wi] = self.distance[ui] + 1;
                    self.parent[wi] = u as i64;
                    self.queue.push_back(w);
                }
                if self.distance[wi] == self.distance[ui] + 1 {
                    self.sigma[wi] += self.sigma[ui];
                    if !self.predecessors[wi].contains(&u) {
                        self.predecessors[wi].push(u);
                    }
                }
            }
        }
    }

    /// Brandes' dependency back-propagation: pop `stack` in reverse
    /// (non-increasing distance from the source) and credit each DAG edge.
    /// Accumulates additively into `csr.edge_bet`; callers reset it between
    /// Girvan-Newman iterations, not between individual BFS runs.
    pub fn accumulate(&mut self, csr: &mut Csr) {
        for d in self.delta.iter_mut() {
            *d = 0.0;
        }

        while let Some(w) = self.stack.pop() {
            let wi = w as usize;
            let sigma_w = self.sigma[wi];
            if sigma_w == 0 {
                // Defensive: cannot occur if predecessors is non-empty.
                continue;
            }
            let coeff = (1.0 + self.delta[wi]) / sigma_w as f64;
            for &u in &self.predecessors[wi] {
                let ui = u as usize;
                let credit = self.sigma[ui] as f64 * coeff;
                self.delta[ui] += credit;
                if let Some(edge) = csr.edge_between(u, w) {
                    csr.edge_bet[edge as usize] += credit;
                }
            }
        }
    }
}
