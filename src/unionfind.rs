//! Disjoint-set community labeller.
//!
//! Weighted quick-union with path compression over `n` singletons, rebuilt
//! fresh each Girvan-Newman iteration from the graph's currently uncut edges.

/// A disjoint-set data structure over `[0, n)`.
///
/// <http://en.wikipedia.org/wiki/Disjoint-set_data_structure>
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative for `x`, flattening the path to it along the way.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // path compression
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Unify the sets containing `x` and `y`. Returns `false` if already unified.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let xr = self.find(x);
        let yr = self.find(y);
        if xr == yr {
            return false;
        }
        match self.rank[xr as usize].cmp(&self.rank[yr as usize]) {
            std::cmp::Ordering::Less => self.parent[xr as usize] = yr,
            std::cmp::Ordering::Greater => self.parent[yr as usize] = xr,
            std::cmp::Ordering::Equal => {
                self.parent[yr as usize] = xr;
                self.rank[xr as usize] += 1;
            }
        }
        true
    }
}

/// Number of distinct roots and, for each, its member list (community
/// partition of `[0, n)`).
pub struct Partition {
    pub communities: Vec<Vec<u32>>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
}

/// Union the endpoints of every uncut edge in `csr`, then group `[0, n)` into
/// connected components keyed by canonical root, in first-seen order.
pub fn label_components(csr: &crate::csr::Csr) -> Partition {
    let mut uf = UnionFind::new(csr.n);
    for v in 0..csr.n {
        for i in csr.neighbor_range(v) {
            let edge = csr.edge_id[i];
            if csr.is_cut(edge) {
                continue;
            }
            let w = csr.heads[i];
            uf.union(v as u32, w);
        }
    }

    let mut root_to_slot: std::collections::HashMap<u32, usize> = std::collections::HashMap::new();
    let mut communities: Vec<Vec<u32>> = Vec::new();
    for v in 0..csr.n as u32 {
        let root = uf.find(v);
        let slot = *root_to_slot.entry(root).or_insert_with(|| {
            communities.push(Vec::new());
            communities.len() - 1
        });
        communities[slot].push(v);
    }

    Partition { communities }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::Csr;

    #[test]
    fn union_merges_two_singletons() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(0), uf.find(1));
        assert!(!uf.union(0, 1));
    }

    #[test]
    fn path_compression_keeps_roots_consistent() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);
        let root = uf.find(3);
        assert_eq!(uf.find(0), root);
        assert_eq!(uf.find(1), root);
        assert_eq!(uf.find(2), root);
    }

    #[test]
    fn label_components_partitions_into_cliques_after_bridge_cut() {
        // Two triangles {0,1,2} and {3,4,5} joined by bridge 2-3 (edge id 6).
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
        let before = label_components(&csr);
        assert_eq!(before.len(), 1);

        csr.cut(6, 1);
        let after = label_components(&csr);
        assert_eq!(after.len(), 2);
        let mut sizes: Vec<usize> = after.communities.iter().map(|c| c.len()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn every_uncut_edge_connects_two_nodes_in_the_same_community() {
        let csr = Csr::build(4, vec![(0, 1, 0), (1, 2, 1), (2, 3, 2)]);
        let partition = label_components(&csr);
        let mut label_of = vec![0usize; csr.n];
        for (label, members) in partition.communities.iter().enumerate() {
            for &v in members {
                label_of[v as usize] = label;
            }
        }
        for v in 0..csr.n {
            for i in csr.neighbor_range(v) {
                let w = csr.heads[i] as usize;
                assert_eq!(label_of[v], label_of[w]);
            }
        }
    }
}
