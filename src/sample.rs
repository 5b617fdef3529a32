//! Degree-ranked sampling of BFS sources for betweenness estimation.

use crate::csr::Csr;

/// Indices `0..n` sorted by degree descending, ties broken by ascending
/// vertex id for determinism.
pub fn rank_by_degree(csr: &Csr) -> Vec<u32> {
    let mut ranked: Vec<u32> = (0..csr.n as u32).collect();
    ranked.sort_unstable_by(|&a, &b| {
        csr.degree(b as usize)
            .cmp(&csr.degree(a as usize))
            .then(a.cmp(&b))
    });
    ranked
}

/// Select the top `ceil(rate * n)` highest-degree vertices as BFS sources.
///
/// `rate` is clamped to `(0, 1]` by the caller; this function trusts its input.
pub fn sample(csr: &Csr, rate: f64) -> Vec<u32> {
    let ranked = rank_by_degree(csr);
    let count = ((rate * csr.n as f64).ceil() as usize).clamp(1, csr.n);
    ranked.into_iter().take(count).collect()
}
