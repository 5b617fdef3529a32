//! Identifier remapping: arbitrary raw node labels to a contiguous `[0, n)` range.
//!
//! Constructed once per run from the raw edge list and immutable thereafter.

use crate::error::{GraphError, Result};

/// A raw `(u, v)` edge as read from the input file, before id remapping.
pub type RawEdge = (u64, u64);

/// A remapped `(u, v)` edge using contiguous `[0, n)` vertex ids, plus its
/// stable edge id in `[0, m)`.
pub type RemappedEdge = (u32, u32, u32);

/// The result of remapping: the edge list in contiguous ids, and the reverse
/// array `original_ids[new_id] -> raw_label` used to translate output back.
pub struct IdMap {
    pub edges: Vec<RemappedEdge>,
    pub original_ids: Vec<u64>,
}

/// Build the identifier map and rewrite every edge into contiguous ids.
///
/// Fails with `InvalidInput` if `pairs` is empty.
pub fn build_idmap(pairs: &[RawEdge]) -> Result<IdMap> {
    if pairs.is_empty() {
        return Err(GraphError::InvalidInput(
            "edge list is empty".to_string(),
        ));
    }

    // Concatenate both columns, sort, collapse duplicates -- the result *is*
    // original_ids: position i holds the raw label for new id i.
    let mut labels: Vec<u64> = Vec::with_capacity(pairs.len() * 2);
    for &(u, v) in pairs {
        labels.push(u);
        labels.push(v);
    }
    labels.sort_unstable();
    labels.dedup();
    let original_ids = labels;

    // raw -> new via binary search over the sorted unique array.
    let remap = |raw: u64| -> u32 {
        original_ids
            .binary_search(&raw)
            .expect("raw label must be present in original_ids") as u32
    };

    let edges = pairs
        .iter()
        .enumerate()
        .map(|(id, &(u, v))| (remap(u), remap(v), id as u32))
        .collect();

    Ok(IdMap {
        edges,
        original_ids,
    })
}
