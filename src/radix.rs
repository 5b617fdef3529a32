//! LSD radix sort of the remapped edge list, keyed on one endpoint column.
//!
//! Stable: when a row moves, `endpoint_i`, `endpoint_j`, and `edge_id` move
//! together, preserving edge identity through the sort.

use crate::idmap::RemappedEdge;

const BASE: u32 = 10;

/// Which endpoint column to sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    I,
    J,
}

/// Stable LSD radix sort of `edges` keyed on `column`, base 10.
///
/// Linear in `m * log10(max_id)`. Any stable integer sort would satisfy the
/// same contract; base 10 is an implementation choice, not a requirement.
pub fn radix_sort_by(edges: &mut Vec<RemappedEdge>, column: Column) {
    if edges.is_empty() {
        return;
    }

    let key = |e: &RemappedEdge| -> u32 {
        match column {
            Column::I => e.0,
            Column::J => e.1,
        }
    };

    let max_key = edges.iter().map(key).max().unwrap_or(0);
    if max_key == 0 {
        return;
    }

    let mut buffer = vec![(0u32, 0u32, 0u32); edges.len()];
    let mut place = 1u32;
    while max_key / place > 0 {
        let mut counts = [0usize; BASE as usize];
        for e in edges.iter() {
            let digit = ((key(e) / place) % BASE) as usize;
            counts[digit] += 1;
        }
        // prefix sums -> stable insertion positions
        let mut total = 0usize;
        for count in counts.iter_mut() {
            let c = *count;
            *count = total;
            total += c;
        }
        for &e in edges.iter() {
            let digit = ((key(&e) / place) % BASE) as usize;
            buffer[counts[digit]] = e;
            counts[digit] += 1;
        }
        edges.copy_from_slice(&buffer);
        place *= BASE;
    }
}
