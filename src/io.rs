//! Plain-text edge-list reader and community-assignment writer.
//!
//! Buffered, line-oriented, allocation-light -- one edge or one membership
//! line at a time, no intermediate string copies beyond what `split`/`parse`
//! require.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::idmap::RawEdge;

/// Read an edge list: one `u v` pair per line, ASCII whitespace separated.
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. A malformed line is `InvalidInput`, carrying its 1-based number.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Vec<RawEdge>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut edges = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_ascii_whitespace();
        let (Some(u), Some(v), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GraphError::InvalidInput(format!(
                "line {}: expected exactly two whitespace-separated node labels",
                lineno + 1
            )));
        };

        let parse = |token: &str| -> Result<u64> {
            token.parse::<u64>().map_err(|_| {
                GraphError::InvalidInput(format!(
                    "line {}: {:?} is not a non-negative integer node label",
                    lineno + 1,
                    token
                ))
            })
        };

        edges.push((parse(u)?, parse(v)?));
    }

    Ok(edges)
}

/// Write one `original_label community_id` line per node, ascending by
/// original node id.
pub fn write_communities<P: AsRef<Path>>(
    path: P,
    original_ids: &[u64],
    community_of: &[u32],
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for (new_id, &label) in original_ids.iter().enumerate() {
        writeln!(writer, "{} {}", label, community_of[new_id])?;
    }
    writer.flush()?;
    Ok(())
}
