//! Edge record ingestion and normalization
//!
//! Raw input is a sequence of vertex-id pairs, one edge per record.
//! Malformed records (wrong field count, non-numeric ids) and self-loops
//! are silently dropped, and undirected duplicates collapse through set
//! semantics, so triangulation only ever sees clean, deduplicated edges.

use crate::pipeline::PipelineError;
use densemine_algorithms::Edge;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Default field delimiter of text edge records.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Parse one text record into a canonical edge.
///
/// Returns `None` for records that are not exactly two integer fields and
/// for self-loops; data cleaning, not an error.
pub fn parse_edge_record(line: &str, delimiter: &str) -> Option<Edge> {
    let mut tokens = line.split(delimiter);
    let v: u32 = tokens.next()?.trim().parse().ok()?;
    let u: u32 = tokens.next()?.trim().parse().ok()?;
    if tokens.next().is_some() || v == u {
        return None;
    }
    Some(Edge::new(v, u))
}

/// Read and normalize all edge records from a buffered source.
pub fn read_edges<R: BufRead>(reader: R, delimiter: &str) -> io::Result<FxHashSet<Edge>> {
    let mut edges = FxHashSet::default();
    let mut dropped = 0usize;

    for line in reader.lines() {
        let line = line?;
        match parse_edge_record(&line, delimiter) {
            Some(edge) => {
                edges.insert(edge);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "discarded malformed or self-loop edge records");
    }
    Ok(edges)
}

/// Load a normalized edge set from a text file.
pub fn load_edges(path: &Path, delimiter: &str) -> Result<FxHashSet<Edge>, PipelineError> {
    let file = File::open(path)?;
    Ok(read_edges(BufReader::new(file), delimiter)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_record() {
        assert_eq!(parse_edge_record("3\t1", "\t"), Some(Edge::new(1, 3)));
        assert_eq!(parse_edge_record("7,9", ","), Some(Edge::new(7, 9)));
    }

    #[test]
    fn test_malformed_records_are_dropped() {
        assert_eq!(parse_edge_record("", "\t"), None);
        assert_eq!(parse_edge_record("1", "\t"), None);
        assert_eq!(parse_edge_record("1\t2\t3", "\t"), None);
        assert_eq!(parse_edge_record("a\tb", "\t"), None);
        assert_eq!(parse_edge_record("1\tx", "\t"), None);
    }

    #[test]
    fn test_self_loops_are_dropped() {
        assert_eq!(parse_edge_record("5\t5", "\t"), None);
    }

    #[test]
    fn test_reader_dedupes_undirected_pairs() {
        let input = "1\t2\n2\t1\n3\t4\nbogus\n4\t4\n3\t4\n";
        let edges = read_edges(input.as_bytes(), "\t").unwrap();
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&Edge::new(1, 2)));
        assert!(edges.contains(&Edge::new(3, 4)));
    }
}
