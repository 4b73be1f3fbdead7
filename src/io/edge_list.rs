//! # EdgeList
//!
//! A header line `<vertex_count> <edge_count>` followed by one `<tail> <head> <weight>` line per
//! edge. Vertex indices are 1-based by default and are shifted to 0-based on read. Blank lines
//! and lines starting with the comment prefix are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{DirectedGraph, Weight};
use crate::{Error, Result};

/// A parsed edge list, still detached from any graph representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList<W> {
    /// Number of vertices declared in the header
    pub vertex_count: usize,
    /// Number of edges declared in the header
    pub declared_edges: usize,
    /// Edges as 0-based `(tail, head, weight)`, in file order
    pub edges: Vec<(usize, usize, W)>,
}

impl<W> EdgeList<W>
where
    W: Weight,
{
    /// Builds the graph; repeated pairs keep the weight of the last line
    pub fn into_graph(self) -> Result<DirectedGraph<W>> {
        DirectedGraph::from_edges(self.vertex_count, self.edges)
    }
}

/// Reader for the edge-list format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Whether vertex indices in the file start at 1
    one_based: bool,
    /// Lines starting with this prefix are skipped
    comment_prefix: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            one_based: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether indices in the input are 1-based
    pub fn one_based(mut self, one_based: bool) -> Self {
        self.one_based = one_based;
        self
    }

    /// Updates the comment prefix
    pub fn comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Reads an edge list from a file
    pub fn read_file<W, P>(&self, path: P) -> Result<EdgeList<W>>
    where
        W: Weight + FromStr,
        P: AsRef<Path>,
    {
        self.read(BufReader::new(File::open(path)?))
    }

    /// Reads an edge list from any buffered reader
    pub fn read<W, R>(&self, reader: R) -> Result<EdgeList<W>>
    where
        W: Weight + FromStr,
        R: BufRead,
    {
        let mut header: Option<(usize, usize)> = None;
        let mut edges = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(self.comment_prefix.as_str()) {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            match header {
                None => {
                    let [vertices, declared] = fields[..] else {
                        return Err(parse_error(line_number, "header must be `<vertex_count> <edge_count>`"));
                    };
                    header = Some((
                        parse_field(vertices, line_number, "vertex count")?,
                        parse_field(declared, line_number, "edge count")?,
                    ));
                }
                Some((vertex_count, _)) => {
                    let [tail, head, weight] = fields[..] else {
                        return Err(parse_error(line_number, "edge must be `<tail> <head> <weight>`"));
                    };
                    let tail = self.vertex(tail, vertex_count, line_number)?;
                    let head = self.vertex(head, vertex_count, line_number)?;
                    let weight: W = parse_field(weight, line_number, "weight")?;
                    if !weight.is_finite() {
                        return Err(parse_error(line_number, "weight must be finite"));
                    }
                    edges.push((tail, head, weight));
                }
            }
        }

        let (vertex_count, declared_edges) =
            header.ok_or_else(|| parse_error(0, "header not found"))?;
        if declared_edges != edges.len() {
            log::warn!(
                "header declares {} edges but {} were read",
                declared_edges,
                edges.len()
            );
        }

        Ok(EdgeList {
            vertex_count,
            declared_edges,
            edges,
        })
    }

    fn vertex(&self, field: &str, vertex_count: usize, line: usize) -> Result<usize> {
        let raw: usize = parse_field(field, line, "vertex")?;
        let vertex = if self.one_based {
            raw.checked_sub(1)
                .ok_or_else(|| parse_error(line, "vertex indices start at 1"))?
        } else {
            raw
        };
        if vertex >= vertex_count {
            return Err(parse_error(
                line,
                &format!("vertex {} exceeds declared vertex count {}", raw, vertex_count),
            ));
        }
        Ok(vertex)
    }
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| parse_error(line, &format!("invalid {} `{}`", what, field)))
}

fn parse_error(line: usize, message: &str) -> Error {
    Error::Parse {
        line,
        message: message.to_string(),
    }
}
