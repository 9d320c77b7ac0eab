//! Text edge-list reader.
//!
//! ```text
//! # comment
//! 4
//! 0 1 1
//! 1 2 -3
//! ```
//!
//! The first meaningful line holds the vertex count, every following line an
//! edge `from to weight`. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Weight;
use crate::{Error, Result};

/// Reads a graph description from a file
pub fn read_graph<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path.as_ref())?;
    log::debug!("Parsing graph from {}", path.as_ref().display());
    parse_graph(&text)
}

/// Parses a graph description held in memory
pub fn parse_graph<W>(text: &str) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
{
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines.next().ok_or_else(|| Error::Parse {
        line: 0,
        message: "missing vertex count".to_string(),
    })?;
    let vertex_count: usize = parse_token(header, header_line, "vertex count")?;

    let mut graph = DirectedGraph::new(vertex_count);
    for (line_number, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(Error::Parse {
                line: line_number,
                message: format!("expected `from to weight`, found {} token(s)", tokens.len()),
            });
        }
        let from: usize = parse_token(tokens[0], line_number, "source vertex")?;
        let to: usize = parse_token(tokens[1], line_number, "target vertex")?;
        let weight: W = parse_token(tokens[2], line_number, "weight")?;
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {}: `{}`", what, token),
    })
}

impl<W> FromStr for DirectedGraph<W>
where
    W: Weight + FromStr,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s)
    }
}
