//! Human-readable rendering of shortest path results.

use std::fmt;

use crate::algorithm::{NegativeCycle, ShortestPathResult, ShortestPathTree};

/// Symbol printed for an unreachable distance
pub const UNREACHABLE: &str = "∞";

/// Symbol printed for a missing predecessor
pub const NO_PREDECESSOR: &str = "-";

/// Controls how much of a result is rendered
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Trees with at least this many vertices are summarized instead of listed
    pub detail_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { detail_limit: 25 }
    }
}

impl ReportConfig {
    pub fn with_detail_limit(mut self, limit: usize) -> Self {
        self.detail_limit = limit;
        self
    }
}

/// Renders a result the way the batch runner prints it
pub fn render(result: &ShortestPathResult, config: &ReportConfig) -> String {
    match result {
        ShortestPathResult::NegativeCycle(cycle) => {
            format!("Negative cycle detected!\n{}", cycle)
        }
        ShortestPathResult::ShortestPathTree(tree) => {
            if tree.vertex_count() < config.detail_limit {
                format!("No negative cycle detected.\n{}", tree)
            } else {
                format!(
                    "No negative cycle detected. > {} vertices, not displaying details",
                    config.detail_limit
                )
            }
        }
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cycle weight: {}", self.total_weight)?;
        write!(f, "Cycle: ")?;
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex)?;
        }
        match self.vertices.first() {
            Some(first) => write!(f, "{}", first),
            None => write!(f, "(empty)"),
        }
    }
}

impl fmt::Display for ShortestPathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {}", self.source)?;
        write!(f, "{:<8} {:>12} {:>12}", "vertex", "distance", "predecessor")?;
        for vertex in 0..self.vertex_count() {
            let distance = self
                .distance(vertex)
                .map_or_else(|| UNREACHABLE.to_string(), |d| d.to_string());
            let predecessor = self
                .predecessor(vertex)
                .map_or_else(|| NO_PREDECESSOR.to_string(), |p| p.to_string());
            write!(f, "\n{:<8} {:>12} {:>12}", vertex, distance, predecessor)?;
        }
        Ok(())
    }
}
