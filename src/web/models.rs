use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::ShortestPathResult;

/// Represents an edge in the graph for the web API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: i64,
}

/// Represents a complete graph for the web API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertex_count: usize,
    pub edges: Vec<WebEdge>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default = "default_min_weight")]
    pub min_weight: i32,
    #[serde(default = "default_max_weight")]
    pub max_weight: i32,
    #[serde(default = "default_cycle_len")]
    pub cycle_len: usize,
}

fn default_edges_per_node() -> usize { 3 }
fn default_min_weight() -> i32 { -10 }
fn default_max_weight() -> i32 { 100 }
fn default_cycle_len() -> usize { 3 }

/// Parameters for algorithm execution
#[derive(Debug, Deserialize)]
pub struct AlgorithmRequest {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub source: usize,
}

fn default_algorithm() -> String { "bellman-ford-yens".to_string() }

/// Response containing algorithm execution results
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    pub result: ShortestPathResult,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing graph data and execution history
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<AlgorithmResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
