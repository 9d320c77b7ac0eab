use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{BellmanFord, BellmanFordYens, ShortestPathAlgorithm};
use crate::graph::directed::DirectedGraph;
use crate::graph::generators::{
    generate_potential_digraph, generate_random_digraph, generate_with_negative_cycle,
};
use crate::graph::traits::{Graph, Weight};
use crate::web::models::*;
use crate::Error;

/// Largest graph the generator endpoint will build
pub const MAX_GENERATED_NODES: usize = 100_000;

/// Upper bound on `node_count * edges_per_node` for the generator endpoint
pub const MAX_GENERATED_EDGES: usize = 1_000_000;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: 1000,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.sessions()?;
        if sessions.len() >= self.max_sessions {
            log::warn!("Rejecting new session: limit of {} reached", self.max_sessions);
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be open", self.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
        Ok(())
    }

    fn session(&self, session_id: Uuid) -> Result<Session, ApiError> {
        self.sessions()?
            .get(&session_id)
            .cloned()
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/algorithms/run/:session_id", post(run_algorithm))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Store a user-supplied graph in a new session
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    convert_web_graph_to_rust(&graph).map_err(|err| {
        api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
    })?;

    let session = Session::new(graph);
    state.insert_session(session.clone())?;
    log::info!("Uploaded graph stored in session {}", session.id);

    Ok(Json(session))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    if request.node_count > MAX_GENERATED_NODES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "graph_too_large",
            format!("node_count must not exceed {}", MAX_GENERATED_NODES),
        ));
    }
    // The generators cap the out-degree at node_count - 1
    let edge_budget = request
        .node_count
        .saturating_mul(request.edges_per_node.min(request.node_count.saturating_sub(1)));
    if edge_budget > MAX_GENERATED_EDGES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "graph_too_large",
            format!(
                "node_count * edges_per_node = {} exceeds {}",
                edge_budget, MAX_GENERATED_EDGES
            ),
        ));
    }
    if request.min_weight > request.max_weight {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_weight_range",
            format!("min_weight {} exceeds max_weight {}", request.min_weight, request.max_weight),
        ));
    }

    let mut rng = rand::thread_rng();
    let generated = match request.graph_type.as_str() {
        "random" => generate_random_digraph(
            request.node_count,
            request.edges_per_node,
            request.min_weight,
            request.max_weight,
            &mut rng,
        ),
        "potential" => generate_potential_digraph(
            request.node_count,
            request.edges_per_node,
            request.max_weight.max(0),
            request.min_weight.min(0).saturating_neg(),
            &mut rng,
        ),
        "negative-cycle" => {
            if request.cycle_len == 0 || request.node_count <= request.cycle_len {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_cycle_length",
                    "cycle_len must be positive and smaller than node_count".to_string(),
                ));
            }
            generate_with_negative_cycle(
                request.node_count,
                request.edges_per_node,
                request.cycle_len,
                &mut rng,
            )
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };
    let graph = generated.map_err(|err| match err {
        Error::WeightOverflow { .. } => api_error(
            StatusCode::BAD_REQUEST,
            "invalid_weight_range",
            format!(
                "weights {}..={} shift outside the i32 range: {}",
                request.min_weight, request.max_weight, err
            ),
        ),
        _ => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "graph_generation_failed",
            err.to_string(),
        ),
    })?;

    let session = Session::new(convert_graph_to_web(&graph));
    state.insert_session(session.clone())?;
    log::info!(
        "Generated {} graph with {} vertices / {} edges in session {}",
        request.graph_type,
        graph.vertex_count(),
        graph.edge_count(),
        session.id
    );

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    Ok(Json(state.session(session_id)?.graph))
}

/// Run an algorithm on a graph
pub async fn run_algorithm(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AlgorithmRequest>,
) -> Result<Json<AlgorithmResponse>, ApiError> {
    // Clone the graph out so the lock is not held while computing
    let graph = state.session(session_id)?.graph;

    let rust_graph = convert_web_graph_to_rust(&graph).map_err(|err| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "graph_conversion_failed", err.to_string())
    })?;

    let start_time = Instant::now();
    let result = match request.algorithm.as_str() {
        "bellman-ford-yens" => BellmanFordYens::new().compute(&rust_graph, request.source),
        "bellman-ford" => BellmanFord::new().compute(&rust_graph, request.source),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                format!("Unknown algorithm: {}", request.algorithm),
            ));
        }
    };
    let execution_time = start_time.elapsed();

    let result = result.map_err(|err| match err {
        Error::InvalidArgument { .. } => {
            api_error(StatusCode::BAD_REQUEST, "invalid_argument", err.to_string())
        }
        Error::WeightOverflow { .. } => {
            api_error(StatusCode::BAD_REQUEST, "weight_overflow", err.to_string())
        }
        _ => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "algorithm_execution_failed",
            format!("Algorithm execution failed: {}", err),
        ),
    })?;

    let response = AlgorithmResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm.clone(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        result,
    };

    // Update session with result
    if let Some(session) = state.sessions()?.get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let session_ids: Vec<Uuid> = state.sessions()?.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(state.session(session_id)?))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn convert_graph_to_web<W: Weight>(graph: &DirectedGraph<W>) -> WebGraph {
    WebGraph {
        vertex_count: graph.vertex_count(),
        edges: graph
            .edges()
            .map(|edge| WebEdge {
                source: edge.from,
                target: edge.to,
                weight: edge.weight.into(),
            })
            .collect(),
    }
}

fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<DirectedGraph<i64>> {
    DirectedGraph::from_edges(
        web_graph.vertex_count,
        web_graph.edges.iter().map(|edge| (edge.source, edge.target, edge.weight)),
    )
}
