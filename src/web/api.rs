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

use crate::algorithm::johnson::Johnson;
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::io::EdgeListReader;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    /// Upper bound on the worker pool a single request may ask for
    pub max_worker_threads: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sessions: Arc::default(),
            max_worker_threads: default_max_worker_threads(),
        }
    }
}

/// One worker per available core, falling back to 4 when that cannot be queried
pub fn default_max_worker_threads() -> usize {
    std::thread::available_parallelism().map_or(4, |n| n.get())
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_worker_threads(mut self, max_worker_threads: usize) -> Self {
        self.max_worker_threads = max_worker_threads.max(1);
        self
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn graph(&self, session_id: Uuid) -> Result<DirectedGraph<i64>, ApiError> {
        self.sessions()
            .get(&session_id)
            .map(|session| session.graph.clone())
            .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string()))
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/all-pairs/:session_id", post(run_all_pairs))
        .route("/api/paths/:session_id", post(shortest_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

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

fn algorithm_error(err: Error) -> ApiError {
    match err {
        Error::NegativeCycle => api_error(StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle", err.to_string()),
        Error::WeightOverflow => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, "weight_overflow", err.to_string())
        }
        Error::InvalidVertex(_)
        | Error::MissingEdge(_, _)
        | Error::NonFiniteWeight(_, _)
        | Error::Parse { .. } => api_error(StatusCode::BAD_REQUEST, "invalid_input", err.to_string()),
        _ => api_error(StatusCode::INTERNAL_SERVER_ERROR, "algorithm_failed", err.to_string()),
    }
}

/// Store a new graph
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUploadRequest>,
) -> Result<Json<SessionInfo>, ApiError> {
    let graph = match request.edge_list {
        Some(text) => EdgeListReader::new()
            .read::<i64, _>(text.as_bytes())
            .and_then(|edge_list| edge_list.into_graph()),
        None => DirectedGraph::from_edges(
            request.vertex_count,
            request.edges.iter().map(|e| (e.tail, e.head, e.weight)),
        ),
    }
    .map_err(algorithm_error)?;

    let session = Session::new(graph);
    let info = session.info();
    log::info!(
        "session {} created with {} vertices and {} edges",
        info.id,
        info.vertex_count,
        info.edge_count
    );
    state.sessions().insert(session.id, session);

    Ok(Json(info))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphResponse>, ApiError> {
    let sessions = state.sessions();
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string()))?;

    let edges = session
        .graph
        .edges()
        .map(|(tail, head, weight)| WebEdge { tail, head, weight })
        .collect();

    Ok(Json(GraphResponse {
        session: session.info(),
        edges,
    }))
}

/// Drop a session and its graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions()
        .remove(&session_id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string()))?;
    log::info!("session {} deleted", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Compute the distance matrix of a session graph
pub async fn run_all_pairs(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<AllPairsRequest>>,
) -> Result<Json<AllPairsResponse>, ApiError> {
    let graph = state.graph(session_id)?;
    let request = request.map(|Json(r)| r).unwrap_or_default();

    let johnson = request.johnson(state.max_worker_threads);

    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || johnson.run_all_pairs(&graph))
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, "task_failed", e.to_string()))?
        .map_err(algorithm_error)?;
    let execution_time = start_time.elapsed();

    Ok(Json(AllPairsResponse {
        session_id,
        min_distance: result.min_distance(),
        distances: result.distances,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Find one shortest path in a session graph
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let graph = state.graph(session_id)?;

    let (distance, path) = Johnson::new()
        .shortest_path(&graph, request.source, request.target)
        .map_err(algorithm_error)?;

    Ok(Json(PathResponse {
        source: request.source,
        target: request.target,
        distance,
        path,
    }))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionInfo>> {
    let mut sessions: Vec<SessionInfo> = state.sessions().values().map(Session::info).collect();
    sessions.sort_by_key(|info| info.created_at);
    Json(sessions)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
