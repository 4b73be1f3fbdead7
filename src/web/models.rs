use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::johnson::Johnson;
use crate::graph::{DirectedGraph, Graph};

/// One weighted edge, 0-based
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub tail: usize,
    pub head: usize,
    pub weight: i64,
}

/// Graph upload: either explicit edges or edge-list text in the line format
#[derive(Debug, Deserialize)]
pub struct GraphUploadRequest {
    #[serde(default)]
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
    #[serde(default)]
    pub edge_list: Option<String>,
}

/// A stored graph with its metadata
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub graph: DirectedGraph<i64>,
}

impl Session {
    pub fn new(graph: DirectedGraph<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            graph,
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            created_at: self.created_at,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}

/// Session summary returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Full graph contents of a session
#[derive(Debug, Clone, Serialize)]
pub struct GraphResponse {
    pub session: SessionInfo,
    pub edges: Vec<WebEdge>,
}

/// Parameters for an all-pairs run
#[derive(Debug, Deserialize)]
pub struct AllPairsRequest {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_parallel() -> bool { true }

impl Default for AllPairsRequest {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            worker_threads: None,
        }
    }
}

impl AllPairsRequest {
    /// Algorithm configured for this request. A requested pool size is capped at
    /// `max_worker_threads` and ignored when `parallel` is false.
    pub fn johnson(&self, max_worker_threads: usize) -> Johnson {
        let johnson = Johnson::new().with_parallel(self.parallel);
        match self.worker_threads {
            Some(threads) if self.parallel => {
                let capped = threads.clamp(1, max_worker_threads.max(1));
                if capped != threads {
                    log::debug!("worker_threads {} capped to {}", threads, capped);
                }
                johnson.with_worker_threads(capped)
            }
            _ => johnson,
        }
    }
}

/// Distance matrix of a session graph; `null` entries are unreachable pairs
#[derive(Debug, Serialize)]
pub struct AllPairsResponse {
    pub session_id: Uuid,
    pub distances: Vec<Vec<Option<i64>>>,
    pub min_distance: Option<i64>,
    pub execution_time_ms: f64,
}

/// Source and target of a single path query
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: usize,
    pub target: usize,
}

/// A shortest path between two vertices; both fields are `null` when unreachable
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub source: usize,
    pub target: usize,
    pub distance: Option<i64>,
    pub path: Option<Vec<usize>>,
}

/// Error body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
