use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use johnson_apsp::web::models::AllPairsRequest;
use johnson_apsp::web::server::{build_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ServerConfig {
        max_worker_threads: 2,
        ..Default::default()
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn upload(app: &Router, vertex_count: usize, edges: &[(usize, usize, i64)]) -> String {
    let edges: Vec<Value> = edges
        .iter()
        .map(|&(tail, head, weight)| json!({ "tail": tail, "head": head, "weight": weight }))
        .collect();
    let (status, body) = send(
        app,
        "POST",
        "/api/graphs",
        Some(json!({ "vertex_count": vertex_count, "edges": edges })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

#[test]
fn test_request_configures_johnson() {
    let request: AllPairsRequest = serde_json::from_value(json!({ "parallel": false, "worker_threads": 4 })).unwrap();
    let johnson = request.johnson(8);
    assert!(!johnson.is_parallel());
    assert_eq!(johnson.worker_threads(), None);

    let request: AllPairsRequest = serde_json::from_value(json!({ "worker_threads": 1_000_000 })).unwrap();
    let johnson = request.johnson(8);
    assert!(johnson.is_parallel());
    assert_eq!(johnson.worker_threads(), Some(8));

    let request: AllPairsRequest = serde_json::from_value(json!({ "worker_threads": 3 })).unwrap();
    assert_eq!(request.johnson(8).worker_threads(), Some(3));

    assert_eq!(AllPairsRequest::default().johnson(8).worker_threads(), None);
}

#[tokio::test]
async fn test_all_pairs_round_trip() {
    let app = app();
    let id = upload(&app, 4, &[(0, 1, 1), (1, 2, -2), (2, 3, 2), (3, 1, 1)]).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/all-pairs/{}", id),
        Some(json!({ "parallel": false, "worker_threads": 1_000_000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_distance"], json!(-2));
    assert_eq!(
        body["distances"],
        json!([[0, 1, -1, 1], [null, 0, -2, 0], [null, 3, 0, 2], [null, 1, -1, 0]])
    );

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/all-pairs/{}", id),
        Some(json!({ "worker_threads": 1_000_000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_distance"], json!(-2));

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/paths/{}", id),
        Some(json!({ "source": 0, "target": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance"], json!(1));
    assert_eq!(body["path"], json!([0, 1, 2, 3]));
}

#[tokio::test]
async fn test_delete_session() {
    let app = app();
    let id = upload(&app, 2, &[(0, 1, 3)]).await;
    let uri = format!("/api/graphs/{}", id);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["edge_count"], json!(1));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("session_not_found"));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, sessions) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(sessions, json!([]));
}

#[tokio::test]
async fn test_algorithm_failures_map_to_unprocessable() {
    let app = app();

    let cycle = upload(&app, 2, &[(0, 1, 1), (1, 0, -2)]).await;
    let (status, body) = send(&app, "POST", &format!("/api/all-pairs/{}", cycle), Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("negative_cycle"));

    let big = 1i64 << 62;
    let overflow = upload(&app, 3, &[(0, 1, big), (2, 1, -big)]).await;
    let (status, body) = send(&app, "POST", &format!("/api/all-pairs/{}", overflow), Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("weight_overflow"));
}

#[tokio::test]
async fn test_bad_upload_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/graphs",
        Some(json!({ "edge_list": "2 1\n1 3 4\n" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_input"));
}
