mod common;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use redirector::api::handlers::redirect_handler;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "aB3xY", "https://example.com/target").await;

    let server = common::create_test_server(state);

    let response = server.get("/aB3xY").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_unknown_id_uses_fallback() {
    let (state, _repository) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/nope1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), common::FALLBACK_URL);
}

#[tokio::test]
async fn test_redirect_lookup_is_case_sensitive() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "aB3xY", "https://example.com").await;

    let server = common::create_test_server(state);

    let response = server.get("/ab3xy").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), common::FALLBACK_URL);
}

#[tokio::test]
async fn test_redirect_storage_failure_uses_fallback() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server.get("/aB3xY").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), common::FALLBACK_URL);
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "clk11", "https://example.com").await;

    let server = common::create_test_server(state);

    let response = server.get("/clk11").await;
    assert_eq!(response.status_code(), 307);

    assert_eq!(common::wait_for_clicks(&repository, "clk11", 1).await, 1);
}

#[tokio::test]
async fn test_unknown_id_counts_nothing() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "keep1", "https://example.com").await;

    let server = common::create_test_server(state);

    let response = server.get("/other").await;
    assert_eq!(response.header("location"), common::FALLBACK_URL);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(common::clicks(&repository, "keep1").await, 0);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_sequential_visits_same_url_and_monotonic_clicks() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "twice", "https://example.com/twice").await;

    let server = common::create_test_server(state);

    let first = server.get("/twice").await;
    let after_first = common::wait_for_clicks(&repository, "twice", 1).await;

    let second = server.get("/twice").await;
    let after_second = common::wait_for_clicks(&repository, "twice", 2).await;

    assert_eq!(first.header("location"), "https://example.com/twice");
    assert_eq!(second.header("location"), "https://example.com/twice");
    assert_eq!(after_first, 1);
    assert_eq!(after_second, 2);
}

#[tokio::test]
async fn test_redirect_strips_encoded_slashes_from_id() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "aB3xY", "https://example.com/slash").await;

    let server = common::create_test_server(state);

    let response = server.get("/aB%2F3xY").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/slash");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_visits_count_every_click() {
    const VISITS: i64 = 100;

    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "hot11", "https://example.com/hot").await;

    let handles: Vec<_> = (0..VISITS)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                redirect_handler(Path("hot11".to_string()), State(state))
                    .await
                    .into_response()
            })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status(), 307);
        assert_eq!(response.headers()["location"], "https://example.com/hot");
    }

    assert_eq!(
        common::wait_for_clicks(&repository, "hot11", VISITS).await,
        VISITS
    );
}

#[tokio::test]
async fn test_get_create_path_is_treated_as_id() {
    let (state, repository) = common::create_test_state();
    let server = common::create_test_server(state);

    let missing = server.get("/create").await;
    assert_eq!(missing.status_code(), 307);
    assert_eq!(missing.header("location"), common::FALLBACK_URL);

    common::seed_redirect(&repository, "create", "https://example.com/create").await;

    let found = server.get("/create").await;
    assert_eq!(found.status_code(), 307);
    assert_eq!(found.header("location"), "https://example.com/create");
}

#[tokio::test]
async fn test_draining_click_tasks_settles_every_click() {
    let (state, repository) = common::create_test_state();
    common::seed_redirect(&repository, "drn11", "https://example.com/drain").await;

    let click_tasks = state.click_tasks.clone();
    let server = common::create_test_server(state);

    for _ in 0..5 {
        let response = server.get("/drn11").await;
        assert_eq!(response.status_code(), 307);
    }

    click_tasks.close();
    click_tasks.wait().await;

    assert!(click_tasks.is_empty());
    assert_eq!(common::clicks(&repository, "drn11").await, 5);
}
