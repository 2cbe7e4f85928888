mod common;

use std::time::Duration;

use common::mock_server::{MockDirectory, MockResponse};
use userdeck::api::{DirectoryClient, FetchError};
use userdeck::ui::events::AppEvent;
use userdeck::ui::loader::FetchTask;

const USERS_JSON: &str = r#"[
    {"id": 1, "name": "Ann", "username": "ann1", "email": "a@x.com", "phone": "1", "website": "ann.io"},
    {"id": 2, "name": "Bob", "username": "bob7", "email": "b@x.com", "phone": "2", "website": "bob.io"}
]"#;

#[tokio::test]
async fn fetch_decodes_records_in_server_order() {
    let server = MockDirectory::start().await;
    server.enqueue_response(MockResponse::json(USERS_JSON)).await;

    let client = DirectoryClient::with_base_url(server.users_url());
    let records = client.fetch_users().await.unwrap();

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(records[0].name, "Ann");
    assert_eq!(records[1].username, "bob7");
}

#[tokio::test]
async fn fetch_issues_a_single_get() {
    let server = MockDirectory::start().await;
    server.enqueue_response(MockResponse::json("[]")).await;

    let client = DirectoryClient::with_base_url(server.users_url());
    client.fetch_users().await.unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users");
}

#[tokio::test]
async fn non_2xx_is_a_status_error() {
    let server = MockDirectory::start().await;
    server.enqueue_response(MockResponse::error(500)).await;

    let client = DirectoryClient::with_base_url(server.users_url());
    match client.fetch_users().await {
        Err(FetchError::Status { status }) => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_body_is_a_decode_error() {
    let server = MockDirectory::start().await;
    server
        .enqueue_response(MockResponse::json(r#"{"not": "an array"}"#))
        .await;

    let client = DirectoryClient::with_base_url(server.users_url());
    assert!(matches!(
        client.fetch_users().await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Port 1 is never bound in test environments.
    let client = DirectoryClient::with_base_url("http://127.0.0.1:1/users");
    assert!(matches!(
        client.fetch_users().await,
        Err(FetchError::Transport(_))
    ));
}

// -- loader liveness ----------------------------------------------------------

#[test]
fn live_fetch_delivers_completion_event() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockDirectory::start().await;
        server.enqueue_response(MockResponse::json(USERS_JSON)).await;
        server
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let _task = FetchTask::spawn(DirectoryClient::with_base_url(server.users_url()), tx);

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::FetchCompleted(Ok(records))) => assert_eq!(records.len(), 2),
        Ok(AppEvent::FetchCompleted(Err(err))) => panic!("fetch failed: {err}"),
        Ok(_) => panic!("unexpected event"),
        Err(err) => panic!("no completion event: {err}"),
    }
}

#[test]
fn cancelled_fetch_result_is_discarded() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockDirectory::start().await;
        server
            .enqueue_response(MockResponse::json("[]").with_delay(150))
            .await;
        server
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let task = FetchTask::spawn(DirectoryClient::with_base_url(server.users_url()), tx);
    // Tear the view down before the delayed response lands.
    task.cancel();

    // Well past the mock's delay: the late result must have been dropped,
    // not published.
    assert!(rx.recv_timeout(Duration::from_millis(600)).is_err());
}
