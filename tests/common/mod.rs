//! Shared fakes and request helpers for router tests.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use serde_json::Value;
use ticket_intake::{
    create_router,
    models::{
        ticket::TicketRecord,
        ticketsystem::{AppState, MessageQueue, RecordStore},
    },
};
use tower::ServiceExt;

/// Record store that keeps records in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Mutex<Vec<TicketRecord>>,
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, record: &TicketRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Record store whose writes always fail.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn put(&self, _record: &TicketRecord) -> anyhow::Result<()> {
        anyhow::bail!("ProvisionedThroughputExceededException")
    }
}

/// Queue that records message bodies and hands out sequential ids.
#[derive(Default)]
pub struct MemoryQueue {
    pub bodies: Mutex<Vec<String>>,
    next_id: AtomicUsize,
}

#[async_trait]
impl MessageQueue for MemoryQueue {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn send(&self, body: String) -> anyhow::Result<String> {
        self.bodies.lock().unwrap().push(body);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(format!("msg-{id}"))
    }
}

/// Queue whose sends always fail.
pub struct FailingQueue;

#[async_trait]
impl MessageQueue for FailingQueue {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send(&self, _body: String) -> anyhow::Result<String> {
        anyhow::bail!("AWS.SimpleQueueService.NonExistentQueue")
    }
}

pub fn router(store: Arc<dyn RecordStore>, queue: Arc<dyn MessageQueue>) -> Router {
    create_router(AppState::new(store, queue))
}

pub async fn post(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    app.oneshot(request).await.expect("failed to make request")
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

pub fn assert_json_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
