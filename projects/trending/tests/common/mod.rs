#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

pub const SECRET: &str = "s3cret";

#[derive(Debug, Clone)]
pub struct Received {
    pub secret: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// Collection endpoint double: records every POST and answers with `status`.
#[derive(Clone)]
pub struct Collector {
    status: StatusCode,
    reply: &'static str,
    received: Arc<Mutex<Vec<Received>>>,
}

impl Collector {
    pub fn new(status: StatusCode, reply: &'static str) -> Self {
        Self { status, reply, received: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn collect(
    State(collector): State<Collector>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    if let Ok(mut received) = collector.received.lock() {
        received.push(Received {
            secret: header(&headers, "x-admin-secret"),
            content_type: header(&headers, "content-type"),
            body,
        });
    }
    (collector.status, collector.reply)
}

pub fn collector_app(collector: Collector) -> Router {
    Router::new()
        .route("/collect", post(collect))
        .with_state(collector)
}

pub fn trending_app(html: &'static str) -> Router {
    Router::new()
        .route("/trending", get(move || async move { html }))
        .route("/broken/trending", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }))
}

pub async fn serve(app: Router) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

/// An address nothing listens on.
pub async fn closed_addr() -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

pub const TRENDING_HTML: &str = r#"<!DOCTYPE html>
<html><body><div class="Box">
  <article class="Box-row">
    <h2 class="h3 lh-condensed">
      <a href="/foo/bar"><span class="text-normal">foo /</span> bar</a>
    </h2>
    <div class="f6 color-fg-muted mt-2">
      <span class="d-inline-block ml-0 mr-3">Rust</span>
      <a class="Link--muted" href="/foo/bar/stargazers">12,001</a>
      <span class="d-inline-block float-sm-right">1,234 stars today</span>
    </div>
  </article>
  <article class="Box-row">
    <p>sponsored slot without a title</p>
    <div class="f6"><span>50 stars today</span></div>
  </article>
  <article class="Box-row">
    <h2 class="h3 lh-condensed"><a href="/baz/qux">baz / qux</a></h2>
    <div class="f6 color-fg-muted mt-2">
      <span class="d-inline-block float-sm-right">87 stars today</span>
    </div>
  </article>
</div></body></html>"#;
