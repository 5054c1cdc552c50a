//! Entry-Level Job Search API Server
//!
//! Scrapes the Indeed results page for a search term on every request
//! and exposes the extracted listings through a REST API using Axum.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use common::Listing;
use indeed::{IndeedClient, JobSource};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

const BIND_ADDR: &str = "0.0.0.0:8000";

/// Fixed body returned whenever zero listings come back.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: &'static str,
}

const NO_JOBS: ErrorBody = ErrorBody {
    detail: "No jobs found",
};

/// Handler for GET /api/jobs/{search_term}
async fn jobs_handler(
    State(source): State<Arc<dyn JobSource>>,
    Path(search_term): Path<String>,
) -> Response {
    // A failed fetch is folded into the empty-result path: the caller
    // sees the same "not found" response either way.
    let listings: Vec<Listing> = match source.search(&search_term).await {
        Ok(listings) => listings,
        Err(e) => {
            warn!("search for {search_term:?} failed: {e:#}");
            Vec::new()
        }
    };

    if listings.is_empty() {
        (StatusCode::NOT_FOUND, Json(NO_JOBS)).into_response()
    } else {
        Json(listings).into_response()
    }
}

/// Builds the router around an injected job source.
///
/// The source is passed in rather than constructed here so tests can
/// drive the router with a stub instead of the live site.
fn app(source: Arc<dyn JobSource>) -> Router {
    Router::new()
        .route("/api/jobs/{search_term}", get(jobs_handler))
        .with_state(source)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("🚀 Starting Entry-Level Job Search API...\n");

    let source: Arc<dyn JobSource> = Arc::new(IndeedClient::new());
    let app = app(source);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .expect("Failed to bind server address");

    println!("🌐 Server running at http://{BIND_ADDR}");
    println!("   Try: curl 'http://127.0.0.1:8000/api/jobs/developer'\n");

    axum::serve(listener, app).await.expect("Server error");
}
