//! REST boundary for the covenant dashboard.
//!
//! Routes:
//!
//! | Route            | Method | Body / Response                               |
//! |------------------|--------|-----------------------------------------------|
//! | `/`              | GET    | liveness banner                               |
//! | `/api/loans`     | GET    | full portfolio with nested covenants          |
//! | `/api/chat`      | POST   | `{message}` in, `{reply}` out                 |
//!
//! The portfolio snapshot is injected at router construction and shared
//! read-only behind an `Arc`; handlers never mutate it, so no locking is
//! needed. CORS defaults to permissive so a dashboard frontend on another
//! origin can fetch directly.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::errors::{Error, Result};
use crate::portfolio::answer;
use crate::types::Loan;

/// Fixed banner returned by the root route.
pub const BANNER: &str = "CovenantGuard AI Backend is Running! \u{1f680}";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allow any origin, method, and header
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

/// Shared read-only state behind the handlers.
#[derive(Clone)]
struct AppState {
    loans: Arc<Vec<Loan>>,
}

/// Chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text question about the portfolio
    pub message: String,
}

/// Chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Canned reply resolved by keyword routing
    pub reply: String,
}

#[derive(Serialize)]
struct Banner {
    message: &'static str,
}

async fn root() -> Json<Banner> {
    Json(Banner { message: BANNER })
}

async fn get_loans(State(state): State<AppState>) -> Json<Vec<Loan>> {
    Json((*state.loans).clone())
}

async fn post_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = answer(&state.loans, &req.message);
    debug!(message = %req.message, "chat request");
    Json(ChatResponse { reply })
}

/// Build the application router over a portfolio snapshot.
pub fn router(loans: Vec<Loan>, permissive_cors: bool) -> Router {
    let state = AppState {
        loans: Arc::new(loans),
    };

    let mut app = Router::new()
        .route("/", get(root))
        .route("/api/loans", get(get_loans))
        .route("/api/chat", post(post_chat))
        .with_state(state);

    if permissive_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Bind and serve the REST boundary until the process exits.
pub async fn serve(config: &ServerConfig, loans: Vec<Loan>) -> Result<()> {
    let app = router(loans, config.permissive_cors);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::server(format!("bind {addr}: {e}")))?;

    info!(%addr, "covenant dashboard server listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(e.to_string()))
}
