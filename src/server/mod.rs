//! HTTP server for the merge service
//!
//! Thin transport layer over [`MergeWorkflow`]: multipart uploads and
//! the URL-based entry point both feed the same workflow. Rejections
//! surface as JSON error bodies; the workflow itself never renders
//! anything user-facing.

pub mod handlers;
pub mod router;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::workflow::MergeWorkflow;
use router::build_router;

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub workflow: MergeWorkflow,
    pub client: reqwest::Client,
}

pub type SharedState = Arc<AppState>;

/// The merge service HTTP server.
pub struct MergeServer {
    config: ServiceConfig,
}

impl MergeServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let state = Arc::new(AppState {
            workflow: MergeWorkflow::new(self.config.clone()),
            client: reqwest::Client::new(),
        });
        build_router(state, &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> Result<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Merge service listening on {}", self.config.bind_addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Standard error body for every rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NoFilesSelected
            | Error::InvalidFileType(_)
            | Error::InsufficientFiles
            | Error::MissingUrl(_) => StatusCode::BAD_REQUEST,
            Error::MergeFailed(_) | Error::EmptyPdf(_) | Error::Pdf(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // axum reports 413 for limit breaches, 400 for malformed bodies
            Error::Multipart(e) => e.status(),
            Error::RemoteTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Fetch(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
