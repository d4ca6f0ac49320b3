#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{Router, extract::Form, response::Html, routing::get};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::{
    grade,
    page::{self, PageView},
};

/// The line shown to the student for any rejected input, regardless of
/// whether it failed to parse or fell outside the grading scale.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter a valid numerical input between 0 and 100.";

/// The single field posted by the page's form, kept as raw text until
/// validation. A missing field reads as empty input.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeForm {
    /// Raw prelim grade exactly as submitted.
    #[serde(default)]
    pub prelim_grade: String,
}

/// Builds the application router: one page, two methods, nothing else.
pub fn router() -> Router {
    Router::new().route("/", get(show_form).post(compute_plan))
}

/// `GET /` renders the empty form.
pub async fn show_form() -> Html<String> {
    Html(page::render(&PageView::Form))
}

/// `POST /` validates the submitted grade and renders either the computed
/// plan or the validation error. Always a 200, like the page it serves.
pub async fn compute_plan(Form(form): Form<GradeForm>) -> Html<String> {
    match grade::parse_grade(&form.prelim_grade).and_then(grade::compute) {
        Ok(plan) => {
            tracing::info!("Computed a plan for prelim grade {}", plan.prelim_grade);
            Html(page::render(&PageView::Plan(&plan)))
        }
        Err(e) => {
            tracing::warn!("Rejected prelim grade input: {e}");
            Html(page::render(&PageView::Error(INVALID_INPUT_MESSAGE)))
        }
    }
}

/// Binds `addr` and serves the app until ctrl-c.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind to {addr}"))?;

    tracing::info!("Serving the grade computation tool on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    Ok(())
}

/// Resolves once ctrl-c is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, stopping");
    }
}
