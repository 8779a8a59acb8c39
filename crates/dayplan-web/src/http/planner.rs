//! The planner page — GET and POST /
//!
//! GET renders the form plus the full history and never writes.
//! POST builds a prompt from the form, calls the generator, persists the
//! plan on success, and re-renders the page with the outcome.

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

use dayplan_agent::{DateChoice, PromptBuilder};
use dayplan_store::StoreError;

use crate::app::AppState;
use crate::page::{PlanView, PlannerPage};

/// Shown in place of a plan when the generation call fails.
pub const GENERATION_APOLOGY: &str =
    "An error occurred while generating your schedule. Please try again later.";

/// Fallback body for storage and rendering faults.
const FAILURE_PAGE: &str =
    "<!DOCTYPE html><html><body><p>Something went wrong. Please try again later.</p></body></html>";

type PageResult = Result<Html<String>, (StatusCode, Html<&'static str>)>;

#[derive(Debug, Deserialize)]
pub struct PlanForm {
    #[serde(default)]
    pub input_text: String,
    /// Radio value; a missing field means "today" (the checked default).
    #[serde(default = "default_schedule_date")]
    pub schedule_date: String,
}

fn default_schedule_date() -> String {
    "today".to_string()
}

/// GET / — form plus full history, no current result.
pub async fn show_planner(State(state): State<Arc<AppState>>) -> PageResult {
    render_page(&state, None)
}

/// POST / — attempt a generation, persist on success, re-render.
///
/// A generation failure still answers 200: the page carries the apology
/// text and the history is left untouched.
pub async fn submit_plan(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PlanForm>,
) -> PageResult {
    let choice = DateChoice::from_form_value(&form.schedule_date);
    let prompt = PromptBuilder::build(&form.input_text, choice, chrono::Local::now());

    let current = match state.generator.generate(&prompt).await {
        Ok(content) => {
            state.store.insert(&content).map_err(storage_failure)?;
            content
        }
        Err(e) => {
            warn!(%choice, error = %e, "plan generation failed");
            GENERATION_APOLOGY.to_string()
        }
    };

    render_page(&state, Some(current))
}

fn render_page(state: &AppState, current: Option<String>) -> PageResult {
    let history = state.store.list_all_desc().map_err(storage_failure)?;

    let page = PlannerPage {
        current,
        history: history.iter().map(PlanView::from_plan).collect(),
    };
    match page.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(error = %e, "planner template render failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE)))
        }
    }
}

fn storage_failure(e: StoreError) -> (StatusCode, Html<&'static str>) {
    error!(error = %e, "plan store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
