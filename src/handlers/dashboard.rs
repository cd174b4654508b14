use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use super::helpers::{not_found, render_template};
use crate::models::{AppState, DeployMethod};
use crate::templates::{DashboardTemplate, PanelTemplate, PanelView};
use crate::wiring;

pub async fn dashboard_get(State(state): State<AppState>) -> Response {
    render_template(DashboardTemplate::from_page(state.page(), state.backend_host.clone()))
}

/// A click on one of the panel's buttons.
pub async fn control_post(
    State(state): State<AppState>,
    Path(control_id): Path<String>,
) -> Response {
    match state.controls.click(&state.controller, &control_id).await {
        Ok(message) => {
            tracing::info!(%control_id, status = %message.text, "Control handled");
            Redirect::to("/").into_response()
        }
        Err(e) => not_found(e.to_string()),
    }
}

pub async fn refresh_post(State(state): State<AppState>) -> impl IntoResponse {
    wiring::on_ready(&state.controller).await;
    Redirect::to("/")
}

pub async fn panel_get(
    State(state): State<AppState>,
    Path(deploy_method): Path<String>,
) -> Response {
    let view = deploy_method
        .parse::<DeployMethod>()
        .ok()
        .and_then(|m| PanelView::from_page(state.page(), m));
    match view {
        Some(panel) => render_template(PanelTemplate { panel }),
        None => not_found(format!("Unknown deploy method: {}", deploy_method)),
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}
