//! Home controller: the landing page and the health probe

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::errors::AppError;

pub struct HomeController;

impl HomeController {
    pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
        let page = state.page_composer.compose(&state.cluster).await;
        state.renderer.render_page(&page).map(Html)
    }

    pub async fn health() -> &'static str {
        "OK"
    }
}
