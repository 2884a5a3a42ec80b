//! Handler for synchronous menu content generation ("surprise me").

use axum::extract::State;
use axum::Json;
use menugen_core::menu::{fallback_menu, validate_prompt};
use menugen_core::types::MenuContent;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /api/surprise`.
#[derive(Debug, Deserialize)]
pub struct SurpriseRequest {
    pub prompt: String,
}

/// POST /api/surprise
///
/// Generate menu content (restaurant name + items) from a concept prompt,
/// synchronously, without touching images or sessions. On provider failure
/// the canned fallback menu is served so the form always has something to
/// populate.
pub async fn surprise(
    State(state): State<AppState>,
    Json(input): Json<SurpriseRequest>,
) -> AppResult<Json<MenuContent>> {
    validate_prompt(&input.prompt)?;

    let content = match state.provider.generate_content(input.prompt.trim()).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "Content generation failed, serving fallback menu");
            fallback_menu()
        }
    };

    Ok(Json(content))
}
