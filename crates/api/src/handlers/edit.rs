//! Handler for natural-language image edits.

use axum::extract::State;
use axum::Json;
use menugen_core::menu::{validate_edit_instruction, validate_image_url};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /api/edit`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    /// URL of a previously generated image.
    pub image_url: String,
    /// Natural-language instruction, e.g. "make text larger".
    pub edit_instruction: String,
}

/// Response of `POST /api/edit`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    /// URL of the newly produced image. The input image is unchanged.
    pub image_url: String,
}

/// POST /api/edit
///
/// Apply an edit instruction to an existing menu image, synchronously.
/// Menu item data is untouched; only the visual artifact changes. Repeating
/// the same instruction produces a fresh result each time -- there is no
/// dedup or caching.
pub async fn edit_menu_image(
    State(state): State<AppState>,
    Json(input): Json<EditRequest>,
) -> AppResult<Json<EditResponse>> {
    validate_edit_instruction(&input.edit_instruction)?;
    validate_image_url(&input.image_url)?;

    let image_url = state
        .provider
        .edit_image(input.image_url.trim(), input.edit_instruction.trim())
        .await?;

    tracing::info!(instruction = %input.edit_instruction.trim(), "Menu image edited");

    Ok(Json(EditResponse { image_url }))
}
