//! Handlers for the variant session endpoints.
//!
//! These two endpoints carry the polling contract: session creation
//! returns immediately with all slots `generating`, and status checks are
//! pure reads that stay valid at any frequency, before and after
//! completion.

use axum::extract::{Path, State};
use axum::Json;
use menugen_core::error::CoreError;
use menugen_core::session::Variant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/generate-variants`.
#[derive(Debug, Deserialize)]
pub struct GenerateVariantsRequest {
    pub prompt: String,
}

/// Response of `POST /api/generate-variants`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariantsResponse {
    pub session_id: Uuid,
    pub variant1: Variant,
    pub variant2: Variant,
    pub variant3: Variant,
}

/// Response of `GET /api/check-variant-status/{session_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantStatusResponse {
    pub variant1: Variant,
    pub variant2: Variant,
    pub variant3: Variant,
    /// True iff every slot is terminal (`ready` or `error`) -- the signal
    /// for pollers to stop. "All finished", not "all succeeded".
    pub all_ready: bool,
}

/// POST /api/generate-variants
///
/// Start a variant session for a concept prompt. Returns 400 on a blank
/// prompt without creating anything; otherwise responds immediately with
/// the session id and the initial (all `generating`) slot states.
pub async fn generate_variants(
    State(state): State<AppState>,
    Json(input): Json<GenerateVariantsRequest>,
) -> AppResult<Json<GenerateVariantsResponse>> {
    let session =
        engine::start_variant_session(&state.sessions, &state.provider, &input.prompt).await?;

    let [variant1, variant2, variant3] = session.variants;
    Ok(Json(GenerateVariantsResponse {
        session_id: session.id,
        variant1,
        variant2,
        variant3,
    }))
}

/// GET /api/check-variant-status/{session_id}
///
/// Poll a session's progress. Returns 404 for unknown, malformed, or
/// evicted session ids -- deterministically, however often it is called.
pub async fn check_variant_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<VariantStatusResponse>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: session_id.clone(),
        })
    };

    // A session id that is not a UUID cannot name a session.
    let id = Uuid::parse_str(&session_id).map_err(|_| not_found())?;
    let session = state.sessions.get(id).await.ok_or_else(not_found)?;

    let all_ready = session.all_ready();
    let [variant1, variant2, variant3] = session.variants;
    Ok(Json(VariantStatusResponse {
        variant1,
        variant2,
        variant3,
        all_ready,
    }))
}
