//! Route definitions for the variant session endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::variants;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST   /generate-variants                   -> generate_variants
/// GET    /check-variant-status/{session_id}   -> check_variant_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-variants", post(variants::generate_variants))
        .route(
            "/check-variant-status/{session_id}",
            get(variants::check_variant_status),
        )
}
