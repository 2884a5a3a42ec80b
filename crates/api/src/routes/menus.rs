//! Route definitions for the synchronous menu endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::{edit, generation, surprise};
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST   /generate   -> generate_menu
/// POST   /edit       -> edit_menu_image
/// POST   /surprise   -> surprise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generation::generate_menu))
        .route("/edit", post(edit::edit_menu_image))
        .route("/surprise", post(surprise::surprise))
}
