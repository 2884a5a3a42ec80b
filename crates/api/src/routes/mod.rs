//! Route tree construction.

pub mod health;
pub mod menus;
pub mod variants;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-variants                   start a variant session (POST)
/// /check-variant-status/{session_id}   poll session progress (GET)
///
/// /generate                            single menu generation (POST)
/// /edit                                image edit (POST)
/// /surprise                            content generation only (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(variants::router())
        .merge(menus::router())
}
