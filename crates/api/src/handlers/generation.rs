//! Handler for the single (non-variant) generation path.

use axum::extract::State;
use axum::Json;
use menugen_core::menu::{build_menu_prompt, validate_menu_input};
use menugen_core::types::{validate_style, GeneratedMenu, MenuItem, DEFAULT_STYLE};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /api/generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMenuRequest {
    pub restaurant_name: String,
    pub items: Vec<MenuItem>,
    /// Style tag; defaults to `modern` when absent.
    #[serde(default)]
    pub style: Option<String>,
}

/// POST /api/generate
///
/// Generate one menu image from explicit menu data. Items without a food
/// photo get one generated first; a failed item photo is logged and
/// skipped rather than failing the request, but a failed menu image is a
/// 502. Responds with the image URL, the items (now carrying any generated
/// photo URLs), and the prompt used.
pub async fn generate_menu(
    State(state): State<AppState>,
    Json(input): Json<GenerateMenuRequest>,
) -> AppResult<Json<GeneratedMenu>> {
    let style = input.style.unwrap_or_else(|| DEFAULT_STYLE.to_string());
    validate_style(&style)?;
    validate_menu_input(&input.restaurant_name, &input.items)?;

    let mut items = input.items;
    for item in &mut items {
        if item.image_url.is_some() {
            continue;
        }
        match state
            .provider
            .generate_food_image(&item.name, item.description.as_deref())
            .await
        {
            Ok(url) => item.image_url = Some(url),
            Err(e) => {
                tracing::warn!(
                    item = %item.name,
                    error = %e,
                    "Food image generation failed, continuing without photo",
                );
            }
        }
    }

    let prompt = build_menu_prompt(&input.restaurant_name, &items, &style);
    let image_url = state
        .provider
        .generate_menu_image(&input.restaurant_name, &items, &style)
        .await?;

    tracing::info!(
        restaurant_name = %input.restaurant_name,
        item_count = items.len(),
        %style,
        "Menu image generated",
    );

    Ok(Json(GeneratedMenu {
        restaurant_name: input.restaurant_name,
        style,
        items,
        image_url,
        prompt: Some(prompt),
    }))
}
