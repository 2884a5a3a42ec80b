//! One variant slot's generation pipeline.
//!
//! Runs content generation then image generation, writing every transition
//! for its own slot only. Failures are terminal for the slot and are never
//! retried here; retry policy belongs to the provider client.

use std::sync::Arc;

use menugen_core::types::DEFAULT_STYLE;
use menugen_provider::MenuProvider;
use uuid::Uuid;

use crate::sessions::SessionStore;

/// Execute the pipeline for one slot of one session.
///
/// Spawned by the orchestrator; no return value, no caller waiting. The
/// other two slots progress independently regardless of what happens here.
pub async fn run_variant(
    store: Arc<SessionStore>,
    provider: Arc<dyn MenuProvider>,
    session_id: Uuid,
    slot: u8,
    prompt: String,
) {
    // Step 1: concept prompt -> restaurant name + items.
    let content = match provider.generate_content(&prompt).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(%session_id, slot, error = %e, "Variant content generation failed");
            record_failure(&store, session_id, slot, format!("Content generation failed: {e}"))
                .await;
            return;
        }
    };

    tracing::debug!(
        %session_id,
        slot,
        restaurant_name = %content.restaurant_name,
        item_count = content.items.len(),
        "Variant content generated",
    );

    // Step 2: name + items + default style -> menu image.
    let image_url = match provider
        .generate_menu_image(&content.restaurant_name, &content.items, DEFAULT_STYLE)
        .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(%session_id, slot, error = %e, "Variant image generation failed");
            record_failure(&store, session_id, slot, format!("Image generation failed: {e}"))
                .await;
            return;
        }
    };

    let write = store
        .update_variant(session_id, slot, |variant| {
            variant.complete(content.restaurant_name, content.items, image_url)
        })
        .await;

    match write {
        Ok(()) => tracing::info!(%session_id, slot, "Variant ready"),
        // The session can disappear mid-pipeline (TTL eviction); nothing
        // to do but note it.
        Err(e) => tracing::warn!(%session_id, slot, error = %e, "Could not record variant result"),
    }
}

/// Record a pipeline failure in the slot's state.
async fn record_failure(store: &SessionStore, session_id: Uuid, slot: u8, detail: String) {
    if let Err(e) = store
        .update_variant(session_id, slot, |variant| variant.fail(detail))
        .await
    {
        tracing::warn!(%session_id, slot, error = %e, "Could not record variant failure");
    }
}
