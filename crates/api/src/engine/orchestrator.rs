//! Session creation and variant task launch.

use std::sync::Arc;

use menugen_core::error::CoreError;
use menugen_core::menu::validate_prompt;
use menugen_core::session::{Session, SLOT_MAX, SLOT_MIN};
use menugen_provider::MenuProvider;

use crate::engine::runner::run_variant;
use crate::sessions::SessionStore;

/// Create a variant session and launch its three pipelines.
///
/// Validates the prompt before any side effect: a blank prompt creates no
/// session and spawns no task. On success the session (all slots already
/// `generating`) is in the store and visible to polling before this
/// returns, and the three pipeline tasks have been spawned fire-and-forget.
/// The caller is never made to wait on provider latency.
pub async fn start_variant_session(
    store: &Arc<SessionStore>,
    provider: &Arc<dyn MenuProvider>,
    prompt: &str,
) -> Result<Session, CoreError> {
    validate_prompt(prompt)?;
    let prompt = prompt.trim();

    let mut session = Session::new();
    for slot in SLOT_MIN..=SLOT_MAX {
        session.variant_mut(slot)?.start_generating()?;
    }
    store.insert(session.clone()).await;

    tracing::info!(session_id = %session.id, "Variant session created");

    for slot in SLOT_MIN..=SLOT_MAX {
        tokio::spawn(run_variant(
            Arc::clone(store),
            Arc::clone(provider),
            session.id,
            slot,
            prompt.to_string(),
        ));
    }

    Ok(session)
}
