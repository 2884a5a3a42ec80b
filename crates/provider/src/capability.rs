//! The provider-agnostic capability seam.
//!
//! The orchestrator, task runner, and handlers depend only on this trait,
//! never on a concrete provider. Tests substitute a scriptable stub; the
//! production binary wires in [`crate::api::FalClient`].

use async_trait::async_trait;
use menugen_core::types::{MenuContent, MenuItem};

/// Errors from a provider capability call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider responded 2xx but the body was malformed or incomplete.
    #[error("Unusable provider response: {0}")]
    Parse(String),

    /// The provider kept rate-limiting after all retry attempts.
    #[error("Provider rate limit exceeded after retries")]
    RateLimited,
}

/// The four AI capabilities the platform consumes.
///
/// Implementations own their latency and failure modes, including any
/// retry policy. Callers treat every method as a single opaque attempt.
#[async_trait]
pub trait MenuProvider: Send + Sync {
    /// Generate a restaurant name and menu items from a concept prompt.
    async fn generate_content(&self, prompt: &str) -> Result<MenuContent, ProviderError>;

    /// Generate a full menu image for a named restaurant and its items.
    /// Returns the URL of the produced image asset.
    async fn generate_menu_image(
        &self,
        restaurant_name: &str,
        items: &[MenuItem],
        style: &str,
    ) -> Result<String, ProviderError>;

    /// Generate a food photograph for a single item.
    async fn generate_food_image(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<String, ProviderError>;

    /// Apply a natural-language edit to an existing image. Returns the URL
    /// of the new image asset; the input image is untouched.
    async fn edit_image(
        &self,
        image_url: &str,
        instruction: &str,
    ) -> Result<String, ProviderError>;

    /// Whether the provider has credentials configured. Reported by the
    /// health endpoint; a false value means calls will be rejected upstream.
    fn is_configured(&self) -> bool;
}
