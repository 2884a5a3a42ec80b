#![allow(dead_code)] // not every test binary uses every helper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tokio::sync::Semaphore;
use tower::ServiceExt;

use menugen_api::config::ServerConfig;
use menugen_api::router::build_app_router;
use menugen_api::sessions::SessionStore;
use menugen_api::state::AppState;
use menugen_core::types::{MenuContent, MenuItem};
use menugen_provider::{MenuProvider, ProviderError};

// ---------------------------------------------------------------------------
// Scriptable provider stub
// ---------------------------------------------------------------------------

/// In-memory [`MenuProvider`] with scriptable failures.
///
/// Each `failing_*` budget makes that many upcoming calls of the matching
/// capability fail; the budgets are consumed atomically, so with three
/// concurrent pipelines and a budget of one, exactly one pipeline fails.
/// Every produced image URL is unique, mirroring a real provider handing
/// out fresh assets.
pub struct StubProvider {
    content_failures: AtomicUsize,
    menu_image_failures: AtomicUsize,
    food_image_failures: AtomicUsize,
    edit_failures: AtomicUsize,
    image_counter: AtomicUsize,
}

impl StubProvider {
    /// A stub where every call succeeds.
    pub fn new() -> Self {
        Self {
            content_failures: AtomicUsize::new(0),
            menu_image_failures: AtomicUsize::new(0),
            food_image_failures: AtomicUsize::new(0),
            edit_failures: AtomicUsize::new(0),
            image_counter: AtomicUsize::new(0),
        }
    }

    /// Make the next `n` content-generation calls fail.
    pub fn with_content_failures(self, n: usize) -> Self {
        self.content_failures.store(n, Ordering::SeqCst);
        self
    }

    /// Make the next `n` menu-image calls fail.
    pub fn with_menu_image_failures(self, n: usize) -> Self {
        self.menu_image_failures.store(n, Ordering::SeqCst);
        self
    }

    /// Make the next `n` food-image calls fail.
    pub fn with_food_image_failures(self, n: usize) -> Self {
        self.food_image_failures.store(n, Ordering::SeqCst);
        self
    }

    /// Make the next `n` edit calls fail.
    pub fn with_edit_failures(self, n: usize) -> Self {
        self.edit_failures.store(n, Ordering::SeqCst);
        self
    }

    /// Consume one unit of a failure budget, if any remains.
    fn take_failure(counter: &AtomicUsize) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn next_image_url(&self, kind: &str) -> String {
        let n = self.image_counter.fetch_add(1, Ordering::SeqCst);
        format!("https://cdn.test/{kind}-{n}.png")
    }

    fn stub_content() -> MenuContent {
        MenuContent {
            restaurant_name: "The Test Kitchen".to_string(),
            items: vec![
                MenuItem {
                    category: "Main Course".to_string(),
                    name: "Test Burger".to_string(),
                    price: 12.0,
                    description: Some("A thoroughly tested burger".to_string()),
                    image_url: None,
                },
                MenuItem {
                    category: "Drinks".to_string(),
                    name: "Test Lemonade".to_string(),
                    price: 4.0,
                    description: None,
                    image_url: None,
                },
            ],
        }
    }
}

#[async_trait]
impl MenuProvider for StubProvider {
    async fn generate_content(&self, _prompt: &str) -> Result<MenuContent, ProviderError> {
        if Self::take_failure(&self.content_failures) {
            return Err(ProviderError::Parse("scripted content failure".to_string()));
        }
        Ok(Self::stub_content())
    }

    async fn generate_menu_image(
        &self,
        _restaurant_name: &str,
        _items: &[MenuItem],
        _style: &str,
    ) -> Result<String, ProviderError> {
        if Self::take_failure(&self.menu_image_failures) {
            return Err(ProviderError::Api {
                status: 500,
                body: "scripted image failure".to_string(),
            });
        }
        Ok(self.next_image_url("menu"))
    }

    async fn generate_food_image(
        &self,
        _name: &str,
        _description: Option<&str>,
    ) -> Result<String, ProviderError> {
        if Self::take_failure(&self.food_image_failures) {
            return Err(ProviderError::Api {
                status: 500,
                body: "scripted food image failure".to_string(),
            });
        }
        Ok(self.next_image_url("food"))
    }

    async fn edit_image(
        &self,
        _image_url: &str,
        _instruction: &str,
    ) -> Result<String, ProviderError> {
        if Self::take_failure(&self.edit_failures) {
            return Err(ProviderError::Api {
                status: 500,
                body: "scripted edit failure".to_string(),
            });
        }
        Ok(self.next_image_url("edit"))
    }

    fn is_configured(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Gated provider (holds pipelines until released)
// ---------------------------------------------------------------------------

/// Wraps [`StubProvider`] and blocks content generation until permits are
/// released, so tests can observe sessions while they are still
/// `generating`.
pub struct GatedProvider {
    inner: StubProvider,
    gate: Semaphore,
}

impl GatedProvider {
    pub fn new(inner: StubProvider) -> Self {
        Self {
            inner,
            gate: Semaphore::new(0),
        }
    }

    /// Let `n` blocked content-generation calls proceed.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }
}

#[async_trait]
impl MenuProvider for GatedProvider {
    async fn generate_content(&self, prompt: &str) -> Result<MenuContent, ProviderError> {
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        self.inner.generate_content(prompt).await
    }

    async fn generate_menu_image(
        &self,
        restaurant_name: &str,
        items: &[MenuItem],
        style: &str,
    ) -> Result<String, ProviderError> {
        self.inner
            .generate_menu_image(restaurant_name, items, style)
            .await
    }

    async fn generate_food_image(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<String, ProviderError> {
        self.inner.generate_food_image(name, description).await
    }

    async fn edit_image(
        &self,
        image_url: &str,
        instruction: &str,
    ) -> Result<String, ProviderError> {
        self.inner.edit_image(image_url, instruction).await
    }

    fn is_configured(&self) -> bool {
        self.inner.is_configured()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_ttl_secs: 3600,
        session_sweep_interval_secs: 300,
    }
}

/// Build the full application router around the given provider, returning
/// the session store as well so tests can inspect it directly.
///
/// This uses the production [`build_app_router`], so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that the binary uses.
pub fn build_test_app_with_store(
    provider: Arc<dyn MenuProvider>,
) -> (Router, Arc<SessionStore>) {
    let config = test_config();
    let sessions = Arc::new(SessionStore::new());

    let state = AppState {
        sessions: Arc::clone(&sessions),
        provider,
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), sessions)
}

/// Build the full application router around the given provider.
pub fn build_test_app(provider: Arc<dyn MenuProvider>) -> Router {
    build_test_app_with_store(provider).0
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Poll the status endpoint until `allReady` is true, returning the final
/// snapshot. Panics if the session does not finish within the deadline.
pub async fn poll_until_all_ready(app: &Router, session_id: &str) -> serde_json::Value {
    let uri = format!("/api/check-variant-status/{session_id}");
    for _ in 0..200 {
        let response = get(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        if json["allReady"] == true {
            return json;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("Session {session_id} did not reach allReady in time");
}
