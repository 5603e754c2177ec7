//! PokeAPI client
//!
//! Implements the ResourcePort trait over PokeAPI's public REST API.

pub mod wire;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::infrastructure::ports::{FetchError, ResourceLocator, ResourcePort};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for PokeAPI v2
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client that relies on the transport's default timeouts.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl ResourcePort for PokeApiClient {
    async fn fetch(&self, locator: &ResourceLocator) -> Result<Value, FetchError> {
        let kind = locator.kind();
        let url = locator.resolve(&self.base_url);
        tracing::debug!(resource = %kind, url = %url, "Fetching resource");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(resource = %kind, url = %url, error = %e, "Request failed");
            FetchError::transport(kind, &url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                resource = %kind,
                url = %url,
                status = %status,
                "Upstream returned non-success status"
            );
            return Err(FetchError::not_found(kind, url));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::warn!(resource = %kind, url = %url, error = %e, "Unreadable response body");
            FetchError::transport(kind, &url, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::ResourceKind;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });
        format!("http://{addr}")
    }

    fn fixture_router() -> Router {
        Router::new()
            .route(
                "/pokemon/pikachu",
                get(|| async { Json(json!({ "id": 25, "name": "pikachu" })) }),
            )
            .route(
                "/pokemon",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({ "limit": params.get("limit") }))
                }),
            )
            .route("/broken", get(|| async { "<html>not json</html>" }))
            .route(
                "/unavailable",
                get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
            )
    }

    #[tokio::test]
    async fn test_fetches_creature_by_name() {
        let base = serve(fixture_router()).await;
        let client = PokeApiClient::new(&format!("{base}/"));

        let doc = client
            .fetch(&ResourceLocator::creature("pikachu"))
            .await
            .expect("document");

        assert_eq!(doc["id"], 25);
    }

    #[tokio::test]
    async fn test_index_passes_limit() {
        let base = serve(fixture_router()).await;
        let client = PokeApiClient::new(&base);

        let doc = client
            .fetch(&ResourceLocator::index(15))
            .await
            .expect("document");

        assert_eq!(doc["limit"], "15");
    }

    #[tokio::test]
    async fn test_missing_resource_is_not_found() {
        let base = serve(fixture_router()).await;
        let client = PokeApiClient::new(&base);

        let err = client
            .fetch(&ResourceLocator::creature("missingno"))
            .await
            .expect_err("404 should fail");

        assert_eq!(
            err,
            FetchError::not_found(ResourceKind::Creature, format!("{base}/pokemon/missingno"))
        );
    }

    #[tokio::test]
    async fn test_server_error_is_not_found() {
        let base = serve(fixture_router()).await;
        let client = PokeApiClient::new(&base);
        let locator = ResourceLocator::url(ResourceKind::Type, format!("{base}/unavailable"));

        let err = client.fetch(&locator).await.expect_err("503 should fail");

        assert!(err.is_not_found());
        assert_eq!(err.resource(), ResourceKind::Type);
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let base = serve(fixture_router()).await;
        let client = PokeApiClient::new(&base);
        let locator = ResourceLocator::url(ResourceKind::Species, format!("{base}/broken"));

        let err = client.fetch(&locator).await.expect_err("html should fail");

        assert!(matches!(
            err,
            FetchError::Transport {
                resource: ResourceKind::Species,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        drop(listener);

        let client = PokeApiClient::with_timeout(&format!("http://{addr}"), Duration::from_secs(5));
        let err = client
            .fetch(&ResourceLocator::creature("pikachu"))
            .await
            .expect_err("closed port should fail");

        assert!(!err.is_not_found());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(
            PokeApiClient::new("https://pokeapi.co/api/v2/").base_url(),
            DEFAULT_POKEAPI_BASE_URL
        );
    }
}
