//! HTTP catalog client.

use super::records::HeroRecord;
use super::CatalogSource;
use crate::domain::{Hero, HeroDexError, Result};
use crate::Config;
use futures_util::future::BoxFuture;
use reqwest::Client;
use std::time::Duration;

/// Catalog document requested from the base URL.
const CATALOG_DOCUMENT: &str = "all.json";

/// reqwest-backed [`CatalogSource`] reading `<base>/all.json`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    endpoint: String,
}

impl HttpCatalog {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| HeroDexError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint_for(&config.base_url),
        })
    }

    /// Full URL of the catalog document.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| HeroDexError::fetch(format!("could not reach the hero catalog: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeroDexError::fetch(format!(
                "something went wrong! could not fetch data (HTTP {status})"
            )));
        }

        let records: Vec<HeroRecord> = response
            .json()
            .await
            .map_err(|e| HeroDexError::fetch(format!("could not read the hero catalog: {e}")))?;

        Ok(records.into_iter().map(Hero::from).collect())
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Hero>>> {
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, query = %query, "requesting hero catalog");
            let result = self.fetch_all().await;
            match &result {
                Ok(heroes) => tracing::debug!(hero_count = heroes.len(), "hero catalog received"),
                Err(e) => tracing::warn!(error = %e, "hero catalog request failed"),
            }
            result
        })
    }
}

/// Joins the base URL and the catalog document, tolerating a trailing slash.
fn endpoint_for(base_url: &str) -> String {
    format!("{}/{CATALOG_DOCUMENT}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the base URL to use.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api/")
    }

    fn catalog_for(base_url: String) -> HttpCatalog {
        let config = Config {
            base_url,
            request_timeout_secs: 5,
            ..Config::default()
        };
        HttpCatalog::new(&config).unwrap()
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(endpoint_for("https://host/api/"), "https://host/api/all.json");
        assert_eq!(endpoint_for("https://host/api"), "https://host/api/all.json");
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let body = r#"[
            {"id": 620, "name": "Spider-Man", "biography": {"publisher": "Marvel Comics"}, "images": {"lg": "lg/620.jpg"}},
            {"id": 70, "name": "Batman", "biography": {"publisher": "DC Comics"}, "images": {"lg": "lg/70.jpg"}}
        ]"#;
        let catalog = catalog_for(serve_once("HTTP/1.1 200 OK", body).await);

        let heroes = catalog.fetch("spider").await.unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].name, "Spider-Man");
        assert_eq!(heroes[1].publisher.as_deref(), Some("DC Comics"));
    }

    #[tokio::test]
    async fn non_success_status_is_fetch_failure() {
        let catalog = catalog_for(serve_once("HTTP/1.1 503 Service Unavailable", "").await);

        let err = catalog.fetch("bat").await.unwrap_err();

        assert!(matches!(err, HeroDexError::FetchFailed(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn undecodable_body_is_fetch_failure() {
        let catalog = catalog_for(serve_once("HTTP/1.1 200 OK", "not json").await);

        let err = catalog.fetch("bat").await.unwrap_err();

        assert!(matches!(err, HeroDexError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_fetch_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let catalog = catalog_for(format!("http://{addr}/api/"));
        let err = catalog.fetch("bat").await.unwrap_err();

        assert!(matches!(err, HeroDexError::FetchFailed(_)));
    }
}
