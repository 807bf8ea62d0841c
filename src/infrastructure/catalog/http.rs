// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of [`CatalogSource`].
//!
//! # Design Notes
//!
//! - One GET per lookup to `{base_url}/{key}`; the key is appended as a
//!   single percent-encoded path segment.
//! - 404 is `NotFound`; any other non-success status is `Transport`.
//! - The client-level deadline maps to `Timeout`; the fan-out layer applies
//!   its own deadline on top, whichever fires first wins.

use super::wire;
use super::CatalogSettings;
use crate::application::port::CatalogSource;
use crate::domain::error::{FetchError, FetchFailed, FetchTarget};
use crate::domain::record::{Record, RecordId};
use crate::error::{Error, Result};
use reqwest::{redirect, Client, StatusCode, Url};
use std::time::Duration;

/// Redirects followed before a lookup is reported as a transport failure.
const MAX_REDIRECTS: usize = 10;

/// Catalog client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpCatalog {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base address is not an absolute
    /// `http(s)` URL, and [`Error::Client`] if the HTTP client cannot be built.
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_str())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            request_timeout: settings.request_timeout,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Address of the entry named by `key`.
    #[must_use]
    pub fn endpoint(&self, key: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(key);
        }
        url
    }

    async fn get(&self, key: &str) -> std::result::Result<Record, FetchError> {
        let url = self.endpoint(key);
        tracing::debug!(url = %url, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify(&err))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Transport(format!("HTTP status: {status}")));
        }

        let body = response.bytes().await.map_err(|err| self.classify(&err))?;
        wire::decode(&body)
    }

    fn classify(&self, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.request_timeout)
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_by_id(&self, id: RecordId) -> std::result::Result<Record, FetchFailed> {
        let record = self
            .get(&id.to_string())
            .await
            .map_err(|cause| FetchFailed::new(id, cause))?;

        if record.id() != id {
            return Err(FetchFailed::new(
                id,
                FetchError::MalformedResponse(format!(
                    "requested #{id} but received #{}",
                    record.id()
                )),
            ));
        }
        Ok(record)
    }

    async fn fetch_by_name(&self, name: &str) -> std::result::Result<Record, FetchFailed> {
        // Failures are reported under the normalized key, blank or not.
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(FetchFailed::new(FetchTarget::Name(key), FetchError::NotFound));
        }

        self.get(&key)
            .await
            .map_err(|cause| FetchFailed::new(FetchTarget::Name(key), cause))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|err| Error::Config(format!("invalid catalog base URL {raw:?}: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::Config(format!(
            "catalog base URL must be an absolute http(s) address: {raw:?}"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::id;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves canned responses on a loopback port and returns the base URL.
    ///
    /// `respond` maps a request path to a status line and a body.
    async fn serve<F>(respond: F) -> String
    where
        F: Fn(&str) -> (&'static str, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has an address");

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0_u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&request);
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = respond(&path);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}/pokemon")
    }

    fn entry(id: u32, name: &str) -> String {
        format!(
            r#"{{"id": {id}, "name": "{name}",
                "sprites": {{ "front_default": "https://img.test/{id}.png" }},
                "abilities": [], "types": []}}"#
        )
    }

    fn catalog(base_url: &str) -> HttpCatalog {
        HttpCatalog::new(&CatalogSettings {
            base_url: base_url.to_string(),
            ..CatalogSettings::default()
        })
        .expect("client should build")
    }

    #[test]
    fn endpoint_appends_identifier_segment() {
        let catalog = catalog("https://pokeapi.co/api/v2/pokemon");
        assert_eq!(
            catalog.endpoint(&id(25).to_string()).as_str(),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let catalog = catalog("https://pokeapi.co/api/v2/pokemon/");
        assert_eq!(
            catalog.endpoint("pikachu").as_str(),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn endpoint_encodes_path_separators() {
        let catalog = catalog("https://pokeapi.co/api/v2/pokemon");
        let url = catalog.endpoint("../ability");
        assert_eq!(url.path(), "/api/v2/pokemon/..%2Fability");
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = HttpCatalog::new(&CatalogSettings {
            base_url: "api/v2/pokemon".to_string(),
            ..CatalogSettings::default()
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = HttpCatalog::new(&CatalogSettings {
            base_url: "mailto:someone@example.com".to_string(),
            ..CatalogSettings::default()
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn blank_name_is_not_found_without_request() {
        // Unroutable base: any request would fail with a transport error.
        let catalog = catalog("http://127.0.0.1:9/pokemon");
        let failure = catalog.fetch_by_name("   ").await.unwrap_err();

        assert_eq!(failure.cause, FetchError::NotFound);
        assert_eq!(failure.target, FetchTarget::Name(String::new()));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_failure() {
        let catalog = catalog("http://127.0.0.1:9/pokemon");
        let failure = catalog.fetch_by_id(id(1)).await.unwrap_err();

        assert_eq!(failure.id(), Some(id(1)));
        assert!(failure.cause.is_transport());
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let base = serve(|_| ("404 Not Found", "Not Found".to_string())).await;
        let failure = catalog(&base).fetch_by_id(id(5)).await.unwrap_err();

        assert_eq!(failure.id(), Some(id(5)));
        assert_eq!(failure.cause, FetchError::NotFound);
    }

    #[tokio::test]
    async fn server_error_is_transport_failure_with_status() {
        let base = serve(|_| ("500 Internal Server Error", String::new())).await;
        let failure = catalog(&base).fetch_by_id(id(5)).await.unwrap_err();

        assert_eq!(
            failure.cause,
            FetchError::Transport("HTTP status: 500 Internal Server Error".to_string())
        );
    }

    #[tokio::test]
    async fn mismatched_identifier_is_malformed() {
        let base = serve(|_| ("200 OK", entry(7, "squirtle"))).await;
        let failure = catalog(&base).fetch_by_id(id(5)).await.unwrap_err();

        assert_eq!(failure.id(), Some(id(5)));
        assert_eq!(
            failure.cause,
            FetchError::MalformedResponse("requested #5 but received #7".to_string())
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_malformed() {
        let base = serve(|_| ("200 OK", "<html></html>".to_string())).await;
        let failure = catalog(&base).fetch_by_id(id(5)).await.unwrap_err();

        assert!(matches!(failure.cause, FetchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn matching_entry_decodes() {
        let base = serve(|path| match path {
            "/pokemon/25" => ("200 OK", entry(25, "pikachu")),
            _ => ("404 Not Found", String::new()),
        })
        .await;
        let record = catalog(&base).fetch_by_id(id(25)).await.unwrap();

        assert_eq!(record.id(), id(25));
        assert_eq!(record.normalized_name(), "Pikachu");
    }

    #[tokio::test]
    async fn name_lookup_requests_normalized_key() {
        let base = serve(|path| match path {
            "/pokemon/squirtle" => ("200 OK", entry(7, "squirtle")),
            _ => ("404 Not Found", String::new()),
        })
        .await;
        let record = catalog(&base).fetch_by_name(" Squirtle ").await.unwrap();

        assert_eq!(record.id(), id(7));
        assert_eq!(record.normalized_name(), "Squirtle");
        assert_eq!(record.image_url(), Some("https://img.test/7.png"));
    }

    #[tokio::test]
    async fn name_failure_is_reported_under_normalized_key() {
        let base = serve(|_| ("404 Not Found", String::new())).await;
        let failure = catalog(&base).fetch_by_name(" MissingNo ").await.unwrap_err();

        assert_eq!(failure.target, FetchTarget::Name("missingno".to_string()));
        assert_eq!(failure.cause, FetchError::NotFound);
    }
}
