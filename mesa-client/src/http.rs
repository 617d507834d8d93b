//! HTTP transport
//!
//! `HttpClient` is the seam between the typed API and the network. The
//! reqwest implementation lives here; tests substitute an in-memory one.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// `path` is absolute (`/api/...`) and may carry a query string.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// GET that only cares about the status; the body is discarded
    async fn probe(&self, path: &str) -> ClientResult<()>;

    /// Writes only care about the status; whatever the backend echoes back
    /// (a row, a message, nothing at all) is discarded
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Turn non-2xx into `HttpStatus`, keeping the body for diagnostics
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<reqwest::Response> {
        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(method, path, error = %e, "Request failed");
        })?;
        tracing::debug!(method, path, status = response.status().as_u16(), "Response");

        Self::check_status(response).await
    }
}

/// Decode a 2xx body; an empty body reads as JSON `null`
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let decoded = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    decoded.map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.get(self.url(path));
        let response = self.send("GET", path, request).await?;
        decode_body(&response.bytes().await?)
    }

    async fn probe(&self, path: &str) -> ClientResult<()> {
        let response = self.client.get(self.url(path)).send().await?;
        tracing::debug!(path, status = response.status().as_u16(), "Probe");
        Self::check_status(response).await.map(|_| ())
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request).await.map(|_| ())
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.client.put(self.url(path)).json(body);
        self.send("PUT", path, request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_with_single_slash() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/platos"), "http://localhost:5000/api/platos");
        assert_eq!(client.url("api/platos"), "http://localhost:5000/api/platos");
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let none: Option<Vec<u8>> = decode_body(b"").unwrap();
        assert_eq!(none, None);
        let blank: Option<Vec<u8>> = decode_body(b" \r\n").unwrap();
        assert_eq!(blank, None);
        let list: Vec<u8> = decode_body(b"[1, 2]").unwrap();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn undecodable_body_is_invalid_response() {
        let err = decode_body::<Vec<u8>>(b"<html>").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
        let err = decode_body::<Vec<u8>>(b"").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = NetworkHttpClient::new(&ClientConfig::new("ftp://x")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
