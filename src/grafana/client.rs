// src/grafana/client.rs

//! HTTP client for the Grafana admin API
//!
//! Provides a thin wrapper around reqwest that joins request paths onto
//! a configured base URL and attaches the API-key authorization header.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Authenticated HTTP client bound to a single Grafana host
///
/// Requests are single-shot: no retries, and no timeout beyond the
/// transport library default. Non-2xx statuses are returned to the
/// caller for interpretation, not treated as transport failures.
pub struct RestClient {
    base_url: Url,
    auth_header: String,
    client: Client,
}

impl RestClient {
    /// Create a client for the given host and API key
    pub fn new(host: &str, key: &str) -> Result<Self> {
        let base_url = Url::parse(host)
            .map_err(|e| Error::Init(format!("Invalid host URL '{host}': {e}")))?;

        let client = Client::builder()
            .build()
            .map_err(|e| Error::Init(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            auth_header: format!("Bearer {key}"),
            client,
        })
    }

    /// Issue a GET request against a path below the base URL
    pub fn get(&self, path: &str, params: &BTreeMap<String, String>) -> Result<(Vec<u8>, u16)> {
        self.request(Method::GET, path, params, None)
    }

    /// Issue a request and return the raw response body and status code
    pub fn request(
        &self,
        method: Method,
        path: &str,
        params: &BTreeMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Result<(Vec<u8>, u16)> {
        let url = self.endpoint(path, params);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .map_err(|e| Error::Transport(format!("Failed to read response body: {e}")))?;

        Ok((bytes.to_vec(), status))
    }

    /// Join a request path onto the base URL
    ///
    /// Slashes are normalized so a base of `https://host/grafana/` and a
    /// path of `api/datasources` yield `https://host/grafana/api/datasources`.
    fn endpoint(&self, path: &str, params: &BTreeMap<String, String>) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_matches('/')
        );
        url.set_path(&joined);

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        url
    }
}
