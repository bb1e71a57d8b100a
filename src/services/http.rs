//! HTTP client for the management API

use crate::config::ClientConfig;
use crate::core::xml::{XmlValue, convert_str};
use crate::utils::error::{LifecycleError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Session token header
pub const AUTH_HEADER: &str = "x-vcloud-authorization";

/// Thin reqwest wrapper that adds authentication and versioned `Accept`
/// headers and turns error responses into [`LifecycleError::Api`].
#[derive(Debug, Clone)]
pub struct VcdClient {
    client: Client,
    base_url: Url,
    api_version: String,
    auth_token: String,
}

impl VcdClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LifecycleError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.endpoint()?,
            api_version: config.api_version.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `path` to the base URL, keeping any path prefix on it;
    /// absolute hrefs are used as-is
    pub fn url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!(
            "{}/{}",
            base,
            path.trim_start_matches('/')
        ))?)
    }

    fn xml_accept(&self) -> String {
        format!("application/*+xml;version={}", self.api_version)
    }

    fn json_accept(&self) -> String {
        format!("application/json;version={}", self.api_version)
    }

    fn request(&self, method: Method, path: &str, accept: String) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(%method, %url, "Sending request");
        Ok(self
            .client
            .request(method, url)
            .header(AUTH_HEADER, self.auth_token.as_str())
            .header(ACCEPT, accept))
    }

    /// GET an XML document and convert it
    pub async fn get_xml(&self, path: &str) -> Result<XmlValue> {
        let response = send(self.request(Method::GET, path, self.xml_accept())?).await?;
        let body = response.text().await?;
        convert_str(&body)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = send(self.request(Method::GET, path, self.json_accept())?).await?;
        Ok(response.json().await?)
    }

    /// PUT an XML body with a vendor content type
    pub async fn put_xml(&self, path: &str, content_type: &str, body: String) -> Result<()> {
        let request = self
            .request(Method::PUT, path, self.xml_accept())?
            .header(CONTENT_TYPE, content_type)
            .body(body);
        send(request).await.map(drop)
    }

    pub async fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let request = self.request(Method::PUT, path, self.json_accept())?.json(body);
        send(request).await.map(drop)
    }

    /// POST with an empty body
    pub async fn post(&self, path: &str) -> Result<()> {
        send(self.request(Method::POST, path, self.json_accept())?)
            .await
            .map(drop)
    }

    pub async fn delete_xml(&self, path: &str) -> Result<()> {
        send(self.request(Method::DELETE, path, self.xml_accept())?)
            .await
            .map(drop)
    }

    pub async fn delete_json(&self, path: &str) -> Result<()> {
        send(self.request(Method::DELETE, path, self.json_accept())?)
            .await
            .map(drop)
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string());
    warn!(status = status.as_u16(), %message, "API request failed");
    Err(LifecycleError::api(status.as_u16(), message))
}

/// Extract the human readable message from an error body.
///
/// The XML API answers with `<Error message="..."/>`, the cloudapi with a
/// JSON object carrying `message`.
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = if body.starts_with('<') {
        convert_str(body)
            .ok()?
            .at(&["Error", "message"])?
            .to_json()
    } else {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .clone()
    };

    match message {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
