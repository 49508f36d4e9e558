//! HTTP gateway over the `/api/docs` REST endpoints.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use docvault_core::config::gateway::GatewayConfig;
use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::file::{FileGroup, FileVersion};
use docvault_entity::search::SearchHit;

use crate::normalize;
use crate::payload::UploadPayload;
use crate::traits::Gateway;

const LIST_PATH: &str = "api/docs/all";
const UPLOAD_PATH: &str = "api/docs/upload";
const SEARCH_PATH: &str = "api/docs/search";

/// Fallback shown when a failed upload carries no readable message.
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

/// Fallback shown when a failed search carries no readable message.
pub const GENERIC_SEARCH_FAILURE: &str = "Search failed";

/// Gateway backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    /// Base URL, always ending in `/` so relative joins keep its path.
    base_url: Url,
    token: Option<String>,
}

impl HttpGateway {
    /// Build a gateway from configuration.
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|e| {
            AppError::configuration(format!("Invalid gateway.base_url '{}': {e}", config.base_url))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path or a download link against the base URL.
    ///
    /// Absolute links are returned unchanged.
    pub fn resolve(&self, link: &str) -> AppResult<Url> {
        if let Ok(absolute) = Url::parse(link) {
            return Ok(absolute);
        }
        self.base_url
            .join(link.trim_start_matches('/'))
            .map_err(|e| AppError::network(format!("Invalid link '{link}': {e}")))
    }

    /// Attach the bearer token, but only for requests to the backend's own
    /// origin. Download links may point at other hosts.
    fn authorized(&self, request: RequestBuilder, url: &Url) -> RequestBuilder {
        match &self.token {
            Some(token) if url.origin() == self.base_url.origin() => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> AppResult<Response> {
        self.authorized(request, url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::NetworkError,
                format!("Request to {url} failed: {e}"),
                e,
            )
        })
    }

    async fn body(response: Response, url: &Url) -> AppResult<Bytes> {
        response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::NetworkError,
                format!("Failed to read response from {url}: {e}"),
                e,
            )
        })
    }

    fn status_error(kind: ErrorKind, status: StatusCode, body: &[u8], fallback: &str) -> AppError {
        let message = normalize::error_message(body).unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), %message, "Backend rejected request");
        AppError::new(kind, message)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_all_files(&self) -> AppResult<Vec<FileGroup>> {
        let url = self.resolve(LIST_PATH)?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        let status = response.status();
        let body = Self::body(response, &url).await?;

        if !status.is_success() {
            return Err(Self::status_error(
                ErrorKind::NetworkError,
                status,
                &body,
                "Failed to load files. Please try again later.",
            ));
        }

        let groups = normalize::file_groups(&body);
        debug!(count = groups.len(), "Fetched file list");
        Ok(groups)
    }

    async fn create_file(&self, payload: UploadPayload) -> AppResult<FileVersion> {
        let url = self.resolve(UPLOAD_PATH)?;

        let part = Part::bytes(payload.content.to_vec())
            .file_name(payload.file_name.clone())
            .mime_str(&payload.mime_type)
            .map_err(|e| {
                AppError::validation(format!("Invalid MIME type '{}': {e}", payload.mime_type))
            })?;

        let form = Form::new()
            .part("file", part)
            .text("author", payload.author.clone())
            .text("remark", payload.remark.clone())
            .text("version", payload.version.clone())
            .text("filename", payload.filename_field().to_string())
            .text("keywords", payload.keywords.clone());

        let response = self
            .send(self.client.post(url.clone()).multipart(form), &url)
            .await?;
        let status = response.status();
        let body = Self::body(response, &url).await?;

        if !status.is_success() {
            return Err(Self::status_error(
                ErrorKind::UploadFailed,
                status,
                &body,
                GENERIC_UPLOAD_FAILURE,
            ));
        }

        let version = normalize::uploaded_version(&body).unwrap_or_else(|| payload.to_version());
        info!(
            file_name = %payload.file_name,
            version = %version.version,
            bytes = payload.content.len(),
            "File uploaded"
        );
        Ok(version)
    }

    async fn search_content(&self, query: &str) -> AppResult<Vec<SearchHit>> {
        let mut url = self.resolve(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("q", query);

        let response = self.send(self.client.get(url.clone()), &url).await?;
        let status = response.status();
        let body = Self::body(response, &url).await?;

        if !status.is_success() {
            return Err(Self::status_error(
                ErrorKind::SearchFailed,
                status,
                &body,
                GENERIC_SEARCH_FAILURE,
            ));
        }

        let hits = normalize::search_hits(&body);
        debug!(query, count = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn download(&self, link: &str) -> AppResult<Bytes> {
        let url = self.resolve(link)?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        let status = response.status();

        if !status.is_success() {
            let body = Self::body(response, &url).await?;
            return Err(Self::status_error(
                ErrorKind::NetworkError,
                status,
                &body,
                &format!("Download failed (HTTP {})", status.as_u16()),
            ));
        }

        let content = Self::body(response, &url).await?;
        debug!(%url, bytes = content.len(), "Downloaded content");
        Ok(content)
    }
}
