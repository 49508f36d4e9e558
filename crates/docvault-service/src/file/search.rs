//! Search service: full-text queries against the backend index.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use docvault_core::config::search::SearchConfig;
use docvault_core::error::AppError;
use docvault_entity::search::SearchHit;
use docvault_gateway::Gateway;

/// One search result as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultView {
    /// Name of the matching document.
    pub file_name: String,
    /// Matching version identifier.
    pub version: String,
    /// Uppercase file extension, e.g. `DOCX`.
    pub file_type: String,
    /// When the index processed the document.
    pub indexed_at: String,
    /// Link to the matching version's content.
    pub download_link: String,
    /// Content preview.
    pub snippet: String,
}

impl SearchResultView {
    fn from_hit(hit: &SearchHit, snippet_length: usize) -> Self {
        let file_type = hit
            .file_data
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_uppercase())
            .unwrap_or_default();
        Self {
            file_name: hit.file_data.file_name.clone(),
            version: hit.file_data.version.clone(),
            file_type,
            indexed_at: hit.indexed_at.clone(),
            download_link: hit.file_data.download_link.clone(),
            snippet: hit.snippet(snippet_length),
        }
    }
}

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; previous results are cleared and nothing is sent.
    Cleared,
    /// The backend found nothing.
    NoResults,
    /// Matches in backend rank order.
    Hits(Vec<SearchResultView>),
}

impl SearchOutcome {
    /// The result rows, empty unless there were hits.
    pub fn results(&self) -> &[SearchResultView] {
        match self {
            Self::Hits(results) => results.as_slice(),
            Self::Cleared | Self::NoResults => &[],
        }
    }
}

/// Runs content searches.
#[derive(Clone)]
pub struct SearchService {
    gateway: Arc<dyn Gateway>,
    config: SearchConfig,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("config", &self.config)
            .finish()
    }
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(gateway: Arc<dyn Gateway>, config: SearchConfig) -> Self {
        Self { gateway, config }
    }

    /// Search document content. Results keep the backend's ordering.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Cleared);
        }

        let hits = self.gateway.search_content(query).await?;
        info!(query, count = hits.len(), "Search completed");

        if hits.is_empty() {
            return Ok(SearchOutcome::NoResults);
        }
        Ok(SearchOutcome::Hits(
            hits.iter()
                .map(|hit| SearchResultView::from_hit(hit, self.config.snippet_length))
                .collect(),
        ))
    }
}
