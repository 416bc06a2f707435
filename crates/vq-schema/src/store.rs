//! Schema store
//!
//! Fetches the field-metadata document from its fixed URL once per process
//! and serves the cached copy afterwards. Failures degrade to the empty
//! schema and are NOT cached, so a later call can retry. The slot is a
//! memoization guard, not a lock: concurrent first callers may each fetch.

use crate::error::SchemaError;
use parking_lot::RwLock;
use std::sync::Arc;
use vq_model::SchemaDocument;

/// Load-once schema cache
///
/// Never raises past its own boundary: [`SchemaStore::load`] always returns
/// a usable document.
#[derive(Debug)]
pub struct SchemaStore {
    url: String,
    http: reqwest::Client,
    slot: RwLock<Option<Arc<SchemaDocument>>>,
}

impl SchemaStore {
    /// Create a store fetching from the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Create a store reusing an existing HTTP client
    #[must_use]
    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
            slot: RwLock::new(None),
        }
    }

    /// Get the schema document, fetching on first use
    ///
    /// On success the parsed document is cached and every later call
    /// returns the same `Arc`. On failure the empty schema is returned and
    /// nothing is cached.
    pub async fn load(&self) -> Arc<SchemaDocument> {
        if let Some(cached) = self.slot.read().clone() {
            return cached;
        }

        match self.fetch().await {
            Ok(document) => {
                let document = Arc::new(document);
                *self.slot.write() = Some(Arc::clone(&document));
                tracing::info!("schema document loaded from {}", self.url);
                document
            }
            Err(err) => {
                tracing::warn!("schema load failed, serving empty schema: {err}");
                Arc::new(SchemaDocument::empty())
            }
        }
    }

    /// The cached document, if a load has succeeded
    #[must_use]
    pub fn cached(&self) -> Option<Arc<SchemaDocument>> {
        self.slot.read().clone()
    }

    /// Seed the cache directly, bypassing the fetch
    ///
    /// Used by tests and by callers that already hold a document snapshot.
    pub fn prime(&self, document: SchemaDocument) -> Arc<SchemaDocument> {
        let document = Arc::new(document);
        *self.slot.write() = Some(Arc::clone(&document));
        document
    }

    async fn fetch(&self) -> Result<SchemaDocument, SchemaError> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
