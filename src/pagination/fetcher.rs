//! HTTP-backed page fetcher

use super::types::{Page, PageFetcher};
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::StringMap;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Query parameter carrying the continuation token
pub(crate) const START_PARAM: &str = "start";

/// Fetches pages of one list endpoint over HTTP
///
/// Each call issues `GET {path}?{query}&start={cursor}`. The query map is
/// fixed at construction and never altered by fetching.
pub struct CollectionFetcher<T> {
    client: Arc<HttpClient>,
    path: String,
    query: StringMap,
    decoder: PageDecoder,
    _item: PhantomData<fn() -> T>,
}

impl<T> CollectionFetcher<T> {
    /// Create a fetcher for `path`, reading items from `items_field`
    pub fn new(
        client: Arc<HttpClient>,
        path: impl Into<String>,
        items_field: impl Into<String>,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            query: StringMap::new(),
            decoder: PageDecoder::new(items_field),
            _item: PhantomData,
        }
    }

    /// Set the fixed query parameters; a `start` entry is ignored
    #[must_use]
    pub fn with_query(mut self, mut query: StringMap) -> Self {
        query.remove(START_PARAM);
        self.query = query;
        self
    }

    /// Endpoint path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fixed query parameters
    pub fn query(&self) -> &StringMap {
        &self.query
    }

    /// Field the items are read from
    pub fn items_field(&self) -> &str {
        self.decoder.items_field()
    }
}

impl<T> Clone for CollectionFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            path: self.path.clone(),
            query: self.query.clone(),
            decoder: self.decoder.clone(),
            _item: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for CollectionFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionFetcher")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("items_field", &self.decoder.items_field())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T> PageFetcher for CollectionFetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch_page(&self, start: Option<&str>) -> Result<Page<T>> {
        let mut config = RequestConfig::new().queries(&self.query);
        if let Some(start) = start {
            config = config.query(START_PARAM, start);
        }

        let body: Value = self.client.get_json_with_config(&self.path, config).await?;
        self.decoder.decode_value(body)
    }
}
