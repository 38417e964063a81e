use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A collection endpoint on the catalog API that can be listed and appended to.
#[async_trait]
pub trait CatalogResource: Send + Sync {
    type Item: DeserializeOwned + Send + Sync;
    type Request: Send;

    async fn list(&self) -> Result<Vec<Self::Item>>;

    async fn add(&self, request: Self::Request) -> Result<Self::Item>;
}
