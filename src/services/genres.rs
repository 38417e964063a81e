use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::error::Result;
use crate::models::{CreateGenreRequest, Genre};
use crate::services::api_client::ApiClient;
use crate::services::resource::CatalogResource;

// Wire spelling of the genre collection.
pub const GENRES_PATH: &str = "/genere";

#[derive(Debug, Clone)]
pub struct GenreService {
    client: Arc<ApiClient>,
}

impl GenreService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogResource for GenreService {
    type Item = Genre;
    type Request = CreateGenreRequest;

    async fn list(&self) -> Result<Vec<Genre>> {
        self.client.get(GENRES_PATH).await
    }

    async fn add(&self, request: CreateGenreRequest) -> Result<Genre> {
        request.validate()?;
        let genre: Genre = self.client.post_json(GENRES_PATH, &request).await?;
        tracing::info!("Created genre {} ({})", genre.name, genre.id);
        Ok(genre)
    }
}
