use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::error::Result;
use crate::models::{CreateLanguageRequest, Language};
use crate::services::api_client::ApiClient;
use crate::services::resource::CatalogResource;

pub const LANGUAGES_PATH: &str = "/languages";

#[derive(Debug, Clone)]
pub struct LanguageService {
    client: Arc<ApiClient>,
}

impl LanguageService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogResource for LanguageService {
    type Item = Language;
    type Request = CreateLanguageRequest;

    async fn list(&self) -> Result<Vec<Language>> {
        self.client.get(LANGUAGES_PATH).await
    }

    async fn add(&self, request: CreateLanguageRequest) -> Result<Language> {
        request.validate()?;
        let language: Language = self.client.post_json(LANGUAGES_PATH, &request).await?;
        tracing::info!("Created language {} ({})", language.name, language.id);
        Ok(language)
    }
}
