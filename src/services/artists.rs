use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::error::Result;
use crate::models::{Artist, CreateArtistRequest};
use crate::services::api_client::{ApiClient, MultipartPayload};
use crate::services::resource::CatalogResource;

pub const ARTISTS_PATH: &str = "/artists";

#[derive(Debug, Clone)]
pub struct ArtistService {
    client: Arc<ApiClient>,
}

impl ArtistService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn payload(request: CreateArtistRequest) -> MultipartPayload {
        MultipartPayload::new()
            .text("name", request.name)
            .file("profile_image", request.profile_image)
    }
}

#[async_trait]
impl CatalogResource for ArtistService {
    type Item = Artist;
    type Request = CreateArtistRequest;

    async fn list(&self) -> Result<Vec<Artist>> {
        self.client.get(ARTISTS_PATH).await
    }

    async fn add(&self, request: CreateArtistRequest) -> Result<Artist> {
        request.validate()?;
        let artist: Artist = self
            .client
            .post_multipart(ARTISTS_PATH, Self::payload(request))
            .await?;
        tracing::info!("Created artist {} ({})", artist.name, artist.id);
        Ok(artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileUpload;

    #[test]
    fn test_payload_fields() {
        let payload = ArtistService::payload(CreateArtistRequest {
            name: "Miriam Makeba".to_string(),
            profile_image: FileUpload::new("makeba.jpg", vec![9u8; 16]),
        });

        assert_eq!(payload.field_names(), vec!["name", "profile_image"]);
        assert_eq!(payload.text_value("name"), Some("Miriam Makeba"));
    }
}
