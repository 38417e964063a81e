use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::config::DEFAULT_SONGS_PAGE_SIZE;
use crate::error::{AppError, Result};
use crate::models::{CreateSongRequest, Song};
use crate::services::api_client::{ApiClient, MultipartPayload};
use crate::services::resource::CatalogResource;

pub const SONGS_PATH: &str = "/song";
pub const SONGS_LIST_PATH: &str = "/song/all";

#[derive(Debug, Clone)]
pub struct SongService {
    client: Arc<ApiClient>,
}

impl SongService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// One page of songs. The API returns at most `limit` items and no total.
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<Song>> {
        if page == 0 || limit == 0 {
            return Err(AppError::Validation(format!(
                "page and limit start at 1 (got page={}, limit={})",
                page, limit
            )));
        }

        let params = [("page", page.to_string()), ("limit", limit.to_string())];
        let songs: Vec<Song> = self.client.get_with_query(SONGS_LIST_PATH, &params).await?;
        tracing::debug!("Fetched {} songs for page {} (limit {})", songs.len(), page, limit);
        Ok(songs)
    }

    pub fn payload(request: CreateSongRequest) -> MultipartPayload {
        MultipartPayload::new()
            .text("name", request.name)
            .text("language", request.language.to_string())
            .text("genere", request.genre.to_string())
            .text("artist", request.artist.to_string())
            .file("song_image", request.song_image)
            .file("song", request.song)
    }
}

#[async_trait]
impl CatalogResource for SongService {
    type Item = Song;
    type Request = CreateSongRequest;

    async fn list(&self) -> Result<Vec<Song>> {
        self.list_page(1, DEFAULT_SONGS_PAGE_SIZE).await
    }

    async fn add(&self, request: CreateSongRequest) -> Result<Song> {
        request.validate()?;
        let song: Song = self
            .client
            .post_multipart(SONGS_PATH, Self::payload(request))
            .await?;
        tracing::info!("Uploaded song {} ({})", song.name, song.id);
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileUpload;
    use crate::services::token_store::MemoryTokenStore;

    #[test]
    fn test_payload_uses_wire_field_names() {
        let payload = SongService::payload(CreateSongRequest {
            name: "Pata Pata".to_string(),
            language: 3,
            genre: 7,
            artist: 11,
            song_image: FileUpload::new("cover.jpg", vec![0u8; 2]),
            song: FileUpload::new("pata.mp3", vec![0u8; 2]),
        });

        assert_eq!(
            payload.field_names(),
            vec!["name", "language", "genere", "artist", "song_image", "song"]
        );
        assert_eq!(payload.text_value("genere"), Some("7"));
        assert_eq!(payload.text_value("artist"), Some("11"));
    }

    #[tokio::test]
    async fn test_zero_page_is_rejected_before_any_request() {
        let client = ApiClient::new("http://127.0.0.1:9", Arc::new(MemoryTokenStore::new()));
        let service = SongService::new(Arc::new(client));

        let err = service.list_page(0, 10).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
