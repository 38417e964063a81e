pub mod api_client;
pub mod artists;
pub mod genres;
pub mod languages;
pub mod resource;
pub mod songs;
pub mod token_store;

pub use api_client::{ApiClient, MissingTokenPolicy, MultipartPayload, RequestBody};
pub use artists::ArtistService;
pub use genres::GenreService;
pub use languages::LanguageService;
pub use resource::CatalogResource;
pub use songs::SongService;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

use std::sync::Arc;

/// Every resource module, sharing one client.
#[derive(Debug, Clone)]
pub struct CatalogServices {
    pub languages: LanguageService,
    pub genres: GenreService,
    pub artists: ArtistService,
    pub songs: SongService,
}

impl CatalogServices {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            languages: LanguageService::new(client.clone()),
            genres: GenreService::new(client.clone()),
            artists: ArtistService::new(client.clone()),
            songs: SongService::new(client),
        }
    }
}
