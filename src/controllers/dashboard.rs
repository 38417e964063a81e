use serde::Serialize;

use crate::config::DEFAULT_SONGS_PAGE_SIZE;
use crate::services::{CatalogResource, CatalogServices};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub languages: usize,
    pub genres: usize,
    pub artists: usize,
    /// Songs on the first page only; the API has no total count.
    pub songs: usize,
}

/// Overview screen with one count per entity.
pub struct DashboardPage {
    services: CatalogServices,
    stats: DashboardStats,
    loading: bool,
}

impl DashboardPage {
    pub fn new(services: CatalogServices) -> Self {
        Self {
            services,
            stats: DashboardStats::default(),
            loading: true,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches all four collections at once. A failure is logged only and
    /// the counts stay as they were.
    pub async fn load(&mut self) {
        self.loading = true;

        let services = &self.services;
        let fetched = futures::try_join!(
            services.languages.list(),
            services.genres.list(),
            services.artists.list(),
            services.songs.list_page(1, DEFAULT_SONGS_PAGE_SIZE),
        );

        match fetched {
            Ok((languages, genres, artists, songs)) => {
                self.stats = DashboardStats {
                    languages: languages.len(),
                    genres: genres.len(),
                    artists: artists.len(),
                    songs: songs.len(),
                };
                tracing::debug!("Dashboard stats: {:?}", self.stats);
            }
            Err(e) => tracing::error!("Error fetching stats: {}", e),
        }

        self.loading = false;
    }
}
