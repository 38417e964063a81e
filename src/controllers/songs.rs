use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::controllers::forms::{PageForm, SongForm};
use crate::controllers::pagination::PageCursor;
use crate::controllers::playback::{AudioPlayer, PlaybackChange, PlaybackSession};
use crate::controllers::{Notification, Notifier, PageState};
use crate::error::Result;
use crate::models::{name_for, Artist, Genre, Language, Song, SongRow};
use crate::services::{CatalogResource, CatalogServices};

/// Songs screen: reference data for the selects, one page of songs, the
/// upload form and the single playback handle.
pub struct SongsPage<P: AudioPlayer> {
    services: CatalogServices,
    languages: Vec<Language>,
    genres: Vec<Genre>,
    artists: Vec<Artist>,
    songs: Vec<Song>,
    pub form: SongForm,
    state: PageState,
    fetching_songs: bool,
    cursor: PageCursor,
    fetch_delay: Duration,
    playback: PlaybackSession<P>,
    notifier: Arc<dyn Notifier>,
}

impl<P: AudioPlayer> SongsPage<P> {
    pub fn new(
        services: CatalogServices,
        player: P,
        notifier: Arc<dyn Notifier>,
        config: &Config,
    ) -> Self {
        Self {
            services,
            languages: Vec::new(),
            genres: Vec::new(),
            artists: Vec::new(),
            songs: Vec::new(),
            form: SongForm::default(),
            state: PageState::Loading,
            fetching_songs: false,
            cursor: PageCursor::new(config.songs_page_size),
            fetch_delay: config.songs_fetch_delay,
            playback: PlaybackSession::new(player),
            notifier,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn is_fetching_songs(&self) -> bool {
        self.fetching_songs
    }

    pub fn now_playing(&self) -> Option<i64> {
        self.playback.now_playing()
    }

    pub fn player(&self) -> &P {
        self.playback.player()
    }

    pub fn language_name(&self, id: i64) -> &str {
        name_for(&self.languages, id)
    }

    pub fn genre_name(&self, id: i64) -> &str {
        name_for(&self.genres, id)
    }

    pub fn artist_name(&self, id: i64) -> &str {
        name_for(&self.artists, id)
    }

    /// Current page resolved for display.
    pub fn rows(&self) -> Vec<SongRow> {
        self.songs
            .iter()
            .map(|song| SongRow {
                id: song.id,
                name: song.name.clone(),
                artist: self.artist_name(song.artist).to_string(),
                language: self.language_name(song.language).to_string(),
                genre: self.genre_name(song.genre).to_string(),
                duration: song.formatted_duration(),
                image_url: song.song_image_url.clone(),
                playing: self.playback.is_playing(song.id),
            })
            .collect()
    }

    /// Reference data is fetched concurrently; one failure fails the whole
    /// load. Songs page 1 follows once the reference data is in.
    pub async fn mount(&mut self) {
        self.state = PageState::Loading;

        let services = &self.services;
        let loaded = futures::try_join!(
            services.languages.list(),
            services.genres.list(),
            services.artists.list(),
        );

        match loaded {
            Ok((languages, genres, artists)) => {
                self.languages = languages;
                self.genres = genres;
                self.artists = artists;
                self.load_songs(1).await;
            }
            Err(e) => {
                tracing::error!("Error loading data: {}", e);
                self.notifier
                    .notify(Notification::error("Failed to load required data"));
            }
        }

        self.state = PageState::Ready;
    }

    /// Fetch `page` and update the cursor. On failure the shown page stays.
    pub async fn load_songs(&mut self, page: u32) {
        self.fetching_songs = true;

        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        match self.services.songs.list_page(page, self.cursor.limit()).await {
            Ok(songs) => {
                self.cursor.record(page, songs.len());
                self.songs = songs;
            }
            Err(e) => {
                tracing::error!("Error loading songs page {}: {}", page, e);
                self.notifier.notify(Notification::error(
                    "Failed to load songs. API rate limit may have been reached.",
                ));
            }
        }

        self.fetching_songs = false;
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor.has_previous() && !self.fetching_songs
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor.has_next() && !self.fetching_songs
    }

    pub async fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.load_songs(self.cursor.current() - 1).await;
        true
    }

    pub async fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.load_songs(self.cursor.current() + 1).await;
        true
    }

    pub fn can_submit(&self) -> bool {
        self.state != PageState::Submitting && self.form.is_complete()
    }

    /// Upload the song in the form. Returns whether it was created.
    pub async fn submit(&mut self) -> bool {
        if self.state == PageState::Submitting {
            return false;
        }
        let Some(request) = self.form.to_request() else {
            self.notifier.notify(Notification::error_titled(
                "Validation Error",
                "Please fill in all fields and upload both image and song file",
            ));
            return false;
        };

        self.state = PageState::Submitting;

        let created = match self.services.songs.add(request).await {
            Ok(_) => {
                self.notifier
                    .notify(Notification::success("Song added successfully"));
                self.form.reset();
                self.load_songs(1).await;
                true
            }
            Err(e) => {
                tracing::error!("Error adding song: {}", e);
                self.notifier.notify(Notification::error("Failed to add song"));
                false
            }
        };

        self.state = PageState::Ready;
        created
    }

    /// Play or pause `song_id`. Songs not on the current page are ignored.
    pub fn toggle_playback(&mut self, song_id: i64) -> Result<Option<PlaybackChange>> {
        let Some(url) = self
            .songs
            .iter()
            .find(|song| song.id == song_id)
            .map(|song| song.song_url.clone())
        else {
            return Ok(None);
        };

        match self.playback.toggle(song_id, &url) {
            Ok(change) => Ok(Some(change)),
            Err(e) => {
                tracing::error!("Error playing audio for song {}: {}", song_id, e);
                self.notifier.notify(Notification::error_titled(
                    "Playback Error",
                    "Could not play the audio file",
                ));
                Err(e)
            }
        }
    }

    /// The player reports the current track finished.
    pub fn on_playback_ended(&mut self) {
        self.playback.on_ended();
    }

    /// Stop audio and detach the source when the page goes away.
    pub fn teardown(&mut self) {
        self.playback.release();
    }
}
