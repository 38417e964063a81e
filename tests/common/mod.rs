//! In-process stand-in for the catalog API, served with axum on a random port.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_admin::models::{Artist, Genre, Language, Song};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    /// Multipart field name to file name (or text value for plain fields).
    pub fields: Vec<(String, String)>,
}

#[derive(Default)]
pub struct CatalogState {
    pub languages: Vec<Language>,
    pub genres: Vec<Genre>,
    pub artists: Vec<Artist>,
    pub songs: Vec<Song>,
    /// When set, only `Bearer <token>` is accepted.
    pub required_token: Option<String>,
    /// Paths answered with a fixed status instead of their handler.
    pub failures: HashMap<String, StatusCode>,
    /// Paths answered with `200` and a body that is not JSON.
    pub malformed: HashSet<String>,
    pub requests: Vec<RecordedRequest>,
    next_id: i64,
}

impl CatalogState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Shared = Arc<Mutex<CatalogState>>;

pub struct FakeCatalog {
    pub base_url: String,
    pub state: Shared,
}

impl FakeCatalog {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(CatalogState::default()));
        let app = Router::new()
            .route("/service/languages", get(list_languages).post(add_language))
            .route("/service/genere", get(list_genres).post(add_genre))
            .route("/service/artists", get(list_artists).post(add_artist))
            .route("/service/song/all", get(list_songs))
            .route("/service/song", axum::routing::post(add_song))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/service", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn fail(&self, path: &str, status: u16) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(path.to_string(), status);
    }

    pub fn recover(&self, path: &str) {
        let mut state = self.state.lock().unwrap();
        state.failures.remove(path);
        state.malformed.remove(path);
    }

    pub fn garble(&self, path: &str) {
        self.state.lock().unwrap().malformed.insert(path.to_string());
    }

    pub fn require_token(&self, token: &str) {
        self.state.lock().unwrap().required_token = Some(token.to_string());
    }

    pub fn seed_language(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.languages.push(Language { id, name: name.to_string() });
        id
    }

    pub fn seed_genre(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.genres.push(Genre { id, name: name.to_string() });
        id
    }

    pub fn seed_artist(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.artists.push(Artist {
            id,
            name: name.to_string(),
            profile_image: format!("https://cdn.test/artist-{}.jpg", id),
        });
        id
    }

    pub fn seed_songs(&self, count: usize) {
        let mut state = self.state.lock().unwrap();
        for _ in 0..count {
            let id = state.next_id();
            state.songs.push(song(id, &format!("Seed {}", id)));
        }
    }
}

pub fn song(id: i64, name: &str) -> Song {
    Song {
        id,
        name: name.to_string(),
        language: 1,
        genre: 1,
        artist: 1,
        song_image_url: format!("https://cdn.test/{}.jpg", id),
        song_url: format!("https://cdn.test/{}.mp3", id),
        duration: 200,
    }
}

/// Records the request and applies the token and failure rules.
fn admit(
    state: &mut CatalogState,
    method: &str,
    path: &str,
    headers: &HeaderMap,
    fields: Vec<(String, String)>,
) -> Option<Response> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path: path.to_string(),
        authorization: authorization.clone(),
        content_type,
        fields,
    });

    if let Some(status) = state.failures.get(path) {
        return Some((*status, "forced failure").into_response());
    }
    if state.malformed.contains(path) {
        return Some((StatusCode::OK, "not json").into_response());
    }
    if let Some(token) = &state.required_token {
        if authorization.as_deref() != Some(format!("Bearer {}", token).as_str()) {
            return Some((StatusCode::UNAUTHORIZED, "bad token").into_response());
        }
    }
    None
}

async fn read_fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap();
        let value = file_name.unwrap_or_else(|| String::from_utf8_lossy(&data).to_string());
        fields.push((name, value));
    }
    fields
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value.as_str())
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

async fn list_languages(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "GET", "/languages", &headers, Vec::new()) {
        return rejection;
    }
    Json(state.languages.clone()).into_response()
}

async fn add_language(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "POST", "/languages", &headers, Vec::new()) {
        return rejection;
    }
    let Ok(body) = serde_json::from_slice::<NameBody>(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let language = Language {
        id: state.next_id(),
        name: body.name,
    };
    state.languages.push(language.clone());
    (StatusCode::CREATED, Json(language)).into_response()
}

async fn list_genres(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "GET", "/genere", &headers, Vec::new()) {
        return rejection;
    }
    Json(state.genres.clone()).into_response()
}

async fn add_genre(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "POST", "/genere", &headers, Vec::new()) {
        return rejection;
    }
    let Ok(body) = serde_json::from_slice::<NameBody>(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let genre = Genre {
        id: state.next_id(),
        name: body.name,
    };
    state.genres.push(genre.clone());
    (StatusCode::CREATED, Json(genre)).into_response()
}

async fn list_artists(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "GET", "/artists", &headers, Vec::new()) {
        return rejection;
    }
    Json(state.artists.clone()).into_response()
}

async fn add_artist(
    State(state): State<Shared>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let fields = read_fields(multipart).await;
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "POST", "/artists", &headers, fields.clone()) {
        return rejection;
    }
    let (Some(name), Some(image)) = (field(&fields, "name"), field(&fields, "profile_image")) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let artist = Artist {
        id: state.next_id(),
        name: name.to_string(),
        profile_image: format!("https://cdn.test/{}", image),
    };
    state.artists.push(artist.clone());
    (StatusCode::CREATED, Json(artist)).into_response()
}

#[derive(Deserialize)]
struct PageParams {
    page: usize,
    limit: usize,
}

async fn list_songs(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "GET", "/song/all", &headers, Vec::new()) {
        return rejection;
    }
    let page: Vec<Song> = state
        .songs
        .iter()
        .skip(params.page.saturating_sub(1) * params.limit)
        .take(params.limit)
        .cloned()
        .collect();
    Json(page).into_response()
}

async fn add_song(State(state): State<Shared>, headers: HeaderMap, multipart: Multipart) -> Response {
    let fields = read_fields(multipart).await;
    let mut state = state.lock().unwrap();
    if let Some(rejection) = admit(&mut state, "POST", "/song", &headers, fields.clone()) {
        return rejection;
    }

    let number = |name: &str| field(&fields, name).and_then(|v| v.parse::<i64>().ok());
    let (Some(name), Some(language), Some(genre), Some(artist), Some(image), Some(audio)) = (
        field(&fields, "name"),
        number("language"),
        number("genere"),
        number("artist"),
        field(&fields, "song_image"),
        field(&fields, "song"),
    ) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let song = Song {
        id: state.next_id(),
        name: name.to_string(),
        language,
        genre,
        artist,
        song_image_url: format!("https://cdn.test/{}", image),
        song_url: format!("https://cdn.test/{}", audio),
        duration: 245,
    };
    // Newest first, like the live API.
    state.songs.insert(0, song.clone());
    (StatusCode::CREATED, Json(song)).into_response()
}
