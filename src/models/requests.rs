use serde::Serialize;
use validator::Validate;

use crate::models::FileUpload;

/// JSON body for the reference entities that only carry a name.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateNamedRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

pub type CreateLanguageRequest = CreateNamedRequest;
pub type CreateGenreRequest = CreateNamedRequest;

impl CreateNamedRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateArtistRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub profile_image: FileUpload,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateSongRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub language: i64,
    pub genre: i64,
    pub artist: i64,
    pub song_image: FileUpload,
    pub song: FileUpload,
}
