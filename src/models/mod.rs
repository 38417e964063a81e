pub mod catalog;
pub mod requests;
pub mod song;
pub mod upload;

pub use catalog::{name_for, Artist, Genre, Language, Named, UNKNOWN_LABEL};
pub use requests::{
    CreateArtistRequest, CreateGenreRequest, CreateLanguageRequest, CreateNamedRequest,
    CreateSongRequest,
};
pub use song::{format_duration, Song, SongRow};
pub use upload::FileUpload;
