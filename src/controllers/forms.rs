use crate::models::{CreateArtistRequest, CreateNamedRequest, CreateSongRequest, FileUpload};

/// Form state behind a create action.
pub trait PageForm: Default + Send {
    type Request: Send;

    /// Whether every required field and file is populated.
    fn is_complete(&self) -> bool;

    /// Build the request, or `None` while the form is incomplete.
    fn to_request(&self) -> Option<Self::Request>;

    /// Clear every field after a successful submit.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Single-field form shared by languages and genres.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameForm {
    pub name: String,
}

impl NameForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PageForm for NameForm {
    type Request = CreateNamedRequest;

    fn is_complete(&self) -> bool {
        has_text(&self.name)
    }

    fn to_request(&self) -> Option<CreateNamedRequest> {
        self.is_complete()
            .then(|| CreateNamedRequest::new(self.name.clone()))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub image: Option<FileUpload>,
}

impl ArtistForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: FileUpload) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Preview URL of the picked profile image.
    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().and_then(FileUpload::preview_url)
    }
}

impl PageForm for ArtistForm {
    type Request = CreateArtistRequest;

    fn is_complete(&self) -> bool {
        has_text(&self.name) && self.image.is_some()
    }

    fn to_request(&self) -> Option<CreateArtistRequest> {
        if !has_text(&self.name) {
            return None;
        }
        let image = self.image.clone()?;
        Some(CreateArtistRequest {
            name: self.name.clone(),
            profile_image: image,
        })
    }
}

/// Song upload form: four scalar selections plus a cover image and the audio file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SongForm {
    pub name: String,
    pub language: Option<i64>,
    pub genre: Option<i64>,
    pub artist: Option<i64>,
    pub image: Option<FileUpload>,
    pub audio: Option<FileUpload>,
}

impl SongForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn select_language(&mut self, id: Option<i64>) {
        self.language = id;
    }

    pub fn select_genre(&mut self, id: Option<i64>) {
        self.genre = id;
    }

    pub fn select_artist(&mut self, id: Option<i64>) {
        self.artist = id;
    }

    pub fn set_image(&mut self, image: FileUpload) {
        self.image = Some(image);
    }

    pub fn set_audio(&mut self, audio: FileUpload) {
        self.audio = Some(audio);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn clear_audio(&mut self) {
        self.audio = None;
    }

    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().and_then(FileUpload::preview_url)
    }

    /// Audio files are previewed by name only.
    pub fn audio_file_name(&self) -> Option<&str> {
        self.audio.as_ref().map(|audio| audio.file_name.as_str())
    }
}

impl PageForm for SongForm {
    type Request = CreateSongRequest;

    fn is_complete(&self) -> bool {
        has_text(&self.name)
            && self.language.is_some()
            && self.genre.is_some()
            && self.artist.is_some()
            && self.image.is_some()
            && self.audio.is_some()
    }

    fn to_request(&self) -> Option<CreateSongRequest> {
        if !has_text(&self.name) {
            return None;
        }
        Some(CreateSongRequest {
            name: self.name.clone(),
            language: self.language?,
            genre: self.genre?,
            artist: self.artist?,
            song_image: self.image.clone()?,
            song: self.audio.clone()?,
        })
    }
}
