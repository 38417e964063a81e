use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub language: i64,
    // The catalog API spells the genre reference "genere".
    #[serde(rename = "genere")]
    pub genre: i64,
    pub artist: i64,
    pub song_image_url: String,
    pub song_url: String,
    /// Length in whole seconds.
    pub duration: u32,
}

impl Song {
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

/// Formats seconds as `M:SS`: minutes unpadded, seconds always two digits.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// A song with its references resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRow {
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub language: String,
    pub genre: String,
    pub duration: String,
    pub image_url: String,
    pub playing: bool,
}
