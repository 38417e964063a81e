use serde::{Deserialize, Serialize};

/// Placeholder shown when a reference id does not resolve.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub profile_image: String,
}

/// Reference entities a song points at by id.
pub trait Named {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

impl Named for Language {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Genre {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Artist {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolves `id` against `items`, degrading to [`UNKNOWN_LABEL`].
pub fn name_for<T: Named>(items: &[T], id: i64) -> &str {
    items
        .iter()
        .find(|item| item.id() == id)
        .map(Named::name)
        .unwrap_or(UNKNOWN_LABEL)
}
