use std::sync::Arc;

use crate::controllers::forms::{ArtistForm, NameForm, PageForm};
use crate::controllers::{Notification, Notifier, PageState};
use crate::services::{ArtistService, CatalogResource, GenreService, LanguageService};

/// Wording used in a page's notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabels {
    /// Lowercase singular, e.g. "language".
    pub singular: &'static str,
    /// Lowercase plural, e.g. "languages".
    pub plural: &'static str,
    /// Capitalized singular used at the start of a sentence.
    pub title: &'static str,
}

impl PageLabels {
    pub const LANGUAGES: PageLabels = PageLabels {
        singular: "language",
        plural: "languages",
        title: "Language",
    };
    pub const GENRES: PageLabels = PageLabels {
        singular: "genre",
        plural: "genres",
        title: "Genre",
    };
    pub const ARTISTS: PageLabels = PageLabels {
        singular: "artist",
        plural: "artists",
        title: "Artist",
    };
}

/// List-plus-create page for one catalog resource.
pub struct CatalogPage<R, F>
where
    R: CatalogResource,
    F: PageForm<Request = R::Request>,
{
    resource: R,
    items: Vec<R::Item>,
    pub form: F,
    state: PageState,
    labels: PageLabels,
    notifier: Arc<dyn Notifier>,
}

pub type LanguagesPage = CatalogPage<LanguageService, NameForm>;
pub type GenresPage = CatalogPage<GenreService, NameForm>;
pub type ArtistsPage = CatalogPage<ArtistService, ArtistForm>;

impl<R, F> CatalogPage<R, F>
where
    R: CatalogResource,
    F: PageForm<Request = R::Request>,
{
    pub fn new(resource: R, labels: PageLabels, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            resource,
            items: Vec::new(),
            form: F::default(),
            state: PageState::Loading,
            labels,
            notifier,
        }
    }

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == PageState::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.is_complete()
    }

    /// First load when the page opens.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Refetch the list. On failure the previous list is kept.
    pub async fn refresh(&mut self) {
        self.state = PageState::Loading;

        match self.resource.list().await {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::error!("Error loading {}: {}", self.labels.plural, e);
                self.notifier
                    .notify(Notification::error(format!("Failed to load {}", self.labels.plural)));
            }
        }

        self.state = PageState::Ready;
    }

    /// Submit the form. Returns whether the entity was created.
    ///
    /// Incomplete forms are ignored. After a successful create the form is
    /// cleared and the list refetched; after a failure the form is kept.
    pub async fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let Some(request) = self.form.to_request() else {
            return false;
        };

        self.state = PageState::Submitting;

        match self.resource.add(request).await {
            Ok(_) => {
                self.notifier.notify(Notification::success(format!(
                    "{} added successfully",
                    self.labels.title
                )));
                self.form.reset();
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!("Error adding {}: {}", self.labels.singular, e);
                self.notifier
                    .notify(Notification::error(format!("Failed to add {}", self.labels.singular)));
                self.state = PageState::Ready;
                false
            }
        }
    }
}

impl LanguagesPage {
    pub fn languages(service: LanguageService, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(service, PageLabels::LANGUAGES, notifier)
    }
}

impl GenresPage {
    pub fn genres(service: GenreService, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(service, PageLabels::GENRES, notifier)
    }
}

impl ArtistsPage {
    pub fn artists(service: ArtistService, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(service, PageLabels::ARTISTS, notifier)
    }
}
