//! Page controllers: the state behind each dashboard screen.
//!
//! Controllers own their list, form and flags, take `&mut self` for every
//! transition and never share state with each other. Failures end up as a
//! single [`Notification`]; the controller always settles back in
//! [`PageState::Ready`].

pub mod auth;
pub mod catalog_page;
pub mod dashboard;
pub mod forms;
pub mod pagination;
pub mod playback;
pub mod songs;

pub use auth::AuthGate;
pub use catalog_page::{ArtistsPage, CatalogPage, GenresPage, LanguagesPage, PageLabels};
pub use dashboard::{DashboardPage, DashboardStats};
pub use forms::{ArtistForm, NameForm, PageForm, SongForm};
pub use pagination::PageCursor;
pub use playback::{AudioPlayer, HeadlessPlayer, PlaybackChange, PlaybackSession};
pub use songs::SongsPage;

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::error_titled("Error", description)
    }

    pub fn error_titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for user-visible, non-blocking messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Error => {
                tracing::warn!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    received: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(Notification::is_error)
            .collect()
    }

    /// Drains what has been received so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .received
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}
