use crate::error::Result;

/// The single audio output a songs page drives.
pub trait AudioPlayer: Send {
    fn set_source(&mut self, url: &str);

    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Drop the current source so nothing stays buffered.
    fn detach(&mut self);
}

/// Player with no audio device. It only tracks the source and logs.
#[derive(Debug, Default)]
pub struct HeadlessPlayer {
    source: Option<String>,
    playing: bool,
}

impl HeadlessPlayer {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioPlayer for HeadlessPlayer {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
    }

    fn play(&mut self) -> Result<()> {
        tracing::debug!("Playing {:?}", self.source);
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn detach(&mut self) {
        self.playing = false;
        self.source = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackChange {
    Started(i64),
    Switched { from: i64, to: i64 },
    Paused(i64),
}

/// One playback handle per page session; at most one song is ever playing.
#[derive(Debug)]
pub struct PlaybackSession<P: AudioPlayer> {
    player: P,
    now_playing: Option<i64>,
}

impl<P: AudioPlayer> PlaybackSession<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            now_playing: None,
        }
    }

    pub fn now_playing(&self) -> Option<i64> {
        self.now_playing
    }

    pub fn is_playing(&self, song_id: i64) -> bool {
        self.now_playing == Some(song_id)
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Pauses `song_id` if it is the one playing, otherwise stops whatever
    /// is playing and starts `song_id` from `url`.
    ///
    /// A failed start leaves nothing marked as playing.
    pub fn toggle(&mut self, song_id: i64, url: &str) -> Result<PlaybackChange> {
        if self.now_playing == Some(song_id) {
            self.player.pause();
            self.now_playing = None;
            return Ok(PlaybackChange::Paused(song_id));
        }

        let previous = self.now_playing.take();
        if previous.is_some() {
            self.player.pause();
        }

        self.player.set_source(url);
        self.player.play()?;
        self.now_playing = Some(song_id);

        Ok(match previous {
            Some(from) => PlaybackChange::Switched { from, to: song_id },
            None => PlaybackChange::Started(song_id),
        })
    }

    /// The player reached the end of the current source.
    pub fn on_ended(&mut self) {
        self.now_playing = None;
    }

    /// Stops playback and detaches the source. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.player.pause();
        self.player.detach();
        self.now_playing = None;
    }
}

impl<P: AudioPlayer> Drop for PlaybackSession<P> {
    fn drop(&mut self) {
        self.release();
    }
}
