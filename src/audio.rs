//! Menu sound cues
//!
//! The menu layer never talks to the mixer directly. It enqueues the cue it
//! wants played and the shell drains the queue into whatever audio backend
//! is running. This keeps the front-end testable and keeps the mixer
//! dependency out of this crate entirely.

/// The two cues menu navigation can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCue {
    /// A menu entry was chosen / a new screen was opened
    Select,
    /// Navigation went back up the stack (or the game is quitting)
    Back,
}

/// Cue queue drained by the shell's audio step
///
/// Honors the user's sound-effects setting: while disabled, `play` is a
/// no-op, so screens and the stack never need to check the config first.
#[derive(Debug)]
pub struct SfxPlayer {
    enabled: bool,
    queue: Vec<SfxCue>,
}

impl SfxPlayer {
    /// Creates an enabled player with an empty queue
    pub fn new() -> Self {
        SfxPlayer {
            enabled: true,
            queue: Vec::new(),
        }
    }

    /// Enqueue a cue for the mixer, unless sound effects are disabled
    pub fn play(&mut self, cue: SfxCue) {
        if !self.enabled {
            return;
        }
        log::trace!("sfx cue queued: {:?}", cue);
        self.queue.push(cue);
    }

    /// Gate cue playback on the sound-effects setting
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hand all queued cues to the mixer, emptying the queue
    pub fn drain(&mut self) -> Vec<SfxCue> {
        std::mem::take(&mut self.queue)
    }

    /// Cues waiting to be drained
    pub fn queued(&self) -> &[SfxCue] {
        &self.queue
    }
}

impl Default for SfxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_queue_in_order() {
        let mut sfx = SfxPlayer::new();
        sfx.play(SfxCue::Select);
        sfx.play(SfxCue::Back);

        assert_eq!(sfx.queued(), &[SfxCue::Select, SfxCue::Back]);
        assert_eq!(sfx.drain(), vec![SfxCue::Select, SfxCue::Back]);
        assert!(sfx.queued().is_empty());
    }

    #[test]
    fn test_disabled_player_drops_cues() {
        let mut sfx = SfxPlayer::new();
        sfx.set_enabled(false);
        sfx.play(SfxCue::Select);
        assert!(sfx.queued().is_empty());

        sfx.set_enabled(true);
        sfx.play(SfxCue::Back);
        assert_eq!(sfx.queued(), &[SfxCue::Back]);
    }
}
