//! Application-level switches shared between the menu layer and the shell
//!
//! Two small pieces of state live here:
//! - `VideoState`: whether the renderer is drawing the menu overlay or the
//!   in-game view. The menu stack flips this when the race HUD comes and
//!   goes; the renderer reads it every frame.
//! - `AppControl`: the quit handshake. The menu layer requests an abort,
//!   the shell's main loop drains the request and tears the session down.

/// Which view the renderer should be drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Front-end menus are on screen
    Menu,
    /// A race is running; the HUD overlays the track view
    InGame,
}

/// Current render mode, owned by the shell and lent to the menu layer
#[derive(Debug)]
pub struct VideoState {
    mode: RenderMode,
}

impl VideoState {
    /// Starts in menu mode, which is where the front-end boots
    pub fn new() -> Self {
        VideoState {
            mode: RenderMode::Menu,
        }
    }

    /// Switch the renderer between menu and in-game drawing
    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            log::debug!("render mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}

impl Default for VideoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit handshake between the menu layer and the main loop
///
/// `abort()` only sets a flag; nothing is torn down until the shell calls
/// `take_abort_request()` at the top of its frame.
#[derive(Debug)]
pub struct AppControl {
    abort_requested: bool,
}

impl AppControl {
    pub fn new() -> Self {
        AppControl {
            abort_requested: false,
        }
    }

    /// Request that the current session ends
    pub fn abort(&mut self) {
        log::info!("session abort requested");
        self.abort_requested = true;
    }

    /// Drain the pending abort request, clearing it
    pub fn take_abort_request(&mut self) -> bool {
        std::mem::take(&mut self.abort_requested)
    }

    /// Peek without clearing
    pub fn abort_requested(&self) -> bool {
        self.abort_requested
    }
}

impl Default for AppControl {
    fn default() -> Self {
        Self::new()
    }
}
