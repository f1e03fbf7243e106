//! rallykart front-end: menu navigation, widget focus, and user settings
//! for a kart racing game
//!
//! This crate is the game's front-end layer. The shell (window, renderer,
//! event pump, mixer, race simulation) owns the collaborator state and
//! drives the menu stack once per frame:
//!
//! ```no_run
//! use rallykart::app::{AppControl, VideoState};
//! use rallykart::audio::SfxPlayer;
//! use rallykart::config::{ConfigStore, UserConfig};
//! use rallykart::gui::{MenuId, MenuStack, UiContext};
//! use rallykart::race::RaceSetup;
//! use rallykart::widget::WidgetManager;
//!
//! let mut widgets = WidgetManager::new();
//! let mut sfx = SfxPlayer::new();
//! let mut video = VideoState::new();
//! let mut app = AppControl::new();
//! let mut race = RaceSetup::new();
//! let mut config = UserConfig::default();
//!
//! let mut menu = MenuStack::new();
//! menu.push(
//!     MenuId::MainMenu,
//!     &mut UiContext {
//!         widgets: &mut widgets,
//!         sfx: &mut sfx,
//!         video: &mut video,
//!         app: &mut app,
//!         race: &mut race,
//!         config: &mut config,
//!     },
//! );
//!
//! loop {
//!     let mut ui = UiContext {
//!         widgets: &mut widgets,
//!         sfx: &mut sfx,
//!         video: &mut video,
//!         app: &mut app,
//!         race: &mut race,
//!         config: &mut config,
//!     };
//!     // (translate raw input into menu.handle_input calls here)
//!     menu.update(1.0 / 60.0, &mut ui);
//!     if app.take_abort_request() {
//!         break;
//!     }
//!     // (drain sfx, draw widgets, present frame)
//! }
//! ```

pub mod app;
pub mod audio;
pub mod config;
pub mod gui;
pub mod race;
pub mod widget;

pub use app::{AppControl, RenderMode, VideoState};
pub use audio::{SfxCue, SfxPlayer};
pub use config::{ConfigStore, UserConfig};
pub use gui::{GuiInput, MenuAction, MenuId, MenuStack, Screen, UiContext};
pub use race::RaceSetup;
pub use widget::{WidgetId, WidgetManager};
