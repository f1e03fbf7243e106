//! Screen capability, collaborator bundle, and the screen factory
//!
//! Every menu screen implements [`Screen`]: a per-frame `update`, a
//! `select` hook fired when the focused widget is activated, and an
//! optional `back` hook. Hooks never mutate the menu stack directly; they
//! return a [`MenuAction`] that the stack applies, which keeps stack
//! mutation in one place and makes screen-initiated transitions take
//! effect on the following frame's dirty check.

use crate::app::{AppControl, VideoState};
use crate::audio::SfxPlayer;
use crate::config::UserConfig;
use crate::gui::char_sel::CharSelScreen;
use crate::gui::info_pages::{CreditsScreen, HelpScreen};
use crate::gui::main_menu::MainMenuScreen;
use crate::gui::options::{
    ConfigControlsScreen, DisplayConfigScreen, OptionsScreen, PlayerControlsScreen,
    SoundConfigScreen,
};
use crate::gui::race_gui::{GrandPrixEndScreen, RaceHudScreen, RaceMenuScreen, RaceResultsScreen};
use crate::gui::race_setup::{
    DifficultyScreen, GrandPrixSelectScreen, NumLapsScreen, NumPlayersScreen, RaceModeScreen,
    TrackSelScreen,
};
use crate::gui::stack::{MenuId, StackEntry};
use crate::race::RaceSetup;
use crate::widget::WidgetManager;

/// Mutable borrows of every collaborator the menu layer touches
///
/// The shell owns all of these and rebuilds the bundle each call. This
/// avoids any global state: screens and the stack only ever see what they
/// are lent.
pub struct UiContext<'a> {
    pub widgets: &'a mut WidgetManager,
    pub sfx: &'a mut SfxPlayer,
    pub video: &'a mut VideoState,
    pub app: &'a mut AppControl,
    pub race: &'a mut RaceSetup,
    pub config: &'a mut UserConfig,
}

/// High-level menu input, translated from raw events by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiInput {
    Up,
    Down,
    Select,
    Back,
}

/// Stack mutation requested by a screen hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Push(MenuId),
    Pop,
    /// Drop the whole menu stack and start the race HUD
    SwitchToRace,
    /// Drop the whole menu stack and restart from one screen
    ReplaceAll(MenuId),
    /// Recompute widget layout (e.g. after a resolution change)
    Refresh,
}

/// Capability every constructed screen provides
///
/// Screens register their widgets in the constructor and rely on the stack
/// to clear the registry when they are torn down; anything else they own
/// is released by `Drop`.
pub trait Screen {
    /// Advance per-frame state. Most screens are static and use the
    /// default no-op.
    fn update(&mut self, _dt: f32, _ui: &mut UiContext<'_>) -> Option<MenuAction> {
        None
    }

    /// The focused widget was activated
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction>;

    /// Back was pressed. `None` lets the stack apply its default (pop,
    /// unless this is the last entry).
    fn back(&mut self, _ui: &mut UiContext<'_>) -> Option<MenuAction> {
        None
    }
}

/// Build the screen for one menu identity
///
/// This is the dispatch table: one arm per identity, with the per-player
/// variants passing their carried index through to the constructor.
/// `ExitGame` builds nothing - the stack special-cases it before ever
/// reaching the factory - and the `Option` return keeps "no screen" a
/// silent no-op rather than an error.
///
/// `stack` is a read-only view of the current menu stack so screens can
/// adapt to where they were opened from (see the display config screen).
pub fn build_screen(
    id: MenuId,
    ui: &mut UiContext<'_>,
    stack: &[StackEntry],
) -> Option<Box<dyn Screen>> {
    match id {
        MenuId::MainMenu => Some(Box::new(MainMenuScreen::new(ui))),
        MenuId::CharSel(player) => Some(Box::new(CharSelScreen::new(player, ui))),
        MenuId::Difficulty => Some(Box::new(DifficultyScreen::new(ui))),
        MenuId::RaceMode => Some(Box::new(RaceModeScreen::new(ui))),
        MenuId::Options => Some(Box::new(OptionsScreen::new(ui))),
        MenuId::TrackSel => Some(Box::new(TrackSelScreen::new(ui))),
        MenuId::NumLaps => Some(Box::new(NumLapsScreen::new(ui))),
        MenuId::NumPlayers => Some(Box::new(NumPlayersScreen::new(ui))),
        MenuId::RaceHud => Some(Box::new(RaceHudScreen::new())),
        MenuId::RaceResults => Some(Box::new(RaceResultsScreen::new(ui))),
        MenuId::GrandPrixEnd => Some(Box::new(GrandPrixEndScreen::new(ui))),
        MenuId::GrandPrixSelect => Some(Box::new(GrandPrixSelectScreen::new(ui))),
        MenuId::RaceMenu => Some(Box::new(RaceMenuScreen::new(ui))),
        MenuId::ExitGame => None,
        MenuId::ConfigControls => Some(Box::new(ConfigControlsScreen::new(ui))),
        MenuId::PlayerControls(player) => Some(Box::new(PlayerControlsScreen::new(player, ui))),
        MenuId::ConfigDisplay => Some(Box::new(DisplayConfigScreen::new(ui, stack))),
        MenuId::ConfigSound => Some(Box::new(SoundConfigScreen::new(ui))),
        MenuId::Help => Some(Box::new(HelpScreen::new(ui))),
        MenuId::Credits => Some(Box::new(CreditsScreen::new(ui))),
    }
}
