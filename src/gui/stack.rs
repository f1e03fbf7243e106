//! The menu stack: which screen is up, and how we got there
//!
//! Navigation is a plain stack of menu identities. Opening a sub-menu
//! pushes; leaving it pops; starting or ending a race replaces the whole
//! stack. The stack itself is just data - the visible screen object is
//! rebuilt lazily in [`MenuStack::update`] whenever the stack depth differs
//! from the depth the last screen was built for, so callers can mutate the
//! stack freely mid-frame and the change materializes on the next frame.
//!
//! When an entry stops being the top of the stack, the focus token of the
//! widget the user had selected is remembered in that entry. Coming back
//! restores it, so backing out of a sub-menu lands on the control that
//! opened it.

use crate::app::RenderMode;
use crate::audio::SfxCue;
use crate::gui::screen::{self, GuiInput, MenuAction, Screen, UiContext};
use crate::widget::WidgetId;

/// Identity of one front-end screen
///
/// Closed set: every screen the front-end can show has exactly one
/// identity here. The per-player screens carry the zero-based player index
/// they configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    MainMenu,
    /// Kart pick for one player; multi-player setups chain these
    CharSel(usize),
    Difficulty,
    RaceMode,
    Options,
    TrackSel,
    NumLaps,
    NumPlayers,
    /// In-race overlay; switches the renderer to the track view
    RaceHud,
    RaceResults,
    GrandPrixEnd,
    GrandPrixSelect,
    /// Pause menu reachable from the race HUD
    RaceMenu,
    /// Pseudo-screen: drains the stack and requests an application abort
    ExitGame,
    ConfigControls,
    /// Control bindings for one player
    PlayerControls(usize),
    ConfigDisplay,
    ConfigSound,
    Help,
    Credits,
}

/// One stack element: the screen identity plus the focus token remembered
/// when a sub-menu was opened on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry {
    pub id: MenuId,
    pub remembered: Option<WidgetId>,
}

/// Owns the menu stack and the single live screen object
pub struct MenuStack {
    stack: Vec<StackEntry>,
    current: Option<Box<dyn Screen>>,
    /// Set while the live screen is the race HUD; replaces comparing the
    /// screen pointer against a stashed alias
    current_is_race_hud: bool,
    /// Stack depth the live screen was built for; a mismatch marks a
    /// pending transition
    handled_depth: usize,
    /// Suppresses the select cue exactly once, for the very first screen
    /// pushed at startup
    startup_mute_armed: bool,
    /// Seconds of menu time accumulated across updates
    menu_time: f64,
}

impl MenuStack {
    pub fn new() -> Self {
        MenuStack {
            stack: Vec::new(),
            current: None,
            current_is_race_hud: false,
            handled_depth: 0,
            startup_mute_armed: true,
            menu_time: 0.0,
        }
    }

    /// Open a screen on top of the current one
    ///
    /// Remembers the focused widget of the outgoing top entry so it can be
    /// re-selected when that screen comes back. The new screen itself is
    /// only built on the next `update`.
    pub fn push(&mut self, id: MenuId, ui: &mut UiContext<'_>) {
        if let Some(top) = self.stack.last_mut() {
            top.remembered = ui.widgets.selected();
        }

        if id == MenuId::ExitGame {
            ui.sfx.play(SfxCue::Back);
        } else if self.startup_mute_armed {
            // The boot push would otherwise chirp before anything is on
            // screen
            self.startup_mute_armed = false;
        } else {
            ui.sfx.play(SfxCue::Select);
        }

        self.stack.push(StackEntry {
            id,
            remembered: None,
        });
    }

    /// Close the top screen
    ///
    /// Callers guard against popping the last entry; popping an empty
    /// stack is a contract violation and panics.
    pub fn pop(&mut self, ui: &mut UiContext<'_>) {
        ui.sfx.play(SfxCue::Back);
        self.stack.pop().expect("menu stack underflow: pop without a matching push");
    }

    /// Per-frame driver: rebuild the screen if the stack changed, then let
    /// the live screen update
    pub fn update(&mut self, dt: f32, ui: &mut UiContext<'_>) {
        if self.handled_depth != self.stack.len() {
            self.rebuild(ui);
        }

        self.menu_time += f64::from(dt);

        let action = match self.current.as_mut() {
            Some(screen) => screen.update(dt, ui),
            None => None,
        };
        if let Some(action) = action {
            self.apply(action, ui);
        }

        ui.widgets.animate(dt);
    }

    /// Tear down the old screen and build the one for the new stack top
    fn rebuild(&mut self, ui: &mut UiContext<'_>) {
        // The renderer must be back in menu mode before the HUD goes away
        if self.current_is_race_hud {
            self.current_is_race_hud = false;
            ui.video.set_mode(RenderMode::Menu);
        }

        self.current = None;
        ui.widgets.clear();

        self.handled_depth = self.stack.len();

        let Some(entry) = self.stack.last().copied() else {
            return;
        };

        if entry.id == MenuId::ExitGame {
            self.stack.clear();
            self.handled_depth = 0;
            ui.app.abort();
            return;
        }

        log::debug!("menu transition -> {:?} (depth {})", entry.id, self.handled_depth);

        if entry.id == MenuId::RaceHud {
            ui.video.set_mode(RenderMode::InGame);
        }

        self.current = screen::build_screen(entry.id, ui, &self.stack);
        self.current_is_race_hud = entry.id == MenuId::RaceHud && self.current.is_some();

        match entry.remembered {
            Some(token) => {
                ui.widgets.set_selected(token);
                ui.widgets.lighten(token);
                ui.widgets.pulse(token);
            }
            None => {
                // A selection may still be set from the screen that was
                // just torn down; highlight it without stealing focus
                if let Some(selected) = ui.widgets.selected() {
                    ui.widgets.lighten(selected);
                }
            }
        }
    }

    /// Route one high-level input event
    pub fn handle_input(&mut self, input: GuiInput, ui: &mut UiContext<'_>) {
        match input {
            GuiInput::Up => {
                ui.widgets.select_prev();
            }
            GuiInput::Down => {
                ui.widgets.select_next();
            }
            GuiInput::Select => {
                let action = match self.current.as_mut() {
                    Some(screen) => screen.select(ui),
                    None => None,
                };
                if let Some(action) = action {
                    self.apply(action, ui);
                }
            }
            GuiInput::Back => {
                let action = match self.current.as_mut() {
                    Some(screen) => screen.back(ui),
                    None => None,
                };
                match action {
                    Some(action) => self.apply(action, ui),
                    // Default: leave the current screen, but never pop the
                    // last one
                    None => {
                        if self.stack.len() > 1 {
                            self.pop(ui);
                        }
                    }
                }
            }
        }
    }

    fn apply(&mut self, action: MenuAction, ui: &mut UiContext<'_>) {
        match action {
            MenuAction::Push(id) => self.push(id, ui),
            MenuAction::Pop => self.pop(ui),
            MenuAction::SwitchToRace => self.switch_to_race(ui),
            MenuAction::ReplaceAll(id) => self.replace_all_with(id, ui),
            MenuAction::Refresh => self.refresh(ui),
        }
    }

    /// Recompute widget layout without touching the stack (used after a
    /// resolution change)
    pub fn refresh(&mut self, ui: &mut UiContext<'_>) {
        ui.widgets
            .set_screen_size(ui.config.display.width, ui.config.display.height);
    }

    /// Throw the whole stack away and restart from a single screen
    ///
    /// Used for hard transitions like race results -> main menu or a
    /// finished grand prix, where unwinding entry by entry makes no sense.
    pub fn replace_all_with(&mut self, id: MenuId, ui: &mut UiContext<'_>) {
        if self.current.is_some() {
            if self.current_is_race_hud {
                self.current_is_race_hud = false;
                ui.video.set_mode(RenderMode::Menu);
            }
            self.current = None;
            ui.widgets.clear();
        }
        self.handled_depth = 0;
        self.stack.clear();
        self.push(id, ui);
    }

    /// Drop the menus and put the race HUD up
    ///
    /// The current screen is not torn down here; the next `update` notices
    /// the depth change and does the swap through the normal path.
    pub fn switch_to_race(&mut self, ui: &mut UiContext<'_>) {
        self.stack.clear();
        self.push(MenuId::RaceHud, ui);
    }

    /// Whether the identity appears anywhere on the stack
    ///
    /// Lets a screen tell where it was opened from - e.g. display config
    /// behaves differently mid-race than from the main menu.
    pub fn contains(&self, id: MenuId) -> bool {
        self.stack.iter().any(|entry| entry.id == id)
    }

    /// Identity on top of the stack, if any
    pub fn top(&self) -> Option<MenuId> {
        self.stack.last().map(|entry| entry.id)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn handled_depth(&self) -> usize {
        self.handled_depth
    }

    pub fn has_active_screen(&self) -> bool {
        self.current.is_some()
    }

    pub fn active_is_race_hud(&self) -> bool {
        self.current_is_race_hud
    }

    /// Seconds of menu time accumulated since construction
    pub fn menu_time(&self) -> f64 {
        self.menu_time
    }
}

impl Default for MenuStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppControl, VideoState};
    use crate::audio::SfxPlayer;
    use crate::config::UserConfig;
    use crate::race::RaceSetup;
    use crate::widget::WidgetManager;

    /// All collaborators a test needs, owned in one place
    struct Rig {
        widgets: WidgetManager,
        sfx: SfxPlayer,
        video: VideoState,
        app: AppControl,
        race: RaceSetup,
        config: UserConfig,
    }

    impl Rig {
        fn new() -> Self {
            Rig {
                widgets: WidgetManager::new(),
                sfx: SfxPlayer::new(),
                video: VideoState::new(),
                app: AppControl::new(),
                race: RaceSetup::new(),
                config: UserConfig::default(),
            }
        }

        fn ui(&mut self) -> UiContext<'_> {
            UiContext {
                widgets: &mut self.widgets,
                sfx: &mut self.sfx,
                video: &mut self.video,
                app: &mut self.app,
                race: &mut self.race,
                config: &mut self.config,
            }
        }
    }

    #[test]
    fn test_push_pop_depth_accounting() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();

        menu.push(MenuId::MainMenu, &mut rig.ui());
        menu.push(MenuId::Options, &mut rig.ui());
        menu.push(MenuId::ConfigSound, &mut rig.ui());
        assert_eq!(menu.depth(), 3);

        menu.pop(&mut rig.ui());
        menu.pop(&mut rig.ui());
        assert_eq!(menu.depth(), 1);
        assert_eq!(menu.top(), Some(MenuId::MainMenu));
    }

    #[test]
    #[should_panic(expected = "menu stack underflow")]
    fn test_pop_empty_stack_panics() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.pop(&mut rig.ui());
    }

    #[test]
    fn test_startup_latch_mutes_only_first_select_cue() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();

        menu.push(MenuId::MainMenu, &mut rig.ui());
        assert!(rig.sfx.queued().is_empty());

        menu.push(MenuId::Options, &mut rig.ui());
        assert_eq!(rig.sfx.queued(), &[SfxCue::Select]);
    }

    #[test]
    fn test_exit_push_plays_back_cue_without_consuming_latch() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();

        // Exit pushed first: back cue plays, latch stays armed
        menu.push(MenuId::ExitGame, &mut rig.ui());
        assert_eq!(rig.sfx.queued(), &[SfxCue::Back]);

        menu.push(MenuId::MainMenu, &mut rig.ui());
        assert_eq!(rig.sfx.queued(), &[SfxCue::Back]);
    }

    #[test]
    fn test_pop_plays_back_cue() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.push(MenuId::MainMenu, &mut rig.ui());
        rig.sfx.drain();

        menu.pop(&mut rig.ui());
        assert_eq!(rig.sfx.queued(), &[SfxCue::Back]);
    }

    #[test]
    fn test_push_captures_focus_of_outgoing_top() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();

        menu.push(MenuId::MainMenu, &mut rig.ui());
        menu.update(0.016, &mut rig.ui());

        // Focus something on the main menu, then open a sub-menu
        rig.widgets.select_next();
        let focused = rig.widgets.selected().expect("a widget is focused");

        menu.push(MenuId::Options, &mut rig.ui());
        menu.update(0.016, &mut rig.ui());

        // Pop back: the remembered token is re-selected and pulsed
        menu.pop(&mut rig.ui());
        menu.update(0.016, &mut rig.ui());
        assert_eq!(rig.widgets.selected(), Some(focused));
        assert!(rig.widgets.get(focused).expect("widget exists").pulse_phase() > 0.0);
    }

    #[test]
    fn test_update_is_idempotent_without_stack_change() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.push(MenuId::MainMenu, &mut rig.ui());
        menu.update(0.016, &mut rig.ui());

        let widget_count = rig.widgets.len();
        menu.update(0.016, &mut rig.ui());
        menu.update(0.016, &mut rig.ui());
        assert_eq!(rig.widgets.len(), widget_count);
        assert_eq!(menu.handled_depth(), 1);
    }

    #[test]
    fn test_contains_scans_whole_stack() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.push(MenuId::MainMenu, &mut rig.ui());
        menu.push(MenuId::Options, &mut rig.ui());
        menu.push(MenuId::ConfigDisplay, &mut rig.ui());

        assert!(menu.contains(MenuId::MainMenu));
        assert!(menu.contains(MenuId::Options));
        assert!(menu.contains(MenuId::ConfigDisplay));
        assert!(!menu.contains(MenuId::RaceHud));
        assert!(!menu.contains(MenuId::CharSel(0)));
    }

    #[test]
    fn test_contains_distinguishes_player_variants() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.push(MenuId::CharSel(1), &mut rig.ui());

        assert!(menu.contains(MenuId::CharSel(1)));
        assert!(!menu.contains(MenuId::CharSel(0)));
    }

    #[test]
    fn test_menu_time_accumulates() {
        let mut rig = Rig::new();
        let mut menu = MenuStack::new();
        menu.push(MenuId::MainMenu, &mut rig.ui());

        menu.update(0.5, &mut rig.ui());
        menu.update(0.25, &mut rig.ui());
        assert!((menu.menu_time() - 0.75).abs() < 1e-9);
    }
}
