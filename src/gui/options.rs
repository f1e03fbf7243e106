//! Options tree: hub screen plus display, sound and controls config
//!
//! These screens edit the in-memory `UserConfig`. Persisting it is the
//! shell's job (it saves on exit, like a save file), so a crash never
//! costs more than the current session's tweaks.

use crate::audio::SfxCue;
use crate::config::ControlBindings;
use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::gui::stack::{MenuId, StackEntry};
use crate::widget::WidgetId;

fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

// ---------------------------------------------------------------------------
// Options hub

const OPTIONS_TITLE: WidgetId = WidgetId(130);
const OPT_CONTROLS: WidgetId = WidgetId(131);
const OPT_DISPLAY: WidgetId = WidgetId(132);
const OPT_SOUND: WidgetId = WidgetId(133);
const OPT_BACK: WidgetId = WidgetId(134);

pub struct OptionsScreen;

impl OptionsScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(OPTIONS_TITLE, "OPTIONS");
        ui.widgets.add(OPT_CONTROLS, "Controls");
        ui.widgets.add(OPT_DISPLAY, "Display");
        ui.widgets.add(OPT_SOUND, "Sound");
        ui.widgets.add(OPT_BACK, "Back");
        ui.widgets.layout();
        OptionsScreen
    }
}

impl Screen for OptionsScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            OPT_CONTROLS => Some(MenuAction::Push(MenuId::ConfigControls)),
            OPT_DISPLAY => Some(MenuAction::Push(MenuId::ConfigDisplay)),
            OPT_SOUND => Some(MenuAction::Push(MenuId::ConfigSound)),
            OPT_BACK => Some(MenuAction::Pop),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Controls hub: one entry per player profile

const CONTROLS_TITLE: WidgetId = WidgetId(140);
const CONTROLS_PLAYER_BASE: u16 = 141;
const CONTROLS_BACK: WidgetId = WidgetId(146);

pub struct ConfigControlsScreen;

impl ConfigControlsScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(CONTROLS_TITLE, "CONTROLS");
        for (i, player) in ui.config.players.iter().enumerate() {
            ui.widgets
                .add(WidgetId(CONTROLS_PLAYER_BASE + i as u16), &player.name);
        }
        ui.widgets.add(CONTROLS_BACK, "Back");
        ui.widgets.layout();
        ConfigControlsScreen
    }
}

impl Screen for ConfigControlsScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        if selected == CONTROLS_BACK {
            return Some(MenuAction::Pop);
        }
        let player = selected.0.checked_sub(CONTROLS_PLAYER_BASE)? as usize;
        if player >= ui.config.players.len() {
            return None;
        }
        Some(MenuAction::Push(MenuId::PlayerControls(player)))
    }
}

// ---------------------------------------------------------------------------
// Per-player bindings

const BINDINGS_TITLE: WidgetId = WidgetId(150);
const BINDINGS_PRESET: WidgetId = WidgetId(151);
const BINDINGS_BACK: WidgetId = WidgetId(152);
const BINDING_ROW_BASE: u16 = 160;

/// Selectable binding presets, cycled by the preset button
fn presets() -> Vec<(&'static str, ControlBindings)> {
    vec![
        ("Arrow Keys", ControlBindings::arrows()),
        ("WASD", ControlBindings::wasd()),
    ]
}

fn binding_rows(controls: &ControlBindings) -> Vec<String> {
    vec![
        format!("Steer Left: {}", controls.steer_left),
        format!("Steer Right: {}", controls.steer_right),
        format!("Accelerate: {}", controls.accelerate),
        format!("Brake: {}", controls.brake),
        format!("Drift: {}", controls.drift),
        format!("Rescue: {}", controls.rescue),
    ]
}

pub struct PlayerControlsScreen {
    player: usize,
    preset_index: usize,
}

impl PlayerControlsScreen {
    pub fn new(player: usize, ui: &mut UiContext<'_>) -> Self {
        let profile = ui.config.players.get(player);
        let name = profile.map(|p| p.name.as_str()).unwrap_or("?");
        ui.widgets
            .add_label(BINDINGS_TITLE, &format!("{} CONTROLS", name));

        let controls = profile
            .map(|p| p.controls.clone())
            .unwrap_or_else(ControlBindings::arrows);
        for (i, row) in binding_rows(&controls).iter().enumerate() {
            ui.widgets.add_label(WidgetId(BINDING_ROW_BASE + i as u16), row);
        }

        // Start the cycle from whichever preset matches the saved bindings
        let preset_index = presets()
            .iter()
            .position(|(_, p)| *p == controls)
            .unwrap_or(0);
        let preset_name = presets()[preset_index].0;
        ui.widgets
            .add(BINDINGS_PRESET, &format!("Preset: {}", preset_name));
        ui.widgets.add(BINDINGS_BACK, "Back");
        ui.widgets.layout();

        PlayerControlsScreen {
            player,
            preset_index,
        }
    }
}

impl Screen for PlayerControlsScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            BINDINGS_PRESET => {
                let all = presets();
                self.preset_index = (self.preset_index + 1) % all.len();
                let (name, controls) = &all[self.preset_index];

                if let Some(profile) = ui.config.players.get_mut(self.player) {
                    profile.controls = controls.clone();
                }
                for (i, row) in binding_rows(controls).iter().enumerate() {
                    ui.widgets.set_label(WidgetId(BINDING_ROW_BASE + i as u16), row);
                }
                ui.widgets
                    .set_label(BINDINGS_PRESET, &format!("Preset: {}", name));
                ui.sfx.play(SfxCue::Select);
                None
            }
            BINDINGS_BACK => Some(MenuAction::Pop),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display config

const DISPLAY_TITLE: WidgetId = WidgetId(170);
const DISPLAY_RESOLUTION: WidgetId = WidgetId(171);
const DISPLAY_FULLSCREEN: WidgetId = WidgetId(172);
const DISPLAY_APPLY: WidgetId = WidgetId(173);
const DISPLAY_BACK: WidgetId = WidgetId(174);

const RESOLUTIONS: [(u32, u32); 5] = [
    (800, 600),
    (1024, 768),
    (1280, 720),
    (1600, 900),
    (1920, 1080),
];

pub struct DisplayConfigScreen {
    res_index: usize,
    fullscreen: bool,
    /// Opened from the in-race menu: resolution changes are refused until
    /// the race is over, since the track view can't be rebuilt mid-race
    in_race: bool,
}

impl DisplayConfigScreen {
    pub fn new(ui: &mut UiContext<'_>, stack: &[StackEntry]) -> Self {
        let current = (ui.config.display.width, ui.config.display.height);
        let res_index = RESOLUTIONS.iter().position(|&r| r == current).unwrap_or(0);
        let fullscreen = ui.config.display.fullscreen;
        let in_race = stack.iter().any(|entry| entry.id == MenuId::RaceHud);

        ui.widgets.add_label(DISPLAY_TITLE, "DISPLAY");
        ui.widgets.add(
            DISPLAY_RESOLUTION,
            &Self::resolution_label(res_index),
        );
        ui.widgets.add(
            DISPLAY_FULLSCREEN,
            &format!("Fullscreen: {}", on_off(fullscreen)),
        );
        ui.widgets.add(DISPLAY_APPLY, "Apply");
        ui.widgets.add(DISPLAY_BACK, "Back");
        ui.widgets.layout();

        DisplayConfigScreen {
            res_index,
            fullscreen,
            in_race,
        }
    }

    fn resolution_label(index: usize) -> String {
        let (w, h) = RESOLUTIONS[index];
        format!("Resolution: {} x {}", w, h)
    }
}

impl Screen for DisplayConfigScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            DISPLAY_RESOLUTION => {
                self.res_index = (self.res_index + 1) % RESOLUTIONS.len();
                ui.widgets
                    .set_label(DISPLAY_RESOLUTION, &Self::resolution_label(self.res_index));
                ui.sfx.play(SfxCue::Select);
                None
            }
            DISPLAY_FULLSCREEN => {
                self.fullscreen = !self.fullscreen;
                ui.widgets.set_label(
                    DISPLAY_FULLSCREEN,
                    &format!("Fullscreen: {}", on_off(self.fullscreen)),
                );
                ui.sfx.play(SfxCue::Select);
                None
            }
            DISPLAY_APPLY => {
                if self.in_race {
                    log::warn!("resolution change refused while a race is running");
                    return None;
                }
                let (w, h) = RESOLUTIONS[self.res_index];
                ui.config.display.width = w;
                ui.config.display.height = h;
                ui.config.display.fullscreen = self.fullscreen;
                log::info!("display set to {}x{} (fullscreen: {})", w, h, self.fullscreen);
                Some(MenuAction::Refresh)
            }
            DISPLAY_BACK => Some(MenuAction::Pop),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sound config

const SOUND_TITLE: WidgetId = WidgetId(180);
const SOUND_SFX: WidgetId = WidgetId(181);
const SOUND_MUSIC: WidgetId = WidgetId(182);
const SOUND_BACK: WidgetId = WidgetId(183);

pub struct SoundConfigScreen;

impl SoundConfigScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(SOUND_TITLE, "SOUND");
        ui.widgets.add(
            SOUND_SFX,
            &format!("Sound Effects: {}", on_off(ui.config.sound.sfx)),
        );
        ui.widgets.add(
            SOUND_MUSIC,
            &format!("Music: {}", on_off(ui.config.sound.music)),
        );
        ui.widgets.add(SOUND_BACK, "Back");
        ui.widgets.layout();
        SoundConfigScreen
    }
}

impl Screen for SoundConfigScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            SOUND_SFX => {
                ui.config.sound.sfx = !ui.config.sound.sfx;
                ui.sfx.set_enabled(ui.config.sound.sfx);
                ui.widgets.set_label(
                    SOUND_SFX,
                    &format!("Sound Effects: {}", on_off(ui.config.sound.sfx)),
                );
                // Audible click when turning on; silently dropped when the
                // player just turned effects off
                ui.sfx.play(SfxCue::Select);
                None
            }
            SOUND_MUSIC => {
                ui.config.sound.music = !ui.config.sound.music;
                ui.widgets.set_label(
                    SOUND_MUSIC,
                    &format!("Music: {}", on_off(ui.config.sound.music)),
                );
                ui.sfx.play(SfxCue::Select);
                None
            }
            SOUND_BACK => Some(MenuAction::Pop),
            _ => None,
        }
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
    fn test_sfx_toggle_updates_config_and_player() {
        let mut rig = Rig::new();
        let mut screen = SoundConfigScreen::new(&mut rig.ui());

        rig.widgets.set_selected(SOUND_SFX);
        screen.select(&mut rig.ui());

        assert!(!rig.config.sound.sfx);
        assert!(!rig.sfx.is_enabled());
        // The confirmation click was dropped because effects just went off
        assert!(rig.sfx.queued().is_empty());
        assert_eq!(
            rig.widgets.get(SOUND_SFX).unwrap().label(),
            "Sound Effects: Off"
        );

        screen.select(&mut rig.ui());
        assert!(rig.config.sound.sfx);
        assert!(rig.sfx.is_enabled());
        assert_eq!(rig.sfx.queued(), &[SfxCue::Select]);
    }

    #[test]
    fn test_resolution_cycles_and_applies() {
        let mut rig = Rig::new();
        let mut screen = DisplayConfigScreen::new(&mut rig.ui(), &[]);

        rig.widgets.set_selected(DISPLAY_RESOLUTION);
        screen.select(&mut rig.ui());
        assert_eq!(
            rig.widgets.get(DISPLAY_RESOLUTION).unwrap().label(),
            "Resolution: 1024 x 768"
        );
        // Config unchanged until Apply
        assert_eq!(rig.config.display.width, 800);

        rig.widgets.set_selected(DISPLAY_APPLY);
        let action = screen.select(&mut rig.ui());
        assert_eq!(action, Some(MenuAction::Refresh));
        assert_eq!(rig.config.display.width, 1024);
        assert_eq!(rig.config.display.height, 768);
    }

    #[test]
    fn test_apply_refused_while_racing() {
        let mut rig = Rig::new();
        let race_stack = [
            StackEntry {
                id: MenuId::RaceHud,
                remembered: None,
            },
            StackEntry {
                id: MenuId::ConfigDisplay,
                remembered: None,
            },
        ];
        let mut screen = DisplayConfigScreen::new(&mut rig.ui(), &race_stack);

        rig.widgets.set_selected(DISPLAY_RESOLUTION);
        screen.select(&mut rig.ui());
        rig.widgets.set_selected(DISPLAY_APPLY);
        let action = screen.select(&mut rig.ui());

        assert_eq!(action, None);
        assert_eq!(rig.config.display.width, 800);
    }

    #[test]
    fn test_preset_cycle_rewrites_bindings() {
        let mut rig = Rig::new();
        let mut screen = PlayerControlsScreen::new(0, &mut rig.ui());

        // Player one starts on arrows; one cycle lands on WASD
        rig.widgets.set_selected(BINDINGS_PRESET);
        screen.select(&mut rig.ui());

        assert_eq!(rig.config.players[0].controls, ControlBindings::wasd());
        assert_eq!(
            rig.widgets.get(BINDINGS_PRESET).unwrap().label(),
            "Preset: WASD"
        );
        assert_eq!(
            rig.widgets
                .get(WidgetId(BINDING_ROW_BASE + 2))
                .unwrap()
                .label(),
            "Accelerate: W"
        );
    }

    #[test]
    fn test_controls_hub_routes_to_player() {
        let mut rig = Rig::new();
        let mut screen = ConfigControlsScreen::new(&mut rig.ui());

        rig.widgets.set_selected(WidgetId(CONTROLS_PLAYER_BASE + 2));
        assert_eq!(
            screen.select(&mut rig.ui()),
            Some(MenuAction::Push(MenuId::PlayerControls(2)))
        );

        rig.widgets.set_selected(CONTROLS_BACK);
        assert_eq!(screen.select(&mut rig.ui()), Some(MenuAction::Pop));
    }
}
