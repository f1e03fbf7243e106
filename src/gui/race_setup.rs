//! The race setup chain: player count, race mode, cup, difficulty, track
//! and lap count
//!
//! Each screen writes its pick into the shared `RaceSetup` and pushes the
//! next step. The chain ends in a switch-to-race, which drops the whole
//! menu stack and puts the HUD up.

use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::gui::stack::MenuId;
use crate::race::{CUP_ROSTER, Difficulty, RaceMode, TRACK_ROSTER};
use crate::widget::WidgetId;

// ---------------------------------------------------------------------------
// Player count (split screen entry point)

const NUM_PLAYERS_TITLE: WidgetId = WidgetId(120);
const NUM_PLAYERS_BASE: u16 = 121;
const PLAYER_CHOICES: [usize; 3] = [2, 3, 4];

pub struct NumPlayersScreen;

impl NumPlayersScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(NUM_PLAYERS_TITLE, "How many players?");
        for (i, count) in PLAYER_CHOICES.iter().enumerate() {
            ui.widgets.add(
                WidgetId(NUM_PLAYERS_BASE + i as u16),
                &format!("{} Players", count),
            );
        }
        ui.widgets.layout();
        NumPlayersScreen
    }
}

impl Screen for NumPlayersScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(NUM_PLAYERS_BASE)? as usize;
        let count = *PLAYER_CHOICES.get(index)?;

        ui.race.num_players = count;
        Some(MenuAction::Push(MenuId::CharSel(0)))
    }
}

// ---------------------------------------------------------------------------
// Race mode

const RACE_MODE_TITLE: WidgetId = WidgetId(60);
const RACE_MODE_BASE: u16 = 61;

pub struct RaceModeScreen {
    modes: Vec<RaceMode>,
}

impl RaceModeScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        let modes = RaceMode::all();
        ui.widgets.add_label(RACE_MODE_TITLE, "Choose a race mode");
        for (i, mode) in modes.iter().enumerate() {
            ui.widgets.add(WidgetId(RACE_MODE_BASE + i as u16), mode.name());
        }
        ui.widgets.layout();
        RaceModeScreen { modes }
    }
}

impl Screen for RaceModeScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(RACE_MODE_BASE)? as usize;
        let mode = *self.modes.get(index)?;

        ui.race.mode = mode;
        match mode {
            RaceMode::GrandPrix => Some(MenuAction::Push(MenuId::GrandPrixSelect)),
            _ => Some(MenuAction::Push(MenuId::Difficulty)),
        }
    }
}

// ---------------------------------------------------------------------------
// Grand prix cup pick

const CUP_TITLE: WidgetId = WidgetId(70);
const CUP_BASE: u16 = 71;

pub struct GrandPrixSelectScreen;

impl GrandPrixSelectScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(CUP_TITLE, "Choose a cup");
        for (i, cup) in CUP_ROSTER.iter().enumerate() {
            ui.widgets.add(WidgetId(CUP_BASE + i as u16), cup);
        }
        ui.widgets.layout();
        GrandPrixSelectScreen
    }
}

impl Screen for GrandPrixSelectScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(CUP_BASE)? as usize;
        let cup = *CUP_ROSTER.get(index)?;

        ui.race.mode = RaceMode::GrandPrix;
        ui.race.grand_prix = Some(cup);
        Some(MenuAction::Push(MenuId::Difficulty))
    }
}

// ---------------------------------------------------------------------------
// Difficulty

const DIFFICULTY_TITLE: WidgetId = WidgetId(80);
const DIFFICULTY_BASE: u16 = 81;

pub struct DifficultyScreen {
    levels: Vec<Difficulty>,
}

impl DifficultyScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        let levels = Difficulty::all();
        ui.widgets.add_label(DIFFICULTY_TITLE, "Choose a difficulty");
        for (i, level) in levels.iter().enumerate() {
            ui.widgets.add(WidgetId(DIFFICULTY_BASE + i as u16), level.name());
        }
        ui.widgets.layout();
        DifficultyScreen { levels }
    }
}

impl Screen for DifficultyScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(DIFFICULTY_BASE)? as usize;
        let level = *self.levels.get(index)?;

        ui.race.difficulty = level;
        match ui.race.mode {
            // A cup brings its own track sequence; start immediately
            RaceMode::GrandPrix => Some(MenuAction::SwitchToRace),
            _ => Some(MenuAction::Push(MenuId::TrackSel)),
        }
    }
}

// ---------------------------------------------------------------------------
// Track pick

const TRACK_TITLE: WidgetId = WidgetId(90);
const TRACK_BASE: u16 = 91;

pub struct TrackSelScreen;

impl TrackSelScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(TRACK_TITLE, "Choose a track");
        for (i, track) in TRACK_ROSTER.iter().enumerate() {
            ui.widgets.add(WidgetId(TRACK_BASE + i as u16), track);
        }
        ui.widgets.layout();
        TrackSelScreen
    }
}

impl Screen for TrackSelScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(TRACK_BASE)? as usize;
        let track = *TRACK_ROSTER.get(index)?;

        ui.race.track = Some(track);
        Some(MenuAction::Push(MenuId::NumLaps))
    }
}

// ---------------------------------------------------------------------------
// Lap count - last stop before the race starts

const LAPS_TITLE: WidgetId = WidgetId(110);
const LAPS_BASE: u16 = 111;
const LAP_CHOICES: [u32; 6] = [1, 2, 3, 5, 7, 10];

pub struct NumLapsScreen;

impl NumLapsScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(LAPS_TITLE, "How many laps?");
        for (i, laps) in LAP_CHOICES.iter().enumerate() {
            let label = if *laps == 1 {
                "1 Lap".to_string()
            } else {
                format!("{} Laps", laps)
            };
            ui.widgets.add(WidgetId(LAPS_BASE + i as u16), &label);
        }
        ui.widgets.layout();
        NumLapsScreen
    }
}

impl Screen for NumLapsScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(LAPS_BASE)? as usize;
        let laps = *LAP_CHOICES.get(index)?;

        ui.race.num_laps = laps;
        Some(MenuAction::SwitchToRace)
    }
}
