//! In-race screens: the HUD, the pause menu, the results table and the
//! grand-prix ending
//!
//! The HUD is a screen like any other as far as the menu stack is
//! concerned - it just registers no widgets and flips the renderer into
//! the track view while it is up (the stack handles the mode switch).

use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::gui::stack::MenuId;
use crate::race::RaceMode;
use crate::widget::WidgetId;

// ---------------------------------------------------------------------------
// Race HUD

pub struct RaceHudScreen {
    race_time: f32,
}

impl RaceHudScreen {
    pub fn new() -> Self {
        RaceHudScreen { race_time: 0.0 }
    }

    /// Seconds since the HUD came up; the renderer draws this as the race
    /// clock
    pub fn race_time(&self) -> f32 {
        self.race_time
    }
}

impl Screen for RaceHudScreen {
    fn update(&mut self, dt: f32, _ui: &mut UiContext<'_>) -> Option<MenuAction> {
        self.race_time += dt;
        None
    }

    fn select(&mut self, _ui: &mut UiContext<'_>) -> Option<MenuAction> {
        None
    }

    /// Escape during a race pauses instead of leaving
    fn back(&mut self, _ui: &mut UiContext<'_>) -> Option<MenuAction> {
        Some(MenuAction::Push(MenuId::RaceMenu))
    }
}

impl Default for RaceHudScreen {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Pause menu, pushed on top of the HUD

const PAUSE_TITLE: WidgetId = WidgetId(210);
const PAUSE_RESUME: WidgetId = WidgetId(211);
const PAUSE_OPTIONS: WidgetId = WidgetId(212);
const PAUSE_QUIT_RACE: WidgetId = WidgetId(213);

pub struct RaceMenuScreen;

impl RaceMenuScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(PAUSE_TITLE, "PAUSED");
        ui.widgets.add(PAUSE_RESUME, "Resume Race");
        ui.widgets.add(PAUSE_OPTIONS, "Options");
        ui.widgets.add(PAUSE_QUIT_RACE, "Quit Race");
        ui.widgets.layout();
        RaceMenuScreen
    }
}

impl Screen for RaceMenuScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            PAUSE_RESUME => Some(MenuAction::Pop),
            PAUSE_OPTIONS => Some(MenuAction::Push(MenuId::Options)),
            PAUSE_QUIT_RACE => Some(MenuAction::ReplaceAll(MenuId::MainMenu)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Results

const RESULTS_TITLE: WidgetId = WidgetId(220);
const RESULTS_ROW_BASE: u16 = 221;
const RESULTS_CONTINUE: WidgetId = WidgetId(228);

pub struct RaceResultsScreen;

impl RaceResultsScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(RESULTS_TITLE, "RACE RESULTS");
        for player in 0..ui.race.num_players {
            let kart = ui.race.kart_for(player).unwrap_or("?");
            let name = ui
                .config
                .players
                .get(player)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            ui.widgets.add_label(
                WidgetId(RESULTS_ROW_BASE + player as u16),
                &format!("{} - {}", name, kart),
            );
        }
        ui.widgets.add(RESULTS_CONTINUE, "Continue");
        ui.widgets.layout();
        RaceResultsScreen
    }
}

impl Screen for RaceResultsScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            RESULTS_CONTINUE => match ui.race.mode {
                RaceMode::GrandPrix => Some(MenuAction::ReplaceAll(MenuId::GrandPrixEnd)),
                _ => Some(MenuAction::ReplaceAll(MenuId::MainMenu)),
            },
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Grand prix ending

const GP_END_TITLE: WidgetId = WidgetId(230);
const GP_END_CUP: WidgetId = WidgetId(231);
const GP_END_WINNER: WidgetId = WidgetId(232);
const GP_END_CONTINUE: WidgetId = WidgetId(233);

/// Seconds between celebratory pulses of the banner
const BANNER_PULSE_INTERVAL: f32 = 1.5;

pub struct GrandPrixEndScreen {
    pulse_timer: f32,
}

impl GrandPrixEndScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        let cup = ui.race.grand_prix.unwrap_or("Grand Prix");
        let winner = ui.race.kart_for(0).unwrap_or("?");

        ui.widgets.add_label(GP_END_TITLE, "GRAND PRIX COMPLETE");
        ui.widgets.add_label(GP_END_CUP, cup);
        ui.widgets
            .add_label(GP_END_WINNER, &format!("Winner: {}", winner));
        ui.widgets.add(GP_END_CONTINUE, "Continue");
        ui.widgets.layout();

        GrandPrixEndScreen { pulse_timer: 0.0 }
    }
}

impl Screen for GrandPrixEndScreen {
    fn update(&mut self, dt: f32, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        self.pulse_timer += dt;
        if self.pulse_timer >= BANNER_PULSE_INTERVAL {
            self.pulse_timer -= BANNER_PULSE_INTERVAL;
            ui.widgets.pulse(GP_END_TITLE);
        }
        None
    }

    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            GP_END_CONTINUE => Some(MenuAction::ReplaceAll(MenuId::MainMenu)),
            _ => None,
        }
    }
}
