//! Static info screens: help and credits

use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::widget::WidgetId;

// ---------------------------------------------------------------------------
// Help

const HELP_TITLE: WidgetId = WidgetId(190);
const HELP_ROW_BASE: u16 = 191;
const HELP_BACK: WidgetId = WidgetId(197);

pub struct HelpScreen;

impl HelpScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        // Show player one's actual bindings so the page stays true after
        // the user rebinds anything
        let controls = ui
            .config
            .players
            .first()
            .map(|p| p.controls.clone())
            .unwrap_or_else(crate::config::ControlBindings::arrows);

        let rows = [
            format!("Steer with {} and {}", controls.steer_left, controls.steer_right),
            format!("Accelerate with {}, brake with {}", controls.accelerate, controls.brake),
            format!("Hold {} to drift through corners", controls.drift),
            format!("Stuck? Press {} to get back on track", controls.rescue),
            "First across the finish line wins".to_string(),
        ];

        ui.widgets.add_label(HELP_TITLE, "HOW TO PLAY");
        for (i, row) in rows.iter().enumerate() {
            ui.widgets.add_label(WidgetId(HELP_ROW_BASE + i as u16), row);
        }
        ui.widgets.add(HELP_BACK, "Back");
        ui.widgets.layout();
        HelpScreen
    }
}

impl Screen for HelpScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            HELP_BACK => Some(MenuAction::Pop),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Credits

const CREDITS_TITLE: WidgetId = WidgetId(240);
const CREDITS_ROW_BASE: u16 = 241;
const CREDITS_BACK: WidgetId = WidgetId(245);

/// Seconds each credits page stays up before flipping
const PAGE_SECONDS: f32 = 4.0;
const ROWS_PER_PAGE: usize = 3;

const CREDIT_PAGES: [[&str; ROWS_PER_PAGE]; 3] = [
    ["Game design", "The Rally Kart team", ""],
    ["Programming", "Front-end and race code", "Track tooling"],
    ["Thanks for playing!", "", ""],
];

pub struct CreditsScreen {
    page: usize,
    page_timer: f32,
}

impl CreditsScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(CREDITS_TITLE, "CREDITS");
        for (i, row) in CREDIT_PAGES[0].iter().enumerate() {
            ui.widgets.add_label(WidgetId(CREDITS_ROW_BASE + i as u16), row);
        }
        ui.widgets.add(CREDITS_BACK, "Back");
        ui.widgets.layout();
        CreditsScreen {
            page: 0,
            page_timer: 0.0,
        }
    }

    fn show_page(&self, ui: &mut UiContext<'_>) {
        for (i, row) in CREDIT_PAGES[self.page].iter().enumerate() {
            ui.widgets.set_label(WidgetId(CREDITS_ROW_BASE + i as u16), row);
        }
    }
}

impl Screen for CreditsScreen {
    fn update(&mut self, dt: f32, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        self.page_timer += dt;
        if self.page_timer >= PAGE_SECONDS {
            self.page_timer -= PAGE_SECONDS;
            self.page = (self.page + 1) % CREDIT_PAGES.len();
            self.show_page(ui);
        }
        None
    }

    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            CREDITS_BACK => Some(MenuAction::Pop),
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
    fn test_help_shows_current_bindings() {
        let mut rig = Rig::new();
        rig.config.players[0].controls = crate::config::ControlBindings::wasd();
        HelpScreen::new(&mut rig.ui());

        let row = rig.widgets.get(WidgetId(HELP_ROW_BASE)).unwrap();
        assert_eq!(row.label(), "Steer with A and D");
    }

    #[test]
    fn test_credits_pages_flip_on_timer() {
        let mut rig = Rig::new();
        let mut credits = CreditsScreen::new(&mut rig.ui());
        assert_eq!(
            rig.widgets.get(WidgetId(CREDITS_ROW_BASE)).unwrap().label(),
            "Game design"
        );

        credits.update(PAGE_SECONDS + 0.1, &mut rig.ui());
        assert_eq!(
            rig.widgets.get(WidgetId(CREDITS_ROW_BASE)).unwrap().label(),
            "Programming"
        );

        // Two more flips wrap back to the first page
        credits.update(PAGE_SECONDS, &mut rig.ui());
        credits.update(PAGE_SECONDS, &mut rig.ui());
        assert_eq!(
            rig.widgets.get(WidgetId(CREDITS_ROW_BASE)).unwrap().label(),
            "Game design"
        );
    }

    #[test]
    fn test_back_buttons_pop() {
        let mut rig = Rig::new();
        let mut help = HelpScreen::new(&mut rig.ui());
        rig.widgets.set_selected(HELP_BACK);
        assert_eq!(help.select(&mut rig.ui()), Some(MenuAction::Pop));
    }
}
