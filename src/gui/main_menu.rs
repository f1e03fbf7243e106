//! Main menu - the front-end's entry screen
//!
//! Every top-level flow starts here: the race setup chains, the options
//! tree, the info pages, and quitting the game.

use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::gui::stack::MenuId;
use crate::widget::WidgetId;

const TITLE: WidgetId = WidgetId(10);
const SINGLE_RACE: WidgetId = WidgetId(11);
const SPLIT_SCREEN: WidgetId = WidgetId(12);
const GRAND_PRIX: WidgetId = WidgetId(13);
const OPTIONS: WidgetId = WidgetId(14);
const HELP: WidgetId = WidgetId(15);
const CREDITS: WidgetId = WidgetId(16);
const QUIT: WidgetId = WidgetId(17);

pub struct MainMenuScreen;

impl MainMenuScreen {
    pub fn new(ui: &mut UiContext<'_>) -> Self {
        ui.widgets.add_label(TITLE, "RALLY KART");
        ui.widgets.add(SINGLE_RACE, "Single Race");
        ui.widgets.add(SPLIT_SCREEN, "Split Screen");
        ui.widgets.add(GRAND_PRIX, "Grand Prix");
        ui.widgets.add(OPTIONS, "Options");
        ui.widgets.add(HELP, "Help");
        ui.widgets.add(CREDITS, "Credits");
        ui.widgets.add(QUIT, "Quit");
        ui.widgets.layout();
        MainMenuScreen
    }
}

impl Screen for MainMenuScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        match ui.widgets.selected()? {
            SINGLE_RACE => {
                ui.race.num_players = 1;
                Some(MenuAction::Push(MenuId::CharSel(0)))
            }
            SPLIT_SCREEN => Some(MenuAction::Push(MenuId::NumPlayers)),
            GRAND_PRIX => {
                ui.race.num_players = 1;
                ui.race.mode = crate::race::RaceMode::GrandPrix;
                Some(MenuAction::Push(MenuId::GrandPrixSelect))
            }
            OPTIONS => Some(MenuAction::Push(MenuId::Options)),
            HELP => Some(MenuAction::Push(MenuId::Help)),
            CREDITS => Some(MenuAction::Push(MenuId::Credits)),
            QUIT => Some(MenuAction::Push(MenuId::ExitGame)),
            _ => None,
        }
    }
}
