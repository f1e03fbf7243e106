//! Character select: one screen instance per player
//!
//! In a split-screen setup the screens chain - player 0 picks, then the
//! same identity is pushed for player 1, and so on. Once the last player
//! has a kart the flow moves on to the race-mode pick.

use crate::gui::screen::{MenuAction, Screen, UiContext};
use crate::gui::stack::MenuId;
use crate::race::KART_ROSTER;
use crate::widget::WidgetId;

const TITLE: WidgetId = WidgetId(40);
const KART_BASE: u16 = 41;

pub struct CharSelScreen {
    player: usize,
}

impl CharSelScreen {
    pub fn new(player: usize, ui: &mut UiContext<'_>) -> Self {
        let player_name = ui
            .config
            .players
            .get(player)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        ui.widgets
            .add_label(TITLE, &format!("{} - choose your kart", player_name));
        for (i, kart) in KART_ROSTER.iter().enumerate() {
            ui.widgets.add(WidgetId(KART_BASE + i as u16), kart);
        }
        ui.widgets.layout();
        CharSelScreen { player }
    }
}

impl Screen for CharSelScreen {
    fn select(&mut self, ui: &mut UiContext<'_>) -> Option<MenuAction> {
        let selected = ui.widgets.selected()?;
        let index = selected.0.checked_sub(KART_BASE)? as usize;
        let kart = *KART_ROSTER.get(index)?;

        if let Some(slot) = ui.race.karts.get_mut(self.player) {
            *slot = Some(kart);
        }
        log::debug!("player {} picked {}", self.player, kart);

        let next = self.player + 1;
        if next < ui.race.num_players {
            Some(MenuAction::Push(MenuId::CharSel(next)))
        } else {
            Some(MenuAction::Push(MenuId::RaceMode))
        }
    }
}
