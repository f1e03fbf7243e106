//! Widget registry and focus tracking for the menu screens
//!
//! Screens register their controls here; the registry owns widget state
//! (labels, layout rectangles, highlight visuals) and tracks which control
//! currently has focus. Selection is stored as a [`WidgetId`] token rather
//! than an index so a screen that is torn down and later recreated can have
//! its old selection restored - screens use stable id constants for their
//! widgets, so the token resolves against the fresh instance.
//!
//! Rendering is not done here. The renderer walks `widgets()` and draws
//! each entry from its rect, label and visual state.

/// Opaque handle naming one widget
///
/// Ids are chosen by the screen that registers the widget and are expected
/// to be stable across screen recreation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u16);

/// Screen-space rectangle assigned by `layout()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

// Layout constants; text metrics match the 6px-per-glyph bitmap font
// scaled 3x that the renderer uses.
const ITEM_HEIGHT: u32 = 48;
const GLYPH_WIDTH: u32 = 6;
const TEXT_SCALE: u32 = 3;
const LABEL_PADDING: u32 = 24;

// Per-second decay rates for the highlight visuals
const LIGHTEN_FADE: f32 = 2.0;
const PULSE_FADE: f32 = 3.0;

/// One registered control
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    label: String,
    focusable: bool,
    rect: Rect,
    brightness: f32,
    pulse: f32,
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Non-focusable widgets are static text rows; navigation skips them
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Highlight intensity (0.0 = idle, 1.0 = just lightened)
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Pulse animation phase (0.0 = idle, 1.0 = just pulsed)
    pub fn pulse_phase(&self) -> f32 {
        self.pulse
    }
}

/// Registry of the active screen's widgets plus the focus token
///
/// Only one screen's widgets are registered at a time; the menu stack
/// clears the registry when it swaps screens. The selection token
/// intentionally survives `clear()` so it can be matched against the next
/// screen's widgets.
#[derive(Debug)]
pub struct WidgetManager {
    widgets: Vec<Widget>,
    selected: Option<WidgetId>,
    screen_width: u32,
    screen_height: u32,
}

impl WidgetManager {
    pub fn new() -> Self {
        WidgetManager {
            widgets: Vec::new(),
            selected: None,
            screen_width: 800,
            screen_height: 600,
        }
    }

    /// Register a focusable widget (button-like control)
    pub fn add(&mut self, id: WidgetId, label: &str) {
        self.insert(id, label, true);
    }

    /// Register a non-focusable text row
    pub fn add_label(&mut self, id: WidgetId, label: &str) {
        self.insert(id, label, false);
    }

    fn insert(&mut self, id: WidgetId, label: &str, focusable: bool) {
        if self.widgets.iter().any(|w| w.id == id) {
            log::warn!("widget id {:?} registered twice; keeping first", id);
            return;
        }
        self.widgets.push(Widget {
            id,
            label: label.to_string(),
            focusable,
            rect: Rect::default(),
            brightness: 0.0,
            pulse: 0.0,
        });
    }

    /// Replace a widget's label (e.g. a toggle flipping its value) and
    /// recompute layout for the new text width
    pub fn set_label(&mut self, id: WidgetId, label: &str) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.label = label.to_string();
            self.layout();
        }
    }

    /// Remove all widgets. The selection token is kept; see module docs.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Currently focused widget token, if any
    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    /// Set the focus token directly (used for focus restore)
    pub fn set_selected(&mut self, id: WidgetId) {
        self.selected = Some(id);
    }

    /// Move focus to the next focusable widget, wrapping at the end
    pub fn select_next(&mut self) -> Option<WidgetId> {
        self.step_selection(1)
    }

    /// Move focus to the previous focusable widget, wrapping at the start
    pub fn select_prev(&mut self) -> Option<WidgetId> {
        self.step_selection(-1)
    }

    fn step_selection(&mut self, dir: i32) -> Option<WidgetId> {
        let order: Vec<WidgetId> = self
            .widgets
            .iter()
            .filter(|w| w.focusable)
            .map(|w| w.id)
            .collect();
        if order.is_empty() {
            return None;
        }

        let next = match self
            .selected
            .and_then(|id| order.iter().position(|&w| w == id))
        {
            Some(i) => {
                let n = order.len() as i32;
                let stepped = (i as i32 + dir).rem_euclid(n) as usize;
                order[stepped]
            }
            // Nothing focused (or a stale token from a previous screen):
            // start at the first focusable widget
            None => order[0],
        };

        self.selected = Some(next);
        self.pulse(next);
        Some(next)
    }

    /// Flash the widget's highlight to full brightness
    pub fn lighten(&mut self, id: WidgetId) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.brightness = 1.0;
        }
    }

    /// Kick off the pulse animation on a widget
    pub fn pulse(&mut self, id: WidgetId) {
        if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
            w.pulse = 1.0;
        }
    }

    /// Screen size used by `layout()`; relayouts immediately
    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.layout();
    }

    /// Recompute every widget's rectangle: one centered vertical list
    pub fn layout(&mut self) {
        let count = self.widgets.len() as u32;
        let total_height = count * ITEM_HEIGHT;
        let start_y = (self.screen_height.saturating_sub(total_height) / 2) as i32;

        for (i, w) in self.widgets.iter_mut().enumerate() {
            let text_width = w.label.len() as u32 * GLYPH_WIDTH * TEXT_SCALE;
            let width = text_width + LABEL_PADDING * 2;
            w.rect = Rect {
                x: (self.screen_width.saturating_sub(width) / 2) as i32,
                y: start_y + i as i32 * ITEM_HEIGHT as i32,
                w: width,
                h: ITEM_HEIGHT,
            };
        }
    }

    /// Advance the highlight visuals; called once per frame
    pub fn animate(&mut self, dt: f32) {
        for w in &mut self.widgets {
            w.brightness = (w.brightness - dt * LIGHTEN_FADE).max(0.0);
            w.pulse = (w.pulse - dt * PULSE_FADE).max(0.0);
        }
    }
}

impl Default for WidgetManager {
    fn default() -> Self {
        Self::new()
    }
}
