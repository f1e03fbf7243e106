//! Front-End Menu System
//!
//! This module holds the menu stack and every screen the front-end can
//! show. Navigation is stack-shaped: opening a sub-menu pushes its
//! identity, leaving pops it, and the stack rebuilds the live screen
//! object whenever its depth changes.
//!
//! # Architecture
//!
//! - [`stack::MenuStack`] owns the identity stack and the single live
//!   screen; the shell drives it once per frame.
//! - [`screen::Screen`] is the capability each concrete screen implements;
//!   screens request transitions by returning a [`screen::MenuAction`]
//!   instead of mutating the stack themselves.
//! - Widgets live in the crate-level [`crate::widget::WidgetManager`];
//!   the stack clears it between screens and restores the remembered
//!   focus token after a rebuild.
//!
//! # Screens
//!
//! - [`main_menu`] - entry screen and top-level flows
//! - [`char_sel`] - per-player kart pick chain
//! - [`race_setup`] - player count, mode, cup, difficulty, track, laps
//! - [`race_gui`] - race HUD, pause menu, results, grand-prix ending
//! - [`options`] - display / sound / controls configuration
//! - [`info_pages`] - help and credits

pub mod char_sel;
pub mod info_pages;
pub mod main_menu;
pub mod options;
pub mod race_gui;
pub mod race_setup;
pub mod screen;
pub mod stack;

pub use screen::{GuiInput, MenuAction, Screen, UiContext};
pub use stack::{MenuId, MenuStack, StackEntry};
