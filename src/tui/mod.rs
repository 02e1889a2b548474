//! Terminal User Interface module
//!
//! The windowed front end: balance, amount entry, settings keys and, in the
//! larger window modes, the recent history of both logs.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
