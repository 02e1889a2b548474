//! Reusable widgets for the TUI

pub mod input;

pub use input::{InputLine, TextInput};
