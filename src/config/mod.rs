//! Configuration module for the piggy bank
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings (language, currency, theme, window mode)
//! - Run-time options assembled once at startup

pub mod paths;
pub mod settings;

pub use paths::PiggyPaths;
pub use settings::{Language, Settings, Theme, WindowMode};

/// Number of history rows shown per log when history is visible
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Run-time configuration built once in `main` and handed to every component
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: PiggyPaths,
    /// Rows per log in history views
    pub history_limit: usize,
    /// Reject zero and negative amounts
    pub strict_amounts: bool,
}

impl AppConfig {
    pub fn new(paths: PiggyPaths) -> Self {
        Self {
            paths,
            history_limit: DEFAULT_HISTORY_LIMIT,
            strict_amounts: false,
        }
    }

    pub fn strict_amounts(mut self, strict: bool) -> Self {
        self.strict_amounts = strict;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
