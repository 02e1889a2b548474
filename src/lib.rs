//! Piggybank - a small savings tracker for the terminal
//!
//! This library keeps a single running balance, appends every deposit and
//! withdrawal to its own log, and remembers a handful of display
//! preferences. Two front ends sit on top of it: a numbered text menu and a
//! ratatui window.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings and run-time options
//! - `error`: Custom error types
//! - `models`: Amounts and transaction records
//! - `storage`: Balance file, settings file and transaction logs
//! - `services`: Ledger rules and preference changes
//! - `i18n`: German and English UI strings
//! - `display`: Shared text formatting
//! - `cli`: Text menu and one-shot subcommands
//! - `tui`: Terminal window front end
//!
//! # Example
//!
//! ```rust,ignore
//! use piggybank::config::{AppConfig, PiggyPaths};
//! use piggybank::services::LedgerService;
//! use piggybank::storage::Storage;
//!
//! let paths = PiggyPaths::new()?;
//! let storage = Storage::new(paths.clone())?;
//! let mut ledger = LedgerService::open(&storage, &AppConfig::new(paths));
//! ledger.deposit("10,50")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::PiggyError;
