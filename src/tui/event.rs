//! Event handling for the TUI
//!
//! A background thread reads crossterm events and forwards the ones the app
//! cares about over a channel. All state changes stay on the main thread.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::read() {
                // Only presses; Windows also reports releases
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    sender.send(Event::Key(key))
                }
                Ok(CrosstermEvent::Resize(width, height)) => {
                    sender.send(Event::Resize(width, height))
                }
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal event");
                    return;
                }
            };

            if forwarded.is_err() {
                return;
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
