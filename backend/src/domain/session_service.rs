//! Per-chat calendar sessions.
//!
//! Each chat gets its own [`CalendarWidget`], so two users paging through their
//! calendars never move each other's cursor. A chat without a widget is in the
//! uninitialized state and every operation except `initialize` and
//! `is_initialized` fails with [`CalendarError::NotInitialized`].
//!
//! Callbacks are checked in a fixed order: the token is classified first, then
//! the chat's session is looked up. A string outside the vocabulary is
//! therefore always `UnrecognizedToken`, whether or not the chat has a
//! calendar open; a valid token for a closed chat is `NotInitialized`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use super::calendar::{CalendarGrid, CalendarWidget, CallbackOutcome};
use super::commands::calendar::InitializeCalendarCommand;
use super::models::{CalendarError, CallbackToken, YearMonth};

/// Session key used when the caller does not identify a chat
pub const DEFAULT_CHAT_ID: &str = "default";

#[derive(Clone, Default)]
pub struct CalendarSessionService {
    sessions: Arc<Mutex<HashMap<String, CalendarWidget>>>,
}

impl CalendarSessionService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CalendarWidget>> {
        // Poisoned locks still hold consistent widgets
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Open (or reopen) the calendar for a chat and return the displayed month
    pub fn initialize(
        &self,
        chat_id: &str,
        command: InitializeCalendarCommand,
    ) -> Result<YearMonth, CalendarError> {
        let widget = CalendarWidget::new(command)?;
        let cursor = widget.cursor();

        let mut sessions = self.lock();
        let replaced = sessions.insert(chat_id.to_string(), widget).is_some();
        info!(
            "🗓️ Calendar session {} {} at {} ({} open)",
            chat_id,
            if replaced { "reinitialized" } else { "opened" },
            cursor,
            sessions.len()
        );
        Ok(cursor)
    }

    /// Close the calendar for a chat. Closing a closed calendar is a no-op.
    pub fn teardown(&self, chat_id: &str) -> bool {
        let mut sessions = self.lock();
        let removed = sessions.remove(chat_id).is_some();
        if removed {
            info!("🗓️ Calendar session {} closed ({} open)", chat_id, sessions.len());
        }
        removed
    }

    pub fn is_initialized(&self, chat_id: &str) -> bool {
        self.lock().contains_key(chat_id)
    }

    /// Month currently displayed in a chat
    pub fn cursor(&self, chat_id: &str) -> Result<YearMonth, CalendarError> {
        self.lock()
            .get(chat_id)
            .map(CalendarWidget::cursor)
            .ok_or(CalendarError::NotInitialized)
    }

    /// Render the keyboard grid for a chat
    pub fn build_grid(&self, chat_id: &str) -> Result<CalendarGrid, CalendarError> {
        self.lock()
            .get(chat_id)
            .map(CalendarWidget::build_grid)
            .ok_or(CalendarError::NotInitialized)
    }

    /// Apply a tapped callback to a chat's calendar.
    ///
    /// Navigation returns the new grid alongside the outcome so the caller can
    /// redraw without taking the lock twice.
    pub fn handle_callback(
        &self,
        chat_id: &str,
        data: &str,
    ) -> Result<(CallbackOutcome, Option<CalendarGrid>), CalendarError> {
        let token = data.parse::<CallbackToken>().map_err(|e| {
            warn!("Rejected calendar callback {:?} for chat {}", data, chat_id);
            e
        })?;

        let mut sessions = self.lock();
        let widget = sessions.get_mut(chat_id).ok_or(CalendarError::NotInitialized)?;

        let outcome = widget.handle(token)?;
        let grid = match outcome {
            CallbackOutcome::Navigated(_) => Some(widget.build_grid()),
            _ => None,
        };
        Ok((outcome, grid))
    }
}
