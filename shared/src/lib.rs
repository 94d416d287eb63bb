use serde::{Deserialize, Serialize};

/// A single tappable button of an inline keyboard.
///
/// Field names follow the chat platform's inline keyboard JSON so the markup
/// can be forwarded to the gateway without further mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Visible label
    pub text: String,
    /// Token echoed back by the platform when the button is tapped
    pub callback_data: String,
}

/// Inline keyboard markup: ordered rows of ordered buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Append a row of buttons
    pub fn row(&mut self, buttons: Vec<InlineKeyboardButton>) -> &mut Self {
        self.inline_keyboard.push(buttons);
        self
    }
}

/// A tap notification delivered by the chat platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Chat the calendar belongs to. Missing means the default session.
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Opaque callback data of the tapped button
    pub data: String,
}

/// Request to open a calendar for a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InitCalendarRequest {
    /// Month to show first (ISO `YYYY-MM-DD`), defaults to today
    pub base_date: Option<String>,
    /// Earliest reachable month (ISO `YYYY-MM-DD`)
    pub min_date: Option<String>,
    /// Latest reachable month (ISO `YYYY-MM-DD`)
    pub max_date: Option<String>,
    /// Twelve month names, January first
    pub month_names: Option<Vec<String>>,
    /// Seven weekday names, Monday first
    pub day_names: Option<Vec<String>>,
}

/// Keyboard for the month currently shown in a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarKeyboardResponse {
    pub chat_id: String,
    pub year: i32,
    pub month: u32,
    pub reply_markup: InlineKeyboardMarkup,
}

/// Result of handling a tapped calendar button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CallbackResponse {
    /// Cursor moved; the gateway should replace the keyboard
    Navigated {
        year: i32,
        month: u32,
        reply_markup: InlineKeyboardMarkup,
    },
    /// A day was picked (ISO `YYYY-MM-DD`)
    DateSelected { date: String },
    /// A non-interactive cell was tapped; nothing to update
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub chat_id: String,
    pub initialized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeardownResponse {
    pub chat_id: String,
    pub removed: bool,
    pub success_message: String,
}

/// Full callback vocabulary recognised by the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenVocabularyResponse {
    pub tokens: Vec<String>,
}

/// Error body returned by every calendar endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
