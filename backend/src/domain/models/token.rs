//! Callback tokens attached to calendar buttons.
//!
//! The vocabulary is closed and fixed: `inline_calendar_wrong_choice`,
//! `inline_calendar_previous_month`, `inline_calendar_next_month` and
//! `inline_calendar_day_0` .. `inline_calendar_day_31`. Front ends that already
//! dispatch on these strings rely on them byte for byte.
use std::fmt;
use std::str::FromStr;

use shared::CallbackQuery;

use super::error::CalendarError;

pub const TOKEN_PREFIX: &str = "inline_calendar";

/// Highest day number present in the vocabulary
pub const MAX_DAY_TOKEN: u8 = 31;

const WRONG_CHOICE: &str = "wrong_choice";
const PREVIOUS_MONTH: &str = "previous_month";
const NEXT_MONTH: &str = "next_month";
const DAY: &str = "day_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackToken {
    /// Non-interactive cell (padding, weekday header, month label, disabled arrow)
    WrongChoice,
    PreviousMonth,
    NextMonth,
    /// Day of the displayed month, 0..=31
    Day(u8),
}

impl CallbackToken {
    /// True iff `data` belongs to the calendar vocabulary
    pub fn is_calendar_token(data: &str) -> bool {
        data.parse::<CallbackToken>().is_ok()
    }

    /// Every token string the calendar understands
    pub fn vocabulary() -> Vec<String> {
        let mut tokens = vec![
            CallbackToken::WrongChoice.to_string(),
            CallbackToken::PreviousMonth.to_string(),
            CallbackToken::NextMonth.to_string(),
        ];
        tokens.extend((0..=MAX_DAY_TOKEN).map(|day| CallbackToken::Day(day).to_string()));
        tokens
    }
}

/// Check whether a callback query was produced by a calendar keyboard
pub fn is_calendar_callback(query: &CallbackQuery) -> bool {
    CallbackToken::is_calendar_token(&query.data)
}

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackToken::WrongChoice => write!(f, "{}_{}", TOKEN_PREFIX, WRONG_CHOICE),
            CallbackToken::PreviousMonth => write!(f, "{}_{}", TOKEN_PREFIX, PREVIOUS_MONTH),
            CallbackToken::NextMonth => write!(f, "{}_{}", TOKEN_PREFIX, NEXT_MONTH),
            CallbackToken::Day(day) => write!(f, "{}_{}{}", TOKEN_PREFIX, DAY, day),
        }
    }
}

impl FromStr for CallbackToken {
    type Err = CalendarError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let unrecognized = || CalendarError::UnrecognizedToken(data.to_string());

        let suffix = data
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .ok_or_else(unrecognized)?;

        match suffix {
            WRONG_CHOICE => Ok(CallbackToken::WrongChoice),
            PREVIOUS_MONTH => Ok(CallbackToken::PreviousMonth),
            NEXT_MONTH => Ok(CallbackToken::NextMonth),
            _ => {
                let digits = suffix.strip_prefix(DAY).ok_or_else(unrecognized)?;
                let day: u8 = digits.parse().map_err(|_| unrecognized())?;
                // Reject "+5", "05" and friends: only the canonical spelling is in the vocabulary
                if day > MAX_DAY_TOKEN || day.to_string() != digits {
                    return Err(unrecognized());
                }
                Ok(CallbackToken::Day(day))
            }
        }
    }
}
