use chrono::NaiveDate;
use shared::{
    CalendarKeyboardResponse, CallbackResponse, InitCalendarRequest, InlineKeyboardButton,
    InlineKeyboardMarkup,
};

use crate::config::CalendarDefaults;
use crate::domain::commands::calendar::InitializeCalendarCommand;
use crate::domain::{CalendarError, CalendarGrid, CallbackOutcome, YearMonth};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct CalendarMapper;

impl CalendarMapper {
    /// Convert a rendered grid to inline keyboard markup
    pub fn grid_to_markup(grid: CalendarGrid) -> InlineKeyboardMarkup {
        let mut markup = InlineKeyboardMarkup::default();
        for row in grid.into_rows() {
            markup.row(
                row.into_iter()
                    .map(|cell| InlineKeyboardButton {
                        text: cell.label,
                        callback_data: cell.token.to_string(),
                    })
                    .collect(),
            );
        }
        markup
    }

    pub fn to_keyboard_response(
        chat_id: &str,
        cursor: YearMonth,
        grid: CalendarGrid,
    ) -> CalendarKeyboardResponse {
        CalendarKeyboardResponse {
            chat_id: chat_id.to_string(),
            year: cursor.year(),
            month: cursor.month(),
            reply_markup: Self::grid_to_markup(grid),
        }
    }

    /// Convert a domain outcome (and the redrawn grid, if any) to the callback DTO
    pub fn outcome_to_dto(outcome: CallbackOutcome, grid: Option<CalendarGrid>) -> CallbackResponse {
        match outcome {
            CallbackOutcome::Navigated(cursor) => CallbackResponse::Navigated {
                year: cursor.year(),
                month: cursor.month(),
                reply_markup: grid.map(Self::grid_to_markup).unwrap_or_default(),
            },
            CallbackOutcome::DateSelected(date) => CallbackResponse::DateSelected {
                date: date.format(DATE_FORMAT).to_string(),
            },
            CallbackOutcome::Ignored => CallbackResponse::Ignored,
        }
    }

    /// Convert an init request to a domain command, filling gaps from the defaults.
    ///
    /// Without a base date the calendar opens on `today`. Missing bounds span
    /// `months_back`/`months_ahead` months around the base month.
    pub fn to_command(
        request: InitCalendarRequest,
        defaults: &CalendarDefaults,
        today: NaiveDate,
    ) -> Result<InitializeCalendarCommand, CalendarError> {
        let base_date = match request.base_date.as_deref() {
            Some(value) => Self::parse_date(value)?,
            None => today,
        };
        let base_month = YearMonth::from_date(base_date);

        let min_date = match request.min_date.as_deref() {
            Some(value) => Self::parse_date(value)?,
            None => base_month
                .minus_months(defaults.months_back)
                .ok_or_else(|| {
                    CalendarError::Config(format!(
                        "{} months before {} is outside the supported date range",
                        defaults.months_back, base_month
                    ))
                })?
                .first_day(),
        };
        let max_date = match request.max_date.as_deref() {
            Some(value) => Self::parse_date(value)?,
            None => base_month
                .plus_months(defaults.months_ahead)
                .ok_or_else(|| {
                    CalendarError::Config(format!(
                        "{} months after {} is outside the supported date range",
                        defaults.months_ahead, base_month
                    ))
                })?
                .first_day(),
        };

        Ok(InitializeCalendarCommand {
            base_date,
            min_date,
            max_date,
            month_names: request
                .month_names
                .unwrap_or_else(|| defaults.month_names.clone()),
            day_names: request
                .day_names
                .unwrap_or_else(|| defaults.day_names.clone()),
        })
    }

    /// Parse an ISO `YYYY-MM-DD` date
    pub fn parse_date(value: &str) -> Result<NaiveDate, CalendarError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|e| CalendarError::Config(format!("Invalid date {:?}: {}", value, e)))
    }
}
