//! REST endpoints for calendar sessions under `/api/calendar`.
//!
//! `POST /callback` classifies the token before looking at the chat's session,
//! the same order [`CalendarSessionService::handle_callback`] uses: a string
//! outside the vocabulary is `422 UNRECOGNIZED_TOKEN` even for a chat with no
//! calendar, and only a valid token for a closed chat is `409 STATE_ERROR`.
//!
//! [`CalendarSessionService::handle_callback`]: crate::domain::CalendarSessionService::handle_callback
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tracing::{error, info, warn};

use crate::domain::{is_calendar_callback, CalendarError, CallbackToken, DEFAULT_CHAT_ID};
use crate::io::rest::mappers::CalendarMapper;
use crate::AppState;
use shared::{
    CallbackQuery, ErrorResponse, InitCalendarRequest, SessionStatusResponse, TeardownResponse,
    TokenVocabularyResponse,
};

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/:chat_id",
            get(get_session_status)
                .post(initialize_calendar)
                .delete(teardown_calendar),
        )
        .route("/sessions/:chat_id/keyboard", get(get_keyboard))
        .route("/callback", post(handle_callback))
        .route("/tokens", get(get_tokens))
}

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        let status = match &self {
            CalendarError::Config(_) => StatusCode::BAD_REQUEST,
            CalendarError::NotInitialized => StatusCode::CONFLICT,
            CalendarError::UnrecognizedToken(_) | CalendarError::OutOfRangeDay { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Open a calendar for a chat and return its first keyboard
async fn initialize_calendar(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Json(request): Json<InitCalendarRequest>,
) -> Result<impl IntoResponse, CalendarError> {
    info!("POST /api/calendar/sessions/{} - request: {:?}", chat_id, request);

    let today = chrono::Local::now().date_naive();
    let command = CalendarMapper::to_command(request, &state.config.calendar, today)?;

    let service = &state.calendar_session_service;
    let cursor = service.initialize(&chat_id, command).map_err(|e| {
        error!("Failed to initialize calendar for {}: {}", chat_id, e);
        e
    })?;
    let grid = service.build_grid(&chat_id)?;

    Ok((
        StatusCode::OK,
        Json(CalendarMapper::to_keyboard_response(&chat_id, cursor, grid)),
    ))
}

/// Close a chat's calendar
async fn teardown_calendar(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/calendar/sessions/{}", chat_id);

    let removed = state.calendar_session_service.teardown(&chat_id);
    let success_message = if removed {
        format!("Calendar for {} closed", chat_id)
    } else {
        format!("No open calendar for {}", chat_id)
    };
    Json(TeardownResponse {
        chat_id,
        removed,
        success_message,
    })
}

async fn get_session_status(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/calendar/sessions/{}", chat_id);

    let initialized = state.calendar_session_service.is_initialized(&chat_id);
    Json(SessionStatusResponse {
        chat_id,
        initialized,
    })
}

/// Render the keyboard for the month currently shown in a chat
async fn get_keyboard(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<impl IntoResponse, CalendarError> {
    info!("GET /api/calendar/sessions/{}/keyboard", chat_id);

    let service = &state.calendar_session_service;
    let cursor = service.cursor(&chat_id)?;
    let grid = service.build_grid(&chat_id)?;
    Ok(Json(CalendarMapper::to_keyboard_response(&chat_id, cursor, grid)))
}

/// Handle a tapped button forwarded by the chat gateway
async fn handle_callback(
    State(state): State<AppState>,
    Json(query): Json<CallbackQuery>,
) -> Result<impl IntoResponse, CalendarError> {
    info!("POST /api/calendar/callback - query: {:?}", query);

    if !is_calendar_callback(&query) {
        warn!("Callback {:?} does not belong to the calendar", query.data);
        return Err(CalendarError::UnrecognizedToken(query.data));
    }

    let chat_id = query.chat_id.as_deref().unwrap_or(DEFAULT_CHAT_ID);
    let (outcome, grid) = state
        .calendar_session_service
        .handle_callback(chat_id, &query.data)?;

    Ok(Json(CalendarMapper::outcome_to_dto(outcome, grid)))
}

/// List every callback string the calendar understands
async fn get_tokens() -> impl IntoResponse {
    Json(TokenVocabularyResponse {
        tokens: CallbackToken::vocabulary(),
    })
}
