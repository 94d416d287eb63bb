//! # Inline Calendar
//!
//! Month-grid date picker for chat-bot inline keyboards.
//!
//! ## Architecture
//!
//! ```text
//! Chat gateway (renders keyboards, forwards taps)
//!     ↓
//! IO Layer (REST API, DTO mapping)
//!     ↓
//! Domain Layer (calendar widget, per-chat sessions)
//! ```

pub mod config;
pub mod domain;
pub mod io;

use std::sync::Arc;

use axum::{http::HeaderValue, http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::CalendarSessionService;

/// Main application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub calendar_session_service: CalendarSessionService,
    pub config: Arc<AppConfig>,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: AppConfig) -> AppState {
    info!("Setting up calendar sessions");
    AppState {
        calendar_session_service: CalendarSessionService::new(),
        config: Arc::new(config),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Result<Router> {
    let cors = match app_state.config.server.allowed_origin.as_deref() {
        Some(origin) => CorsLayer::new().allow_origin(origin.parse::<HeaderValue>()?),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::DELETE])
    .allow_headers(Any);

    let api_routes = Router::new().nest("/calendar", io::calendar_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
