//! # IO Module
//!
//! Adapter layer between the chat gateway and the domain logic.
//!
//! ## Supported Operations
//!
//! - **POST /api/calendar/sessions/:chat_id**: open a calendar, returns the keyboard
//! - **GET /api/calendar/sessions/:chat_id**: whether a calendar is open
//! - **DELETE /api/calendar/sessions/:chat_id**: close a calendar
//! - **GET /api/calendar/sessions/:chat_id/keyboard**: keyboard for the displayed month
//! - **POST /api/calendar/callback**: handle a tapped button
//! - **GET /api/calendar/tokens**: callback vocabulary

pub mod rest;

pub use rest::*;
