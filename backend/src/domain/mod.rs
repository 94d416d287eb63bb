//! # Domain Module
//!
//! Contains the calendar logic, independent of the chat platform and of the
//! transport used to reach it.
//!
//! ## Module Organization
//!
//! - **models**: cursor month, label lists, callback token vocabulary, errors
//! - **calendar**: the calendar widget (grid rendering and tap handling)
//! - **session_service**: one widget per chat, with the open/closed lifecycle
//! - **commands**: input types used by the services
//!
//! ## Business Rules
//!
//! - Weeks start on Monday
//! - The cursor never leaves the inclusive `min..=max` month range
//! - Day taps are only valid for days that exist in the displayed month
//! - Tapping a non-interactive cell is routine and changes nothing

pub mod calendar;
pub mod commands;
pub mod models;
pub mod session_service;

pub use calendar::*;
pub use models::*;
pub use session_service::*;
