//! # REST API Interface Layer
//!
//! HTTP endpoints used by the chat gateway to open calendars, fetch keyboards
//! and forward tapped buttons. This layer only translates between the JSON
//! DTOs of the `shared` crate and the domain services; domain errors become
//! status codes with an `ErrorResponse` body:
//!
//! - `Config` → 400
//! - `NotInitialized` → 409
//! - `UnrecognizedToken`, `OutOfRangeDay` → 422

pub mod calendar_apis;
pub mod mappers;
