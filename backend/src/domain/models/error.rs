#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid calendar configuration: {0}")]
    Config(String),
    #[error("Calendar is not initialized")]
    NotInitialized,
    #[error("Unrecognized calendar callback: {0:?}")]
    UnrecognizedToken(String),
    #[error("Day {day} is outside the displayed month ({days_in_month} days)")]
    OutOfRangeDay { day: u8, days_in_month: u32 },
}

impl CalendarError {
    /// Stable machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            CalendarError::Config(_) => "CONFIG_ERROR",
            CalendarError::NotInitialized => "STATE_ERROR",
            CalendarError::UnrecognizedToken(_) => "UNRECOGNIZED_TOKEN",
            CalendarError::OutOfRangeDay { .. } => "OUT_OF_RANGE_DAY",
        }
    }
}
