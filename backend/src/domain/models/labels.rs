//! Domain model for the caller-supplied month and weekday names.
use super::error::CalendarError;

pub const MONTH_COUNT: usize = 12;
pub const WEEKDAY_COUNT: usize = 7;

/// Placeholder occupying index 0 so month numbers index the list directly
const MONTH_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLabels {
    month_names: Vec<String>, // placeholder + January..December
    day_names: Vec<String>,   // Monday..Sunday
}

impl CalendarLabels {
    /// Validate and take ownership of the name lists
    pub fn new(month_names: Vec<String>, day_names: Vec<String>) -> Result<Self, CalendarError> {
        if month_names.len() != MONTH_COUNT {
            return Err(CalendarError::Config(format!(
                "Length of month names is not {} (got {})",
                MONTH_COUNT,
                month_names.len()
            )));
        }
        if day_names.len() != WEEKDAY_COUNT {
            return Err(CalendarError::Config(format!(
                "Length of day names is not {} (got {})",
                WEEKDAY_COUNT,
                day_names.len()
            )));
        }

        let mut indexed = Vec::with_capacity(MONTH_COUNT + 1);
        indexed.push(MONTH_PLACEHOLDER.to_string());
        indexed.extend(month_names);

        Ok(Self {
            month_names: indexed,
            day_names,
        })
    }

    /// Name of a month, 1 = January. Out-of-range months get the placeholder.
    pub fn month_name(&self, month: u32) -> &str {
        self.month_names
            .get(month as usize)
            .map(String::as_str)
            .unwrap_or(MONTH_PLACEHOLDER)
    }

    /// Weekday names, Monday first
    pub fn day_names(&self) -> &[String] {
        &self.day_names
    }
}

pub fn default_month_names() -> Vec<String> {
    [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_day_names() -> Vec<String> {
    ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
