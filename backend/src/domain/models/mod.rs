pub mod error;
pub mod labels;
pub mod token;
pub mod year_month;

pub use error::CalendarError;
pub use labels::CalendarLabels;
pub use token::{is_calendar_callback, CallbackToken};
pub use year_month::YearMonth;
