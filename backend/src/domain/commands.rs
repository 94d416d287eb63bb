//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod calendar {
    use chrono::NaiveDate;

    /// Input for opening a calendar.
    ///
    /// Dates may carry any day; they are normalized to the 1st of their month.
    #[derive(Debug, Clone)]
    pub struct InitializeCalendarCommand {
        pub base_date: NaiveDate,
        pub min_date: NaiveDate,
        pub max_date: NaiveDate,
        pub month_names: Vec<String>,
        pub day_names: Vec<String>,
    }
}
