//! Calendar widget logic.
//!
//! A [`CalendarWidget`] owns the displayed month (the cursor), the inclusive
//! navigation bounds and the label lists. It renders the month as a grid of
//! `(label, token)` cells and interprets tapped tokens. Presentation on the chat
//! platform is handled by the io layer; everything computed here is plain data.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::commands::calendar::InitializeCalendarCommand;
use super::models::{CalendarError, CalendarLabels, CallbackToken, YearMonth};

pub const DAYS_PER_WEEK: usize = 7;

pub const PREVIOUS_LABEL: &str = "<<";
pub const NEXT_LABEL: &str = ">>";
/// Chat platforms reject empty button text, so blanks are a single space
pub const BLANK_LABEL: &str = " ";

/// One button of the calendar grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub label: String,
    pub token: CallbackToken,
}

impl GridCell {
    fn new(label: impl Into<String>, token: CallbackToken) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }

    fn blank() -> Self {
        Self::new(BLANK_LABEL, CallbackToken::WrongChoice)
    }

    fn day(day: u32) -> Self {
        // Days never exceed 31, which fits the token range
        Self::new(day.to_string(), CallbackToken::Day(day as u8))
    }
}

/// Rendered month: header row, weekday row, then 4 to 6 week rows.
/// Only [`CalendarWidget::build_grid`] produces one, so the layout always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    rows: Vec<Vec<GridCell>>,
}

impl CalendarGrid {
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<GridCell>> {
        self.rows
    }
}

/// What happened when a token was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The cursor moved to this month
    Navigated(YearMonth),
    /// A day of the displayed month was picked
    DateSelected(NaiveDate),
    /// Non-interactive cell, or an arrow that no longer applies
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWidget {
    cursor: YearMonth,
    min: YearMonth,
    max: YearMonth,
    labels: CalendarLabels,
}

impl CalendarWidget {
    /// Create a widget showing `base_date`'s month, bounded by the months of
    /// `min_date` and `max_date` (inclusive)
    pub fn new(command: InitializeCalendarCommand) -> Result<Self, CalendarError> {
        let labels = CalendarLabels::new(command.month_names, command.day_names)?;

        let cursor = YearMonth::from_date(command.base_date);
        let min = YearMonth::from_date(command.min_date);
        let max = YearMonth::from_date(command.max_date);

        if min > max {
            return Err(CalendarError::Config(format!(
                "Minimum month {} is after maximum month {}",
                min, max
            )));
        }
        if cursor < min || cursor > max {
            return Err(CalendarError::Config(format!(
                "Base month {} is outside {}..={}",
                cursor, min, max
            )));
        }

        info!("🗓️ Calendar initialized at {} (bounds {}..={})", cursor, min, max);
        Ok(Self {
            cursor,
            min,
            max,
            labels,
        })
    }

    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    /// Month/year caption shown in the header, e.g. "February 2024"
    pub fn header_label(&self) -> String {
        format!("{} {}", self.labels.month_name(self.cursor.month()), self.cursor.year())
    }

    pub fn can_navigate_previous(&self) -> bool {
        self.cursor > self.min
    }

    pub fn can_navigate_next(&self) -> bool {
        self.cursor < self.max
    }

    /// Move to the previous month. Returns false if already at the lower bound.
    pub fn navigate_previous_month(&mut self) -> bool {
        if !self.can_navigate_previous() {
            return false;
        }
        match self.cursor.previous() {
            Some(previous) => {
                self.cursor = previous;
                true
            }
            None => false,
        }
    }

    /// Move to the next month. Returns false if already at the upper bound.
    pub fn navigate_next_month(&mut self) -> bool {
        if !self.can_navigate_next() {
            return false;
        }
        match self.cursor.next() {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    /// Render the displayed month
    pub fn build_grid(&self) -> CalendarGrid {
        let mut rows = Vec::with_capacity(8);
        rows.push(self.header_row());
        rows.push(self.weekday_row());
        rows.extend(self.week_rows());

        let grid = CalendarGrid { rows };
        debug!("🗓️ Built grid for {} with {} rows", self.cursor, grid.rows().len());
        grid
    }

    fn header_row(&self) -> Vec<GridCell> {
        let previous = if self.can_navigate_previous() {
            GridCell::new(PREVIOUS_LABEL, CallbackToken::PreviousMonth)
        } else {
            GridCell::blank()
        };
        let next = if self.can_navigate_next() {
            GridCell::new(NEXT_LABEL, CallbackToken::NextMonth)
        } else {
            GridCell::blank()
        };

        vec![
            previous,
            GridCell::new(self.header_label(), CallbackToken::WrongChoice),
            next,
        ]
    }

    fn weekday_row(&self) -> Vec<GridCell> {
        self.labels
            .day_names()
            .iter()
            .map(|name| GridCell::new(name.clone(), CallbackToken::WrongChoice))
            .collect()
    }

    fn week_rows(&self) -> Vec<Vec<GridCell>> {
        let days_in_month = self.cursor.days_in_month();
        let lead_offset = self.cursor.first_weekday_offset();

        let mut rows = Vec::with_capacity(6);

        // Padding before the 1st so that columns line up with Monday..Sunday
        let mut week: Vec<GridCell> = (0..lead_offset).map(|_| GridCell::blank()).collect();

        for day in 1..=days_in_month {
            week.push(GridCell::day(day));
            if week.len() == DAYS_PER_WEEK {
                rows.push(std::mem::take(&mut week));
            }
        }

        if !week.is_empty() {
            week.resize_with(DAYS_PER_WEEK, GridCell::blank);
            rows.push(week);
        }

        rows
    }

    /// Apply an already parsed token
    pub fn handle(&mut self, token: CallbackToken) -> Result<CallbackOutcome, CalendarError> {
        match token {
            CallbackToken::WrongChoice => Ok(CallbackOutcome::Ignored),
            CallbackToken::PreviousMonth => {
                if self.navigate_previous_month() {
                    info!("📅 Navigated to previous month: {}", self.cursor);
                    Ok(CallbackOutcome::Navigated(self.cursor))
                } else {
                    debug!("Previous month tapped at lower bound {}, ignoring", self.min);
                    Ok(CallbackOutcome::Ignored)
                }
            }
            CallbackToken::NextMonth => {
                if self.navigate_next_month() {
                    info!("📅 Navigated to next month: {}", self.cursor);
                    Ok(CallbackOutcome::Navigated(self.cursor))
                } else {
                    debug!("Next month tapped at upper bound {}, ignoring", self.max);
                    Ok(CallbackOutcome::Ignored)
                }
            }
            CallbackToken::Day(day) => {
                let days_in_month = self.cursor.days_in_month();
                let out_of_range = CalendarError::OutOfRangeDay { day, days_in_month };
                if day == 0 || u32::from(day) > days_in_month {
                    warn!("Day {} tapped for {} which has {} days", day, self.cursor, days_in_month);
                    return Err(out_of_range);
                }
                let date = self.cursor.with_day(u32::from(day)).ok_or(out_of_range)?;
                info!("✅ Date selected: {}", date);
                Ok(CallbackOutcome::DateSelected(date))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::labels::{default_day_names, default_month_names};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn command(base: NaiveDate, min: NaiveDate, max: NaiveDate) -> InitializeCalendarCommand {
        InitializeCalendarCommand {
            base_date: base,
            min_date: min,
            max_date: max,
            month_names: default_month_names(),
            day_names: default_day_names(),
        }
    }

    fn header_of(grid: &CalendarGrid) -> &[GridCell] {
        &grid.rows()[0]
    }

    fn weekdays_of(grid: &CalendarGrid) -> &[GridCell] {
        &grid.rows()[1]
    }

    fn weeks_of(grid: &CalendarGrid) -> &[Vec<GridCell>] {
        &grid.rows()[2..]
    }

    fn days_of(grid: &CalendarGrid) -> Vec<u8> {
        weeks_of(grid)
            .iter()
            .flatten()
            .filter_map(|cell| match cell.token {
                CallbackToken::Day(day) => Some(day),
                _ => None,
            })
            .collect()
    }

    fn tap(widget: &mut CalendarWidget, data: &str) -> Result<CallbackOutcome, CalendarError> {
        widget.handle(data.parse()?)
    }

    fn create_test_widget(year: i32, month: u32) -> CalendarWidget {
        CalendarWidget::new(command(date(year, month, 1), date(2000, 1, 1), date(2099, 12, 1))).unwrap()
    }

    #[test]
    fn test_new_normalizes_dates_to_first_of_month() {
        let widget = CalendarWidget::new(command(
            date(2024, 2, 17),
            date(2023, 5, 31),
            date(2025, 1, 9),
        ))
        .unwrap();

        assert_eq!(widget.cursor(), YearMonth::new(2024, 2).unwrap());
        assert_eq!(widget.min, YearMonth::new(2023, 5).unwrap());
        assert_eq!(widget.max, YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn test_new_rejects_bad_label_lengths() {
        let mut cmd = command(date(2024, 2, 1), date(2024, 1, 1), date(2024, 3, 1));
        cmd.month_names.push("Thirteenth".to_string());
        assert!(matches!(CalendarWidget::new(cmd), Err(CalendarError::Config(_))));

        let mut cmd = command(date(2024, 2, 1), date(2024, 1, 1), date(2024, 3, 1));
        cmd.day_names.pop();
        assert!(matches!(CalendarWidget::new(cmd), Err(CalendarError::Config(_))));
    }

    #[test]
    fn test_new_rejects_unordered_bounds() {
        let result = CalendarWidget::new(command(date(2024, 2, 1), date(2024, 3, 1), date(2024, 1, 1)));
        assert!(matches!(result, Err(CalendarError::Config(ref msg)) if msg.contains("after")));

        let result = CalendarWidget::new(command(date(2024, 5, 1), date(2024, 1, 1), date(2024, 3, 1)));
        assert!(matches!(result, Err(CalendarError::Config(ref msg)) if msg.contains("outside")));

        // Same month on all three is fine, regardless of the day
        let result = CalendarWidget::new(command(date(2024, 2, 28), date(2024, 2, 29), date(2024, 2, 1)));
        assert!(result.is_ok());
    }

    #[test]
    fn test_header_row() {
        let widget = CalendarWidget::new(command(date(2024, 2, 1), date(2024, 1, 1), date(2024, 3, 1))).unwrap();
        let grid = widget.build_grid();
        let header = header_of(&grid);

        assert_eq!(header.len(), 3);
        assert_eq!(header[0], GridCell::new("<<", CallbackToken::PreviousMonth));
        assert_eq!(header[1], GridCell::new("February 2024", CallbackToken::WrongChoice));
        assert_eq!(header[2], GridCell::new(">>", CallbackToken::NextMonth));
    }

    #[test]
    fn test_header_arrows_disabled_at_bounds() {
        let widget = CalendarWidget::new(command(date(2024, 2, 1), date(2024, 2, 1), date(2024, 2, 1))).unwrap();
        let grid = widget.build_grid();

        assert_eq!(header_of(&grid)[0], GridCell::blank());
        assert_eq!(header_of(&grid)[2], GridCell::blank());
    }

    #[test]
    fn test_weekday_row_uses_day_names() {
        let grid = create_test_widget(2024, 2).build_grid();
        let labels: Vec<&str> = weekdays_of(&grid).iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
        assert!(weekdays_of(&grid).iter().all(|c| c.token == CallbackToken::WrongChoice));
    }

    #[test]
    fn test_february_2024_layout() {
        // 2024-02-01 was a Thursday
        let grid = create_test_widget(2024, 2).build_grid();
        let weeks = weeks_of(&grid);

        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..3].iter().all(|c| *c == GridCell::blank()));
        assert_eq!(weeks[0][3], GridCell::new("1", CallbackToken::Day(1)));
        assert_eq!(weeks[0][6], GridCell::new("4", CallbackToken::Day(4)));
        assert_eq!(weeks[1][0], GridCell::new("5", CallbackToken::Day(5)));
        assert_eq!(weeks[4][3], GridCell::new("29", CallbackToken::Day(29)));
        assert!(weeks[4][4..].iter().all(|c| *c == GridCell::blank()));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_padding() {
        // 2024-01-01 was a Monday
        let grid = create_test_widget(2024, 1).build_grid();
        assert_eq!(weeks_of(&grid)[0][0], GridCell::new("1", CallbackToken::Day(1)));
        assert_eq!(weeks_of(&grid).len(), 5);
    }

    #[test]
    fn test_four_and_six_week_months() {
        // February 2021 starts on Monday and has 28 days
        assert_eq!(weeks_of(&create_test_widget(2021, 2).build_grid()).len(), 4);
        // March 2026 starts on Sunday and has 31 days
        assert_eq!(weeks_of(&create_test_widget(2026, 3).build_grid()).len(), 6);
    }

    #[test]
    fn test_grid_day_count_matches_month_length() {
        for year in [1900, 2000, 2023, 2024, 2025] {
            for month in 1..=12 {
                let widget = create_test_widget(year, month);
                let grid = widget.build_grid();
                let expected = crate::domain::models::year_month::days_in_month(year, month);

                let days = days_of(&grid);
                assert_eq!(days.len() as u32, expected, "{}-{}", year, month);
                assert_eq!(days, (1..=expected as u8).collect::<Vec<_>>());

                assert!((4..=6).contains(&weeks_of(&grid).len()));
                assert!(weeks_of(&grid).iter().all(|week| week.len() == DAYS_PER_WEEK));
                assert_eq!(header_of(&grid).len(), 3);
                assert_eq!(weekdays_of(&grid).len(), 7);
            }
        }
    }

    #[test]
    fn test_leap_year_february() {
        assert_eq!(days_of(&create_test_widget(2024, 2).build_grid()).len(), 29);
        assert_eq!(days_of(&create_test_widget(2023, 2).build_grid()).len(), 28);
    }

    #[test]
    fn test_every_emitted_token_is_recognized() {
        let mut widget = CalendarWidget::new(command(date(2023, 6, 1), date(2023, 6, 1), date(2025, 6, 1))).unwrap();
        loop {
            let grid = widget.build_grid();
            for cell in grid.rows().iter().flatten() {
                assert!(CallbackToken::is_calendar_token(&cell.token.to_string()));
            }
            if !widget.navigate_next_month() {
                break;
            }
        }
    }

    #[test]
    fn test_wrong_choice_is_ignored() {
        let mut widget = create_test_widget(2024, 2);
        let before = widget.clone();

        let outcome = tap(&mut widget, "inline_calendar_wrong_choice").unwrap();
        assert_eq!(outcome, CallbackOutcome::Ignored);
        assert_eq!(widget, before);
    }

    #[test]
    fn test_day_selection_returns_date_without_moving_cursor() {
        let mut widget = create_test_widget(2024, 2);

        let outcome = tap(&mut widget, "inline_calendar_day_15").unwrap();
        assert_eq!(outcome, CallbackOutcome::DateSelected(date(2024, 2, 15)));
        assert_eq!(widget.cursor(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_day_outside_month_is_rejected() {
        let mut widget = create_test_widget(2024, 4);

        let result = tap(&mut widget, "inline_calendar_day_31");
        assert_eq!(result, Err(CalendarError::OutOfRangeDay { day: 31, days_in_month: 30 }));

        let result = tap(&mut widget, "inline_calendar_day_0");
        assert_eq!(result, Err(CalendarError::OutOfRangeDay { day: 0, days_in_month: 30 }));

        assert_eq!(
            tap(&mut widget, "inline_calendar_day_30").unwrap(),
            CallbackOutcome::DateSelected(date(2024, 4, 30))
        );
    }

    #[test]
    fn test_unrecognized_token() {
        let mut widget = create_test_widget(2024, 2);
        let result = tap(&mut widget, "inline_calendar_day_32");
        assert_eq!(result, Err(CalendarError::UnrecognizedToken("inline_calendar_day_32".to_string())));
    }

    #[test]
    fn test_navigation_rolls_over_year() {
        let mut widget = create_test_widget(2025, 1);
        assert_eq!(
            tap(&mut widget, "inline_calendar_previous_month").unwrap(),
            CallbackOutcome::Navigated(YearMonth::new(2024, 12).unwrap())
        );
        assert_eq!(
            tap(&mut widget, "inline_calendar_next_month").unwrap(),
            CallbackOutcome::Navigated(YearMonth::new(2025, 1).unwrap())
        );

        let mut widget = create_test_widget(2025, 12);
        tap(&mut widget, "inline_calendar_next_month").unwrap();
        assert_eq!(widget.cursor(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(widget.header_label(), "January 2026");
    }

    #[test]
    fn test_navigation_reaches_max_in_exact_steps() {
        let min = date(2023, 10, 1);
        let max = date(2025, 3, 1);
        let mut widget = CalendarWidget::new(command(min, min, max)).unwrap();
        let expected_steps = (2025 - 2023) * 12 + (3 - 10);

        let mut steps = 0;
        while header_of(&widget.build_grid())[2].token == CallbackToken::NextMonth {
            tap(&mut widget, "inline_calendar_next_month").unwrap();
            steps += 1;
        }
        assert_eq!(steps, expected_steps);
        assert_eq!(widget.cursor(), YearMonth::from_date(max));
        assert_eq!(header_of(&widget.build_grid())[2].token, CallbackToken::WrongChoice);
        assert_eq!(header_of(&widget.build_grid())[0].token, CallbackToken::PreviousMonth);

        // A stale arrow at the bound leaves the cursor in place
        assert_eq!(
            tap(&mut widget, "inline_calendar_next_month").unwrap(),
            CallbackOutcome::Ignored
        );
        assert_eq!(widget.cursor(), YearMonth::from_date(max));

        let mut steps = 0;
        while header_of(&widget.build_grid())[0].token == CallbackToken::PreviousMonth {
            tap(&mut widget, "inline_calendar_previous_month").unwrap();
            steps += 1;
        }
        assert_eq!(steps, expected_steps);
        assert_eq!(widget.cursor(), YearMonth::from_date(min));
        assert_eq!(
            tap(&mut widget, "inline_calendar_previous_month").unwrap(),
            CallbackOutcome::Ignored
        );
    }

    #[test]
    fn test_header_label_tracks_cursor_with_custom_names() {
        let names: Vec<String> = (1..=12).map(|m| format!("M{}", m)).collect();
        let mut widget = CalendarWidget::new(InitializeCalendarCommand {
            base_date: date(2024, 11, 1),
            min_date: date(2024, 1, 1),
            max_date: date(2025, 12, 1),
            month_names: names,
            day_names: default_day_names(),
        })
        .unwrap();

        for _ in 0..4 {
            let cursor = widget.cursor();
            assert_eq!(
                header_of(&widget.build_grid())[1].label,
                format!("M{} {}", cursor.month(), cursor.year())
            );
            widget.navigate_next_month();
        }
    }
}
