//! Month-grid calendar surface

use super::value::SelectedDate;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Calendar presentation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    pub first_weekday: Weekday,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Show a time row and keep the stepped time on pick
    pub show_time: bool,
    pub time_step_minutes: u32,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Sun,
            min_date: None,
            max_date: None,
            show_time: false,
            time_step_minutes: 30,
        }
    }
}

impl CalendarOptions {
    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.min_date.map_or(true, |min| date >= min)
            && self.max_date.map_or(true, |max| date <= max)
    }

    fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let date = self.min_date.map_or(date, |min| date.max(min));
        self.max_date.map_or(date, |max| date.min(max))
    }
}

/// Keyboard-level commands the calendar understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCommand {
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    TimeForward,
    TimeBack,
    /// Pick the day under the cursor
    Pick,
}

/// The calendar shown while the overlay is open
///
/// Seeded once when the overlay opens. The cursor is the keyboard-highlighted
/// day; the displayed month always follows it.
#[derive(Debug, Clone)]
pub struct CalendarSurface {
    options: CalendarOptions,
    today: NaiveDate,
    selected: Option<SelectedDate>,
    cursor: NaiveDate,
    /// Minutes since midnight applied to picks
    minutes: u32,
}

impl CalendarSurface {
    pub fn new(seed: Option<SelectedDate>, options: CalendarOptions, today: NaiveDate) -> Self {
        let cursor = options.clamp(seed.and_then(|s| s.date()).unwrap_or(today));
        let minutes = seed
            .map(|s| s.hour.min(23) * 60 + s.minute.min(59))
            .unwrap_or(0);
        Self {
            options,
            today,
            selected: seed,
            cursor,
            minutes,
        }
    }

    /// Follow a new owner value while open
    ///
    /// The selection always mirrors the value. Cursor and pick time move
    /// only when the value parsed, so half-typed text leaves them be.
    pub fn reseed(&mut self, seed: Option<SelectedDate>) {
        self.selected = seed;
        let Some(seed) = seed else {
            return;
        };
        if let Some(date) = seed.date() {
            self.cursor = self.options.clamp(date);
        }
        self.minutes = seed.hour.min(23) * 60 + seed.minute.min(59);
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected(&self) -> Option<SelectedDate> {
        self.selected
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected.and_then(|s| s.date())
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// First day of the displayed month
    pub fn view_month(&self) -> NaiveDate {
        self.cursor.with_day(1).unwrap_or(self.cursor)
    }

    /// Hour and minute a pick will carry
    pub fn time(&self) -> (u32, u32) {
        (self.minutes / 60, self.minutes % 60)
    }

    pub fn title(&self) -> String {
        self.view_month().format("%B %Y").to_string()
    }

    /// Two-letter weekday labels starting at the configured first weekday
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        let mut day = self.options.first_weekday;
        let mut labels = [""; 7];
        for label in labels.iter_mut() {
            *label = weekday_label(day);
            day = day.succ();
        }
        labels
    }

    /// Six weeks of days covering the displayed month, including the
    /// trailing and leading days of the neighbouring months
    pub fn grid(&self) -> [[NaiveDate; 7]; 6] {
        let first = self.view_month();
        let offset = (first.weekday().num_days_from_sunday() + 7
            - self.options.first_weekday.num_days_from_sunday())
            % 7;
        let start = first
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(first);

        let mut grid = [[start; 7]; 6];
        let mut day = start;
        for week in grid.iter_mut() {
            for cell in week.iter_mut() {
                *cell = day;
                day = day.succ_opt().unwrap_or(day);
            }
        }
        grid
    }

    pub fn in_view_month(&self, date: NaiveDate) -> bool {
        date.year() == self.cursor.year() && date.month() == self.cursor.month()
    }

    pub fn is_pickable(&self, date: NaiveDate) -> bool {
        self.options.in_range(date)
    }

    pub fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = self.options.clamp(date);
        }
    }

    /// Move by whole months, clamping the day to the target month's length
    pub fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor
                .checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = self.options.clamp(date);
        }
    }

    /// Step the pick time, wrapping within the day
    pub fn step_time(&mut self, forward: bool) {
        let step = self.options.time_step_minutes.max(1) % MINUTES_PER_DAY;
        self.minutes = if forward {
            (self.minutes + step) % MINUTES_PER_DAY
        } else {
            (self.minutes + MINUTES_PER_DAY - step) % MINUTES_PER_DAY
        };
    }

    /// Apply a navigation command; returns false for [`CalendarCommand::Pick`],
    /// which the owning picker handles
    pub fn navigate(&mut self, command: CalendarCommand) -> bool {
        match command {
            CalendarCommand::PrevDay => self.move_days(-1),
            CalendarCommand::NextDay => self.move_days(1),
            CalendarCommand::PrevWeek => self.move_days(-7),
            CalendarCommand::NextWeek => self.move_days(7),
            CalendarCommand::PrevMonth => self.move_months(-1),
            CalendarCommand::NextMonth => self.move_months(1),
            CalendarCommand::TimeForward => self.step_time(true),
            CalendarCommand::TimeBack => self.step_time(false),
            CalendarCommand::Pick => return false,
        }
        true
    }

    /// The value a pick of `date` produces, or None when the day is disabled
    pub fn pick(&self, date: NaiveDate) -> Option<SelectedDate> {
        if !self.is_pickable(date) {
            return None;
        }
        let (hour, minute) = self.time();
        Some(SelectedDate::from_date(date, hour, minute))
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn surface(seed: Option<SelectedDate>) -> CalendarSurface {
        CalendarSurface::new(seed, CalendarOptions::default(), date(2024, 3, 5))
    }

    #[test]
    fn test_cursor_starts_on_seed_or_today() {
        let seeded = surface(Some(SelectedDate::new(2023, 7, 14, 9, 30)));
        assert_eq!(seeded.cursor(), date(2023, 7, 14));
        assert_eq!(seeded.time(), (9, 30));
        assert_eq!(seeded.title(), "July 2023");

        let unseeded = surface(None);
        assert_eq!(unseeded.cursor(), date(2024, 3, 5));
        assert_eq!(unseeded.time(), (0, 0));
    }

    #[test]
    fn test_grid_starts_on_first_weekday() {
        // March 2024 starts on a Friday
        let cal = surface(None);
        let grid = cal.grid();
        assert_eq!(grid[0][0], date(2024, 2, 25));
        assert_eq!(grid[0][5], date(2024, 3, 1));
        assert_eq!(grid[5][6], date(2024, 4, 6));
        assert_eq!(cal.weekday_labels()[0], "Su");

        let options = CalendarOptions {
            first_weekday: Weekday::Mon,
            ..CalendarOptions::default()
        };
        let cal = CalendarSurface::new(None, options, date(2024, 3, 5));
        assert_eq!(cal.grid()[0][0], date(2024, 2, 26));
        assert_eq!(cal.weekday_labels(), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_outside_days_are_pickable() {
        let cal = surface(None);
        let leading = cal.grid()[0][0];
        assert!(!cal.in_view_month(leading));
        assert_eq!(cal.pick(leading), Some(SelectedDate::new(2024, 2, 25, 0, 0)));
    }

    #[test]
    fn test_navigation_crosses_months() {
        let mut cal = surface(Some(SelectedDate::new(2024, 1, 31, 0, 0)));
        cal.navigate(CalendarCommand::NextDay);
        assert_eq!(cal.cursor(), date(2024, 2, 1));
        cal.navigate(CalendarCommand::PrevWeek);
        assert_eq!(cal.cursor(), date(2024, 1, 25));
    }

    #[test]
    fn test_month_step_clamps_day() {
        let mut cal = surface(Some(SelectedDate::new(2024, 1, 31, 0, 0)));
        cal.navigate(CalendarCommand::NextMonth);
        assert_eq!(cal.cursor(), date(2024, 2, 29));
        cal.navigate(CalendarCommand::PrevMonth);
        assert_eq!(cal.cursor(), date(2024, 1, 29));
    }

    #[test]
    fn test_range_clamps_cursor_and_disables_days() {
        let options = CalendarOptions {
            min_date: Some(date(2024, 3, 1)),
            max_date: Some(date(2024, 3, 31)),
            ..CalendarOptions::default()
        };
        let mut cal = CalendarSurface::new(
            Some(SelectedDate::new(2023, 12, 25, 0, 0)),
            options,
            date(2024, 3, 5),
        );
        assert_eq!(cal.cursor(), date(2024, 3, 1));
        cal.navigate(CalendarCommand::PrevDay);
        assert_eq!(cal.cursor(), date(2024, 3, 1));
        cal.navigate(CalendarCommand::NextMonth);
        assert_eq!(cal.cursor(), date(2024, 3, 31));
        assert_eq!(cal.pick(date(2024, 4, 1)), None);
        assert!(cal.pick(date(2024, 3, 31)).is_some());
    }

    #[test]
    fn test_time_steps_wrap_within_day() {
        let mut cal = surface(Some(SelectedDate::new(2024, 3, 5, 23, 45)));
        cal.navigate(CalendarCommand::TimeForward);
        assert_eq!(cal.time(), (0, 15));
        assert_eq!(cal.cursor(), date(2024, 3, 5));
        cal.navigate(CalendarCommand::TimeBack);
        cal.navigate(CalendarCommand::TimeBack);
        assert_eq!(cal.time(), (23, 15));
    }

    #[test]
    fn test_pick_carries_time() {
        let cal = surface(Some(SelectedDate::new(2024, 3, 5, 14, 0)));
        assert_eq!(
            cal.pick(date(2024, 3, 9)),
            Some(SelectedDate::new(2024, 3, 9, 14, 0))
        );
    }

    #[test]
    fn test_reseed_follows_new_value() {
        let mut cal = surface(Some(SelectedDate::new(2024, 3, 5, 9, 0)));
        cal.reseed(Some(SelectedDate::new(2025, 1, 1, 10, 30)));
        assert_eq!(cal.selected(), Some(SelectedDate::new(2025, 1, 1, 10, 30)));
        assert_eq!(cal.cursor(), date(2025, 1, 1));
        assert_eq!(cal.time(), (10, 30));
        assert_eq!(
            cal.pick(cal.cursor()),
            Some(SelectedDate::new(2025, 1, 1, 10, 30))
        );

        // Half-typed text clears the selection but leaves cursor and time
        cal.reseed(None);
        assert_eq!(cal.selected(), None);
        assert_eq!(cal.cursor(), date(2025, 1, 1));
        assert_eq!(cal.time(), (10, 30));
    }

    #[test]
    fn test_pick_is_not_navigation() {
        let mut cal = surface(None);
        assert!(!cal.navigate(CalendarCommand::Pick));
        assert_eq!(cal.cursor(), date(2024, 3, 5));
    }
}
