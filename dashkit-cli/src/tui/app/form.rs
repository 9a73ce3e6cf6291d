//! Record form owned by the main pane
//!
//! The form is the owner of the date fields' values: it stores whatever a
//! picker reports through `Change` and hands it straight back through
//! `set_value`, the same round trip a controlled input goes through.

use crate::tui::state::FormField;
use crate::tui::widgets::date_picker::{
    CalendarOptions, DatePicker, ExternalValue, InputVariant,
};
use crate::tui::widgets::TextInput;
use dashkit_config::DatePickerConfig;

/// Calendar options for a configured picker
pub fn calendar_options(config: &DatePickerConfig) -> CalendarOptions {
    CalendarOptions {
        first_weekday: config
            .first_weekday
            .parse()
            .unwrap_or(chrono::Weekday::Sun),
        min_date: config.min_date,
        max_date: config.max_date,
        show_time: config.show_time,
        time_step_minutes: config.time_step_minutes,
    }
}

#[derive(Debug)]
pub struct RecordForm {
    pub title: TextInput,
    published_at: ExternalValue,
    created_after: ExternalValue,
    published_picker: DatePicker,
    created_picker: DatePicker,
}

impl RecordForm {
    /// `variant` styles the record's own date field; the list filter field
    /// always uses the filter look
    pub fn new(options: CalendarOptions, variant: InputVariant, published_at: ExternalValue) -> Self {
        let mut form = Self {
            title: TextInput::with_content("Hello world"),
            published_at,
            created_after: ExternalValue::Absent,
            published_picker: DatePicker::new()
                .with_variant(variant)
                .with_options(options.clone()),
            created_picker: DatePicker::new()
                .with_variant(InputVariant::Filter)
                .with_options(options),
        };
        form.published_picker.set_value(&form.published_at);
        form.created_picker.set_value(&form.created_after);
        form
    }

    pub fn value(&self, field: FormField) -> Option<&ExternalValue> {
        match field {
            FormField::Title => None,
            FormField::PublishedAt => Some(&self.published_at),
            FormField::CreatedAfter => Some(&self.created_after),
        }
    }

    pub fn picker(&self, field: FormField) -> Option<&DatePicker> {
        match field {
            FormField::Title => None,
            FormField::PublishedAt => Some(&self.published_picker),
            FormField::CreatedAfter => Some(&self.created_picker),
        }
    }

    pub fn picker_mut(&mut self, field: FormField) -> Option<&mut DatePicker> {
        match field {
            FormField::Title => None,
            FormField::PublishedAt => Some(&mut self.published_picker),
            FormField::CreatedAfter => Some(&mut self.created_picker),
        }
    }

    /// Store a reported change and feed it back into the picker
    pub fn commit(&mut self, field: FormField, text: String) {
        let (value, picker) = match field {
            FormField::Title => {
                self.title.set_content(text);
                return;
            }
            FormField::PublishedAt => (&mut self.published_at, &mut self.published_picker),
            FormField::CreatedAfter => (&mut self.created_after, &mut self.created_picker),
        };
        *value = ExternalValue::from_text(text);
        picker.set_value(value);
    }

    /// Replace a date value from outside, as a parent re-render would
    pub fn set_external(&mut self, field: FormField, external: ExternalValue) {
        let (value, picker) = match field {
            FormField::Title => return,
            FormField::PublishedAt => (&mut self.published_at, &mut self.published_picker),
            FormField::CreatedAfter => (&mut self.created_after, &mut self.created_picker),
        };
        *value = external;
        picker.set_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::date_picker::SelectedDate;

    fn form() -> RecordForm {
        RecordForm::new(
            CalendarOptions::default(),
            InputVariant::Default,
            ExternalValue::from_text("2024-03-05 09:00"),
        )
    }

    #[test]
    fn test_new_reconciles_initial_values() {
        let form = form();
        let picker = form.picker(FormField::PublishedAt).unwrap();
        assert_eq!(picker.text(), "2024-03-05 09:00");
        assert_eq!(picker.date_value(), Some(SelectedDate::new(2024, 3, 5, 9, 0)));
        assert_eq!(form.picker(FormField::CreatedAfter).unwrap().text(), "");
        assert_eq!(
            form.picker(FormField::CreatedAfter).unwrap().variant(),
            InputVariant::Filter
        );
    }

    #[test]
    fn test_commit_round_trips_through_owner() {
        let mut form = form();
        form.commit(FormField::PublishedAt, "2024-03-0".to_string());
        assert_eq!(
            form.value(FormField::PublishedAt),
            Some(&ExternalValue::RawText("2024-03-0".to_string()))
        );
        let picker = form.picker(FormField::PublishedAt).unwrap();
        assert_eq!(picker.text(), "2024-03-0");
        assert_eq!(picker.date_value(), None);

        form.commit(FormField::PublishedAt, String::new());
        assert_eq!(form.value(FormField::PublishedAt), Some(&ExternalValue::Absent));
    }

    #[test]
    fn test_structured_external_value() {
        let mut form = form();
        let dt = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 0)
            .unwrap();
        form.set_external(FormField::CreatedAfter, dt.into());
        let picker = form.picker(FormField::CreatedAfter).unwrap();
        assert_eq!(picker.text(), "2025-01-02 03:04");
        assert_eq!(picker.date_value(), None);
    }

    #[test]
    fn test_calendar_options_from_config() {
        let config = DatePickerConfig {
            first_weekday: "monday".to_string(),
            show_time: true,
            time_step_minutes: 15,
            ..DatePickerConfig::default()
        };
        let options = calendar_options(&config);
        assert_eq!(options.first_weekday, chrono::Weekday::Mon);
        assert!(options.show_time);
        assert_eq!(options.time_step_minutes, 15);
    }
}
