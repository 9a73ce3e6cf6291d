//! TOML configuration parsing and validation

use crate::types::{Config, DatePickerConfig};
use crate::{ConfigError, Result};
use std::path::Path;

/// Presentation variants the shared input control understands
pub const VARIANTS: &[&str] = &["default", "filter"];

/// Parse config from TOML string
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(ConfigError::TomlParse)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from a TOML file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Validate configuration for consistency
fn validate_config(config: &Config) -> Result<()> {
    validate_date_picker(&config.date_picker)?;
    validate_bindings(&config.bindings);

    if config.ui.sidebar_width == 0 {
        return Err(ConfigError::Validation(
            "ui.sidebar_width must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_date_picker(picker: &DatePickerConfig) -> Result<()> {
    if !VARIANTS.contains(&picker.variant.to_lowercase().as_str()) {
        return Err(ConfigError::Validation(format!(
            "date_picker.variant must be one of {:?}, got {:?}",
            VARIANTS, picker.variant
        )));
    }

    if picker.first_weekday.parse::<chrono::Weekday>().is_err() {
        return Err(ConfigError::Validation(format!(
            "date_picker.first_weekday is not a weekday: {:?}",
            picker.first_weekday
        )));
    }

    if picker.time_step_minutes == 0 || picker.time_step_minutes > 12 * 60 {
        return Err(ConfigError::Validation(format!(
            "date_picker.time_step_minutes must be within 1..=720, got {}",
            picker.time_step_minutes
        )));
    }

    if let (Some(min), Some(max)) = (picker.min_date, picker.max_date) {
        if min > max {
            return Err(ConfigError::Validation(format!(
                "date_picker.min_date {} is after max_date {}",
                min, max
            )));
        }
    }

    Ok(())
}

/// Warn about bindings that will be skipped when the keybind map is built
fn validate_bindings(bindings: &crate::types::Bindings) {
    let all_bindings = [
        ("global", &bindings.global),
        ("sidebar", &bindings.sidebar),
        ("form", &bindings.form),
        ("date_input", &bindings.date_input),
        ("calendar", &bindings.calendar),
    ];

    for (context_name, binding_map) in all_bindings {
        for (key_str, action_str) in binding_map {
            if let Err(e) = crate::keybind::KeyPattern::parse(key_str) {
                tracing::warn!(
                    "Invalid key pattern in [bindings.{}]: {} ({})",
                    context_name,
                    key_str,
                    e
                );
            }

            if crate::actions::Action::from_str(action_str).is_none() {
                tracing::warn!(
                    "Invalid action in [bindings.{}]: {}",
                    context_name,
                    action_str
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = parse_toml("").unwrap();
        assert_eq!(config.date_picker.variant, "default");
        assert_eq!(config.date_picker.time_step_minutes, 30);
        assert!(config.ui.sidebar_visible);
        assert!(!config.shell.resources.is_empty());
    }

    #[test]
    fn test_parse_date_picker_section() {
        let config = parse_toml(
            r#"
            [date_picker]
            variant = "filter"
            first_weekday = "monday"
            show_time = true
            time_step_minutes = 15
            min_date = "2024-01-01"
            max_date = "2024-12-31"
            "#,
        )
        .unwrap();
        let picker = config.date_picker;
        assert_eq!(picker.variant, "filter");
        assert!(picker.show_time);
        assert_eq!(picker.time_step_minutes, 15);
        assert_eq!(
            picker.min_date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_parse_shell_section() {
        let config = parse_toml(
            r#"
            [[shell.resources]]
            id = "orders"
            name = "Orders"
            navigation = "Shop"

            [[shell.pages]]
            name = "Stats"
            "#,
        )
        .unwrap();
        assert_eq!(config.shell.resources.len(), 1);
        assert_eq!(config.shell.resources[0].navigation.as_deref(), Some("Shop"));
        assert_eq!(config.shell.pages[0].name, "Stats");
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let err = parse_toml("[date_picker]\nvariant = \"neon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_bad_weekday() {
        assert!(parse_toml("[date_picker]\nfirst_weekday = \"someday\"\n").is_err());
    }

    #[test]
    fn test_rejects_zero_time_step() {
        assert!(parse_toml("[date_picker]\ntime_step_minutes = 0\n").is_err());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = parse_toml(
            "[date_picker]\nmin_date = \"2024-06-01\"\nmax_date = \"2024-01-01\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("after max_date"));
    }

    #[test]
    fn test_invalid_binding_is_not_fatal() {
        let config = parse_toml("[bindings.global]\n\"Hyper-x\" = \"quit\"\n").unwrap();
        assert_eq!(config.bindings.global.len(), 1);
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_toml("[ui\nsidebar_width = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
