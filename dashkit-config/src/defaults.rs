//! Default configuration

use crate::types::{
    Bindings, Config, DatePickerConfig, Options, PageConfig, ResourceConfig, ShellConfig, UiConfig,
};
use std::collections::HashMap;

/// Get the default configuration
pub fn default_config() -> Config {
    Config {
        options: Options::default(),
        ui: UiConfig::default(),
        date_picker: DatePickerConfig::default(),
        shell: default_shell(),
        bindings: default_bindings(),
    }
}

/// Demo resources and pages shown when the config names none
pub fn default_shell() -> ShellConfig {
    let resource = |id: &str, name: &str, navigation: Option<&str>| ResourceConfig {
        id: id.to_string(),
        name: name.to_string(),
        navigation: navigation.map(str::to_string),
    };

    ShellConfig {
        resources: vec![
            resource("posts", "Posts", Some("Content")),
            resource("comments", "Comments", Some("Content")),
            resource("users", "Users", Some("Access")),
            resource("roles", "Roles", Some("Access")),
            resource("settings", "Settings", None),
        ],
        pages: vec![
            PageConfig {
                name: "Dashboard".to_string(),
                icon: None,
            },
            PageConfig {
                name: "Reports".to_string(),
                icon: None,
            },
        ],
    }
}

/// Get default key bindings
pub fn default_bindings() -> Bindings {
    Bindings {
        global: default_global_bindings(),
        sidebar: default_sidebar_bindings(),
        form: default_form_bindings(),
        date_input: default_date_input_bindings(),
        calendar: default_calendar_bindings(),
    }
}

fn default_global_bindings() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("C-q".to_string(), "quit".to_string());
    map.insert("C-c".to_string(), "quit".to_string());
    map.insert("C-b".to_string(), "toggle-sidebar".to_string());
    map.insert("Tab".to_string(), "focus-next".to_string());
    map.insert("S-Tab".to_string(), "focus-prev".to_string());
    map
}

fn default_sidebar_bindings() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("j".to_string(), "move-down".to_string());
    map.insert("k".to_string(), "move-up".to_string());
    map.insert("Down".to_string(), "move-down".to_string());
    map.insert("Up".to_string(), "move-up".to_string());
    map.insert("g".to_string(), "goto-top".to_string());
    map.insert("G".to_string(), "goto-bottom".to_string());
    map.insert("Enter".to_string(), "select".to_string());
    map.insert("l".to_string(), "focus-form".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
}

fn default_form_bindings() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("Esc".to_string(), "focus-sidebar".to_string());
    map
}

fn default_date_input_bindings() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("C-o".to_string(), "toggle-calendar".to_string());
    map.insert("F2".to_string(), "toggle-calendar".to_string());
    map
}

fn default_calendar_bindings() -> HashMap<String, String> {
    // Plain keys that edit text stay with the input; day and time moves
    // take chords the text field ignores
    let mut map = HashMap::new();
    map.insert("A-Left".to_string(), "calendar-prev-day".to_string());
    map.insert("A-Right".to_string(), "calendar-next-day".to_string());
    map.insert("Up".to_string(), "calendar-prev-week".to_string());
    map.insert("Down".to_string(), "calendar-next-week".to_string());
    map.insert("PageUp".to_string(), "calendar-prev-month".to_string());
    map.insert("PageDown".to_string(), "calendar-next-month".to_string());
    map.insert("S-Up".to_string(), "calendar-time-forward".to_string());
    map.insert("S-Down".to_string(), "calendar-time-back".to_string());
    map.insert("Enter".to_string(), "calendar-pick".to_string());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybind::KeyPattern;

    #[test]
    fn test_calendar_keys_leave_text_editing_alone() {
        let calendar = default_calendar_bindings();
        for key in ["Left", "Right", "Home", "End", "Backspace", "Delete", "[", "]", "-", ":", "Space"] {
            assert!(!calendar.contains_key(key), "{} is needed for typing", key);
        }
        for key in calendar.keys() {
            let pattern = KeyPattern::parse(key).unwrap();
            let single_char = pattern.key.chars().count() == 1;
            assert!(!(single_char && !pattern.ctrl && !pattern.alt), "{} would eat a typed char", key);
        }
    }
}
