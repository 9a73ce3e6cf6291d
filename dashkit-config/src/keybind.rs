//! Key binding pattern parsing and resolution

use crate::{actions::Action, types::Bindings, ConfigError, Result};
use std::collections::HashMap;

/// Represents a parsed key binding context
///
/// These contexts determine which keybindings are active based on the
/// current state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingContext {
    /// Global bindings (always checked last)
    Global,
    /// Sidebar navigation
    Sidebar,
    /// Record form, any field focused
    Form,
    /// Date input focused
    DateInput,
    /// Date input focused with its calendar open
    Calendar,
}

impl BindingContext {
    /// Get all context names for display
    pub fn all() -> &'static [&'static str] {
        &["global", "sidebar", "form", "date-input", "calendar"]
    }

    #[allow(clippy::should_implement_trait)]
    /// Parse context from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "global" => Some(BindingContext::Global),
            "sidebar" => Some(BindingContext::Sidebar),
            "form" => Some(BindingContext::Form),
            "date-input" | "date_input" => Some(BindingContext::DateInput),
            "calendar" => Some(BindingContext::Calendar),
            _ => None,
        }
    }

    /// Get canonical name for this context
    pub fn name(&self) -> &'static str {
        match self {
            BindingContext::Global => "global",
            BindingContext::Sidebar => "sidebar",
            BindingContext::Form => "form",
            BindingContext::DateInput => "date-input",
            BindingContext::Calendar => "calendar",
        }
    }
}

/// Represents a parsed key pattern like "C-o" or "S-Tab"
///
/// # Format
/// - "C-x" or "CTRL-x" - Control key
/// - "S-x" or "SHIFT-x" - Shift key
/// - "A-x" or "ALT-x" - Alt key
/// - "M-x" or "META-x" - Meta/Super key
/// - Single chars: "a", "j", "[", "1", etc.
/// - Special keys: "Enter", "Esc", "Tab", "Space", "Backspace", "Up", "PageDown", "F2", etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub key: String,
}

impl KeyPattern {
    /// Parse a key pattern string
    ///
    /// Examples:
    /// - "C-o" → Control+o
    /// - "S-Tab" → Shift+Tab
    /// - "Return" → Enter key
    /// - "j" → j key
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::KeyPattern(
                "Empty key pattern".to_string(),
            ));
        }

        let parts: Vec<&str> = s.split('-').collect();
        let mut pattern = KeyPattern {
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
            key: String::new(),
        };

        // Modifiers are only recognized before the key, e.g. "C-S-x" but not "x-C".
        // An empty part ends the scan, so "C--" is Ctrl+hyphen.
        let mut key_idx = 0;
        for (i, part) in parts.iter().enumerate() {
            let has_following_parts = i + 1 < parts.len();
            if !has_following_parts {
                break;
            }
            match part.to_uppercase().as_str() {
                "C" | "CTRL" => pattern.ctrl = true,
                "S" | "SHIFT" => pattern.shift = true,
                "A" | "ALT" => pattern.alt = true,
                "M" | "META" => pattern.meta = true,
                _ => break,
            }
            key_idx = i + 1;
        }

        let key = parts[key_idx..].join("-");

        if key.is_empty() {
            return Err(ConfigError::KeyPattern(format!(
                "Invalid key pattern: {} (missing key after modifiers)",
                s
            )));
        }

        pattern.key = Self::normalize_key(&key).ok_or_else(|| {
            ConfigError::KeyPattern(format!(
                "Invalid key: {} (not a recognized key)",
                key
            ))
        })?;

        Ok(pattern)
    }

    /// Map key aliases to one spelling, or None if the key is unknown
    fn normalize_key(key: &str) -> Option<String> {
        let normalized = match key {
            "Enter" | "Return" => "Enter",
            "Esc" | "Escape" => "Esc",
            "Backspace" | "Back" => "Backspace",
            "PageUp" | "Page_Up" => "PageUp",
            "PageDown" | "Page_Down" => "PageDown",
            "Tab" | "Space" | "Up" | "Down" | "Left" | "Right" | "Home" | "End" | "Delete"
            | "Insert" => key,
            k if k.starts_with('F') && k.len() > 1 && k.len() <= 3 => {
                let n = k[1..].parse::<u8>().ok()?;
                if (1..=24).contains(&n) {
                    k
                } else {
                    return None;
                }
            }
            k if k.chars().count() == 1 => {
                let c = k.chars().next()?;
                if c.is_ascii_alphanumeric() || c.is_ascii_punctuation() {
                    k
                } else {
                    return None;
                }
            }
            _ => return None,
        };
        Some(normalized.to_string())
    }
}

impl std::fmt::Display for KeyPattern {
    /// Canonical spelling, modifiers ordered S, C, A, M
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.shift {
            write!(f, "S-")?;
        }
        if self.ctrl {
            write!(f, "C-")?;
        }
        if self.alt {
            write!(f, "A-")?;
        }
        if self.meta {
            write!(f, "M-")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Maps key patterns to actions in specific contexts
pub struct KeybindMap {
    bindings: HashMap<BindingContext, HashMap<String, Action>>,
}

impl KeybindMap {
    /// Build keybind map from configuration
    pub fn from_bindings(bindings: &Bindings) -> Result<Self> {
        let mut map = KeybindMap {
            bindings: HashMap::new(),
        };

        map.load_context_bindings(BindingContext::Global, &bindings.global);
        map.load_context_bindings(BindingContext::Sidebar, &bindings.sidebar);
        map.load_context_bindings(BindingContext::Form, &bindings.form);
        map.load_context_bindings(BindingContext::DateInput, &bindings.date_input);
        map.load_context_bindings(BindingContext::Calendar, &bindings.calendar);

        Ok(map)
    }

    /// Load bindings for a specific context, keyed by canonical pattern
    fn load_context_bindings(&mut self, context: BindingContext, bindings: &HashMap<String, String>) {
        let mut context_bindings = HashMap::new();

        for (key_str, action_str) in bindings {
            let pattern = match KeyPattern::parse(key_str) {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("Skipping binding in [bindings.{}]: {}", context.name(), e);
                    continue;
                }
            };

            match Action::from_str(action_str) {
                Some(action) => {
                    context_bindings.insert(pattern.to_string(), action);
                }
                None => {
                    tracing::warn!(
                        "Skipping binding in [bindings.{}]: invalid action {}",
                        context.name(),
                        action_str
                    );
                }
            }
        }

        self.bindings.insert(context, context_bindings);
    }

    /// Resolve a key pattern to an action in a specific context
    ///
    /// Returns None if no binding found.
    pub fn resolve(&self, key_str: &str, context: BindingContext) -> Option<Action> {
        self.resolve_in(key_str, &[context])
    }

    /// Resolve through an ordered list of contexts, then global bindings
    pub fn resolve_in(&self, key_str: &str, contexts: &[BindingContext]) -> Option<Action> {
        contexts
            .iter()
            .chain(std::iter::once(&BindingContext::Global))
            .find_map(|ctx| self.bindings.get(ctx).and_then(|b| b.get(key_str)).copied())
    }

    /// Get all bindings for a context (for display)
    pub fn bindings_for_context(&self, context: BindingContext) -> Option<&HashMap<String, Action>> {
        self.bindings.get(&context)
    }

    /// First key bound to an action in a context, for hint lines
    pub fn key_for(&self, action: Action, context: BindingContext) -> Option<&str> {
        let mut keys: Vec<&String> = self
            .bindings
            .get(&context)?
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k)
            .collect();
        keys.sort();
        keys.first().map(|k| k.as_str())
    }
}
