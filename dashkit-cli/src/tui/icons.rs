//! Icons and symbols for the TUI
//!
//! Nerd Fonts glyphs with plain Unicode fallbacks.

/// Nerd Fonts icons (requires a Nerd Font installed in terminal)
pub mod nerd {
    pub const CALENDAR: &str = "\u{f073}";
    pub const CHEVRON_LEFT: &str = "\u{f053}";
    pub const CHEVRON_RIGHT: &str = "\u{f054}";
    pub const CHEVRON_DOWN: &str = "\u{f078}";
    pub const CLOCK: &str = "\u{f017}";
    pub const DATABASE: &str = "\u{f1c0}";
    pub const FILE: &str = "\u{f15b}";
    pub const FILTER: &str = "\u{f0b0}";
}

/// Unicode symbols (universal fallback, works in most terminals)
pub mod unicode {
    pub const CALENDAR: &str = "▦";
    pub const PREV: &str = "‹";
    pub const NEXT: &str = "›";
    pub const EXPAND: &str = "▶";
    pub const COLLAPSE: &str = "▼";
    pub const CLOCK: &str = "◷";
    pub const RESOURCE: &str = "◆";
    pub const PAGE: &str = "◇";
    pub const FILTER: &str = "⧩";
}

/// Icon set with Nerd Fonts / Unicode fallback support
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    use_nerd_fonts: bool,
}

impl Icons {
    pub fn new(use_nerd_fonts: bool) -> Self {
        Self { use_nerd_fonts }
    }

    fn pick(&self, nerd: &'static str, fallback: &'static str) -> &'static str {
        if self.use_nerd_fonts {
            nerd
        } else {
            fallback
        }
    }

    // ===== Date field =====

    pub fn calendar(&self) -> &'static str {
        self.pick(nerd::CALENDAR, unicode::CALENDAR)
    }

    pub fn filter(&self) -> &'static str {
        self.pick(nerd::FILTER, unicode::FILTER)
    }

    pub fn clock(&self) -> &'static str {
        self.pick(nerd::CLOCK, unicode::CLOCK)
    }

    pub fn prev_month(&self) -> &'static str {
        self.pick(nerd::CHEVRON_LEFT, unicode::PREV)
    }

    pub fn next_month(&self) -> &'static str {
        self.pick(nerd::CHEVRON_RIGHT, unicode::NEXT)
    }

    // ===== Sidebar =====

    pub fn expand(&self) -> &'static str {
        self.pick(nerd::CHEVRON_RIGHT, unicode::EXPAND)
    }

    pub fn collapse(&self) -> &'static str {
        self.pick(nerd::CHEVRON_DOWN, unicode::COLLAPSE)
    }

    pub fn resource(&self) -> &'static str {
        self.pick(nerd::DATABASE, unicode::RESOURCE)
    }

    pub fn page(&self) -> &'static str {
        self.pick(nerd::FILE, unicode::PAGE)
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new(false)
    }
}
