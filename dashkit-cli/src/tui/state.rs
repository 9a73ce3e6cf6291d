//! TUI state types and enums

/// Focus position in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Field(FormField),
}

/// Fields of the record form in the main pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    /// Date field, default variant
    PublishedAt,
    /// Date field, filter variant
    CreatedAfter,
}

impl FormField {
    /// Tab order
    pub const ALL: [FormField; 3] = [
        FormField::Title,
        FormField::PublishedAt,
        FormField::CreatedAfter,
    ];

    /// Date fields in render order; later ones draw on top
    pub const DATES: [FormField; 2] = [FormField::PublishedAt, FormField::CreatedAfter];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::PublishedAt => "Published at",
            FormField::CreatedAfter => "Created after",
        }
    }

    pub fn is_date(&self) -> bool {
        !matches!(self, FormField::Title)
    }
}

impl Focus {
    /// Next focus stop; the sidebar is skipped while hidden
    pub fn next(self, sidebar_visible: bool) -> Focus {
        let stops = focus_stops(sidebar_visible);
        let idx = stops.iter().position(|f| *f == self).unwrap_or(0);
        stops[(idx + 1) % stops.len()]
    }

    pub fn prev(self, sidebar_visible: bool) -> Focus {
        let stops = focus_stops(sidebar_visible);
        let idx = stops.iter().position(|f| *f == self).unwrap_or(0);
        stops[(idx + stops.len() - 1) % stops.len()]
    }
}

fn focus_stops(sidebar_visible: bool) -> Vec<Focus> {
    let fields = FormField::ALL.iter().map(|f| Focus::Field(*f));
    if sidebar_visible {
        std::iter::once(Focus::Sidebar).chain(fields).collect()
    } else {
        fields.collect()
    }
}

/// What the main pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the sidebar model's resources
    Resource(usize),
    /// Index into the sidebar model's pages
    Page(usize),
}
