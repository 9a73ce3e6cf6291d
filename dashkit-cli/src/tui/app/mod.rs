//! TUI application state machine
//!
//! Split into functional submodules:
//! - form.rs: Record form that owns the date field values
//! - actions.rs: Bound action execution and focus changes

mod actions;
mod form;

pub use form::{calendar_options, RecordForm};

use crate::error::TuiError;
use crate::tui::icons::Icons;
use crate::tui::input::{handle_input_sync, handle_mouse_sync};
use crate::tui::layout::draw;
use crate::tui::state::{Focus, FormField, Selection};
use crate::tui::theme::MochaTheme;
use crate::tui::views::sidebar::{SidebarModel, SidebarState};
use crate::tui::widgets::date_picker::{DatePicker, ExternalValue, InputVariant};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, BeginSynchronizedUpdate, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use dashkit_config::{Config, KeybindMap};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use tokio::sync::mpsc;

type Result<T> = std::result::Result<T, TuiError>;

/// Main application state
pub struct App {
    pub keybinds: KeybindMap,
    pub theme: MochaTheme,
    pub icons: Icons,
    pub mouse_enabled: bool,

    pub focus: Focus,
    pub sidebar: SidebarState,
    /// Resource or page shown in the main pane
    pub current: Option<Selection>,
    pub form: RecordForm,

    /// Last known terminal area, used for mouse hit-testing
    pub screen: Rect,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app from configuration
    ///
    /// `published_at` is the initial value of the record's date field;
    /// `variant` overrides the configured presentation variant.
    pub fn new(
        config: &Config,
        published_at: ExternalValue,
        variant: Option<InputVariant>,
    ) -> Result<Self> {
        let keybinds = config.to_keybind_map()?;
        let variant = variant
            .or_else(|| InputVariant::from_str(&config.date_picker.variant))
            .unwrap_or_default();
        let options = calendar_options(&config.date_picker);

        let sidebar = SidebarState::new(
            SidebarModel::from_config(&config.shell),
            config.ui.sidebar_visible,
            config.ui.sidebar_width,
        );
        let focus = if sidebar.visible {
            Focus::Sidebar
        } else {
            Focus::Field(FormField::Title)
        };
        let current = if sidebar.model.resources.is_empty() {
            None
        } else {
            Some(Selection::Resource(0))
        };

        tracing::info!(
            resources = sidebar.model.resources.len(),
            pages = sidebar.model.pages.len(),
            ?variant,
            "app initialized"
        );

        Ok(Self {
            keybinds,
            theme: MochaTheme::default(),
            icons: Icons::new(config.options.nerd_fonts),
            mouse_enabled: config.options.mouse_enabled,
            focus,
            sidebar,
            current,
            form: RecordForm::new(options, variant, published_at),
            screen: Rect::new(0, 0, 80, 24),
            status_message: None,
            should_quit: false,
        })
    }

    /// Picker of the focused field, if it is a date field
    pub fn focused_picker(&self) -> Option<(FormField, &DatePicker)> {
        match self.focus {
            Focus::Field(field) => self.form.picker(field).map(|p| (field, p)),
            Focus::Sidebar => None,
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.and_then(|sel| self.sidebar.selection_name(sel))
    }
}

/// Spawn a thread to read crossterm events (blocking I/O)
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(32);

    std::thread::spawn(move || {
        while let Ok(event) = event::read() {
            if tx.blocking_send(event).is_err() {
                break; // Receiver dropped
            }
        }
    });

    rx
}

/// Run the TUI application until the user quits
pub async fn run(mut app: App) -> Result<()> {
    enable_raw_mode().map_err(TuiError::TerminalInit)?;
    let mut stdout = io::stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(TuiError::TerminalInit)?;
    } else {
        execute!(stdout, EnterAlternateScreen).map_err(TuiError::TerminalInit)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(TuiError::TerminalInit)?;
    let size = terminal.size().map_err(TuiError::TerminalInit)?;
    app.screen = Rect::new(0, 0, size.width, size.height);

    let mut input_rx = spawn_input_reader();

    // Fixed 16ms render interval (~60fps)
    let mut render_interval = tokio::time::interval(std::time::Duration::from_millis(16));
    render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    tracing::info!("tui started");

    loop {
        tokio::select! {
            biased;

            Some(event) = input_rx.recv() => {
                match event {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        handle_input_sync(&mut app, key);
                    }
                    Event::Mouse(mouse) => {
                        handle_mouse_sync(&mut app, mouse);
                    }
                    Event::Resize(cols, rows) => {
                        app.screen = Rect::new(0, 0, cols, rows);
                    }
                    _ => {}
                }
            }

            _ = render_interval.tick() => {
                // Synchronized update to prevent flicker
                execute!(terminal.backend_mut(), BeginSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
                terminal.draw(|f| draw(f, &app)).map_err(TuiError::Render)?;
                execute!(terminal.backend_mut(), EndSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("tui stopped");

    disable_raw_mode().map_err(TuiError::TerminalRestore)?;
    if app.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .map_err(TuiError::TerminalRestore)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(TuiError::TerminalRestore)?;
    }
    terminal.show_cursor().map_err(TuiError::TerminalRestore)?;

    Ok(())
}
