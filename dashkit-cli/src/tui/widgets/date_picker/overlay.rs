//! Overlay lifecycle for the calendar surface
//!
//! The overlay is either closed or open. While open it owns two things: the
//! calendar and a [`Backdrop`] that catches pointer presses anywhere else on
//! the screen. Both live in one [`OverlaySession`], so dropping the session
//! on close is the only way to release the backdrop.

use super::calendar::CalendarSurface;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Why the overlay closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Toggle pressed while open
    Toggle,
    /// Pointer pressed outside the picker
    Backdrop,
    /// A day was picked
    Pick,
}

/// Full-viewport pointer catcher, present exactly while the overlay is open
#[derive(Debug)]
pub struct Backdrop {
    _claim: (),
}

impl Backdrop {
    fn claim() -> Self {
        Self { _claim: () }
    }

    /// True when `pos` misses every raised element and so lands on the backdrop
    pub fn catches(&self, pos: Position, raised: &[Rect]) -> bool {
        !raised.iter().any(|rect| rect.contains(pos))
    }
}

/// Everything that exists only while the overlay is open
#[derive(Debug)]
pub struct OverlaySession {
    backdrop: Backdrop,
    calendar: CalendarSurface,
}

impl OverlaySession {
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn calendar(&self) -> &CalendarSurface {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarSurface {
        &mut self.calendar
    }
}

#[derive(Debug, Default)]
pub struct OverlayController {
    session: Option<OverlaySession>,
}

impl OverlayController {
    pub fn state(&self) -> OverlayState {
        if self.session.is_some() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open if closed, building the calendar only on an actual transition
    ///
    /// Returns false when already open.
    pub fn open_with(&mut self, calendar: impl FnOnce() -> CalendarSurface) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(OverlaySession {
            backdrop: Backdrop::claim(),
            calendar: calendar(),
        });
        tracing::debug!("calendar overlay opened");
        true
    }

    /// Close if open, returning the released session
    pub fn close(&mut self, reason: CloseReason) -> Option<OverlaySession> {
        let session = self.session.take()?;
        tracing::debug!(?reason, "calendar overlay closed");
        Some(session)
    }

    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut OverlaySession> {
        self.session.as_mut()
    }
}
