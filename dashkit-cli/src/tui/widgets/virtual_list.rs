//! Cursor navigation over a list whose rows are derived on demand

/// A list with a cursor, navigated by row index
///
/// Implementors only say how long the list is and where the cursor sits;
/// movement, scrolling and click mapping come from the default methods.
pub trait VirtualList {
    fn virtual_len(&self) -> usize;

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, pos: usize);

    /// Move up one row, wrapping to the bottom; false on an empty list
    fn move_up(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        self.set_cursor(if current > 0 { current - 1 } else { len - 1 });
        true
    }

    /// Move down one row, wrapping to the top; false on an empty list
    fn move_down(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        self.set_cursor(if current + 1 < len { current + 1 } else { 0 });
        true
    }

    fn goto_top(&mut self) {
        self.set_cursor(0);
    }

    fn goto_bottom(&mut self) {
        self.set_cursor(self.virtual_len().saturating_sub(1));
    }

    /// Index of the first visible row for a viewport of `viewport_height`
    /// rows, keeping the cursor roughly centered
    fn scroll_offset(&self, viewport_height: usize) -> usize {
        let cursor = self.cursor();
        let len = self.virtual_len();

        if len <= viewport_height || cursor < viewport_height / 2 {
            0
        } else if cursor >= len - viewport_height / 2 {
            len.saturating_sub(viewport_height)
        } else {
            cursor.saturating_sub(viewport_height / 2)
        }
    }

    /// Row under viewport line `line`, if there is one
    fn row_at(&self, line: usize, viewport_height: usize) -> Option<usize> {
        if line >= viewport_height {
            return None;
        }
        let row = self.scroll_offset(viewport_height) + line;
        (row < self.virtual_len()).then_some(row)
    }

    /// Pull the cursor back inside the list after it shrinks
    fn clamp_cursor(&mut self) {
        let max = self.virtual_len().saturating_sub(1);
        if self.cursor() > max {
            self.set_cursor(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows {
        len: usize,
        cursor: usize,
    }

    impl VirtualList for Rows {
        fn virtual_len(&self) -> usize {
            self.len
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, pos: usize) {
            self.cursor = pos;
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut rows = Rows { len: 3, cursor: 0 };
        assert!(rows.move_up());
        assert_eq!(rows.cursor, 2);
        assert!(rows.move_down());
        assert_eq!(rows.cursor, 0);
    }

    #[test]
    fn test_empty_list_does_not_move() {
        let mut rows = Rows { len: 0, cursor: 0 };
        assert!(!rows.move_up());
        assert!(!rows.move_down());
        rows.goto_bottom();
        assert_eq!(rows.cursor, 0);
    }

    #[test]
    fn test_scroll_offset_centers_cursor() {
        let rows = Rows { len: 20, cursor: 10 };
        assert_eq!(rows.scroll_offset(6), 7);
        let rows = Rows { len: 20, cursor: 19 };
        assert_eq!(rows.scroll_offset(6), 14);
        let rows = Rows { len: 4, cursor: 3 };
        assert_eq!(rows.scroll_offset(6), 0);
    }

    #[test]
    fn test_row_at_accounts_for_scroll() {
        let rows = Rows { len: 20, cursor: 10 };
        assert_eq!(rows.row_at(0, 6), Some(7));
        assert_eq!(rows.row_at(6, 6), None);
        let rows = Rows { len: 2, cursor: 0 };
        assert_eq!(rows.row_at(3, 6), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut rows = Rows { len: 10, cursor: 9 };
        rows.len = 4;
        rows.clamp_cursor();
        assert_eq!(rows.cursor, 3);
    }
}
