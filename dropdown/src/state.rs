//! Ephemeral widget state: open flag and highlighted row.

/// Open/highlight state owned by a dropdown instance.
///
/// `highlighted_index` only means something while the list is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the option list is shown.
    pub is_open: bool,
    /// Row eligible for keyboard commit.
    pub highlighted_index: usize,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the list. Returns true if it was closed.
    ///
    /// Opening always resets the highlight to the first row.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.highlighted_index = 0;
        true
    }

    /// Close the list. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }

    /// Move the highlight by `delta` if the target row exists.
    ///
    /// Out-of-range moves are dropped: no wraparound, no clamping.
    pub fn move_highlight(&mut self, delta: isize, option_count: usize) -> bool {
        let Some(candidate) = self.highlighted_index.checked_add_signed(delta) else {
            return false;
        };
        if candidate >= option_count {
            return false;
        }
        self.set_highlight(candidate)
    }

    /// Highlight a row. Returns true if the highlight changed.
    pub fn set_highlight(&mut self, index: usize) -> bool {
        if self.highlighted_index == index {
            return false;
        }
        self.highlighted_index = index;
        true
    }

    /// Pull a stale highlight back inside a list of `option_count` rows.
    pub fn clamp(&mut self, option_count: usize) -> bool {
        let max = option_count.saturating_sub(1);
        if self.highlighted_index > max {
            self.highlighted_index = max;
            true
        } else {
            false
        }
    }
}
