use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ViewRange;

/// Maps a viewport's view window onto a discrete scrollbar track.
///
/// Positions are sample indices into the loaded X array. The mapper is
/// configured after every data load and invalidated when the user zooms or
/// pans directly, since the view window no longer matches the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarMapper {
    min_index: usize,
    max_index: usize,
    visible_count: usize,
    small_step: usize,
    current_index: usize,
    active: bool,
}

impl Default for ScrollbarMapper {
    fn default() -> Self {
        Self {
            min_index: 0,
            max_index: 0,
            visible_count: 0,
            small_step: 1,
            current_index: 0,
            active: false,
        }
    }
}

impl ScrollbarMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the track from the loaded values and the current view
    /// window. A `view_range` of `None` means the whole dataset is visible
    /// and the scrollbar is inert.
    pub fn configure(&mut self, view_range: Option<ViewRange>, values: &[f64]) {
        if values.is_empty() {
            self.invalidate();
            return;
        }

        let Some(range) = view_range else {
            self.min_index = 0;
            self.max_index = values.len() - 1;
            self.visible_count = values.len();
            self.small_step = (values.len() / 10).max(1);
            self.current_index = 0;
            self.active = false;
            return;
        };

        let visible = values
            .iter()
            .filter(|v| **v >= range.min && **v <= range.max)
            .count()
            .max(1);
        let first_visible = values.iter().position(|v| *v >= range.min).unwrap_or(0);

        self.min_index = 0;
        self.max_index = values.len() - 1;
        self.visible_count = visible;
        self.small_step = (visible / 10).max(1);
        self.current_index = first_visible.min(self.max_position());
        self.active = visible < values.len();

        debug!(
            total = values.len(),
            visible,
            position = self.current_index,
            "scrollbar configured"
        );
    }

    /// Largest index the thumb can sit at while keeping a full window visible.
    #[must_use]
    pub fn max_position(&self) -> usize {
        (self.max_index + 1).saturating_sub(self.visible_count)
    }

    /// Applies a user scroll to `new_index` and returns the data-space view
    /// window `(min, max)` the viewport should adopt, or `None` when the
    /// mapper is inactive or `values` is empty.
    pub fn on_user_scroll(&mut self, new_index: usize, values: &[f64]) -> Option<(f64, f64)> {
        if !self.active || values.is_empty() || self.visible_count == 0 {
            return None;
        }

        self.current_index = new_index.min(self.max_position());
        let end = (self.current_index + self.visible_count - 1).min(values.len() - 1);
        Some((values[self.current_index], values[end]))
    }

    /// Moves the thumb without producing a view window. Used when mirroring
    /// another viewport's scroll position.
    pub fn set_position(&mut self, index: usize) {
        self.current_index = index.min(self.max_position());
    }

    /// Marks the track stale after a direct zoom or pan.
    pub fn invalidate(&mut self) {
        self.active = false;
        self.visible_count = 0;
        self.current_index = 0;
        self.min_index = 0;
        self.max_index = 0;
        self.small_step = 1;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn small_step(&self) -> usize {
        self.small_step
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }
}
