//! Rendering seam: redraw scheduling and draw planning.
//!
//! The engine never draws; it emits redraw requests through [`RedrawHandler`]
//! and precomputes point lists through [`plan`]. A UI backend implements the
//! trait and consumes the plans.

pub mod plan;

use tracing::trace;

/// Backend hook invoked whenever a viewport must repaint.
pub trait RedrawHandler {
    fn request_redraw(&mut self, viewport_id: &str);

    /// Requests one repaint per id. Interaction sync batches its targets so
    /// each affected viewport repaints exactly once per gesture.
    fn request_redraw_batch(&mut self, viewport_ids: &[&str]) {
        for id in viewport_ids {
            self.request_redraw(id);
        }
    }
}

/// Recording handler for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullRedraw {
    requests: Vec<String>,
}

impl NullRedraw {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl RedrawHandler for NullRedraw {
    fn request_redraw(&mut self, viewport_id: &str) {
        trace!(viewport_id, "redraw requested");
        self.requests.push(viewport_id.to_owned());
    }
}
