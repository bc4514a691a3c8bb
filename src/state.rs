use std::path::Path;

use crate::figure::Figure;
use crate::render;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// What the window shows, independent of rendering.
pub struct ViewerState {
    /// The figure being displayed. Built once before the window opens.
    pub figure: Figure,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            status_message: None,
        }
    }

    /// Render the displayed figure to `path` and report the outcome in the
    /// status line.
    pub fn save_figure(&mut self, path: &Path) {
        match render::save_figure(&self.figure, path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save figure: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
