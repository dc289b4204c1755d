//! Work area occupied by maximized windows

use serde::{Deserialize, Serialize};

use super::{Rect, Size};

/// Insets a maximized window keeps from the viewport edges.
///
/// The top inset clears the menu bar, the bottom one clears the dock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for WorkArea {
    fn default() -> Self {
        Self {
            left: 8.0,
            top: 48.0,
            right: 8.0,
            bottom: 88.0,
        }
    }
}

impl WorkArea {
    /// Rectangle a maximized window occupies inside `viewport`
    pub fn rect(&self, viewport: Size) -> Rect {
        Rect::new(
            self.left,
            self.top,
            (viewport.width - self.left - self.right).max(0.0),
            (viewport.height - self.top - self.bottom).max(0.0),
        )
    }
}
