//! Window record

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::types::{WindowId, ZIndex};

/// One open application instance
///
/// Records live only inside [`super::WindowManager`]; callers get shared
/// references and change them through manager commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    /// Application hosted by this window; unique across the registry
    pub app_id: String,
    pub title: String,
    /// Always true for a registered window; close removes the record
    pub is_open: bool,
    /// Present but not rendered; the dock still shows it as running
    pub is_minimized: bool,
    /// Fills the work area; `position` and `size` are kept for restoration
    pub is_maximized: bool,
    pub position: Vec2,
    pub size: Size,
    pub min_size: Size,
    pub z_index: ZIndex,
}

impl Window {
    /// Whether the window paints at all
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}
