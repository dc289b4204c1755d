//! Serializable view of the whole shell for the front end

use serde::{Deserialize, Serialize};

use super::DockItem;
use crate::frame::FrameLayout;
use crate::math::Size;
use crate::types::{WindowId, ZIndex};
use crate::window::Window;

/// State the front end renders from after each event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub viewport: Size,
    pub focused: Option<WindowId>,
    pub z_counter: ZIndex,
    /// Every registered window in creation order
    pub windows: Vec<Window>,
    /// Visible frames in paint order, lowest first
    pub frames: Vec<FrameLayout>,
    pub dock: Vec<DockItem>,
    /// App ids whose content panels are mounted
    pub mounted: Vec<String>,
}
