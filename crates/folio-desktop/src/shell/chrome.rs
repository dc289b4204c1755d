//! Read-only projections for the dock and the desktop surface

use serde::{Deserialize, Serialize};

/// Dock entry for one registered app
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DockItem {
    pub app_id: String,
    pub name: String,
    pub icon: String,
    /// Window shown and not minimized (tooltip dot)
    pub is_open: bool,
    /// Window registered, minimized or not (running indicator)
    pub is_running: bool,
}

/// Shortcut icon on the desktop surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// App opened on activation
    pub app_id: String,
}

impl DesktopIcon {
    pub fn new(id: &str, name: &str, icon: &str, app_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            app_id: app_id.to_string(),
        }
    }

    /// Desktop shortcuts of the portfolio desktop
    pub fn portfolio() -> Vec<DesktopIcon> {
        vec![
            DesktopIcon::new("about", "About Me", "user-circle", "about"),
            DesktopIcon::new("projects", "Projects", "folder", "projects"),
            DesktopIcon::new("terminal", "Terminal", "command-line", "terminal"),
            DesktopIcon::new("resume", "Resume", "document", "finder"),
        ]
    }
}
