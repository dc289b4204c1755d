//! Shell configuration

use serde::{Deserialize, Serialize};

use super::{AppConfig, AppRegistry, DesktopIcon};
use crate::error::DesktopResult;
use crate::math::{Size, Vec2, WorkArea};
use crate::window::WindowDefaults;

/// App opened once the boot sequence finishes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BootApp {
    pub app_id: String,
    #[serde(default)]
    pub position: Option<Vec2>,
}

/// Everything needed to build a [`super::DesktopShell`]
///
/// Missing JSON fields fall back to the portfolio desktop defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Browser viewport size
    pub viewport: Size,
    pub work_area: WorkArea,
    pub windows: WindowDefaults,
    pub boot_app: Option<BootApp>,
    /// Clamp dragged windows so the title bar stays reachable
    pub keep_on_screen: bool,
    pub apps: Vec<AppConfig>,
    pub desktop_icons: Vec<DesktopIcon>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920.0, 1080.0),
            work_area: WorkArea::default(),
            windows: WindowDefaults::default(),
            boot_app: Some(BootApp {
                app_id: "terminal".to_string(),
                position: Some(Vec2::new(100.0, 100.0)),
            }),
            keep_on_screen: false,
            apps: AppRegistry::portfolio().iter().cloned().collect(),
            desktop_icons: DesktopIcon::portfolio(),
        }
    }
}

impl ShellConfig {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
