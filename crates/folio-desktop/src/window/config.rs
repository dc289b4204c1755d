//! Default geometry for newly opened windows

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::types::ZIndex;

/// Geometry and stacking defaults applied by [`super::WindowManager::open`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDefaults {
    /// Size of a freshly created window
    pub default_size: Size,
    /// Minimum size every window declares
    pub min_size: Size,
    /// Position of the first cascaded window
    pub cascade_origin: Vec2,
    /// Offset added per existing window when no position is given
    pub cascade_step: f32,
    /// Initial value of the z-order counter
    pub z_seed: ZIndex,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            default_size: Size::new(800.0, 600.0),
            min_size: Size::new(400.0, 300.0),
            cascade_origin: Vec2::new(100.0, 100.0),
            cascade_step: 30.0,
            z_seed: 100,
        }
    }
}

impl WindowDefaults {
    /// Cascaded top-left for a new window when `count` windows already exist
    pub fn cascade_position(&self, count: usize) -> Vec2 {
        let offset = count as f32 * self.cascade_step;
        self.cascade_origin + Vec2::new(offset, offset)
    }

    /// Default size grown to satisfy `min_size`
    pub fn initial_size(&self, min_size: Size) -> Size {
        self.default_size.at_least(min_size)
    }
}
