//! 2D size

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis clamp into `[min, max]`; `min` wins when the bounds cross.
    pub fn clamp_to(self, min: Size, max: Size) -> Size {
        Size::new(
            self.width.min(max.width).max(min.width),
            self.height.min(max.height).max(min.height),
        )
    }

    /// Grow each axis up to `min` without ever shrinking.
    pub fn at_least(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to() {
        let min = Size::new(400.0, 300.0);
        let max = Size::new(1820.0, 980.0);

        assert_eq!(Size::new(100.0, 100.0).clamp_to(min, max), min);
        assert_eq!(Size::new(5000.0, 5000.0).clamp_to(min, max), max);
        assert_eq!(
            Size::new(800.0, 600.0).clamp_to(min, max),
            Size::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_clamp_to_min_wins_over_max() {
        // Tiny viewport: max smaller than min
        let clamped = Size::new(900.0, 700.0).clamp_to(Size::new(400.0, 300.0), Size::new(200.0, 100.0));
        assert_eq!(clamped, Size::new(400.0, 300.0));
    }

    #[test]
    fn test_at_least() {
        let min = Size::new(400.0, 300.0);
        assert_eq!(Size::new(380.0, 550.0).at_least(min), Size::new(400.0, 550.0));
        assert_eq!(Size::new(900.0, 700.0).at_least(min), Size::new(900.0, 700.0));
    }
}
