//! Edge and corner resize controller
//!
//! The window's top-left stays fixed during a resize: north and west
//! handles change the size as if the opposite edge moved, without shifting
//! the position.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{CursorStyle, DocumentStyle, PointerButton, PointerEvent};
use crate::math::{Size, Vec2};

/// Room left around a window at its maximum size
const VIEWPORT_MARGIN: f32 = 100.0;

/// Resize handle a gesture was started from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// All eight handles, edges first
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::South,
        ResizeDirection::East,
        ResizeDirection::West,
        ResizeDirection::NorthEast,
        ResizeDirection::NorthWest,
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
    ];

    /// Parse a handle name (`"n"`, `"se"`, ...)
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "n" => Some(ResizeDirection::North),
            "s" => Some(ResizeDirection::South),
            "e" => Some(ResizeDirection::East),
            "w" => Some(ResizeDirection::West),
            "ne" => Some(ResizeDirection::NorthEast),
            "nw" => Some(ResizeDirection::NorthWest),
            "se" => Some(ResizeDirection::SouthEast),
            "sw" => Some(ResizeDirection::SouthWest),
            _ => None,
        }
    }

    /// Short handle name
    pub fn id(self) -> &'static str {
        match self {
            ResizeDirection::North => "n",
            ResizeDirection::South => "s",
            ResizeDirection::East => "e",
            ResizeDirection::West => "w",
            ResizeDirection::NorthEast => "ne",
            ResizeDirection::NorthWest => "nw",
            ResizeDirection::SouthEast => "se",
            ResizeDirection::SouthWest => "sw",
        }
    }

    /// CSS cursor shown while this handle is dragged
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::North => "n-resize",
            ResizeDirection::South => "s-resize",
            ResizeDirection::East => "e-resize",
            ResizeDirection::West => "w-resize",
            ResizeDirection::NorthEast => "ne-resize",
            ResizeDirection::NorthWest => "nw-resize",
            ResizeDirection::SouthEast => "se-resize",
            ResizeDirection::SouthWest => "sw-resize",
        }
    }

    pub fn has_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthEast | ResizeDirection::NorthWest
        )
    }

    pub fn has_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthEast | ResizeDirection::SouthWest
        )
    }

    pub fn has_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    pub fn has_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }

    /// Unclamped size after moving this handle by `delta` from `start`
    pub fn apply(self, start: Size, delta: Vec2) -> Size {
        let mut size = start;
        if self.has_east() {
            size.width = start.width + delta.x;
        }
        if self.has_west() {
            size.width = start.width - delta.x;
        }
        if self.has_south() {
            size.height = start.height + delta.y;
        }
        if self.has_north() {
            size.height = start.height - delta.y;
        }
        size
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ResizePhase {
    Idle,
    Active {
        direction: ResizeDirection,
        start_pointer: Vec2,
        start_size: Size,
    },
}

/// Converts one pointer gesture on a resize handle into window sizes
#[derive(Clone, Debug)]
pub struct ResizeController {
    size: Size,
    min: Size,
    max: Size,
    phase: ResizePhase,
    disabled: bool,
}

impl ResizeController {
    /// Idle controller at `size`, bounded by `[min, max]`
    pub fn new(size: Size, min: Size, max: Size) -> Self {
        Self {
            size,
            min,
            max,
            phase: ResizePhase::Idle,
            disabled: false,
        }
    }

    /// Largest size allowed inside `viewport`
    pub fn viewport_max(viewport: Size) -> Size {
        Size::new(
            viewport.width - VIEWPORT_MARGIN,
            viewport.height - VIEWPORT_MARGIN,
        )
    }

    /// Size last reported (or reconciled)
    pub fn size(&self) -> Size {
        self.size
    }

    /// Overwrite the local mirror with authoritative state
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn min(&self) -> Size {
        self.min
    }

    pub fn max(&self) -> Size {
        self.max
    }

    pub fn set_max(&mut self, max: Size) {
        self.max = max;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.phase, ResizePhase::Active { .. })
    }

    /// Handle being dragged, if any
    pub fn direction(&self) -> Option<ResizeDirection> {
        match self.phase {
            ResizePhase::Active { direction, .. } => Some(direction),
            ResizePhase::Idle => None,
        }
    }

    /// Start a gesture on `direction`'s handle, freezing the current size as
    /// the baseline. Returns false if disabled or not the primary button.
    pub fn pointer_down(
        &mut self,
        direction: ResizeDirection,
        event: PointerEvent,
        style: &mut impl DocumentStyle,
    ) -> bool {
        if self.disabled || event.button != PointerButton::Primary {
            return false;
        }

        self.phase = ResizePhase::Active {
            direction,
            start_pointer: event.position,
            start_size: self.size,
        };
        style.set_cursor(Some(CursorStyle::Resize(direction)));
        true
    }

    /// Advance the gesture. Every reported size is already inside
    /// `[min, max]`; returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<Size> {
        let ResizePhase::Active {
            direction,
            start_pointer,
            start_size,
        } = self.phase
        else {
            return None;
        };

        let next = direction
            .apply(start_size, pointer - start_pointer)
            .clamp_to(self.min, self.max);

        trace!(width = next.width, height = next.height, handle = direction.id(), "resize tick");
        self.size = next;
        Some(next)
    }

    /// End the gesture and restore the cursor
    pub fn pointer_up(&mut self, style: &mut impl DocumentStyle) {
        if !self.is_resizing() {
            return;
        }
        self.phase = ResizePhase::Idle;
        style.set_cursor(None);
    }
}
