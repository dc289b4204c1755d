//! Drag-to-move controller

use tracing::{debug, trace};

use super::{CursorStyle, DocumentStyle, PointerButton, PointerEvent};
use crate::math::{Rect, Size, Vec2};

/// Horizontal part of a window that must stay inside the viewport
const KEEP_VISIBLE_WIDTH: f32 = 200.0;
/// Vertical part of a window that must stay inside the viewport
const KEEP_VISIBLE_HEIGHT: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Active {
        start_pointer: Vec2,
        start_position: Vec2,
    },
}

/// Converts one pointer gesture into window positions
#[derive(Clone, Debug)]
pub struct DragController {
    position: Vec2,
    phase: DragPhase,
    disabled: bool,
    /// Allowed range for the window's top-left corner
    bounds: Option<Rect>,
}

impl DragController {
    /// Idle controller at `position`, unbounded
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            phase: DragPhase::Idle,
            disabled: false,
            bounds: None,
        }
    }

    /// Constrain the top-left corner to `bounds`
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Bounds that keep the title bar reachable inside `viewport`
    pub fn viewport_bounds(viewport: Size) -> Rect {
        Rect::new(
            0.0,
            0.0,
            viewport.width - KEEP_VISIBLE_WIDTH,
            viewport.height - KEEP_VISIBLE_HEIGHT,
        )
    }

    /// Position last reported (or reconciled)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Overwrite the local mirror with authoritative state
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Active { .. })
    }

    /// Start a gesture. Returns false (and changes nothing) if the
    /// controller is disabled, the button is not primary, or the event came
    /// from an interactive element.
    pub fn pointer_down(&mut self, event: PointerEvent, style: &mut impl DocumentStyle) -> bool {
        if self.disabled || event.button != PointerButton::Primary {
            return false;
        }
        if event.target.is_interactive() {
            debug!(element = ?event.target, "drag: interactive target keeps the click");
            return false;
        }

        self.phase = DragPhase::Active {
            start_pointer: event.position,
            start_position: self.position,
        };
        style.set_cursor(Some(CursorStyle::Grabbing));
        style.set_text_selection(false);
        true
    }

    /// Advance the gesture. Returns the new position to forward to the
    /// window manager, or `None` when no gesture is active.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<Vec2> {
        let DragPhase::Active {
            start_pointer,
            start_position,
        } = self.phase
        else {
            return None;
        };

        let mut next = start_position + (pointer - start_pointer);
        if let Some(bounds) = self.bounds {
            next = bounds.clamp_point(next);
        }

        trace!(x = next.x, y = next.y, "drag tick");
        self.position = next;
        Some(next)
    }

    /// End the gesture and restore the document style
    pub fn pointer_up(&mut self, style: &mut impl DocumentStyle) {
        if !self.is_dragging() {
            return;
        }
        self.phase = DragPhase::Idle;
        style.set_cursor(None);
        style.set_text_selection(true);
    }
}
