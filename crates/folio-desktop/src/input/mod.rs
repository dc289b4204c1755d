//! Pointer input model and gesture controllers
//!
//! Each controller is a small `Idle -> Active -> Idle` state machine driven
//! by pointer-down, pointer-move and pointer-up. Controllers own only
//! per-gesture scratch state; they report new geometry to the caller, which
//! forwards it to the window manager.

mod drag;
mod resize;

pub use drag::DragController;
pub use resize::{ResizeController, ResizeDirection};

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Mouse button that triggered a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Element kind a pointer event originated from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Plain frame surface (title bar, content background)
    #[default]
    Surface,
    Button,
    TextInput,
    TextArea,
    /// Element explicitly opted out of window drag
    NoDrag,
}

impl PointerTarget {
    /// Interactive descendants keep their clicks; they never start a drag.
    pub fn is_interactive(self) -> bool {
        !matches!(self, PointerTarget::Surface)
    }
}

/// A pointer-down event as seen by a controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Client coordinates
    pub position: Vec2,
    pub button: PointerButton,
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Primary-button press on the frame surface
    pub fn primary(position: Vec2) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            target: PointerTarget::Surface,
        }
    }

    /// Same event originating from `target`
    pub fn on(self, target: PointerTarget) -> Self {
        Self { target, ..self }
    }
}

/// Document-level cursor affordance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStyle {
    Grab,
    Grabbing,
    Resize(ResizeDirection),
}

impl CursorStyle {
    /// CSS `cursor` value
    pub fn css(self) -> &'static str {
        match self {
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::Resize(direction) => direction.cursor(),
        }
    }
}

/// Sink for the document-wide side effects of an active gesture
pub trait DocumentStyle {
    /// Force a cursor on the whole document; `None` restores the default
    fn set_cursor(&mut self, cursor: Option<CursorStyle>);

    /// Enable or suppress text selection on the whole document
    fn set_text_selection(&mut self, enabled: bool);
}

/// In-memory [`DocumentStyle`] that the front end reads back each frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyStyle {
    pub cursor: Option<CursorStyle>,
    pub text_selection: bool,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            cursor: None,
            text_selection: true,
        }
    }
}

impl DocumentStyle for BodyStyle {
    fn set_cursor(&mut self, cursor: Option<CursorStyle>) {
        self.cursor = cursor;
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_codes() {
        assert_eq!(PointerButton::from_code(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_code(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_code(4), PointerButton::Other(4));
    }

    #[test]
    fn test_interactive_targets() {
        assert!(!PointerTarget::Surface.is_interactive());
        assert!(PointerTarget::Button.is_interactive());
        assert!(PointerTarget::TextInput.is_interactive());
        assert!(PointerTarget::TextArea.is_interactive());
        assert!(PointerTarget::NoDrag.is_interactive());
    }

    #[test]
    fn test_cursor_css() {
        assert_eq!(CursorStyle::Grabbing.css(), "grabbing");
        assert_eq!(CursorStyle::Resize(ResizeDirection::SouthEast).css(), "se-resize");
    }
}
