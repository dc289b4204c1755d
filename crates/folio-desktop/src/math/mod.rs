//! Geometry types for the desktop shell
//!
//! Positions and sizes are in desktop-space pixels, origin at the top-left
//! of the browser viewport.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::WorkArea;
pub use vec2::Vec2;
