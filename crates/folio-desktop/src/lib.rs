//! Windowing core for a portfolio desktop
//!
//! This crate provides the state behind a desktop-style web page:
//! - Window registry (open, close, minimize, maximize, restore, focus, z-order)
//! - Drag-to-move and eight-handle resize gesture controllers
//! - Window frames wiring pointer input to window commands
//! - Shell glue: app registry, dock, desktop icons, boot app
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and the maximized work area
//! - [`window`]: The window manager, sole owner of window state
//! - [`input`]: Pointer model and the drag/resize state machines
//! - [`frame`]: Per-window chrome and pointer routing
//! - [`shell`]: Desktop shell, the entry point for the front end
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopShell, FrameRegion, PointerEvent, Vec2};
//!
//! let mut shell = DesktopShell::default();
//! let terminal = shell.boot().unwrap();
//!
//! shell.pointer_down(terminal, FrameRegion::TitleBar, PointerEvent::primary(Vec2::new(300.0, 115.0)));
//! shell.pointer_move(Vec2::new(400.0, 215.0));
//! shell.pointer_up();
//!
//! assert_eq!(shell.windows().get(terminal).unwrap().position, Vec2::new(200.0, 200.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single owner**: only the window manager mutates window state
//! 2. **Pure Rust core**: everything but the `wasm` module runs without a browser
//! 3. **Return, don't call back**: controllers report geometry to their caller

pub mod frame;
pub mod input;
pub mod math;
pub mod shell;
pub mod window;

mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use error::{DesktopError, DesktopResult};
pub use frame::{FrameControl, FrameLayout, FrameOptions, FrameRegion, PointerOutcome, WindowFrame};
pub use input::{
    BodyStyle, CursorStyle, DocumentStyle, DragController, PointerButton, PointerEvent,
    PointerTarget, ResizeController, ResizeDirection,
};
pub use math::{Rect, Size, Vec2, WorkArea};
pub use shell::{
    AppConfig, AppRegistry, BootApp, DesktopIcon, DesktopShell, DockItem, ShellConfig,
    ShellSnapshot,
};
pub use types::{WindowId, ZIndex};
pub use window::{Window, WindowDefaults, WindowManager};
