//! Shell chrome glue: app registry, dock and desktop projections
//!
//! [`DesktopShell`] is the entry point the front end talks to. It owns the
//! window manager, one [`crate::frame::WindowFrame`] per window and the
//! registered applications, and turns dock clicks, desktop icon activations
//! and pointer events into window manager commands.

mod app;
mod chrome;
mod config;
mod desktop;
mod snapshot;

pub use app::{AppConfig, AppRegistry};
pub use chrome::{DesktopIcon, DockItem};
pub use config::{BootApp, ShellConfig};
pub use desktop::DesktopShell;
pub use snapshot::ShellSnapshot;
