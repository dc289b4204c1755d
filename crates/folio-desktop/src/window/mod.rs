//! Window management module
//!
//! Provides the authoritative window registry: lifecycle, geometry,
//! focus and z-order.

mod config;
mod manager;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowDefaults;
pub use manager::WindowManager;
pub use window::Window;

pub use crate::types::{WindowId, ZIndex};
