//! Core type definitions for the window manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Ids are never recycled: closing a window and reopening the same app
/// yields a fresh id.
pub type WindowId = u64;

/// Stacking order of a window; higher paints above lower
pub type ZIndex = u32;
