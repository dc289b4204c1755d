//! Window manager: the single writer of window state
//!
//! Every command is a synchronous, total state transition. A command that
//! names a window which no longer exists is a no-op: UI callbacks can fire
//! after the window they reference has been closed (a queued drag move
//! landing after a close click, for instance).

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{Window, WindowDefaults};
use crate::math::{Size, Vec2};
use crate::types::{WindowId, ZIndex};

/// Authoritative registry of windows, focus and the z-order counter
#[derive(Clone, Debug)]
pub struct WindowManager {
    /// Keyed by id; ids are allocated in increasing order so iteration
    /// follows creation order
    windows: BTreeMap<WindowId, Window>,
    focused: Option<WindowId>,
    next_id: WindowId,
    z_counter: ZIndex,
    defaults: WindowDefaults,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowDefaults::default())
    }
}

impl WindowManager {
    /// Create an empty registry
    pub fn new(defaults: WindowDefaults) -> Self {
        Self {
            windows: BTreeMap::new(),
            focused: None,
            next_id: 1,
            z_counter: defaults.z_seed,
            defaults,
        }
    }

    /// Defaults used for new windows
    pub fn defaults(&self) -> &WindowDefaults {
        &self.defaults
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open the window for `app_id`, creating it only if none exists.
    ///
    /// - no window: create one with a fresh id, the given position or the
    ///   cascade position, default size, next z-index, and focus it;
    /// - existing window: bring it to front, focus it and clear minimized.
    ///
    /// Returns the id of the window now hosting `app_id`.
    pub fn open(&mut self, app_id: &str, position: Option<Vec2>) -> WindowId {
        let min_size = self.defaults.min_size;
        self.open_with_min(app_id, position, min_size)
    }

    /// [`Self::open`] for an app that declares its own minimum size.
    ///
    /// `min_size` replaces the default minimum on a newly created window and
    /// the initial size grows to satisfy it. An existing window keeps the
    /// minimum it was created with.
    pub fn open_with_min(
        &mut self,
        app_id: &str,
        position: Option<Vec2>,
        min_size: Size,
    ) -> WindowId {
        if let Some(id) = self.find_by_app_id(app_id) {
            let z = self.next_z();
            if let Some(window) = self.windows.get_mut(&id) {
                if window.is_minimized {
                    debug!(id, app_id, "open: restoring minimized window");
                }
                window.is_open = true;
                window.is_minimized = false;
                window.z_index = z;
            }
            self.focused = Some(id);
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;

        let position =
            position.unwrap_or_else(|| self.defaults.cascade_position(self.windows.len()));
        let z_index = self.next_z();

        let window = Window {
            id,
            app_id: app_id.to_string(),
            title: app_id.to_string(),
            is_open: true,
            is_minimized: false,
            is_maximized: false,
            position,
            size: self.defaults.initial_size(min_size),
            min_size,
            z_index,
        };

        debug!(id, app_id, z_index, "open: created window");
        self.windows.insert(id, window);
        self.focused = Some(id);
        id
    }

    /// Remove a window entirely.
    ///
    /// Focus is cleared if it pointed at the closed window; the next window
    /// down is not promoted.
    pub fn close(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_none() {
            debug!(id, "close: no such window");
            return;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        debug!(id, remaining = self.windows.len(), "close: removed window");
    }

    /// Hide a window while keeping it registered (and running).
    pub fn minimize(&mut self, id: WindowId) {
        let Some(window) = self.windows.get_mut(&id) else {
            debug!(id, "minimize: no such window");
            return;
        };
        window.is_minimized = true;
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Toggle the maximized flag; stored geometry is left untouched.
    pub fn maximize(&mut self, id: WindowId) {
        let Some(window) = self.windows.get_mut(&id) else {
            debug!(id, "maximize: no such window");
            return;
        };
        window.is_maximized = !window.is_maximized;
    }

    /// Un-minimize a window, bring it to front and focus it.
    ///
    /// On a window that is not minimized this is the same as [`Self::focus`].
    pub fn restore(&mut self, id: WindowId) {
        let Some(window) = self.windows.get_mut(&id) else {
            debug!(id, "restore: no such window");
            return;
        };
        window.is_minimized = false;
        self.raise_and_focus(id);
    }

    /// Bring a window to front and focus it.
    ///
    /// Minimized windows cannot take focus; use [`Self::restore`] instead.
    pub fn focus(&mut self, id: WindowId) {
        match self.windows.get(&id) {
            None => debug!(id, "focus: no such window"),
            Some(window) if window.is_minimized => {
                debug!(id, "focus: ignoring minimized window")
            }
            Some(_) => self.raise_and_focus(id),
        }
    }

    /// Overwrite the stored position. Boundary clamping is the drag
    /// controller's job.
    pub fn move_to(&mut self, id: WindowId, position: Vec2) {
        match self.windows.get_mut(&id) {
            Some(window) => {
                trace!(id, x = position.x, y = position.y, "move");
                window.position = position;
            }
            None => debug!(id, "move: no such window"),
        }
    }

    /// Overwrite the stored size. Minimum/maximum clamping is the resize
    /// controller's job.
    pub fn resize(&mut self, id: WindowId, size: Size) {
        match self.windows.get_mut(&id) {
            Some(window) => {
                trace!(id, width = size.width, height = size.height, "resize");
                window.size = size;
            }
            None => debug!(id, "resize: no such window"),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether `app_id` has a window that is open and not minimized
    pub fn is_open(&self, app_id: &str) -> bool {
        self.get_by_app_id(app_id)
            .map(Window::is_visible)
            .unwrap_or(false)
    }

    /// Whether `app_id` has a registered window, minimized or not
    pub fn is_running(&self, app_id: &str) -> bool {
        self.get_by_app_id(app_id)
            .map(|w| w.is_open)
            .unwrap_or(false)
    }

    /// Window hosting `app_id`, if any
    pub fn get_by_app_id(&self, app_id: &str) -> Option<&Window> {
        self.windows.values().find(|w| w.app_id == app_id)
    }

    /// Window by id
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Currently focused window
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Number of registered windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Last z-index handed out
    pub fn z_counter(&self) -> ZIndex {
        self.z_counter
    }

    /// All windows in creation order
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// All windows sorted by z-index, lowest first (paint order)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut sorted: Vec<&Window> = self.windows.values().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// Windows that paint, lowest first
    pub fn visible_windows(&self) -> Vec<&Window> {
        self.windows_by_z()
            .into_iter()
            .filter(|w| w.is_visible())
            .collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find_by_app_id(&self, app_id: &str) -> Option<WindowId> {
        self.get_by_app_id(app_id).map(|w| w.id)
    }

    fn next_z(&mut self) -> ZIndex {
        self.z_counter += 1;
        self.z_counter
    }

    fn raise_and_focus(&mut self, id: WindowId) {
        let z = self.next_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z;
            self.focused = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WindowManager {
        WindowManager::default()
    }

    #[test]
    fn test_open_creates_focused_window() {
        let mut wm = manager();
        let id = wm.open("terminal", Some(Vec2::new(100.0, 100.0)));

        let window = wm.get(id).unwrap();
        assert_eq!(window.app_id, "terminal");
        assert_eq!(window.title, "terminal");
        assert_eq!(window.position, Vec2::new(100.0, 100.0));
        assert_eq!(window.size, Size::new(800.0, 600.0));
        assert!(window.is_open);
        assert!(!window.is_minimized);
        assert!(!window.is_maximized);
        assert!(window.z_index > 100);
        assert_eq!(wm.focused(), Some(id));
    }

    #[test]
    fn test_open_with_app_minimum() {
        let mut wm = manager();

        let music = wm.open_with_min("music", None, Size::new(350.0, 500.0));
        let window = wm.get(music).unwrap();
        assert_eq!(window.min_size, Size::new(350.0, 500.0));
        assert_eq!(window.size, Size::new(800.0, 600.0));

        let wide = wm.open_with_min("wide", None, Size::new(1000.0, 500.0));
        let window = wm.get(wide).unwrap();
        assert_eq!(window.min_size, Size::new(1000.0, 500.0));
        assert_eq!(window.size, Size::new(1000.0, 600.0));

        // Reopen leaves the record's minimum alone
        wm.open("music", None);
        assert_eq!(wm.get(music).unwrap().min_size, Size::new(350.0, 500.0));
    }

    #[test]
    fn test_open_cascades_without_position() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        let c = wm.open("music", None);

        assert_eq!(wm.get(a).unwrap().position, Vec2::new(100.0, 100.0));
        assert_eq!(wm.get(b).unwrap().position, Vec2::new(130.0, 130.0));
        assert_eq!(wm.get(c).unwrap().position, Vec2::new(160.0, 160.0));
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let mut wm = manager();
        let first = wm.open("terminal", None);
        let z_first = wm.get(first).unwrap().z_index;

        let second = wm.open("terminal", None);
        let third = wm.open("terminal", None);

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(wm.count(), 1);
        assert_eq!(wm.focused(), Some(first));
        assert!(wm.get(first).unwrap().z_index > z_first);
    }

    #[test]
    fn test_reopen_keeps_geometry() {
        let mut wm = manager();
        let id = wm.open("terminal", Some(Vec2::new(100.0, 100.0)));
        wm.move_to(id, Vec2::new(250.0, 90.0));

        // A position on re-open is ignored for an existing window
        wm.open("terminal", Some(Vec2::new(0.0, 0.0)));
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(250.0, 90.0));
    }

    #[test]
    fn test_open_restores_minimized_window() {
        let mut wm = manager();
        let id = wm.open("music", None);
        let other = wm.open("about", None);
        wm.minimize(id);

        let reopened = wm.open("music", None);
        assert_eq!(reopened, id);

        let window = wm.get(id).unwrap();
        assert!(!window.is_minimized);
        assert!(window.z_index > wm.get(other).unwrap().z_index);
        assert_eq!(wm.focused(), Some(id));
    }

    #[test]
    fn test_close_removes_and_clears_focus() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);

        wm.close(b);
        assert!(wm.get(b).is_none());
        assert_eq!(wm.count(), 1);
        // No promotion of the next window down
        assert_eq!(wm.focused(), None);
        assert!(wm.get(a).is_some());
    }

    #[test]
    fn test_close_unfocused_keeps_focus() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);

        wm.close(a);
        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_close_then_reopen_allocates_new_id() {
        let mut wm = manager();
        let first = wm.open("about", None);
        wm.move_to(first, Vec2::new(400.0, 300.0));
        wm.resize(first, Size::new(1000.0, 700.0));
        wm.close(first);

        let second = wm.open("about", None);
        assert_ne!(first, second);

        let window = wm.get(second).unwrap();
        assert_eq!(window.position, Vec2::new(100.0, 100.0));
        assert_eq!(window.size, Size::new(800.0, 600.0));
    }

    #[test]
    fn test_minimize_clears_focus_but_keeps_running() {
        let mut wm = manager();
        let id = wm.open("terminal", None);

        wm.minimize(id);
        let window = wm.get(id).unwrap();
        assert!(window.is_minimized);
        assert!(window.is_open);
        assert_eq!(wm.focused(), None);
        assert!(wm.is_running("terminal"));
        assert!(!wm.is_open("terminal"));
        assert!(wm.visible_windows().is_empty());
    }

    #[test]
    fn test_minimize_unfocused_keeps_focus() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);

        wm.minimize(a);
        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_maximize_round_trip() {
        let mut wm = manager();
        let id = wm.open("safari", Some(Vec2::new(50.0, 50.0)));
        wm.resize(id, Size::new(1000.0, 700.0));

        wm.maximize(id);
        assert!(wm.get(id).unwrap().is_maximized);

        wm.maximize(id);
        let window = wm.get(id).unwrap();
        assert!(!window.is_maximized);
        assert_eq!(window.position, Vec2::new(50.0, 50.0));
        assert_eq!(window.size, Size::new(1000.0, 700.0));
    }

    #[test]
    fn test_maximize_does_not_change_focus_or_z() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        let z_a = wm.get(a).unwrap().z_index;

        wm.maximize(a);
        assert_eq!(wm.focused(), Some(b));
        assert_eq!(wm.get(a).unwrap().z_index, z_a);
    }

    #[test]
    fn test_restore_brings_to_front() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        wm.minimize(a);

        wm.restore(a);
        let window = wm.get(a).unwrap();
        assert!(!window.is_minimized);
        assert!(window.z_index > wm.get(b).unwrap().z_index);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_restore_on_visible_window_focuses() {
        let mut wm = manager();
        let a = wm.open("about", None);
        wm.open("projects", None);

        wm.restore(a);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_focus_brings_to_front() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        assert_eq!(wm.focused(), Some(b));

        wm.focus(a);
        assert_eq!(wm.focused(), Some(a));
        assert!(wm.get(a).unwrap().z_index > wm.get(b).unwrap().z_index);
    }

    #[test]
    fn test_focus_ignores_minimized_window() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        wm.minimize(a);
        let counter = wm.z_counter();

        wm.focus(a);
        assert_eq!(wm.focused(), Some(b));
        assert_eq!(wm.z_counter(), counter);
        assert!(wm.get(a).unwrap().is_minimized);
    }

    #[test]
    fn test_z_counter_strictly_increases() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        let z_before = wm.z_counter();

        wm.focus(a);
        wm.focus(b);
        wm.focus(a);

        assert_eq!(wm.z_counter(), z_before + 3);
        assert_eq!(wm.get(a).unwrap().z_index, wm.z_counter());
    }

    #[test]
    fn test_move_and_resize_are_verbatim() {
        let mut wm = manager();
        let id = wm.open("finder", None);

        // No clamping at this layer
        wm.move_to(id, Vec2::new(-500.0, 9000.0));
        wm.resize(id, Size::new(10.0, 10.0));

        let window = wm.get(id).unwrap();
        assert_eq!(window.position, Vec2::new(-500.0, 9000.0));
        assert_eq!(window.size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_stale_ids_are_noops() {
        let mut wm = manager();
        let id = wm.open("about", None);
        wm.close(id);
        let counter = wm.z_counter();

        wm.close(id);
        wm.minimize(id);
        wm.maximize(id);
        wm.restore(id);
        wm.focus(id);
        wm.move_to(id, Vec2::new(1.0, 1.0));
        wm.resize(id, Size::new(500.0, 500.0));

        assert_eq!(wm.count(), 0);
        assert_eq!(wm.focused(), None);
        assert_eq!(wm.z_counter(), counter);
    }

    #[test]
    fn test_windows_by_z_orders_lowest_first() {
        let mut wm = manager();
        let a = wm.open("about", None);
        let b = wm.open("projects", None);
        let c = wm.open("terminal", None);
        wm.focus(a);

        let order: Vec<WindowId> = wm.windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);

        // Creation order is unaffected
        let created: Vec<WindowId> = wm.windows().map(|w| w.id).collect();
        assert_eq!(created, vec![a, b, c]);
    }

    #[test]
    fn test_open_clamps_default_size_to_min() {
        let mut wm = WindowManager::new(WindowDefaults {
            default_size: Size::new(200.0, 100.0),
            ..Default::default()
        });
        let id = wm.open("music", None);
        assert_eq!(wm.get(id).unwrap().size, Size::new(400.0, 300.0));
    }
}
