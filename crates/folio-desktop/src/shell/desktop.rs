//! Desktop shell coordinating the window manager, frames and chrome

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{AppConfig, AppRegistry, BootApp, DesktopIcon, DockItem, ShellConfig, ShellSnapshot};
use crate::error::{DesktopError, DesktopResult};
use crate::frame::{FrameControl, FrameLayout, FrameOptions, FrameRegion, PointerOutcome, WindowFrame};
use crate::input::{BodyStyle, DocumentStyle, PointerEvent};
use crate::math::{Size, Vec2, WorkArea};
use crate::types::WindowId;
use crate::window::{Window, WindowManager};

/// Desktop shell: the single owner of window state
///
/// All mutation goes through this type (or, for frames, through the
/// `&mut WindowManager` it lends them for one call). Chrome renders from
/// the read-only projections: [`Self::dock_items`], [`Self::frame_layouts`]
/// and [`Self::snapshot`].
pub struct DesktopShell<S: DocumentStyle = BodyStyle> {
    windows: WindowManager,
    apps: AppRegistry,
    frames: BTreeMap<WindowId, WindowFrame>,
    desktop_icons: Vec<DesktopIcon>,
    viewport: Size,
    work_area: WorkArea,
    keep_on_screen: bool,
    boot_app: Option<BootApp>,
    /// Frame that owns the gesture in progress
    active: Option<WindowId>,
    style: S,
}

impl Default for DesktopShell<BodyStyle> {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl DesktopShell<BodyStyle> {
    /// Shell whose document side effects are kept in memory
    pub fn new(config: ShellConfig) -> Self {
        Self::with_style(config, BodyStyle::default())
    }
}

impl<S: DocumentStyle> DesktopShell<S> {
    /// Shell applying gesture side effects through `style`
    pub fn with_style(config: ShellConfig, style: S) -> Self {
        Self {
            windows: WindowManager::new(config.windows),
            apps: AppRegistry::new(config.apps),
            frames: BTreeMap::new(),
            desktop_icons: config.desktop_icons,
            viewport: config.viewport,
            work_area: config.work_area,
            keep_on_screen: config.keep_on_screen,
            boot_app: config.boot_app,
            active: None,
            style,
        }
    }

    /// Read-only window state
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn apps(&self) -> &AppRegistry {
        &self.apps
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Window record a content panel renders against
    pub fn window(&self, id: WindowId) -> DesktopResult<&Window> {
        self.windows.get(id).ok_or(DesktopError::WindowNotFound(id))
    }

    pub fn frame(&self, id: WindowId) -> Option<&WindowFrame> {
        self.frames.get(&id)
    }

    /// Open the configured boot app, if any
    pub fn boot(&mut self) -> Option<WindowId> {
        let boot = self.boot_app.clone()?;
        match self.open_at(&boot.app_id, boot.position) {
            Ok(id) => {
                info!(app_id = %boot.app_id, id, "boot: opened initial window");
                Some(id)
            }
            Err(err) => {
                debug!(%err, "boot: initial app unavailable");
                None
            }
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open (or bring back) a registered app, e.g. from a dock click
    pub fn launch(&mut self, app_id: &str) -> DesktopResult<WindowId> {
        let position = self.app(app_id)?.default_position;
        self.open_at(app_id, position)
    }

    /// Open a registered app at an explicit position
    pub fn open_at(&mut self, app_id: &str, position: Option<Vec2>) -> DesktopResult<WindowId> {
        let app = self.app(app_id)?.clone();
        let min_size = app.min_size.unwrap_or(self.windows.defaults().min_size);
        let id = self.windows.open_with_min(app_id, position, min_size);
        self.ensure_frame(id, &app);
        self.sync_frames();
        Ok(id)
    }

    /// Open the app behind a desktop shortcut
    pub fn activate_icon(&mut self, icon_id: &str) -> DesktopResult<WindowId> {
        let app_id = self
            .desktop_icons
            .iter()
            .find(|icon| icon.id == icon_id)
            .map(|icon| icon.app_id.clone())
            .ok_or(DesktopError::InvalidOperation {
                op: "activate_icon",
                reason: "no desktop icon with that id",
            })?;
        self.launch(&app_id)
    }

    pub fn close(&mut self, id: WindowId) {
        self.windows.close(id);
        self.sync_frames();
    }

    pub fn minimize(&mut self, id: WindowId) {
        self.windows.minimize(id);
        self.sync_frames();
    }

    pub fn maximize(&mut self, id: WindowId) {
        self.windows.maximize(id);
        self.sync_frames();
    }

    pub fn restore(&mut self, id: WindowId) {
        self.windows.restore(id);
        self.sync_frames();
    }

    pub fn focus(&mut self, id: WindowId) {
        self.windows.focus(id);
        self.sync_frames();
    }

    pub fn move_to(&mut self, id: WindowId, position: Vec2) {
        self.windows.move_to(id, position);
        self.sync_frames();
    }

    pub fn resize(&mut self, id: WindowId, size: Size) {
        self.windows.resize(id, size);
        self.sync_frames();
    }

    /// Browser viewport changed
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for frame in self.frames.values_mut() {
            frame.set_viewport(viewport);
        }
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    /// Pointer-down on a window's frame
    pub fn pointer_down(
        &mut self,
        id: WindowId,
        region: FrameRegion,
        event: PointerEvent,
    ) -> PointerOutcome {
        // A lost pointer-up leaves a gesture dangling; end it first
        self.pointer_up();

        let Some(frame) = self.frames.get_mut(&id) else {
            debug!(id, "pointer_down: no frame for window");
            return PointerOutcome::Ignored;
        };
        let outcome = frame.pointer_down(region, event, &mut self.windows, &mut self.style);
        if matches!(outcome, PointerOutcome::DragStarted | PointerOutcome::ResizeStarted) {
            self.active = Some(id);
        }
        self.sync_frames();
        outcome
    }

    /// Pointer moved anywhere on the document
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        match self.frames.get_mut(&id) {
            Some(frame) => frame.pointer_move(pointer, &mut self.windows),
            None => {
                self.active = None;
                false
            }
        }
    }

    /// Pointer released (or capture lost)
    pub fn pointer_up(&mut self) {
        if let Some(id) = self.active.take() {
            if let Some(frame) = self.frames.get_mut(&id) {
                frame.pointer_up(&mut self.style);
            }
        }
    }

    /// Click on a title-bar button
    pub fn click_control(&mut self, id: WindowId, control: FrameControl) {
        match self.frames.get_mut(&id) {
            Some(frame) => frame.click_control(control, &mut self.windows),
            None => debug!(id, ?control, "click_control: no frame for window"),
        }
        self.sync_frames();
    }

    /// Double-click on a title bar
    pub fn double_click_title(&mut self, id: WindowId) {
        if let Some(frame) = self.frames.get_mut(&id) {
            frame.double_click_title(&mut self.windows);
        }
        self.sync_frames();
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// One entry per registered app, in registry order
    pub fn dock_items(&self) -> Vec<DockItem> {
        self.apps
            .iter()
            .map(|app| DockItem {
                app_id: app.id.clone(),
                name: app.name.clone(),
                icon: app.icon.clone(),
                is_open: self.windows.is_open(&app.id),
                is_running: self.windows.is_running(&app.id),
            })
            .collect()
    }

    pub fn desktop_icons(&self) -> &[DesktopIcon] {
        &self.desktop_icons
    }

    /// Apps whose content panel is mounted: the window record exists and
    /// is open. Minimized panels stay mounted; their frame just hides.
    pub fn mounted_panels(&self) -> Vec<&AppConfig> {
        self.apps
            .iter()
            .filter(|app| self.windows.is_running(&app.id))
            .collect()
    }

    /// Visible frames in paint order
    pub fn frame_layouts(&self) -> Vec<FrameLayout> {
        self.windows
            .visible_windows()
            .into_iter()
            .filter_map(|w| self.frames.get(&w.id))
            .filter_map(|frame| frame.layout(&self.windows, self.viewport, &self.work_area))
            .collect()
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            viewport: self.viewport,
            focused: self.windows.focused(),
            z_counter: self.windows.z_counter(),
            windows: self.windows.windows().cloned().collect(),
            frames: self.frame_layouts(),
            dock: self.dock_items(),
            mounted: self.mounted_panels().iter().map(|a| a.id.clone()).collect(),
        }
    }

    pub fn snapshot_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn app(&self, app_id: &str) -> DesktopResult<&AppConfig> {
        self.apps
            .get(app_id)
            .ok_or_else(|| DesktopError::UnknownApp(app_id.to_string()))
    }

    fn ensure_frame(&mut self, id: WindowId, app: &AppConfig) {
        if self.frames.contains_key(&id) {
            return;
        }
        let Some(window) = self.windows.get(id) else {
            return;
        };
        let options = FrameOptions {
            title: app.name.clone(),
            min_size: window.min_size,
            resizable: app.resizable,
            keep_on_screen: self.keep_on_screen,
        };
        self.frames
            .insert(id, WindowFrame::new(window, options, self.viewport));
    }

    /// Reconcile every frame with the store and drop frames of closed windows
    fn sync_frames(&mut self) {
        let windows = &self.windows;
        let before = self.frames.len();
        self.frames.retain(|_, frame| frame.sync(windows));
        if self.frames.len() != before {
            debug!(dropped = before - self.frames.len(), "frames of closed windows dropped");
        }
        let Some(id) = self.active else {
            return;
        };
        // Closed, minimized or maximized windows cannot carry a gesture
        let frozen = self
            .windows
            .get(id)
            .map_or(true, |w| w.is_minimized || w.is_maximized);
        if !frozen {
            return;
        }
        self.active = None;
        match self.frames.get_mut(&id) {
            Some(frame) => frame.pointer_up(&mut self.style),
            None => {
                self.style.set_cursor(None);
                self.style.set_text_selection(true);
            }
        }
        debug!(id, "gesture ended by a window state change");
    }
}
