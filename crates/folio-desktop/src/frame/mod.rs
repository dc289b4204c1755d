//! Window frame: chrome, pointer wiring and reconciliation
//!
//! A frame pairs one window id with its drag and resize controllers. It
//! reads and writes window state only through the [`WindowManager`] passed
//! into each call; the manager never references frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{
    CursorStyle, DocumentStyle, DragController, PointerEvent, PointerTarget, ResizeController,
    ResizeDirection,
};
use crate::math::{Rect, Size, Vec2, WorkArea};
use crate::types::{WindowId, ZIndex};
use crate::window::{Window, WindowManager};

/// Traffic-light buttons in the title bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameControl {
    Close,
    Minimize,
    Maximize,
}

impl FrameControl {
    /// Left-to-right order in the title bar
    pub const ALL: [FrameControl; 3] = [
        FrameControl::Close,
        FrameControl::Minimize,
        FrameControl::Maximize,
    ];

    /// Parse a control name as used by the front end
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "close" => Some(FrameControl::Close),
            "minimize" => Some(FrameControl::Minimize),
            "maximize" => Some(FrameControl::Maximize),
            _ => None,
        }
    }
}

/// Part of the frame a pointer-down landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameRegion {
    TitleBar,
    Content,
    Control(FrameControl),
    ResizeHandle(ResizeDirection),
}

impl FrameRegion {
    /// Parse a region name: `title`, `content`, a control name, or
    /// `resize-` followed by a handle id (`resize-se`)
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "title" => Some(FrameRegion::TitleBar),
            "content" => Some(FrameRegion::Content),
            _ => match id.strip_prefix("resize-") {
                Some(dir) => ResizeDirection::from_id(dir).map(FrameRegion::ResizeHandle),
                None => FrameControl::from_id(id).map(FrameRegion::Control),
            },
        }
    }
}

/// What a pointer-down on a frame ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing happened (stale window, hidden handle)
    Ignored,
    /// Window was focused, no gesture started
    Focused,
    /// Window was focused and a drag started
    DragStarted,
    /// A resize started; the event does not reach the frame root
    ResizeStarted,
}

/// Per-window appearance options
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOptions {
    /// Title shown in the title bar
    pub title: String,
    /// Smallest size a resize gesture may report
    pub min_size: Size,
    pub resizable: bool,
    /// Keep the title bar reachable inside the viewport while dragging
    pub keep_on_screen: bool,
}

/// Render-ready description of one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    pub rect: Rect,
    pub z_index: ZIndex,
    pub focused: bool,
    pub maximized: bool,
    pub title_cursor: CursorStyle,
    pub controls: Vec<FrameControl>,
    /// Empty while maximized or when the app is not resizable
    pub handles: Vec<ResizeDirection>,
}

/// Chrome and gesture wiring for one window
#[derive(Clone, Debug)]
pub struct WindowFrame {
    window_id: WindowId,
    title: String,
    resizable: bool,
    keep_on_screen: bool,
    drag: DragController,
    resize: ResizeController,
}

impl WindowFrame {
    /// Frame mirroring `window` inside `viewport`
    pub fn new(window: &Window, options: FrameOptions, viewport: Size) -> Self {
        let mut frame = Self {
            window_id: window.id,
            title: options.title,
            resizable: options.resizable,
            keep_on_screen: options.keep_on_screen,
            drag: DragController::new(window.position),
            resize: ResizeController::new(window.size, options.min_size, ResizeController::viewport_max(viewport)),
        };
        frame.set_viewport(viewport);
        frame.reconcile(window);
        frame
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Locally mirrored position
    pub fn position(&self) -> Vec2 {
        self.drag.position()
    }

    /// Locally mirrored size
    pub fn size(&self) -> Size {
        self.resize.size()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.is_dragging() || self.is_resizing()
    }

    /// Recompute viewport-dependent limits
    pub fn set_viewport(&mut self, viewport: Size) {
        self.resize.set_max(ResizeController::viewport_max(viewport));
        let bounds = self
            .keep_on_screen
            .then(|| DragController::viewport_bounds(viewport));
        self.drag.set_bounds(bounds);
    }

    /// Route a pointer-down.
    ///
    /// A resize handle starts a resize and stops there. Anything else
    /// focuses the window; the title bar additionally starts a drag unless
    /// the window is maximized or the element is interactive.
    pub fn pointer_down(
        &mut self,
        region: FrameRegion,
        event: PointerEvent,
        wm: &mut WindowManager,
        style: &mut impl DocumentStyle,
    ) -> PointerOutcome {
        if !self.sync(wm) {
            debug!(id = self.window_id, "frame: pointer-down on a closed window");
            return PointerOutcome::Ignored;
        }

        if let FrameRegion::ResizeHandle(direction) = region {
            if self.resize.is_disabled() {
                return PointerOutcome::Ignored;
            }
            return if self.resize.pointer_down(direction, event, style) {
                PointerOutcome::ResizeStarted
            } else {
                PointerOutcome::Ignored
            };
        }

        wm.focus(self.window_id);

        match region {
            FrameRegion::TitleBar => {
                if self.drag.pointer_down(event, style) {
                    PointerOutcome::DragStarted
                } else {
                    PointerOutcome::Focused
                }
            }
            // Traffic lights are buttons: they never start a drag
            FrameRegion::Control(_) => {
                let started = self.drag.pointer_down(event.on(PointerTarget::Button), style);
                debug_assert!(!started);
                PointerOutcome::Focused
            }
            FrameRegion::Content | FrameRegion::ResizeHandle(_) => PointerOutcome::Focused,
        }
    }

    /// Forward the active gesture's report for this tick, if any.
    ///
    /// Returns true when a command was issued.
    pub fn pointer_move(&mut self, pointer: Vec2, wm: &mut WindowManager) -> bool {
        if let Some(position) = self.drag.pointer_move(pointer) {
            wm.move_to(self.window_id, position);
            return true;
        }
        if let Some(size) = self.resize.pointer_move(pointer) {
            wm.resize(self.window_id, size);
            return true;
        }
        false
    }

    /// End whichever gesture is active
    pub fn pointer_up(&mut self, style: &mut impl DocumentStyle) {
        self.drag.pointer_up(style);
        self.resize.pointer_up(style);
    }

    /// Click on a traffic-light button
    pub fn click_control(&mut self, control: FrameControl, wm: &mut WindowManager) {
        match control {
            FrameControl::Close => wm.close(self.window_id),
            FrameControl::Minimize => wm.minimize(self.window_id),
            FrameControl::Maximize => wm.maximize(self.window_id),
        }
        self.sync(wm);
    }

    /// Double-click on the title bar toggles maximize
    pub fn double_click_title(&mut self, wm: &mut WindowManager) {
        wm.maximize(self.window_id);
        self.sync(wm);
    }

    /// Pull authoritative geometry and flags from the store.
    ///
    /// Returns false once the window has been closed.
    pub fn sync(&mut self, wm: &WindowManager) -> bool {
        match wm.get(self.window_id) {
            Some(window) => {
                self.reconcile(window);
                true
            }
            None => false,
        }
    }

    fn reconcile(&mut self, window: &Window) {
        self.drag.set_position(window.position);
        self.resize.set_size(window.size);
        self.drag.set_disabled(window.is_maximized);
        self.resize
            .set_disabled(window.is_maximized || !self.resizable);
    }

    /// Render description, `None` when the window is gone or minimized
    pub fn layout(&self, wm: &WindowManager, viewport: Size, work_area: &WorkArea) -> Option<FrameLayout> {
        let window = wm.get(self.window_id)?;
        if !window.is_visible() {
            return None;
        }

        let rect = if window.is_maximized {
            work_area.rect(viewport)
        } else {
            Rect::from_pos_size(self.drag.position(), self.resize.size())
        };
        let handles = if window.is_maximized || !self.resizable {
            Vec::new()
        } else {
            ResizeDirection::ALL.to_vec()
        };
        let title_cursor = if self.drag.is_dragging() {
            CursorStyle::Grabbing
        } else {
            CursorStyle::Grab
        };

        Some(FrameLayout {
            id: window.id,
            app_id: window.app_id.clone(),
            title: self.title.clone(),
            rect,
            z_index: window.z_index,
            focused: wm.focused() == Some(window.id),
            maximized: window.is_maximized,
            title_cursor,
            controls: FrameControl::ALL.to_vec(),
            handles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BodyStyle, PointerButton};

    const VIEWPORT: Size = Size::new(1920.0, 1080.0);

    fn options(resizable: bool) -> FrameOptions {
        FrameOptions {
            title: "Terminal".to_string(),
            min_size: Size::new(400.0, 300.0),
            resizable,
            keep_on_screen: false,
        }
    }

    fn setup(resizable: bool) -> (WindowManager, WindowFrame, BodyStyle) {
        let mut wm = WindowManager::default();
        let id = wm.open("terminal", Some(Vec2::new(100.0, 100.0)));
        let frame = WindowFrame::new(wm.get(id).unwrap(), options(resizable), VIEWPORT);
        (wm, frame, BodyStyle::default())
    }

    #[test]
    fn test_title_drag_moves_window_every_tick() {
        let (mut wm, mut frame, mut style) = setup(true);
        let id = frame.window_id();

        let outcome = frame.pointer_down(
            FrameRegion::TitleBar,
            PointerEvent::primary(Vec2::new(300.0, 120.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::DragStarted);

        assert!(frame.pointer_move(Vec2::new(310.0, 130.0), &mut wm));
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(110.0, 110.0));
        assert!(frame.pointer_move(Vec2::new(400.0, 200.0), &mut wm));
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(200.0, 180.0));

        frame.pointer_up(&mut style);
        assert!(!frame.pointer_move(Vec2::new(0.0, 0.0), &mut wm));
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(200.0, 180.0));
    }

    #[test]
    fn test_pointer_down_focuses_background_window() {
        let (mut wm, mut frame, mut style) = setup(true);
        let other = wm.open("about", None);
        assert_eq!(wm.focused(), Some(other));

        let outcome = frame.pointer_down(
            FrameRegion::Content,
            PointerEvent::primary(Vec2::new(300.0, 300.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::Focused);
        assert_eq!(wm.focused(), Some(frame.window_id()));
        assert!(!frame.is_dragging());
    }

    #[test]
    fn test_control_buttons_focus_without_drag() {
        let (mut wm, mut frame, mut style) = setup(true);

        let outcome = frame.pointer_down(
            FrameRegion::Control(FrameControl::Close),
            PointerEvent::primary(Vec2::new(110.0, 110.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::Focused);
        assert!(!frame.is_dragging());
        assert_eq!(style, BodyStyle::default());
    }

    #[test]
    fn test_resize_handle_does_not_start_drag() {
        let (mut wm, mut frame, mut style) = setup(true);
        let id = frame.window_id();

        let outcome = frame.pointer_down(
            FrameRegion::ResizeHandle(ResizeDirection::SouthEast),
            PointerEvent::primary(Vec2::new(900.0, 700.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::ResizeStarted);
        assert!(frame.is_resizing());
        assert!(!frame.is_dragging());

        frame.pointer_move(Vec2::new(950.0, 720.0), &mut wm);
        let window = wm.get(id).unwrap();
        assert_eq!(window.size, Size::new(850.0, 620.0));
        assert_eq!(window.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_resize_below_min_is_clamped_in_store() {
        let (mut wm, mut frame, mut style) = setup(true);
        let id = frame.window_id();

        frame.pointer_down(
            FrameRegion::ResizeHandle(ResizeDirection::NorthWest),
            PointerEvent::primary(Vec2::new(100.0, 100.0)),
            &mut wm,
            &mut style,
        );
        for step in 1..=10 {
            let p = step as f32 * 100.0;
            frame.pointer_move(Vec2::new(100.0 + p, 100.0 + p), &mut wm);
            let size = wm.get(id).unwrap().size;
            assert!(size.width >= 400.0 && size.height >= 300.0);
        }
    }

    #[test]
    fn test_maximized_window_cannot_drag_or_resize() {
        let (mut wm, mut frame, mut style) = setup(true);
        frame.click_control(FrameControl::Maximize, &mut wm);

        let drag = frame.pointer_down(
            FrameRegion::TitleBar,
            PointerEvent::primary(Vec2::new(300.0, 60.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(drag, PointerOutcome::Focused);

        let resize = frame.pointer_down(
            FrameRegion::ResizeHandle(ResizeDirection::East),
            PointerEvent::primary(Vec2::new(1900.0, 300.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(resize, PointerOutcome::Ignored);

        let layout = frame.layout(&wm, VIEWPORT, &WorkArea::default()).unwrap();
        assert!(layout.maximized);
        assert!(layout.handles.is_empty());
        assert_eq!(layout.rect, Rect::new(8.0, 48.0, 1904.0, 944.0));
    }

    #[test]
    fn test_non_resizable_hides_handles() {
        let (mut wm, mut frame, mut style) = setup(false);

        let layout = frame.layout(&wm, VIEWPORT, &WorkArea::default()).unwrap();
        assert!(layout.handles.is_empty());

        let outcome = frame.pointer_down(
            FrameRegion::ResizeHandle(ResizeDirection::South),
            PointerEvent::primary(Vec2::new(300.0, 700.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::Ignored);
    }

    #[test]
    fn test_secondary_button_on_title_only_focuses() {
        let (mut wm, mut frame, mut style) = setup(true);
        let event = PointerEvent {
            button: PointerButton::Secondary,
            ..PointerEvent::primary(Vec2::new(300.0, 120.0))
        };

        let outcome = frame.pointer_down(FrameRegion::TitleBar, event, &mut wm, &mut style);
        assert_eq!(outcome, PointerOutcome::Focused);
    }

    #[test]
    fn test_sync_follows_store_changes() {
        let (mut wm, mut frame, _) = setup(true);
        let id = frame.window_id();

        wm.move_to(id, Vec2::new(640.0, 320.0));
        wm.resize(id, Size::new(1000.0, 700.0));
        assert!(frame.sync(&wm));
        assert_eq!(frame.position(), Vec2::new(640.0, 320.0));
        assert_eq!(frame.size(), Size::new(1000.0, 700.0));

        wm.close(id);
        assert!(!frame.sync(&wm));
    }

    #[test]
    fn test_controls_issue_commands() {
        let (mut wm, mut frame, _) = setup(true);
        let id = frame.window_id();

        frame.click_control(FrameControl::Minimize, &mut wm);
        assert!(wm.get(id).unwrap().is_minimized);
        assert!(frame.layout(&wm, VIEWPORT, &WorkArea::default()).is_none());

        wm.restore(id);
        frame.double_click_title(&mut wm);
        assert!(wm.get(id).unwrap().is_maximized);

        frame.click_control(FrameControl::Close, &mut wm);
        assert!(wm.get(id).is_none());
        assert!(frame.layout(&wm, VIEWPORT, &WorkArea::default()).is_none());
    }

    #[test]
    fn test_layout_reports_stacking_and_cursor() {
        let (mut wm, mut frame, mut style) = setup(true);

        let layout = frame.layout(&wm, VIEWPORT, &WorkArea::default()).unwrap();
        assert_eq!(layout.title, "Terminal");
        assert_eq!(layout.rect, Rect::new(100.0, 100.0, 800.0, 600.0));
        assert!(layout.focused);
        assert_eq!(layout.title_cursor, CursorStyle::Grab);
        assert_eq!(layout.handles.len(), 8);
        assert_eq!(layout.controls, FrameControl::ALL.to_vec());

        frame.pointer_down(
            FrameRegion::TitleBar,
            PointerEvent::primary(Vec2::new(300.0, 120.0)),
            &mut wm,
            &mut style,
        );
        let layout = frame.layout(&wm, VIEWPORT, &WorkArea::default()).unwrap();
        assert_eq!(layout.title_cursor, CursorStyle::Grabbing);
    }

    #[test]
    fn test_keep_on_screen_clamps_drag() {
        let mut wm = WindowManager::default();
        let id = wm.open("terminal", Some(Vec2::new(100.0, 100.0)));
        let mut frame = WindowFrame::new(
            wm.get(id).unwrap(),
            FrameOptions {
                keep_on_screen: true,
                ..options(true)
            },
            VIEWPORT,
        );
        let mut style = BodyStyle::default();

        frame.pointer_down(
            FrameRegion::TitleBar,
            PointerEvent::primary(Vec2::new(200.0, 120.0)),
            &mut wm,
            &mut style,
        );
        frame.pointer_move(Vec2::new(-1000.0, 5000.0), &mut wm);
        assert_eq!(wm.get(id).unwrap().position, Vec2::new(0.0, 980.0));
    }

    #[test]
    fn test_region_ids() {
        assert_eq!(FrameRegion::from_id("title"), Some(FrameRegion::TitleBar));
        assert_eq!(FrameRegion::from_id("content"), Some(FrameRegion::Content));
        assert_eq!(
            FrameRegion::from_id("minimize"),
            Some(FrameRegion::Control(FrameControl::Minimize))
        );
        assert_eq!(
            FrameRegion::from_id("resize-nw"),
            Some(FrameRegion::ResizeHandle(ResizeDirection::NorthWest))
        );
        assert_eq!(FrameRegion::from_id("resize-up"), None);
        assert_eq!(FrameRegion::from_id("dock"), None);
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let (mut wm, mut frame, mut style) = setup(true);
        wm.close(frame.window_id());

        let outcome = frame.pointer_down(
            FrameRegion::TitleBar,
            PointerEvent::primary(Vec2::new(300.0, 120.0)),
            &mut wm,
            &mut style,
        );
        assert_eq!(outcome, PointerOutcome::Ignored);
        assert_eq!(wm.count(), 0);
    }
}
