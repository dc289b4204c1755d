//! Browser bindings
//!
//! `WasmShell` wraps a [`DesktopShell`] whose gesture side effects land on
//! `document.body`. The page re-renders from [`WasmShell::snapshot`] after
//! each call.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::error::DesktopError;
use crate::frame::{FrameControl, FrameRegion, PointerOutcome};
use crate::input::{CursorStyle, DocumentStyle, PointerButton, PointerEvent, PointerTarget};
use crate::math::{Size, Vec2};
use crate::shell::{DesktopShell, ShellConfig};
use crate::types::WindowId;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

impl From<DesktopError> for JsValue {
    fn from(err: DesktopError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// [`DocumentStyle`] writing to `document.body.style`
#[derive(Default)]
pub struct WebBodyStyle;

impl WebBodyStyle {
    fn body_style() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

impl DocumentStyle for WebBodyStyle {
    fn set_cursor(&mut self, cursor: Option<CursorStyle>) {
        let Some(style) = Self::body_style() else {
            return;
        };
        let value = cursor.map(CursorStyle::css).unwrap_or("");
        if style.set_property("cursor", value).is_err() {
            log("[folio] failed to set body cursor");
        }
    }

    fn set_text_selection(&mut self, enabled: bool) {
        let Some(style) = Self::body_style() else {
            return;
        };
        let value = if enabled { "" } else { "none" };
        if style.set_property("user-select", value).is_err() {
            log("[folio] failed to set body user-select");
        }
    }
}

fn window_id(id: f64) -> WindowId {
    id as WindowId
}

fn pointer_event(x: f64, y: f64, button: u8, target: &str) -> PointerEvent {
    let target = match target {
        "button" => PointerTarget::Button,
        "input" => PointerTarget::TextInput,
        "textarea" => PointerTarget::TextArea,
        "no-drag" => PointerTarget::NoDrag,
        _ => PointerTarget::Surface,
    };
    PointerEvent {
        position: Vec2::new(x as f32, y as f32),
        button: PointerButton::from_code(button),
        target,
    }
}

/// Desktop shell exported to JavaScript
#[wasm_bindgen]
pub struct WasmShell {
    shell: DesktopShell<WebBodyStyle>,
}

#[wasm_bindgen]
impl WasmShell {
    /// Shell with the portfolio defaults
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmShell {
        WasmShell {
            shell: DesktopShell::with_style(ShellConfig::default(), WebBodyStyle),
        }
    }

    /// Shell from a JSON [`ShellConfig`]; missing fields take defaults
    pub fn from_config(json: &str) -> Result<WasmShell, JsValue> {
        let config = ShellConfig::from_json(json)?;
        Ok(WasmShell {
            shell: DesktopShell::with_style(config, WebBodyStyle),
        })
    }

    /// Open the boot app; returns its window id or `undefined`
    pub fn boot(&mut self) -> Option<f64> {
        let id = self.shell.boot()?;
        log(&format!("[folio] boot opened window {}", id));
        Some(id as f64)
    }

    /// Dock click
    pub fn launch(&mut self, app_id: &str) -> Result<f64, JsValue> {
        Ok(self.shell.launch(app_id)? as f64)
    }

    /// Desktop icon double-click
    pub fn activate_icon(&mut self, icon_id: &str) -> Result<f64, JsValue> {
        Ok(self.shell.activate_icon(icon_id)? as f64)
    }

    pub fn close(&mut self, id: f64) {
        self.shell.close(window_id(id));
    }

    pub fn minimize(&mut self, id: f64) {
        self.shell.minimize(window_id(id));
    }

    pub fn maximize(&mut self, id: f64) {
        self.shell.maximize(window_id(id));
    }

    pub fn restore(&mut self, id: f64) {
        self.shell.restore(window_id(id));
    }

    pub fn focus(&mut self, id: f64) {
        self.shell.focus(window_id(id));
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.shell
            .set_viewport(Size::new(width as f32, height as f32));
    }

    /// Pointer-down on a frame region (`title`, `content`, `close`,
    /// `resize-se`, ...). Returns true when a drag or resize started.
    pub fn pointer_down(
        &mut self,
        id: f64,
        region: &str,
        x: f64,
        y: f64,
        button: u8,
        target: &str,
    ) -> Result<bool, JsValue> {
        let region = FrameRegion::from_id(region)
            .ok_or_else(|| JsValue::from_str(&format!("unknown frame region: {}", region)))?;
        let outcome = self
            .shell
            .pointer_down(window_id(id), region, pointer_event(x, y, button, target));
        debug!(?outcome, "wasm pointer_down");
        Ok(matches!(
            outcome,
            PointerOutcome::DragStarted | PointerOutcome::ResizeStarted
        ))
    }

    /// Document-level pointer move; true when the store changed
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.shell.pointer_move(Vec2::new(x as f32, y as f32))
    }

    pub fn pointer_up(&mut self) {
        self.shell.pointer_up();
    }

    /// Traffic-light click
    pub fn click_control(&mut self, id: f64, control: &str) -> Result<(), JsValue> {
        let control = FrameControl::from_id(control)
            .ok_or_else(|| JsValue::from_str(&format!("unknown control: {}", control)))?;
        self.shell.click_control(window_id(id), control);
        Ok(())
    }

    pub fn double_click_title(&mut self, id: f64) {
        self.shell.double_click_title(window_id(id));
    }

    /// Whole shell state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        Ok(self.shell.snapshot_json()?)
    }

    /// One window record as JSON; errors once the window is closed
    pub fn window(&self, id: f64) -> Result<String, JsValue> {
        let window = self.shell.window(window_id(id))?;
        serde_json::to_string(window).map_err(|e| JsValue::from(DesktopError::from(e)))
    }

    /// Desktop shortcuts as JSON
    pub fn desktop_icons(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.shell.desktop_icons())
            .map_err(|e| JsValue::from(DesktopError::from(e)))
    }
}

impl Default for WasmShell {
    fn default() -> Self {
        Self::new()
    }
}
