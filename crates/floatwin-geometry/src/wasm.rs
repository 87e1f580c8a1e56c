//! WASM bindings for the window controller
//!
//! Exposes [`WindowController`] to JavaScript. Rects, motions and anchors
//! cross the boundary as JSON strings; sibling windows are passed as a flat
//! `[x, y, width, height, ...]` array.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GeometryConfig;
use crate::math::{Rect, Size, Vec2};
use crate::resize::SizeConstraints;
use crate::snap::SnapTargets;
use crate::window::{initial_position, WindowController};

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("serialization failed: {}", e)))
}

/// Window controller handle owned by the JS side
#[wasm_bindgen]
pub struct WasmWindowController {
    controller: WindowController,
    host: Rect,
    siblings: Vec<Rect>,
    constraints: SizeConstraints,
}

#[wasm_bindgen]
impl WasmWindowController {
    /// Create a controller from a (possibly partial) JSON config.
    ///
    /// An empty string selects the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmWindowController, JsValue> {
        let config = if config_json.trim().is_empty() {
            GeometryConfig::default()
        } else {
            serde_json::from_str::<GeometryConfig>(config_json)
                .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            controller: WindowController::new(config),
            host: Rect::default(),
            siblings: Vec::new(),
            constraints: SizeConstraints::default(),
        })
    }

    /// Set the canvas the window lives in
    #[wasm_bindgen]
    pub fn set_host(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.host = Rect::new(x, y, width, height);
    }

    /// Set the other windows as a flat `[x, y, w, h, ...]` array
    #[wasm_bindgen]
    pub fn set_siblings(&mut self, rects: &[f64]) -> Result<(), JsValue> {
        self.siblings = Rect::from_flat(rects).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Set the window's size constraints from JSON
    #[wasm_bindgen]
    pub fn set_constraints(&mut self, constraints_json: &str) -> Result<(), JsValue> {
        let constraints: SizeConstraints = serde_json::from_str(constraints_json)
            .map_err(|e| JsValue::from_str(&format!("invalid constraints: {}", e)))?;
        self.constraints = constraints;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.controller.snap_engine_mut().set_enabled(enabled);
    }

    /// Top-left for a new window of the given size, centered in the host
    #[wasm_bindgen]
    pub fn initial_position(&self, width: f64, height: f64) -> Result<String, JsValue> {
        let pos = initial_position(self.host, Size::new(width, height), None);
        to_json(&pos)
    }

    /// Resize anchor under the pointer, for cursor feedback
    #[wasm_bindgen]
    pub fn hover_anchor(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        px: f64,
        py: f64,
    ) -> Result<String, JsValue> {
        let anchor = self.controller.hover_anchor(
            Rect::new(x, y, width, height),
            Vec2::new(px, py),
            &self.constraints,
        );
        to_json(&anchor)
    }

    #[wasm_bindgen]
    pub fn begin_move(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        px: f64,
        py: f64,
        now_ms: f64,
    ) {
        self.controller
            .begin_move(Rect::new(x, y, width, height), Vec2::new(px, py), now_ms);
    }

    /// Start a resize; returns the grabbed anchor as JSON
    #[wasm_bindgen]
    pub fn begin_resize(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        px: f64,
        py: f64,
    ) -> Result<String, JsValue> {
        let anchor = self.controller.begin_resize(
            Rect::new(x, y, width, height),
            Vec2::new(px, py),
            &self.constraints,
            self.host,
        );
        to_json(&anchor)
    }

    /// New window rect as JSON, or `undefined` when no gesture is active
    #[wasm_bindgen]
    pub fn pointer_move(
        &mut self,
        px: f64,
        py: f64,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> Result<Option<String>, JsValue> {
        let targets = SnapTargets::new(self.host, &self.siblings);
        self.controller
            .pointer_move(Vec2::new(px, py), Size::new(width, height), &targets, now_ms)
            .map(|rect| to_json(&rect))
            .transpose()
    }

    /// Coast to animate as JSON, or `undefined`
    #[wasm_bindgen]
    pub fn pointer_up(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> Result<Option<String>, JsValue> {
        self.controller
            .pointer_up(Rect::new(x, y, width, height), self.host, now_ms)
            .map(|motion| to_json(&motion))
            .transpose()
    }

    #[wasm_bindgen]
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}
