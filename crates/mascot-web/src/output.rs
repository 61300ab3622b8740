// Render-layer facing accessors. The frame loop publishes one snapshot per
// frame; the three.js side polls these from its own animation callback.

use crate::snapshot::Snapshot;
use mascot_core::Clip;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static LATEST: RefCell<Option<Snapshot>> = RefCell::new(None);
}

pub fn publish(snapshot: Snapshot) {
    LATEST.with(|l| *l.borrow_mut() = Some(snapshot));
}

fn with_latest<T>(f: impl FnOnce(&Snapshot) -> T) -> Option<T> {
    LATEST.with(|l| l.borrow().as_ref().map(f))
}

/// Position xyz, rotation xyz, scale, gimbal pitch/yaw, rotor angles.
#[wasm_bindgen]
pub fn mascot_frame() -> js_sys::Float32Array {
    with_latest(|s| js_sys::Float32Array::from(s.as_floats()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn mascot_variant() -> String {
    with_latest(|s| s.variant.as_str().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn mascot_region() -> String {
    with_latest(|s| s.region.as_str().to_string()).unwrap_or_default()
}

/// Active clip name for the robot, empty for the drone.
#[wasm_bindgen]
pub fn mascot_clip() -> String {
    with_latest(|s| s.clip_name().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn mascot_fading_clip() -> String {
    with_latest(|s| s.fading_clip_name().to_string()).unwrap_or_default()
}

/// Clip names in the order [`mascot_clip_weights`] reports them.
#[wasm_bindgen]
pub fn mascot_clip_names() -> js_sys::Array {
    Clip::ALL
        .iter()
        .map(|c| JsValue::from_str(c.name()))
        .collect()
}

#[wasm_bindgen]
pub fn mascot_clip_weights() -> js_sys::Float32Array {
    let w = with_latest(|s| s.clip_weights()).unwrap_or([0.0; Clip::COUNT]);
    js_sys::Float32Array::from(&w[..])
}
