// Host-side tests for frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_dt_clamp_allows_slow_displays() {
    // a 30 Hz display must not be clamped
    assert!(MAX_FRAME_DT_SEC > 1.0 / 30.0);
    assert!(MAX_FRAME_DT_SEC < 1.0);
}

#[test]
fn dom_hooks_are_distinct() {
    assert_ne!(VARIANT_TOGGLE_ID, MINIMAL_FX_TOGGLE_ID);
    assert!(MINIMAL_FX_ATTR.starts_with("data-"));
    assert!(VARIANT_ATTR.starts_with("data-"));
    assert!(MOBILE_MEDIA_QUERY.starts_with('('));
}
