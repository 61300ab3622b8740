#![cfg(target_arch = "wasm32")]
use instant::Instant;
use mascot_core::{Director, PageLayout, Policy, Tuning, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod output;
mod snapshot;

pub use output::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mascot-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let policy = Policy {
        reduced_motion: dom::minimal_fx(&document),
        mobile: dom::is_mobile(&window),
    };
    let variant = dom::variant_attr(&document).unwrap_or_default();
    log::info!(
        "[init] variant={} reduced_motion={} mobile={}",
        variant,
        policy.reduced_motion,
        policy.mobile
    );
    dom::set_variant_attr(&document, variant);

    let director = Rc::new(RefCell::new(Director::new(
        variant,
        Tuning::default(),
        policy,
    )));
    let layout = Rc::new(RefCell::new(PageLayout::default()));

    events::wire_scroll_handlers(events::ScrollWiring {
        director: director.clone(),
        layout: layout.clone(),
    });
    events::wire_pointermove(director.clone());
    events::wire_variant_toggle(&document, director.clone());
    events::wire_minimal_fx_toggle(&document, director.clone());
    events::wire_teardown(director.clone());

    // Interpolator, gimbal and clip fades advance once per display refresh
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        director,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
