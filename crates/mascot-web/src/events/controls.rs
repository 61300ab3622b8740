use crate::constants::{MINIMAL_FX_TOGGLE_ID, VARIANT_TOGGLE_ID};
use crate::dom;
use mascot_core::Director;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_variant_toggle(document: &web::Document, director: Rc<RefCell<Director>>) {
    let doc = document.clone();
    dom::add_click_listener(document, VARIANT_TOGGLE_ID, move || {
        let variant = director.borrow_mut().toggle_variant();
        dom::set_variant_attr(&doc, variant);
        log::info!("[toggle] mascot -> {}", variant);
    });
}

pub fn wire_minimal_fx_toggle(document: &web::Document, director: Rc<RefCell<Director>>) {
    let doc = document.clone();
    dom::add_click_listener(document, MINIMAL_FX_TOGGLE_ID, move || {
        let on = !dom::minimal_fx(&doc);
        dom::set_minimal_fx(&doc, on);
        director.borrow_mut().set_reduced_motion(on);
        log::info!("[toggle] minimal fx {}", if on { "on" } else { "off" });
    });
}

/// Kills the tracker when the page is being unloaded or frozen.
pub fn wire_teardown(director: Rc<RefCell<Director>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        director.borrow_mut().teardown();
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
