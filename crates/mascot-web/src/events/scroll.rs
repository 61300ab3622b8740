use crate::dom;
use mascot_core::{Director, PageLayout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub director: Rc<RefCell<Director>>,
    pub layout: Rc<RefCell<PageLayout>>,
}

pub fn wire_scroll_handlers(w: ScrollWiring) {
    wire_scroll(&w);
    wire_resize(&w);
    // initial observation so a page opened mid-way announces where it is
    refresh_layout(&w);
    observe(&w);
}

fn wire_scroll(w: &ScrollWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        observe(&w);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &ScrollWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        refresh_layout(&w);
        observe(&w);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Section extents only move on resize or late content load, so they are
// cached between scroll events.
fn refresh_layout(w: &ScrollWiring) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let layout = dom::read_layout(&window, &document);
    log::debug!(
        "[scroll] layout: {} sections, footer={:?}",
        layout.sections.len(),
        layout.footer_top
    );
    *w.layout.borrow_mut() = layout;
    w.director.borrow_mut().set_mobile(dom::is_mobile(&window));
}

fn observe(w: &ScrollWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = dom::viewport(&window);
    let fired = w
        .director
        .borrow_mut()
        .on_scroll(&w.layout.borrow(), viewport);
    if fired > 0 {
        log::debug!("[scroll] y={:.0} announced {}", viewport.scroll_y, fired);
    }
}
