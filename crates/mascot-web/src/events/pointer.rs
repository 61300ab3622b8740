use crate::dom;
use crate::input;
use mascot_core::Director;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(director: Rc<RefCell<Director>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let normalized = input::normalize_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            dom::window_width(&wnd),
            dom::window_height(&wnd),
        );
        // frozen inside the state while tracking is disabled
        director.borrow().on_pointer(normalized);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
