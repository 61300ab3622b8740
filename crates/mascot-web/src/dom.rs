use crate::constants::{FOOTER_SELECTOR, MINIMAL_FX_ATTR, MOBILE_MEDIA_QUERY, VARIANT_ATTR};
use crate::input;
use mascot_core::{PageLayout, SectionId, Variant, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}; control not wired", element_id);
    }
}

pub fn viewport(window: &web::Window) -> Viewport {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    Viewport {
        scroll_y,
        height: window_height(window),
    }
}

pub fn window_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn window_width(window: &web::Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Reads the document-space extents of every section and the footer.
pub fn read_layout(window: &web::Window, document: &web::Document) -> PageLayout {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let mut layout = PageLayout::default();
    for id in SectionId::ALL {
        if let Some(el) = document.get_element_by_id(id.as_str()) {
            let rect = el.get_bounding_client_rect();
            layout = layout.with_section(
                id,
                rect.top() as f32 + scroll_y,
                rect.bottom() as f32 + scroll_y,
            );
        }
    }
    if let Ok(Some(footer)) = document.query_selector(FOOTER_SELECTOR) {
        layout = layout.with_footer(footer.get_bounding_client_rect().top() as f32 + scroll_y);
    }
    layout
}

pub fn is_mobile(window: &web::Window) -> bool {
    window
        .match_media(MOBILE_MEDIA_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn minimal_fx(document: &web::Document) -> bool {
    let value = document
        .document_element()
        .and_then(|el| el.get_attribute(MINIMAL_FX_ATTR));
    input::parse_flag(value.as_deref())
}

pub fn set_minimal_fx(document: &web::Document, on: bool) {
    if let Some(el) = document.document_element() {
        let _ = el.set_attribute(MINIMAL_FX_ATTR, if on { "true" } else { "false" });
    }
}

/// Variant preset on `<html data-mascot>`, if any. Unknown names are ignored.
pub fn variant_attr(document: &web::Document) -> Option<Variant> {
    let value = document.document_element()?.get_attribute(VARIANT_ATTR)?;
    match value.trim().parse::<Variant>() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[dom] {}; using default mascot", e);
            None
        }
    }
}

pub fn set_variant_attr(document: &web::Document, variant: Variant) {
    if let Some(el) = document.document_element() {
        let _ = el.set_attribute(VARIANT_ATTR, variant.as_str());
    }
}
