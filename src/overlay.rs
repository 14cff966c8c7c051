use crate::constants::HINT_ID;
use tunnel_core::ShapeKind;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Refresh the hint line with the live shape kind and entity count.
pub fn update_hint(document: &web::Document, shape: ShapeKind, live: usize, paused: bool) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let state = if paused { " • paused" } else { "" };
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px;'>Shape: {} • Live: {}{} • [1-4] shape [space] pause [r] reset [h] hide</div>",
            shape.name(),
            live,
            state
        );
        el.set_inner_html(&hint_html);
    }
}
