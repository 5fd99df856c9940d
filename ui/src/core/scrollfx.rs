//! Scroll-linked presentation glue.
//!
//! The browser build wires real `web-sys` listeners and observers; native
//! builds compile the same entry points to no-ops, so components call these
//! unconditionally. Events are forwarded into component coroutines over
//! unbounded channels rather than mutating state from inside JS callbacks.

use futures_channel::mpsc::UnboundedSender;

/// Fixed-header allowance subtracted when scrolling to an anchor target.
pub const HEADER_SCROLL_OFFSET_PX: f64 = 80.0;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin pulls the reveal line 100px above the viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// One sampled scroll position, as delivered to component coroutines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Vertical scroll offset of the page in CSS pixels.
    pub y: f64,
    /// Inner height of the viewport at the time of the sample.
    pub viewport_height: f64,
}

/// Forward every window scroll event to `sender` as a [`ScrollFrame`].
///
/// The listener stays registered for the page's whole lifetime; nothing
/// ever unsubscribes.
#[cfg(target_arch = "wasm32")]
pub fn watch_scroll(sender: UnboundedSender<ScrollFrame>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    let sampled = window.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let y = sampled.page_y_offset().unwrap_or(0.0);
        let viewport_height = sampled
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let _ = sender.unbounded_send(ScrollFrame { y, viewport_height });
    });

    if window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_scroll(_sender: UnboundedSender<ScrollFrame>) {}

/// Send one `()` on `sender` the first time the element with `element_id`
/// intersects the viewport (threshold [`REVEAL_THRESHOLD`], bottom margin
/// [`REVEAL_ROOT_MARGIN`]), then stop watching it.
#[cfg(target_arch = "wasm32")]
pub fn observe_reveal(element_id: &str, sender: UnboundedSender<()>) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(element_id) else {
        return;
    };

    let handle: Rc<RefCell<Option<web_sys::IntersectionObserver>>> = Rc::new(RefCell::new(None));

    let handle_in_callback = handle.clone();
    let reveal = sender.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_into::<web_sys::IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });
        if intersecting {
            let _ = reveal.unbounded_send(());
            // Each element reveals once; stop watching afterwards.
            if let Some(observer) = handle_in_callback.borrow_mut().take() {
                observer.disconnect();
            }
        }
    });

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            observer.observe(&target);
            handle.borrow_mut().replace(observer);
            callback.forget();
        }
        Err(_) => {
            // No observer support: reveal immediately rather than leaving
            // the section hidden forever.
            let _ = sender.unbounded_send(());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_reveal(_element_id: &str, sender: UnboundedSender<()>) {
    // The desktop webview skips scroll choreography; content is simply shown.
    let _ = sender.unbounded_send(());
}

/// Smooth-scroll the page so the element with `id` sits just below the
/// fixed header.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };

    let rect_top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = rect_top + page_y - HEADER_SCROLL_OFFSET_PX;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_id: &str) {}
