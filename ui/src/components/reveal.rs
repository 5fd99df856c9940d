use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::scrollfx;

// Each wrapper needs a stable DOM id so the intersection observer can find
// its element after mount.
static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Keeps its children hidden until they first scroll into view, then fades
/// them in. `delay_ms` staggers the fade relative to siblings revealed in
/// the same pass. An element only reveals once; scrolling back up does not
/// hide it again.
#[component]
pub fn Reveal(#[props(default = 0)] delay_ms: u32, children: Element) -> Element {
    let mut shown = use_signal(|| false);
    let dom_id = use_hook(|| {
        format!(
            "reveal-{}",
            NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    let wakeups = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        if rx.next().await.is_some() {
            shown.set(true);
        }
    });

    {
        let dom_id = dom_id.clone();
        use_effect(move || scrollfx::observe_reveal(&dom_id, wakeups.tx()));
    }

    let class = if shown() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };
    let style = if delay_ms > 0 {
        format!("transition-delay: {delay_ms}ms;")
    } else {
        String::new()
    };

    rsx! {
        div { id: "{dom_id}", class: "{class}", style: "{style}", {children} }
    }
}
