use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::language_toggle::LanguageToggle;
use crate::core::scrollfx::{self, ScrollFrame};
use crate::i18n;
use crate::t;

// Header stylesheet (and inline fallback for release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Scroll depth past which the header swaps to its elevated treatment.
pub const ELEVATION_THRESHOLD_PX: f64 = 50.0;

/// Fixed page header: brand, section links, and the language switch.
///
/// The header starts transparent over the hero and gains an opaque,
/// shadowed treatment once the page scrolls past
/// [`ELEVATION_THRESHOLD_PX`]. Section links smooth-scroll instead of
/// jumping so the fixed header never covers the target heading.
#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    // Re-render when the shell-provided language signal changes.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] SiteHeader render lang={}", code());
        } else {
            println!("[i18n] SiteHeader render lang=<none>");
        }
    }

    let mut elevated = use_signal(|| false);

    // Scroll positions arrive over a channel; the DOM listener itself never
    // touches component state.
    let frames = use_coroutine(move |mut rx: UnboundedReceiver<ScrollFrame>| async move {
        while let Some(frame) = rx.next().await {
            let now = frame.y > ELEVATION_THRESHOLD_PX;
            if elevated() != now {
                elevated.set(now);
            }
        }
    });
    use_effect(move || scrollfx::watch_scroll(frames.tx()));

    let header_class = if elevated() {
        "site-header site-header--elevated"
    } else {
        "site-header"
    };

    let jump = move |evt: dioxus::events::MouseEvent, id: &'static str| {
        evt.prevent_default();
        scrollfx::scroll_to_section(id);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { class: "{header_class}",
            // Hidden marker ensures the header re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "site-header__inner",
                a {
                    class: "site-header__brand",
                    href: "#hero",
                    onclick: move |evt| jump(evt, "hero"),
                    "Avelle"
                }
                nav { class: "site-header__links",
                    a {
                        class: "site-header__link",
                        href: "#gallery",
                        onclick: move |evt| jump(evt, "gallery"),
                        {t!("nav-gallery")}
                    }
                    a {
                        class: "site-header__link",
                        href: "#about",
                        onclick: move |evt| jump(evt, "about"),
                        {t!("nav-about")}
                    }
                    a {
                        class: "site-header__link",
                        href: "#contact",
                        onclick: move |evt| jump(evt, "contact"),
                        {t!("nav-contact")}
                    }
                }
                LanguageToggle {}
            }
        }
    }
}
