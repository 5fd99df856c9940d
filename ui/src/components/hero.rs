use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::scrollfx::{self, ScrollFrame};
use crate::i18n;
use crate::t;

const HERO_BACKDROP: Asset = asset!("/assets/hero.svg");

/// Fraction of the scroll distance the hero backdrop trails behind.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Full-height opening section with a parallax backdrop.
///
/// While the hero is still on screen the backdrop slides at half the
/// scroll speed. Once the page has scrolled a full viewport the backdrop
/// is out of sight and the transform stops updating.
#[component]
pub fn Hero() -> Element {
    i18n::init();

    let mut offset = use_signal(|| 0.0f64);

    let frames = use_coroutine(move |mut rx: UnboundedReceiver<ScrollFrame>| async move {
        while let Some(frame) = rx.next().await {
            if frame.y < frame.viewport_height {
                offset.set(frame.y * PARALLAX_FACTOR);
            }
        }
    });
    use_effect(move || scrollfx::watch_scroll(frames.tx()));

    // Slight over-scale hides the edges the translation would expose.
    let backdrop_style = format!(
        "background-image: url({HERO_BACKDROP}); transform: scale(1.05) translateY({}px);",
        offset()
    );

    let browse = move |evt: dioxus::events::MouseEvent| {
        evt.prevent_default();
        scrollfx::scroll_to_section("gallery");
    };

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__backdrop", style: "{backdrop_style}" }
            div { class: "hero__content",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                a {
                    class: "hero__cta",
                    href: "#gallery",
                    onclick: browse,
                    {t!("hero-cta")}
                }
            }
        }
    }
}
