//! Slider and grid renderings of a gallery.
//!
//! Each mounted slider owns its own [`SliderEngine`] and [`ActiveSet`]
//! behind one signal, so several galleries on a page stay independent.
//! The same active set drives both the slides and the dot indicators,
//! which keeps the two in step by construction.

use dioxus::prelude::*;

use crate::components::Reveal;
use crate::gallery::engine::{ActiveSet, SliderEngine};
use crate::gallery::GalleryItem;
use crate::t;

/// Delay step between neighbouring grid items revealing.
pub const STAGGER_STEP_MS: u32 = 100;

/// Touch- and keyboard-driven slideshow over `items`.
///
/// `label` names the gallery for assistive tech and image alt text.
/// Arrow keys move when the slider has focus; a horizontal drag past the
/// swipe threshold moves in the drag direction; the dots jump directly.
#[component]
pub fn GallerySlider(label: String, items: Vec<GalleryItem>) -> Element {
    let len = items.len();
    let mut slider = use_signal(|| {
        // The placeholder backs the empty case below; it never renders.
        let n = len.max(1);
        (SliderEngine::new(n), ActiveSet::with_first_active(n))
    });
    let mut touch_start_x = use_signal(|| None::<f64>);

    if items.is_empty() {
        return rsx! {};
    }

    let mut go_to = move |index: usize| {
        slider.with_mut(|(engine, marks)| engine.go_to(index, marks));
    };
    let mut advance = move || slider.with_mut(|(engine, marks)| engine.next(marks));
    let mut retreat = move || slider.with_mut(|(engine, marks)| engine.prev(marks));

    let keynav = move |evt: dioxus::events::KeyboardEvent| match evt.key() {
        Key::ArrowLeft => {
            evt.prevent_default();
            retreat();
        }
        Key::ArrowRight => {
            evt.prevent_default();
            advance();
        }
        _ => {}
    };

    let touch_begin = move |evt: dioxus::events::TouchEvent| {
        if let Some(touch) = evt.touches().first() {
            touch_start_x.set(Some(touch.screen_coordinates().x));
        }
    };
    let touch_end = move |evt: dioxus::events::TouchEvent| {
        let Some(start_x) = touch_start_x() else {
            return;
        };
        touch_start_x.set(None);
        if let Some(touch) = evt.touches_changed().first() {
            let end_x = touch.screen_coordinates().x;
            slider.with_mut(|(engine, marks)| engine.swipe(start_x, end_x, marks));
        }
    };

    let view = slider();

    rsx! {
        div {
            class: "slider",
            role: "region",
            aria_label: "{label}",
            tabindex: "0",
            onkeydown: keynav,
            ontouchstart: touch_begin,
            ontouchend: touch_end,

            div { class: "slider__viewport",
                {items.iter().enumerate().map(|(index, item)| {
                    let number = index + 1;
                    let class = if view.1.is_active(index) {
                        "slider__slide slider__slide--active"
                    } else {
                        "slider__slide"
                    };
                    rsx! {
                        img {
                            key: "{index}",
                            class: "{class}",
                            src: "{item.image}",
                            alt: "{label} {number}",
                        }
                    }
                })}
            }

            button {
                class: "slider__arrow slider__arrow--prev",
                aria_label: t!("slider-prev"),
                onclick: move |evt| {
                    evt.stop_propagation();
                    retreat();
                },
                "‹"
            }
            button {
                class: "slider__arrow slider__arrow--next",
                aria_label: t!("slider-next"),
                onclick: move |evt| {
                    evt.stop_propagation();
                    advance();
                },
                "›"
            }

            div { class: "slider__dots",
                {(0..len).map(|index| {
                    let class = if view.1.is_active(index) {
                        "slider__dot slider__dot--active"
                    } else {
                        "slider__dot"
                    };
                    rsx! {
                        button {
                            key: "{index}",
                            class: "{class}",
                            // Fluent gets the 1-based position a visitor would say.
                            aria_label: t!("slider-go-to", number = (index + 1)),
                            onclick: move |evt| {
                                evt.stop_propagation();
                                go_to(index);
                            },
                        }
                    }
                })}
            }
        }
    }
}

/// Static photo grid with a staggered reveal and a hover treatment that
/// dims every tile except the one under the pointer.
#[component]
pub fn GalleryGrid(label: String, items: Vec<GalleryItem>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    rsx! {
        div { class: "gallery-grid", role: "list", aria_label: "{label}",
            {items.iter().enumerate().map(|(index, item)| {
                let number = index + 1;
                let dimmed = matches!(hovered(), Some(h) if h != index);
                let class = if dimmed {
                    "gallery-grid__item gallery-grid__item--dimmed"
                } else {
                    "gallery-grid__item"
                };
                rsx! {
                    Reveal { key: "{index}", delay_ms: (index as u32) * STAGGER_STEP_MS,
                        img {
                            class: "{class}",
                            src: "{item.image}",
                            alt: "{label} {number}",
                            onmouseenter: move |_| hovered.set(Some(index)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
            })}
        }
    }
}
