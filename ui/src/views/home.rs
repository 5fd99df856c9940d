use dioxus::prelude::*;

use crate::components::{Hero, Reveal};
use crate::contact::ContactForm;
use crate::gallery::{self, GalleryGrid, GallerySlider};

// Site-wide theme (and inline fallback for release native builds)
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

/// The whole one-page site: hero, galleries, about, contact, footer.
#[component]
pub fn Home() -> Element {
    crate::i18n::init();

    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| crate::i18n::DEFAULT_LANGUAGE.to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        main { class: "page page-home",
            Hero {}

            section { id: "gallery", class: "section section--gallery",
                Reveal {
                    h2 { class: "section__heading", {crate::t!("gallery-heading")} }
                    p { class: "section__intro", {crate::t!("gallery-intro")} }
                }
                Reveal {
                    GallerySlider {
                        label: crate::t!("gallery-featured-label"),
                        items: gallery::featured_collection(),
                    }
                }
                GalleryGrid {
                    label: crate::t!("gallery-studio-label"),
                    items: gallery::studio_collection(),
                }
            }

            section { id: "about", class: "section section--about",
                Reveal {
                    h2 { class: "section__heading", {crate::t!("about-heading")} }
                    p { class: "section__body", {crate::t!("about-body-1")} }
                    p { class: "section__body", {crate::t!("about-body-2")} }
                }
            }

            section { id: "contact", class: "section section--contact",
                Reveal {
                    h2 { class: "section__heading", {crate::t!("contact-heading")} }
                    p { class: "section__intro", {crate::t!("contact-intro")} }
                    ContactForm {}
                    a {
                        class: "contact__instagram",
                        href: "https://www.instagram.com/avelle.studio/",
                        target: "_blank",
                        rel: "noopener",
                        {crate::t!("contact-instagram")}
                    }
                }
            }
        }

        footer { class: "site-footer",
            p { {crate::t!("footer-rights")} }
        }
    }
}
