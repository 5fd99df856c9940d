use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::storage;
use crate::i18n;

/// Two-option `EN | UK` pill that flips the site language.
///
/// Clicking the pill body toggles to the other language; each option can
/// also be hit directly. A chosen tag is applied to the translation
/// loader, pushed into the shared language signal (when the shell
/// provides one), and saved for the next visit.
#[component]
pub fn LanguageToggle() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());

    let select = move |tag: &'static str| {
        #[cfg(debug_assertions)]
        println!("[i18n] switching site language to {tag}");
        if let Err(err) = i18n::set_language(tag) {
            eprintln!("[i18n] Failed selecting {tag} ({err}); keeping current language");
            return;
        }
        if let Err(err) = storage::store_language(tag) {
            // The switch itself has already applied; the save is best-effort.
            tracing::warn!("could not save language choice: {err}");
        }
        if let Some(mut code) = lang_code_ctx {
            code.set(tag.to_string());
        }
    };

    let other: &'static str = if current == "uk" { "en" } else { "uk" };
    let en_class = if current == "uk" {
        "lang-toggle__option"
    } else {
        "lang-toggle__option lang-toggle__option--selected"
    };
    let uk_class = if current == "uk" {
        "lang-toggle__option lang-toggle__option--selected"
    } else {
        "lang-toggle__option"
    };

    rsx! {
        div {
            class: "lang-toggle",
            onclick: move |_| select(other),
            span {
                class: "{en_class}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    select("en");
                },
                "EN"
            }
            span { class: "lang-toggle__divider", aria_hidden: "true", "|" }
            span {
                class: "{uk_class}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    select("uk");
                },
                "UK"
            }
        }
    }
}
