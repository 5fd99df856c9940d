#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::SiteHeader;
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // The desktop shell ships no asset directory of its own.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Launch maximized; dioxus-desktop 0.6 takes the WindowBuilder by value.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Avelle – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {}

#[component]
fn App() -> Element {
    i18n::init();

    // Language code signal shared through context, seeded from the saved
    // preference. The toggle in the header writes it on selection.
    let lang_code = use_signal(|| {
        ui::core::storage::load_language().unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string())
    });
    use_context_provider(|| lang_code);

    // Some window managers ignore the builder's maximize flag, so ask again
    // after the window exists.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Packaged builds carry no external stylesheet, so the theme is
        // embedded at compile time and inlined here.
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keying the routed subtree by language remounts everything on a
        // switch; the hidden marker keeps the signal subscription explicit.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // Development runs read assets straight out of the source tree.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific shell around the shared header which allows us to use
/// the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        SiteHeader {}

        Outlet::<Route> {}
    }
}
