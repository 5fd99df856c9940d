use dioxus::prelude::*;

use ui::components::SiteHeader;
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global reactive language code signal. The language toggle updates it
    // through context; a saved choice from a previous visit seeds it.
    let lang_code = use_signal(|| {
        ui::core::storage::load_language().unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string())
    });
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keying the routed subtree by language remounts everything on a
        // switch; the hidden marker keeps the signal subscription explicit.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

/// A web-specific shell around the shared header which allows us to use
/// the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteHeader {}
        Outlet::<Route> {}
    }
}
