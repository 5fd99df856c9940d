//! Internationalization (i18n) support for `avelle-ui`.
//!
//! Four crates cooperate here: `i18n-embed` selects languages and feeds the
//! loader, `fluent` formats messages, `rust-embed` carries the `.ftl` files
//! inside the binary, and `i18n-embed-fl` supplies the compile-checked `fl!`
//! lookup that the crate-local `t!` wraps.
//!
//! On disk the locales sit next to the crate root:
//! ```text
//! i18n.toml
//! i18n/
//!   en/avelle-ui.ftl   (fallback/reference)
//!   uk/avelle-ui.ftl   (additional locale)
//! ```
//!
//! Components call through the wrapper after a single `i18n::init()` at
//! app start:
//! ```ignore
//! use crate::t;
//! let heading = t!("gallery-heading");
//! ```
//!
//! Language selection is driven by the visitor, not the OS: the site comes
//! up in English and a saved choice from a previous visit overrides that.
//! `set_language` switches at runtime; persisting the choice is the
//! caller's job (see `core::storage`).
//!
//! NOTE: The hyphenated filename `avelle-ui.ftl` is canonical across all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Crate-local translation macro.
///     t!("gallery-heading")
///     t!("slider-go-to", number = 2)
///
/// Expands to `fl!` against the shared [`LOADER`], so every key is
/// compile-checked against the `en` reference file.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the reference file lives at `i18n/en/{DOMAIN}.ftl`.
const DOMAIN: &str = "avelle-ui";

/// Language the site comes up in when the visitor has never chosen one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Every locale folder under `i18n/`, baked into the binary.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Shared loader behind the `t!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = DEFAULT_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the localization bundles. Safe to call from every shell; only the
/// first call does work.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] language selection failed ({err}); staying on the fallback");
        }
    });
}

/// Switch language at runtime. A tag that does not parse is ignored (Ok
/// returned); the toggle only ever passes known tags anyway.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    Ok(())
}

/// List embedded language tags, sorted, one per locale folder.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The saved visitor preference when there is one, otherwise English.
fn requested_languages() -> Vec<LanguageIdentifier> {
    let stored = crate::core::storage::load_language()
        .and_then(|tag| tag.parse::<LanguageIdentifier>().ok());
    match stored {
        Some(lang) => vec![lang],
        None => vec![DEFAULT_LANGUAGE
            .parse()
            .expect("valid default language identifier")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn english_reference_is_embedded() {
        assert!(available_languages().iter().any(|l| l == "en"));
    }

    #[test]
    fn ukrainian_is_embedded() {
        assert!(available_languages().iter().any(|l| l == "uk"));
    }

    #[test]
    fn lookup_hits_the_reference_value() {
        init();
        let s = fl!(&*LOADER, "nav-gallery");
        assert_eq!(s, "Gallery");
    }

    #[test]
    fn unknown_tag_leaves_current_language() {
        init();
        let before = fl!(&*LOADER, "nav-gallery");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-gallery");
        assert_eq!(before, after);
    }
}
