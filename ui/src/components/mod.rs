//! Building blocks shared across page sections.

pub mod hero;
pub mod language_toggle;
pub mod reveal;
pub mod site_header;

pub use hero::Hero;
pub use language_toggle::LanguageToggle;
pub use reveal::Reveal;
pub use site_header::SiteHeader;
