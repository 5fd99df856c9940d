//! Page-level views mounted by the web and desktop shells.

mod home;

pub use home::Home;
