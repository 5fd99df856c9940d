//! Shared UI crate for the Avelle site. Cross-platform views and logic live here.

pub mod components;
pub mod contact;
pub mod core;
pub mod gallery;
pub mod i18n;
pub mod views;

pub use views::Home;
