//! Contact section: the form component and the delivery client behind it.

pub mod client;
pub mod form;

pub use client::{FormPayload, SubmitError};
pub use form::ContactForm;
