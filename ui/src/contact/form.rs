//! Visitor-facing contact form with localized delivery feedback.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::contact::client::{self, FormPayload};
use crate::core::timing;
use crate::t;

/// How long a delivery banner stays up before clearing itself.
pub const STATUS_BANNER_MS: u64 = 5_000;

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Whether a hide timer that went up at epoch `shown` may clear the banner.
///
/// A newer banner bumps the epoch, and a submission in flight owns the
/// status line; in either case the old timer must leave things alone.
fn may_clear(current_epoch: u64, shown: u64, sending: bool) -> bool {
    current_epoch == shown && !sending
}

/// Name / email / message form that posts to `endpoint` and reports the
/// outcome in the visitor's language. While a submission is in flight the
/// submit button is disabled and further submits are ignored; the outcome
/// banner clears itself after [`STATUS_BANNER_MS`].
#[component]
pub fn ContactForm(
    #[props(default = client::DEFAULT_ENDPOINT.to_string())] endpoint: String,
) -> Element {
    crate::i18n::init();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| SubmitStatus::Idle);
    // Bumped whenever a banner goes up so a stale hide timer can tell it
    // has been superseded by a newer submission.
    let mut banner_epoch = use_signal(|| 0u64);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Sending {
            return;
        }
        let payload = FormPayload {
            name: name(),
            email: email(),
            message: message(),
        }
        .trimmed();
        if !payload.is_complete() {
            return;
        }

        status.set(SubmitStatus::Sending);
        let endpoint = endpoint.clone();
        spawn(async move {
            match client::submit(&endpoint, &payload).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(SubmitStatus::Sent);
                }
                Err(err) => {
                    tracing::warn!("contact submission failed: {err}");
                    status.set(SubmitStatus::Failed);
                }
            }

            let shown = banner_epoch() + 1;
            banner_epoch.set(shown);
            timing::sleep_ms(STATUS_BANNER_MS).await;
            if may_clear(banner_epoch(), shown, status() == SubmitStatus::Sending) {
                status.set(SubmitStatus::Idle);
            }
        });
    };

    let sending = status() == SubmitStatus::Sending;
    let banner = match status() {
        SubmitStatus::Sent => Some(("form-status form-status--ok", t!("form-success"))),
        SubmitStatus::Failed => Some(("form-status form-status--err", t!("form-error"))),
        _ => None,
    };

    rsx! {
        form { class: "contact-form", onsubmit: submit,
            div { class: "contact-form__field",
                label { r#for: "contact-name", {t!("form-name-label")} }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-email", {t!("form-email-label")} }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-message", {t!("form-message-label")} }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "6",
                    required: true,
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }
            button {
                class: "contact-form__submit",
                r#type: "submit",
                disabled: sending,
                if sending {
                    {t!("form-sending")}
                } else {
                    {t!("form-submit")}
                }
            }
            if let Some((class, text)) = banner {
                p { class: "{class}", role: "status", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_clears_when_nothing_newer_happened() {
        assert!(may_clear(3, 3, false));
    }

    #[test]
    fn stale_timer_leaves_a_newer_banner_alone() {
        assert!(!may_clear(4, 3, false));
    }

    #[test]
    fn timer_never_clears_mid_submission() {
        assert!(!may_clear(3, 3, true));
    }
}
