use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::validation::is_valid_email;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Message can't be empty")]
    MissingMessage,
}

impl ContactMessage {
    /// Trims every field and drops an empty subject.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "hello@yourcompany.com",
        href: Some("mailto:hello@yourcompany.com"),
    },
    ContactInfo {
        label: "Phone",
        value: "+1 (555) 000-1234",
        href: Some("tel:+15550001234"),
    },
    ContactInfo {
        label: "Location",
        value: "Mumbai, India",
        href: None,
    },
    ContactInfo {
        label: "Hours",
        value: "Mon–Fri, 9 AM – 6 PM IST",
        href: None,
    },
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        width: 100%;
                        height: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: clamp(1.5rem, 4vw, 4rem);
                        padding: 0 clamp(1rem, 6vw, 6rem);
                        background: var(--bg-secondary);
                    }
                    @media (max-width: 768px) {
                        .contact-section {
                            grid-template-columns: 1fr;
                            align-content: center;
                            gap: 1rem;
                        }
                        .contact-info {
                            display: none;
                        }
                    }
                    .contact-heading h2 {
                        margin: 0 0 0.75rem;
                        font-size: clamp(1.8rem, 3.5vw, 2.6rem);
                    }
                    .contact-heading p {
                        margin: 0;
                        color: var(--text-secondary);
                        line-height: 1.6;
                    }
                    .contact-info {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0 0;
                        display: grid;
                        gap: 0.9rem;
                    }
                    .contact-info small {
                        display: block;
                        font-size: 0.65rem;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                        color: var(--text-muted);
                    }
                    .contact-info a {
                        color: var(--text-primary);
                        text-decoration: none;
                    }
                    .contact-form {
                        position: relative;
                        padding: 1rem 1.4rem;
                        border-radius: 14px;
                        border: 1px solid var(--border-subtle);
                        background: var(--bg-card);
                        display: flex;
                        flex-direction: column;
                        gap: 0.55rem;
                    }
                    .contact-form .form-title {
                        margin: 0 0 0.5rem;
                        font-size: 0.65rem;
                        font-weight: 600;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                        color: var(--text-muted);
                    }
                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.5rem;
                    }
                    .contact-field label {
                        display: block;
                        font-size: 0.72rem;
                        margin-bottom: 0.25rem;
                        color: var(--text-secondary);
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        padding: 0.6rem 0.75rem;
                        border-radius: 8px;
                        border: 1px solid var(--border-subtle);
                        background: transparent;
                        color: var(--text-primary);
                        font: inherit;
                        outline: none;
                    }
                    .contact-field textarea {
                        min-height: 6rem;
                        resize: vertical;
                    }
                    .contact-field input:focus,
                    .contact-field textarea:focus {
                        border-color: var(--accent);
                    }
                    .contact-error {
                        margin: 0;
                        color: #f87171;
                        font-size: 0.8rem;
                    }
                    .contact-actions {
                        display: flex;
                        justify-content: flex-end;
                    }
                    .contact-actions button {
                        padding: 0.6rem 1.4rem;
                        border: none;
                        border-radius: 999px;
                        color: white;
                        cursor: pointer;
                        background: linear-gradient(90deg, #7c3aed, #3c6bff);
                    }
                    .contact-actions button.sent {
                        background: #16a34a;
                        cursor: default;
                    }
                "#}
            </style>
            <div class="contact-heading">
                <h2>{"Let's build something great"}</h2>
                <p>{"Tell us where you are and where you want to be. We reply within one business day."}</p>
                <ul class="contact-info">
                    { for CONTACT_INFO.iter().map(|item| html! {
                        <li key={item.label}>
                            <small>{item.label}</small>
                            {
                                match item.href {
                                    Some(href) => html! { <a href={href}>{item.value}</a> },
                                    None => html! { <span>{item.value}</span> },
                                }
                            }
                        </li>
                    }) }
                </ul>
            </div>
            <ContactForm />
        </section>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<ContactError>);
    let loading = use_state(|| false);
    let sent = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let error = error.clone();
        let loading = loading.clone();
        let sent = sent.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading || *sent {
                return;
            }
            let draft = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                subject: Some((*subject).clone()),
                message: (*message).clone(),
            }
            .normalized();

            if let Err(e) = draft.validate() {
                debug!("Contact form rejected: {}", e);
                error.set(Some(e));
                return;
            }
            error.set(None);
            loading.set(true);

            let loading = loading.clone();
            let sent = sent.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                match serde_json::to_string(&draft) {
                    Ok(json) => info!("Contact message: {}", json),
                    Err(e) => warn!("Failed to serialize contact message: {}", e),
                }
                loading.set(false);
                sent.set(true);
            });
        })
    };

    let input_setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
            <p class="form-title">{"Send a message"}</p>
            <div class="contact-row">
                <div class="contact-field">
                    <label for="cf-name">{"Name"}</label>
                    <input id="cf-name" type="text" placeholder="Jane Smith" required={true}
                        value={(*name).clone()} oninput={input_setter(&name)} />
                </div>
                <div class="contact-field">
                    <label for="cf-email">{"Email"}</label>
                    <input id="cf-email" type="email" placeholder="jane@example.com" required={true}
                        value={(*email).clone()} oninput={input_setter(&email)} />
                </div>
            </div>
            <div class="contact-field">
                <label for="cf-subject">{"Subject"}</label>
                <input id="cf-subject" type="text" placeholder="Project enquiry…"
                    value={(*subject).clone()} oninput={input_setter(&subject)} />
            </div>
            <div class="contact-field">
                <label for="cf-message">{"Message"}</label>
                <textarea id="cf-message" placeholder="Tell us what you have in mind…" required={true}
                    value={(*message).clone()} oninput={on_message} />
            </div>
            {
                if let Some(e) = *error {
                    html! { <p class="contact-error">{e.to_string()}</p> }
                } else {
                    html! {}
                }
            }
            <div class="contact-actions">
                {
                    if *sent {
                        html! { <button type="button" class="sent" disabled={true}>{"✓ Message Sent"}</button> }
                    } else {
                        html! {
                            <button type="submit" disabled={*loading}>
                                { if *loading { "Sending..." } else { "Send Message" } }
                            </button>
                        }
                    }
                }
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactMessage {
        ContactMessage {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            subject: None,
            message: "Need a new site".into(),
        }
    }

    #[test]
    fn accepts_complete_message() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn rejects_missing_fields_in_order() {
        let mut m = draft();
        m.message = "  ".into();
        assert_eq!(m.validate(), Err(ContactError::MissingMessage));
        m.email = "jane".into();
        assert_eq!(m.validate(), Err(ContactError::InvalidEmail));
        m.name = String::new();
        assert_eq!(m.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn blank_subject_is_dropped_from_json() {
        let mut m = draft();
        m.subject = Some("   ".into());
        let json = serde_json::to_string(&m.normalized()).unwrap();
        assert!(!json.contains("subject"));

        m.subject = Some(" Pricing ".into());
        let json = serde_json::to_value(m.normalized()).unwrap();
        assert_eq!(json["subject"], "Pricing");
    }
}
