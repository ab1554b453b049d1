use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const SERVICES: &[&str] = &[
    "E-commerce Solutions",
    "Finance Management",
    "AI Agent Solutions",
    "Custom Development",
    "Consulting",
];

const BUDGETS: &[&str] = &["< $5k", "$5k - $15k", "$15k - $50k", "$50k+"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.email.contains('@') && !self.message.trim().is_empty()
    }

    /// The form has no backend; submitting hands it to the visitor's mail client.
    pub fn mailto_link(&self, to: &str) -> String {
        let subject = format!("Project enquiry from {}", self.name.trim());
        let mut body = format!("Name: {}\nEmail: {}\n", self.name.trim(), self.email.trim());
        for (label, value) in [
            ("Company", &self.company),
            ("Service", &self.service),
            ("Budget", &self.budget),
        ] {
            if !value.trim().is_empty() {
                body.push_str(&format!("{}: {}\n", label, value.trim()));
            }
        }
        body.push('\n');
        body.push_str(self.message.trim());

        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let sent = use_state(|| false);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_input = |apply: fn(&mut ContactForm, String)| {
        let update = update(apply);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_select = |apply: fn(&mut ContactForm, String)| {
        let update = update(apply);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let on_message = {
        let update = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            gloo_console::log!("Contact form submitted for", form.service.clone());
            let link = form.mailto_link(config::CONTACT_EMAIL);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&link);
            }
            sent.set(true);
        })
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Start Your "}<span class="text-gradient">{"Project"}</span></h1>
                <p>{"Ready to transform your business? Get in touch and let's discuss how we can help you reach your goals."}</p>
            </section>

            <section class="contact-grid">
                <form class="card contact-form" {onsubmit}>
                    <h2>{"Get a Free Consultation"}</h2>
                    <p>{"Fill out the form below and we'll get back to you within 24 hours."}</p>
                    <div class="form-row">
                        <label>
                            {"Full Name"}
                            <input type="text" value={form.name.clone()} oninput={on_input(|f, v| f.name = v)} required=true />
                        </label>
                        <label>
                            {"Email"}
                            <input type="email" value={form.email.clone()} oninput={on_input(|f, v| f.email = v)} required=true />
                        </label>
                    </div>
                    <label>
                        {"Company"}
                        <input type="text" value={form.company.clone()} oninput={on_input(|f, v| f.company = v)} />
                    </label>
                    <div class="form-row">
                        <label>
                            {"Service"}
                            <select onchange={on_select(|f, v| f.service = v)}>
                                <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                                { for SERVICES.iter().map(|s| html! {
                                    <option value={*s} selected={form.service == *s}>{*s}</option>
                                }) }
                            </select>
                        </label>
                        <label>
                            {"Budget"}
                            <select onchange={on_select(|f, v| f.budget = v)}>
                                <option value="" selected={form.budget.is_empty()}>{"Select a range"}</option>
                                { for BUDGETS.iter().map(|b| html! {
                                    <option value={*b} selected={form.budget == *b}>{*b}</option>
                                }) }
                            </select>
                        </label>
                    </div>
                    <label>
                        {"Project Details"}
                        <textarea rows="5" value={form.message.clone()} oninput={on_message} required=true />
                    </label>
                    <button type="submit" class="button-primary" disabled={!form.is_complete()}>
                        {"Send Message"}
                    </button>
                    {
                        if *sent {
                            html! { <p class="form-note">{"Your mail app should open with the message ready to send."}</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>

                <div class="contact-info">
                    <div class="card">
                        <h3>{"📧 Email"}</h3>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="card">
                        <h3>{"📅 Book a call"}</h3>
                        <p>{"30 minute intro calls, Monday to Friday."}</p>
                    </div>
                    <div class="card">
                        <h3>{"📍 Remote first"}</h3>
                        <p>{"Working with teams across Europe, the US and Asia."}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Need a shop.".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn requires_name_email_and_message() {
        assert!(!ContactForm::default().is_complete());
        assert!(filled().is_complete());
        let no_at = ContactForm { email: "ada".into(), ..filled() };
        assert!(!no_at.is_complete());
    }

    #[test]
    fn mailto_encodes_subject_and_skips_empty_fields() {
        let link = filled().mailto_link("hello@studio.test");
        assert!(link.starts_with("mailto:hello@studio.test?subject=Project%20enquiry%20from%20Ada%20Lovelace&body="));
        assert!(!link.contains("Company"));
        assert!(link.contains("Need%20a%20shop."));
    }

    #[test]
    fn mailto_includes_optional_fields_when_set() {
        let form = ContactForm { budget: "$50k+".into(), ..filled() };
        let link = form.mailto_link("x@y.z");
        assert!(link.contains("Budget%3A%20%2450k%2B"));
    }
}
