use crate::{
    components::{FormField, PageHeader, form_field::field_error, toaster::notify},
    config::FrontendConfig,
    models::{
        app_state::AppState,
        notifications::{Notifications, ToastKind},
    },
};
use shared::validation::{FieldErrors, validate_email, validate_required};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        FieldErrors::collect([
            ("name", validate_required(&self.name)),
            ("email", validate_email(&self.email)),
            ("subject", validate_required(&self.subject)),
            ("message", validate_required(&self.message)),
        ])
    }
}

const CHANNELS: [(&str, &str); 3] = [
    ("Call Us", "Available Monday to Friday, 9 AM - 6 PM"),
    ("Email Us", "We respond within 24 hours"),
    ("Visit Us", "Student Services Building, Room 201"),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_memo((), |()| FrontendConfig::new());
    let prefill = use_selector(|state: &AppState| {
        state
            .session
            .user()
            .map(|user| {
                (
                    user.name.clone().unwrap_or_default(),
                    user.email.clone().unwrap_or_default(),
                )
            })
            .unwrap_or_default()
    });
    let form = use_state(|| ContactForm {
        name: prefill.0.clone(),
        email: prefill.1.clone(),
        ..ContactForm::default()
    });
    let errors = use_state(|| None::<FieldErrors>);
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = form.validate() {
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);
            tracing::info!(subject = %form.subject, "contact message submitted");
            notify(
                &notifications,
                ToastKind::Success,
                "Message sent. We will get back to you soon.",
            );
            form.set(ContactForm {
                name: form.name.clone(),
                email: form.email.clone(),
                ..ContactForm::default()
            });
        })
    };

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.message = area.value();
                form.set(next);
            }
        })
    };
    let error = |field: &str| field_error((*errors).as_ref(), field);

    html! {
        <>
            <PageHeader title="Contact Us" subtitle="Get in touch with our team for support and inquiries" />
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="card bg-base-200 shadow lg:col-span-2">
                    <form class="card-body gap-2" {onsubmit} novalidate=true>
                        <h2 class="card-title">{"Send us a Message"}</h2>
                        <div class="grid gap-2 md:grid-cols-2">
                            <FormField
                                id="contact-name"
                                label="Full Name"
                                value={form.name.clone()}
                                oninput={update(|form, value| form.name = value)}
                                error={error("name")}
                            />
                            <FormField
                                id="contact-email"
                                label="Email Address"
                                input_type="email"
                                value={form.email.clone()}
                                oninput={update(|form, value| form.email = value)}
                                error={error("email")}
                            />
                        </div>
                        <FormField
                            id="contact-subject"
                            label="Subject"
                            value={form.subject.clone()}
                            oninput={update(|form, value| form.subject = value)}
                            error={error("subject")}
                        />
                        <div class="form-control w-full">
                            <label class="label" for="contact-message">
                                <span class="label-text">{"Message"}</span>
                            </label>
                            <textarea
                                id="contact-message"
                                class={classes!("textarea", "textarea-bordered", "h-32", error("message").is_some().then_some("textarea-error"))}
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                            if let Some(message) = error("message") {
                                <p class="text-error text-sm mt-1">{message}</p>
                            }
                        </div>
                        <button class="btn btn-primary mt-4" type="submit">{"Send message"}</button>
                    </form>
                </div>
                <div class="flex flex-col gap-4">
                    { for CHANNELS.iter().map(|(title, description)| html! {
                        <div class="p-4 rounded-box bg-base-200">
                            <h3 class="font-semibold">{*title}</h3>
                            <p class="text-sm text-base-content/80">{*description}</p>
                        </div>
                    }) }
                    <div class="p-4 rounded-box bg-base-200">
                        <h3 class="font-semibold">{"Support email"}</h3>
                        <a class="link link-primary text-sm" href={format!("mailto:{}", config.support_email)}>
                            {config.support_email.clone()}
                        </a>
                    </div>
                    <div class="p-4 rounded-box bg-base-200 text-sm space-y-1">
                        <h3 class="font-semibold">{"Office Hours"}</h3>
                        <div>{"Monday - Friday: 9:00 AM - 6:00 PM"}</div>
                        <div>{"Saturday: 10:00 AM - 4:00 PM"}</div>
                        <div>{"Sunday: Closed"}</div>
                    </div>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_checked() {
        let errors = ContactForm::default().validate().unwrap_err();
        for field in ["name", "email", "subject", "message"] {
            assert!(errors.get(field).is_some(), "{field} not validated");
        }
    }

    #[test]
    fn complete_form_passes() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Access".into(),
            message: "Please help".into(),
        };
        assert!(form.validate().is_ok());
    }
}
