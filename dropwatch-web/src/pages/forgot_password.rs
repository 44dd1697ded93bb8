use crate::{
    api::DropwatchClient,
    components::{FormField, form_field::field_error, toaster::notify},
    containers::auth_card::AuthCard,
    models::notifications::{Notifications, ToastKind},
    routes::MainRoute,
};
use shared::validation::{FieldErrors, validate_forgot_password};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let email = use_state(String::new);
    let errors = use_state(|| None::<FieldErrors>);
    let busy = use_state(|| false);
    let reset_link = use_state(|| None::<String>);
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let email = email.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let reset_link = reset_link.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validate_forgot_password(&email) {
                notify(&notifications, ToastKind::Error, "Please enter your email");
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);
            busy.set(true);

            let email = (*email).clone();
            let busy = busy.clone();
            let reset_link = reset_link.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match DropwatchClient::shared().forgot_password(&email).await {
                    Ok(response) => {
                        notify(
                            &notifications,
                            ToastKind::Success,
                            response
                                .message
                                .unwrap_or_else(|| "Password reset link generated".to_string()),
                        );
                        reset_link.set(response.reset_link);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "forgot-password request failed");
                        notify(&notifications, ToastKind::Error, err.user_message("Request"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    html! {
        <AuthCard title="Forgot password" subtitle="We will generate a reset link for your account">
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    oninput={on_email}
                    error={field_error((*errors).as_ref(), "email")}
                    disabled={*busy}
                />
                <button class="btn btn-primary mt-4" type="submit" disabled={*busy}>
                    {if *busy { "Sending..." } else { "Send reset link" }}
                </button>
            </form>
            if let Some(link) = &*reset_link {
                <div class="alert alert-info flex-col items-start">
                    <span class="font-semibold">{"Reset link"}</span>
                    <a class="link break-all text-sm" href={link.clone()}>{link.clone()}</a>
                </div>
            }
            <Link<MainRoute> to={MainRoute::Login} classes="link link-hover text-sm text-center">
                {"Back to sign in"}
            </Link<MainRoute>>
        </AuthCard>
    }
}
