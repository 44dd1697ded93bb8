use crate::{
    api::DropwatchClient,
    components::{FormField, form_field::field_error, toaster::notify},
    containers::auth_card::AuthCard,
    models::notifications::{Notifications, ToastKind},
    routes::MainRoute,
};
use super::auth_callback::query_token;
use shared::validation::{FieldErrors, validate_reset_password};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_location, use_navigator};
use yewdux::prelude::use_dispatch;

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let location = use_location();
    let token = location
        .as_ref()
        .and_then(|location| query_token(location.query_str()))
        .unwrap_or_default();

    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let errors = use_state(|| None::<FieldErrors>);
    let busy = use_state(|| false);
    let navigator = use_navigator();
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let token = token.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validate_reset_password(&token, &password, &confirm) {
                if let Some(first) = invalid.first() {
                    notify(&notifications, ToastKind::Error, first.to_string());
                }
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);
            busy.set(true);

            let token = token.clone();
            let new_password = (*password).clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match DropwatchClient::shared()
                    .reset_password(&token, &new_password)
                    .await
                {
                    Ok(_) => {
                        notify(&notifications, ToastKind::Success, "Password reset successful");
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Login);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "password reset failed");
                        notify(&notifications, ToastKind::Error, err.user_message("Reset"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |value: String| confirm.set(value))
    };
    let error = |field: &str| field_error((*errors).as_ref(), field);

    html! {
        <AuthCard title="Reset password" subtitle="Choose a new password of at least 6 characters">
            if let Some(message) = error("token") {
                <div class="alert alert-warning"><span>{message}</span></div>
            }
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                <FormField
                    id="password"
                    label="New password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    oninput={on_password}
                    error={error("password")}
                    disabled={*busy}
                />
                <FormField
                    id="confirm_password"
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*confirm).clone()}
                    oninput={on_confirm}
                    error={error("confirm_password")}
                    disabled={*busy}
                />
                <button class="btn btn-primary mt-4" type="submit" disabled={*busy}>
                    {if *busy { "Resetting..." } else { "Reset password" }}
                </button>
            </form>
            <Link<MainRoute> to={MainRoute::Login} classes="link link-hover text-sm text-center">
                {"Back to sign in"}
            </Link<MainRoute>>
        </AuthCard>
    }
}
