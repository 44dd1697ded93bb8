use crate::{
    components::{FormField, form_field::field_error, toaster::notify},
    containers::auth_card::AuthCard,
    models::{
        app_state::AppState,
        notifications::{Notifications, ToastKind},
    },
    routes::MainRoute,
    storage::BrowserStorage,
};
use shared::auth::{AccountDirectory, AuthError};
use shared::models::Role;
use shared::validation::{FieldErrors, validate_signup};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

#[derive(Clone, Default, PartialEq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let form = use_state(SignupForm::default);
    let errors = use_state(|| None::<FieldErrors>);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let SignupForm {
                name,
                email,
                password,
                confirm_password,
            } = (*form).clone();
            if let Err(invalid) = validate_signup(&name, &email, &password, &confirm_password) {
                if let Some(first) = invalid.first() {
                    notify(&notifications, ToastKind::Error, first.to_string());
                }
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);

            match AccountDirectory::new(BrowserStorage).register(&name, &email, &password) {
                Ok(user) => {
                    dispatch.reduce_mut(|state| state.login(user, Role::User));
                    notify(
                        &notifications,
                        ToastKind::Success,
                        "Account created and logged in",
                    );
                    if let Some(navigator) = &navigator {
                        navigator.push(&MainRoute::Root);
                    }
                }
                Err(AuthError::EmailTaken) => {
                    notify(&notifications, ToastKind::Error, "Email already registered");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    notify(&notifications, ToastKind::Error, "Could not create the account");
                }
            }
        })
    };

    let update = |apply: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let error = |field: &str| field_error((*errors).as_ref(), field);

    html! {
        <AuthCard title="Create account" subtitle="Students can register and start immediately">
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                <FormField
                    id="name"
                    label="Full name"
                    autocomplete="name"
                    value={form.name.clone()}
                    oninput={update(|form, value| form.name = value)}
                    error={error("name")}
                />
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={form.email.clone()}
                    oninput={update(|form, value| form.email = value)}
                    error={error("email")}
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value={form.password.clone()}
                    oninput={update(|form, value| form.password = value)}
                    error={error("password")}
                />
                <FormField
                    id="confirm_password"
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value={form.confirm_password.clone()}
                    oninput={update(|form, value| form.confirm_password = value)}
                    error={error("confirm_password")}
                />
                <button class="btn btn-primary mt-4" type="submit">{"Sign up"}</button>
            </form>
            <p class="text-sm text-center">
                {"Already have an account? "}
                <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">{"Sign in"}</Link<MainRoute>>
            </p>
        </AuthCard>
    }
}
