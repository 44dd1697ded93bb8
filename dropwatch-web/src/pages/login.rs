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
use shared::auth::{AccountDirectory, AuthError, authenticate, demo_account};
use shared::models::Role;
use shared::validation::{FieldErrors, validate_login};
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "Student",
        Role::Admin => "Admin",
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let role = use_state(|| Role::User);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(|| None::<FieldErrors>);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let role = role.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validate_login(&email, &password) {
                notify(&notifications, ToastKind::Error, "Please fill in all fields");
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);

            let role = *role;
            let directory = AccountDirectory::new(BrowserStorage);
            match authenticate(&directory, &email, &password, role) {
                Ok(user) => {
                    let welcome = format!("Welcome {}!", user.display_name());
                    dispatch.reduce_mut(|state| state.login(user, role));
                    notify(&notifications, ToastKind::Success, welcome);
                    let landing = match role {
                        Role::Admin => MainRoute::AdminDashboard,
                        Role::User => MainRoute::Root,
                    };
                    if let Some(navigator) = &navigator {
                        navigator.push(&landing);
                    }
                }
                Err(AuthError::Storage(err)) => {
                    tracing::warn!(error = %err, "account directory unavailable");
                    notify(&notifications, ToastKind::Error, "Sign in is unavailable right now");
                }
                Err(err) => notify(&notifications, ToastKind::Error, err.to_string()),
            }
        })
    };

    let fill_demo = {
        let role = role.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |_: MouseEvent| {
            let account = demo_account(*role);
            email.set(account.email.to_string());
            password.set(account.password.to_string());
        })
    };

    let role_tabs = Role::iter().map(|option| {
        let role = role.clone();
        let active = *role == option;
        let onclick = Callback::from(move |_: MouseEvent| role.set(option));
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", active.then_some("tab-active"))}
                {onclick}
            >
                {role_label(option)}
            </button>
        }
    });

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    html! {
        <AuthCard title="Sign in" subtitle="Access the dropout prediction workspace">
            <div role="tablist" class="tabs tabs-boxed">
                { for role_tabs }
            </div>
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="username"
                    value={(*email).clone()}
                    oninput={on_email}
                    error={field_error((*errors).as_ref(), "email")}
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={on_password}
                    error={field_error((*errors).as_ref(), "password")}
                />
                <div class="flex justify-between items-center text-sm mt-1">
                    <button type="button" class="link link-hover" onclick={fill_demo}>
                        {format!("Use demo {} account", role_label(*role).to_lowercase())}
                    </button>
                    <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link link-hover">
                        {"Forgot password?"}
                    </Link<MainRoute>>
                </div>
                <button class="btn btn-primary mt-4" type="submit">
                    {format!("Sign in as {}", role_label(*role))}
                </button>
            </form>
            <p class="text-sm text-center">
                {"New here? "}
                <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">{"Create an account"}</Link<MainRoute>>
            </p>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_reported_inline() {
        let errors = validate_login("", "").unwrap_err();
        assert!(field_error(Some(&errors), "email").is_some());
        assert!(field_error(Some(&errors), "password").is_some());
        assert_eq!(field_error(None, "email"), None);
    }

    #[test]
    fn role_labels() {
        assert_eq!(role_label(Role::User), "Student");
        assert_eq!(role_label(Role::Admin), "Admin");
    }
}
