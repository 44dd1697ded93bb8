use crate::{
    api::DropwatchClient,
    components::{loading::Loading, toaster::notify},
    models::{
        app_state::AppState,
        notifications::{Notifications, ToastKind},
    },
    routes::MainRoute,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};
use url::form_urlencoded;
use yewdux::prelude::use_dispatch;

/// Value of `token` in a `?a=b&c=d` query string or `#a=b` fragment,
/// form-decoded (`%XX` escapes and `+` as space).
pub(crate) fn query_token(raw: &str) -> Option<String> {
    form_urlencoded::parse(raw.trim_start_matches(['?', '#']).as_bytes())
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// The provider may hand the token back in either place; the query wins.
pub(crate) fn callback_token(query: &str, fragment: &str) -> Option<String> {
    query_token(query).or_else(|| query_token(fragment))
}

/// Landing page of the external sign-in flow. Exchanges the token for a
/// user record and starts the session.
#[function_component(AuthCallbackPage)]
pub fn auth_callback_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let notifications = use_dispatch::<Notifications>();

    let token = location
        .as_ref()
        .and_then(|location| callback_token(location.query_str(), location.hash()));

    use_effect_with(token, move |token| {
        let token = token.clone();
        let to_login = {
            let navigator = navigator.clone();
            move || {
                if let Some(navigator) = &navigator {
                    navigator.push(&MainRoute::Login);
                }
            }
        };

        match token {
            None => {
                notify(&notifications, ToastKind::Error, "Missing token");
                to_login();
            }
            Some(token) => spawn_local(async move {
                match DropwatchClient::shared().me(&token).await {
                    Ok(user) => {
                        let role = user.role_or_default();
                        dispatch.reduce_mut(|state| state.login(user, role));
                        notify(&notifications, ToastKind::Success, "Login successful");
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Root);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "token exchange failed");
                        notify(&notifications, ToastKind::Error, "Failed to validate token");
                        to_login();
                    }
                }
            }),
        }
        || ()
    });

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 gap-2">
            <Loading />
            <p class="text-sm text-base-content/70">{"Completing sign in..."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("?token=abc", Some("abc") ; "query")]
    #[test_case("#token=abc&state=x", Some("abc") ; "fragment")]
    #[test_case("state=x&token=a.b.c", Some("a.b.c") ; "not first")]
    #[test_case("?token=", None ; "empty")]
    #[test_case("", None ; "absent")]
    #[test_case("?tokens=abc", None ; "similar key")]
    #[test_case("?token=a%2Fb%3D%3D", Some("a/b==") ; "percent escapes")]
    #[test_case("#token=one+two", Some("one two") ; "plus is a space")]
    #[test_case("?to%6Ben=abc", Some("abc") ; "escaped key")]
    fn extracts_token(raw: &str, expected: Option<&str>) {
        assert_eq!(query_token(raw).as_deref(), expected);
    }

    #[test]
    fn query_takes_precedence_over_fragment() {
        assert_eq!(
            callback_token("?token=from-query", "#token=from-hash").as_deref(),
            Some("from-query")
        );
        assert_eq!(
            callback_token("", "#token=from-hash").as_deref(),
            Some("from-hash")
        );
        assert_eq!(callback_token("?x=1", "#y=2"), None);
    }
}
