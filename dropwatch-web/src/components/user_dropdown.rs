use crate::{
    components::toaster::notify,
    models::{
        app_state::AppState,
        notifications::{Notifications, ToastKind},
    },
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_dispatch, use_selector};

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let session = use_selector(AppState::session);
    let dispatch = use_dispatch::<AppState>();
    let notifications = use_dispatch::<Notifications>();

    let Some(user) = session.user().cloned() else {
        return html! {};
    };
    let role = session.role().map(|role| role.as_str()).unwrap_or_default();

    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        dispatch.reduce_mut(AppState::logout);
        notify(&notifications, ToastKind::Info, "Signed out");
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Root);
        }
    });

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="h-6 w-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name().to_string() }</div>
                    <div class="text-xs text-base-content/70">{ user.email.clone().unwrap_or_default() }</div>
                    <div class="badge badge-outline badge-sm mt-1 capitalize">{ role }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a {onclick}>{i18n.t("header.logout")}</a></li>
            </ul>
        </div>
    }
}
