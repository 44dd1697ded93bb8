use crate::{
    components::{theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown},
    containers::layout::DRAWER_ID,
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let signed_in = use_selector(|state: &AppState| state.session.is_authenticated());
    let home = use_selector(|state: &AppState| {
        if state.session.is_admin() {
            MainRoute::AdminDashboard
        } else {
            MainRoute::Root
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-30">
            <div class="flex items-center gap-2">
                <label for={DRAWER_ID} class="btn btn-ghost btn-square lg:hidden" aria-label={i18n.t("header.menu")}>
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-6 w-6" />
                </label>
                <Link<MainRoute> to={*home} classes="btn btn-ghost text-lg">
                    {i18n.t("app.title")}
                </Link<MainRoute>>
            </div>
            <div class="flex items-center gap-1">
                <ThemeSwitcher />
                if *signed_in {
                    <UserDropdown />
                } else {
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                        {i18n.t("header.login")}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
