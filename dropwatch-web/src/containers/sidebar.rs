use crate::{
    components::nav_item::NavItem, containers::layout::DRAWER_ID, models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::{Audience, access::navigation};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Links for the signed-in audience; admins never see user pages and
/// users never see admin pages.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let (i18n, ..) = use_translation();
    let audience = use_selector(|state: &AppState| Audience::of(state.session.session()));

    html! {
        <div class="drawer-side z-40">
            <label for={DRAWER_ID} aria-label="close sidebar" class="drawer-overlay"></label>
            <aside class="bg-base-200 min-h-full w-64 p-4">
                <div class="px-2 pb-4">
                    <div class="text-xl font-bold">{i18n.t("app.title")}</div>
                    <div class="text-xs text-base-content/60">{i18n.t("app.tagline")}</div>
                </div>
                <ul class="menu gap-1 w-full">
                    { for navigation(*audience).into_iter().map(|link| html! {
                        <NavItem {link} current_route={props.current_route} />
                    }) }
                </ul>
            </aside>
        </div>
    }
}
