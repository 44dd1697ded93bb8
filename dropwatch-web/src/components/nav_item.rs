use i18nrs::yew::use_translation;
use shared::{NavLink, Page};
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

fn icon_for(page: Page) -> IconId {
    match page {
        Page::Root => IconId::HeroiconsOutlineHome,
        Page::Login => IconId::HeroiconsOutlineKey,
        Page::Signup => IconId::HeroiconsOutlineUserPlus,
        Page::Dashboard | Page::AdminDashboard => IconId::HeroiconsOutlineChartPie,
        Page::Analytics => IconId::HeroiconsOutlineChartBar,
        Page::Services => IconId::HeroiconsOutlineBriefcase,
        Page::Predict => IconId::HeroiconsOutlineSparkles,
        Page::AtRisk => IconId::HeroiconsOutlineExclamationTriangle,
        Page::Counselor => IconId::HeroiconsOutlineChatBubbleLeftRight,
        Page::Contact => IconId::HeroiconsOutlineEnvelope,
        Page::AdminSubmissions => IconId::HeroiconsOutlineTableCells,
        _ => IconId::HeroiconsOutlineDocument,
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub link: NavLink,
    pub current_route: Option<MainRoute>,
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();
    let route = MainRoute::from(props.link.page);
    let active = props.current_route == Some(route);

    html! {
        <li>
            <Link<MainRoute> to={route} classes={classes!("gap-3", active.then_some("menu-active"))}>
                <Icon icon_id={icon_for(props.link.page)} class="h-5 w-5" />
                {i18n.t(props.link.label_key)}
            </Link<MainRoute>>
        </li>
    }
}
