use crate::containers::{header::Header, sidebar::Sidebar};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

/// Id of the checkbox driving the mobile drawer.
pub const DRAWER_ID: &str = "main-drawer";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Authenticated shell: header, role-specific sidebar and page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header />
                <main class={classes!("flex-grow", "p-4", "lg:p-8", "transition-all", "duration-300")}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <p>{i18n.t("app.footer")}</p>
                </footer>
            </div>
            <Sidebar current_route={props.current_route} />
        </div>
    }
}
