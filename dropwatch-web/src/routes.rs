use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::{Access, Page, View, authorize};
use strum::EnumIter;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Browser routes. Each variant mirrors a [`Page`]; the path strings must
/// stay in step with [`Page::path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/auth/success")]
    AuthCallback,
    #[at("/predict")]
    Predict,
    #[at("/analytics")]
    Analytics,
    #[at("/services")]
    Services,
    #[at("/dashboard")]
    Dashboard,
    #[at("/at-risk")]
    AtRisk,
    #[at("/counselor")]
    Counselor,
    #[at("/contact")]
    Contact,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/admin/submissions")]
    AdminSubmissions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<MainRoute> for Page {
    fn from(route: MainRoute) -> Self {
        match route {
            MainRoute::Root => Page::Root,
            MainRoute::Login => Page::Login,
            MainRoute::Signup => Page::Signup,
            MainRoute::ForgotPassword => Page::ForgotPassword,
            MainRoute::ResetPassword => Page::ResetPassword,
            MainRoute::AuthCallback => Page::AuthCallback,
            MainRoute::Predict => Page::Predict,
            MainRoute::Analytics => Page::Analytics,
            MainRoute::Services => Page::Services,
            MainRoute::Dashboard => Page::Dashboard,
            MainRoute::AtRisk => Page::AtRisk,
            MainRoute::Counselor => Page::Counselor,
            MainRoute::Contact => Page::Contact,
            MainRoute::AdminDashboard => Page::AdminDashboard,
            MainRoute::AdminSubmissions => Page::AdminSubmissions,
            MainRoute::NotFound => Page::NotFound,
        }
    }
}

impl From<Page> for MainRoute {
    fn from(page: Page) -> Self {
        match page {
            Page::Root => MainRoute::Root,
            Page::Login => MainRoute::Login,
            Page::Signup => MainRoute::Signup,
            Page::ForgotPassword => MainRoute::ForgotPassword,
            Page::ResetPassword => MainRoute::ResetPassword,
            Page::AuthCallback => MainRoute::AuthCallback,
            Page::Predict => MainRoute::Predict,
            Page::Analytics => MainRoute::Analytics,
            Page::Services => MainRoute::Services,
            Page::Dashboard => MainRoute::Dashboard,
            Page::AtRisk => MainRoute::AtRisk,
            Page::Counselor => MainRoute::Counselor,
            Page::Contact => MainRoute::Contact,
            Page::AdminDashboard => MainRoute::AdminDashboard,
            Page::AdminSubmissions => MainRoute::AdminSubmissions,
            Page::NotFound => MainRoute::NotFound,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: MainRoute,
}

/// Runs the access check for `route` against the live session and either
/// mounts the granted view or replaces the location.
#[function_component(GuardedRoute)]
fn guarded_route(props: &GuardedRouteProps) -> Html {
    let session = use_selector(AppState::session);
    let page = Page::from(props.route);

    match authorize(&session, page) {
        Access::Redirect(target) => {
            debug!(from = page.path(), to = target.path(), "route redirected");
            html! { <Redirect<MainRoute> to={MainRoute::from(target)} /> }
        }
        Access::Granted(view) => render_view(view, props.route),
    }
}

fn render_view(view: View, route: MainRoute) -> Html {
    let inside_layout = |content: Html| {
        html! {
            <Layout current_route={route}>
                {content}
            </Layout>
        }
    };

    match view {
        View::Welcome => html! { <WelcomePage /> },
        View::Login => html! { <LoginPage /> },
        View::Signup => html! { <SignupPage /> },
        View::ForgotPassword => html! { <ForgotPasswordPage /> },
        View::ResetPassword => html! { <ResetPasswordPage /> },
        View::AuthCallback => html! { <AuthCallbackPage /> },
        View::Home => inside_layout(html! { <HomePage /> }),
        View::Predict => inside_layout(html! { <PredictPage /> }),
        View::Analytics => inside_layout(html! { <AnalyticsPage /> }),
        View::Services => inside_layout(html! { <ServicesPage /> }),
        View::Dashboard => inside_layout(html! { <DashboardPage /> }),
        View::AtRisk => inside_layout(html! { <AtRiskPage /> }),
        View::Counselor => inside_layout(html! { <CounselorPage /> }),
        View::Contact => inside_layout(html! { <ContactPage /> }),
        View::AdminDashboard => inside_layout(html! { <AdminDashboardPage /> }),
        View::AdminSubmissions => inside_layout(html! { <AdminSubmissionsPage /> }),
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    debug!(?route, "switching route");
    html! { <GuardedRoute {route} /> }
}
