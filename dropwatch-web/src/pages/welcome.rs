use crate::components::theme_switcher::ThemeSwitcher;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

const FEATURES: [&str; 4] = [
    "Predictive analytics for early interventions",
    "At-risk student dashboards and visualizations",
    "Counselor connect with AI-assisted suggestions",
    "Exportable reports and scheduled summaries",
];

#[function_component(WelcomePage)]
pub fn welcome_page() -> Html {
    html! {
        <div class="relative hero min-h-screen bg-base-200">
            <ThemeSwitcher class="absolute top-4 right-4" />
            <div class="hero-content flex-col lg:flex-row gap-10">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">{"Welcome to Student Dropout System"}</h1>
                    <p class="py-6 text-base-content/80">
                        {"Predict at-risk students, connect with counselors, and take data-driven actions to reduce dropout rates. Secure, simple, and fast."}
                    </p>
                    <div class="flex gap-3">
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">{"Get Started"}</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-outline">{"Create account"}</Link<MainRoute>>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl w-full max-w-sm">
                    <div class="card-body">
                        <h2 class="card-title">{"Key features"}</h2>
                        <ul class="list-disc list-inside space-y-2 text-sm">
                            { for FEATURES.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
