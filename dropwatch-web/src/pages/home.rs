use crate::{
    components::{PageHeader, StatCard},
    models::app_state::AppState,
    routes::MainRoute,
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("1000+", "Students Tracked"),
    ("95%", "Prediction Accuracy"),
    ("24/7", "Support Available"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let name = use_selector(|state: &AppState| {
        state
            .session
            .user()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    });

    html! {
        <>
            <PageHeader
                title={format!("Welcome back, {name}")}
                subtitle="Spot students who need support before they slip away."
            />
            <div class="hero bg-base-200 rounded-box mb-8">
                <div class="hero-content text-center py-12">
                    <div class="max-w-2xl">
                        <h2 class="text-4xl font-bold">{"Student Dropout Prediction"}</h2>
                        <p class="py-4 text-base-content/80">
                            {"Enter a student's age, attendance, grades and family support to get an instant risk assessment."}
                        </p>
                        <div class="flex justify-center gap-3">
                            <Link<MainRoute> to={MainRoute::Predict} classes="btn btn-primary">{"Predict Student"}</Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-outline">{"Get Started"}</Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-3">
                { for HIGHLIGHTS.iter().map(|(value, label)| html! {
                    <StatCard label={*label} value={*value} />
                }) }
            </div>
        </>
    }
}
