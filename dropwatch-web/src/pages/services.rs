use crate::{components::PageHeader, routes::MainRoute};
use yew::prelude::*;
use yew_router::prelude::Link;

const SERVICES: [(&str, &str, MainRoute); 6] = [
    (
        "Predictive Analytics",
        "AI-powered student dropout prediction using machine learning models",
        MainRoute::Predict,
    ),
    (
        "Risk Assessment",
        "Comprehensive risk scoring with actionable intervention recommendations",
        MainRoute::AtRisk,
    ),
    (
        "Counselor Connect",
        "AI-assisted and human counselor support with instant messaging",
        MainRoute::Counselor,
    ),
    (
        "Performance Monitoring",
        "Real-time dashboard with student performance metrics and analytics",
        MainRoute::Dashboard,
    ),
    (
        "Automated Alerts",
        "Intelligent notification system for at-risk student identification",
        MainRoute::AtRisk,
    ),
    (
        "Data Export & Reports",
        "Generate comprehensive reports and export data in multiple formats",
        MainRoute::Analytics,
    ),
];

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <>
            <PageHeader title="Our Services" subtitle="Comprehensive suite of AI-powered tools for student success" />
            <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-3">
                { for SERVICES.iter().map(|(name, description, route)| html! {
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{*name}</h2>
                            <p class="text-base-content/80">{*description}</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={*route} classes="btn btn-sm btn-ghost">{"Open →"}</Link<MainRoute>>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <div class="hero bg-base-200 rounded-box mt-8">
                <div class="hero-content text-center py-10">
                    <div>
                        <h2 class="text-2xl font-bold">{"Ready to Transform Your Institution?"}</h2>
                        <p class="py-2">{"Get started with our comprehensive student success platform today"}</p>
                        <Link<MainRoute> to={MainRoute::Contact} classes="btn btn-primary mt-2">{"Contact us"}</Link<MainRoute>>
                    </div>
                </div>
            </div>
        </>
    }
}
