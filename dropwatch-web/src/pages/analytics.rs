use crate::{
    components::{PageHeader, toaster::notify},
    models::notifications::{Notifications, ToastKind},
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

const REPORT_TYPES: [(&str, &str); 6] = [
    ("dropout", "Dropout Predictions"),
    ("attendance", "Attendance Trends"),
    ("grades", "Grade Distribution"),
    ("interventions", "Intervention History"),
    ("counseling", "Counseling Sessions"),
    ("demographics", "Student Demographics"),
];

const DATE_RANGES: [&str; 5] = [
    "This Week",
    "This Month",
    "This Quarter",
    "This Year",
    "Custom Range",
];

const FORMATS: [&str; 3] = ["PDF", "CSV", "Excel"];

const PREBUILT: [(&str, &str); 4] = [
    (
        "Weekly Risk Report",
        "Comprehensive weekly analysis of at-risk students",
    ),
    (
        "Monthly Performance Dashboard",
        "Aggregated monthly performance metrics and trends",
    ),
    (
        "Intervention Effectiveness Report",
        "Analysis of counseling and support effectiveness",
    ),
    (
        "Departmental Analysis",
        "Deep dive into performance by department/college",
    ),
];

/// Simulated weekly prediction counts for the preview chart.
fn simulated_series() -> Vec<u32> {
    (0..8)
        .map(|_| {
            // Math.random is in [0, 1), so the product stays well inside u32.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = (js_sys::Math::random() * 90.0) as u32 + 10;
            count
        })
        .collect()
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let report = use_state(|| REPORT_TYPES[0].0.to_string());
    let range = use_state(|| DATE_RANGES[1].to_string());
    let format = use_state(|| FORMATS[0].to_string());
    let series = use_state(simulated_series);
    let notifications = use_dispatch::<Notifications>();

    let on_report = {
        let report = report.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                report.set(value);
            }
        })
    };
    let on_range = {
        let range = range.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                range.set(value);
            }
        })
    };
    let on_format = {
        let format = format.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                format.set(value);
            }
        })
    };
    let refresh = {
        let series = series.clone();
        Callback::from(move |_: MouseEvent| series.set(simulated_series()))
    };
    let generate = {
        let report = report.clone();
        let range = range.clone();
        let format = format.clone();
        Callback::from(move |_: MouseEvent| {
            let label = REPORT_TYPES
                .iter()
                .find(|(id, _)| *id == report.as_str())
                .map_or("Report", |(_, label)| *label);
            tracing::info!(report = %*report, range = %*range, format = %*format, "report requested");
            notify(
                &notifications,
                ToastKind::Success,
                format!("{label} ({}) queued as {}", *range, *format),
            );
        })
    };

    let peak = series.iter().copied().max().unwrap_or(1).max(1);

    html! {
        <>
            <PageHeader title="Analytics & Reports" subtitle="Generate custom reports and export data for deeper insights" />
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="card bg-base-200 shadow lg:col-span-1">
                    <div class="card-body gap-3">
                        <h2 class="card-title">{"Custom report"}</h2>
                        <label class="form-control">
                            <span class="label-text">{"Report type"}</span>
                            <select class="select select-bordered" onchange={on_report}>
                                { for REPORT_TYPES.iter().map(|(id, label)| html! {
                                    <option value={*id} selected={*report == *id}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Date Range"}</span>
                            <select class="select select-bordered" onchange={on_range}>
                                { for DATE_RANGES.iter().map(|label| html! {
                                    <option value={*label} selected={*range == *label}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Export Format"}</span>
                            <select class="select select-bordered" onchange={on_format}>
                                { for FORMATS.iter().map(|label| html! {
                                    <option value={*label} selected={*format == *label}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <button class="btn btn-primary mt-2" onclick={generate}>{"Generate report"}</button>
                    </div>
                </div>
                <div class="card bg-base-200 shadow lg:col-span-2">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">{"Weekly predictions"}</h2>
                            <button class="btn btn-sm btn-ghost" onclick={refresh}>{"Refresh"}</button>
                        </div>
                        <div class="flex items-end gap-2 h-48">
                            { for series.iter().enumerate().map(|(week, count)| html! {
                                <div class="flex flex-col items-center flex-1 gap-1">
                                    <div
                                        class="bg-primary rounded-t w-full"
                                        style={format!("height: {}%", count * 100 / peak)}
                                        title={count.to_string()}
                                    ></div>
                                    <span class="text-xs">{format!("W{}", week + 1)}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <h2 class="text-xl font-semibold mt-8 mb-4">{"Pre-built Reports"}</h2>
            <div class="grid gap-4 md:grid-cols-2">
                { for PREBUILT.iter().map(|(name, description)| html! {
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <h3 class="card-title text-base">{*name}</h3>
                            <p class="text-sm text-base-content/80">{*description}</p>
                        </div>
                    </div>
                }) }
            </div>
        </>
    }
}
