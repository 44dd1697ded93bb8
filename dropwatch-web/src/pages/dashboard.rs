use crate::components::{PageHeader, StatCard};
use yew::prelude::*;

struct MonthlyFigures {
    month: &'static str,
    at_risk: u32,
    interventions: u32,
    dropout_rate: f32,
}

const MONTHS: [MonthlyFigures; 6] = [
    MonthlyFigures { month: "Jan", at_risk: 65, interventions: 28, dropout_rate: 12.0 },
    MonthlyFigures { month: "Feb", at_risk: 59, interventions: 35, dropout_rate: 11.0 },
    MonthlyFigures { month: "Mar", at_risk: 80, interventions: 40, dropout_rate: 13.0 },
    MonthlyFigures { month: "Apr", at_risk: 81, interventions: 52, dropout_rate: 10.0 },
    MonthlyFigures { month: "May", at_risk: 56, interventions: 61, dropout_rate: 8.0 },
    MonthlyFigures { month: "Jun", at_risk: 55, interventions: 70, dropout_rate: 7.0 },
];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let peak = MONTHS.iter().map(|row| row.at_risk).max().unwrap_or(1);

    html! {
        <>
            <PageHeader title="Dashboard" subtitle="Real-time student dropout prediction analytics" />
            <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-4 mb-8">
                <StatCard label="Total Students" value="1,245" hint="+4% this term" />
                <StatCard label="At Risk" value="128" hint="10.3% of enrolment" />
                <StatCard label="Predicted Dropouts" value="42" hint="Next 90 days" />
                <StatCard label="Success Rate" value="89%" hint="Interventions that held" />
            </div>
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Student Distribution"}</h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Month"}</th>
                                    <th>{"At Risk Students"}</th>
                                    <th>{"Interventions Done"}</th>
                                    <th>{"Dropout Rate %"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for MONTHS.iter().map(|row| html! {
                                    <tr>
                                        <td>{row.month}</td>
                                        <td>
                                            <div class="flex items-center gap-2">
                                                <progress class="progress progress-warning w-32" value={row.at_risk.to_string()} max={peak.to_string()}></progress>
                                                <span>{row.at_risk}</span>
                                            </div>
                                        </td>
                                        <td>{row.interventions}</td>
                                        <td>{format!("{:.1}", row.dropout_rate)}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </>
    }
}
