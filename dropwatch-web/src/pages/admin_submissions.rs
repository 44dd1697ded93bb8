use crate::{
    api::DropwatchClient,
    components::{PageHeader, loading::Loading},
};
use shared::models::Submission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Rows requested for the submissions table.
const SUBMISSIONS_PAGE_LIMIT: u32 = 100;

#[derive(Clone)]
enum Load {
    Pending,
    Ready(Vec<Submission>),
    Failed(String),
}

fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[function_component(AdminSubmissionsPage)]
pub fn admin_submissions_page() -> Html {
    let load = use_state(|| Load::Pending);
    let reload = use_state(|| 0_u32);

    {
        let load = load.clone();
        use_effect_with(*reload, move |_| {
            load.set(Load::Pending);
            spawn_local(async move {
                match DropwatchClient::shared()
                    .get_submissions(SUBMISSIONS_PAGE_LIMIT)
                    .await
                {
                    Ok(rows) => {
                        tracing::debug!(rows = rows.len(), "submissions loaded");
                        load.set(Load::Ready(rows));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to load submissions");
                        load.set(Load::Failed(err.user_message("Loading submissions")));
                    }
                }
            });
            || ()
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    let body = match &*load {
        Load::Pending => html! { <Loading /> },
        Load::Failed(message) => html! {
            <div role="alert" class="alert alert-error"><span>{message.clone()}</span></div>
        },
        Load::Ready(rows) if rows.is_empty() => html! {
            <p class="text-base-content/70">{"No submissions yet."}</p>
        },
        Load::Ready(rows) => html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Age"}</th>
                            <th>{"Attendance"}</th>
                            <th>{"Grades"}</th>
                            <th>{"Parent Support"}</th>
                            <th>{"Prediction"}</th>
                            <th>{"Submitted"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().enumerate().map(|(index, row)| html! {
                            <tr>
                                <td>{row.id.map_or_else(|| (index + 1).to_string(), |id| id.to_string())}</td>
                                <td>{row.age}</td>
                                <td>{percent(row.attendance)}</td>
                                <td>{percent(row.grades)}</td>
                                <td>{if row.parent_support == 1 { "Yes" } else { "No" }}</td>
                                <td>
                                    if row.dropout_prediction {
                                        <span class="badge badge-error">{"At Risk"}</span>
                                    } else {
                                        <span class="badge badge-success">{"Continue"}</span>
                                    }
                                </td>
                                <td class="text-sm">{row.created_at.clone().unwrap_or_else(|| "-".to_string())}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <>
            <PageHeader title="Prediction Submissions" subtitle="Latest predictions recorded by the backend">
                <button class="btn btn-sm btn-outline" onclick={refresh}>{"Refresh"}</button>
            </PageHeader>
            <div class="card bg-base-200 shadow">
                <div class="card-body">{body}</div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percentages_have_one_decimal() {
        assert_eq!(percent(87.25), "87.2%");
        assert_eq!(percent(100.0), "100.0%");
    }
}
