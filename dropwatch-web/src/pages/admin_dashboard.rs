use std::rc::Rc;

use crate::{
    api::{ApiError, DEFAULT_SUBMISSION_LIMIT, DropwatchClient},
    components::{PageHeader, StatCard, toaster::notify},
    models::notifications::{Notifications, ToastKind},
    routes::MainRoute,
};
use shared::models::Submission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ManagedUser {
    id: u32,
    name: &'static str,
    email: &'static str,
    department: &'static str,
    active: bool,
    joined: &'static str,
}

impl ManagedUser {
    const fn new(
        id: u32,
        name: &'static str,
        email: &'static str,
        department: &'static str,
        active: bool,
        joined: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            email,
            department,
            active,
            joined,
        }
    }
}

const USERS: [ManagedUser; 5] = [
    ManagedUser::new(1, "John Doe", "john@university.edu", "Engineering", true, "2024-01-15"),
    ManagedUser::new(2, "Jane Smith", "jane@university.edu", "Business", true, "2024-02-03"),
    ManagedUser::new(3, "Mike Johnson", "mike@university.edu", "Arts", false, "2023-11-20"),
    ManagedUser::new(4, "Sarah Williams", "sarah@university.edu", "Science", true, "2024-03-08"),
    ManagedUser::new(5, "David Lee", "david@university.edu", "Law", false, "2023-09-12"),
];

enum RosterAction {
    Remove(u32),
    Deactivate(u32),
}

/// Users listed in the management table.
#[derive(Debug, PartialEq)]
struct Roster(Vec<ManagedUser>);

impl Default for Roster {
    fn default() -> Self {
        Self(USERS.to_vec())
    }
}

impl Roster {
    fn active(&self) -> usize {
        self.0.iter().filter(|user| user.active).count()
    }
}

impl Reducible for Roster {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut users = self.0.clone();
        match action {
            RosterAction::Remove(id) => users.retain(|user| user.id != id),
            RosterAction::Deactivate(id) => users
                .iter_mut()
                .filter(|user| user.id == id)
                .for_each(|user| user.active = false),
        }
        Rc::new(Self(users))
    }
}

const HEALTH: [(&str, &str, &str); 3] = [
    ("Uptime", "99.9%", "excellent"),
    ("API Calls (24h)", "12,480", "excellent"),
    ("Predictions Made", "1,032", "good"),
];

/// Summary of the latest submissions: total and flagged as at risk.
fn summarize(flags: impl IntoIterator<Item = bool>) -> (usize, usize) {
    flags
        .into_iter()
        .fold((0, 0), |(total, at_risk), flag| (total + 1, at_risk + usize::from(flag)))
}

/// Summarize a recent-submissions load; a failure becomes an error toast.
fn settle_recent(
    outcome: Result<Vec<Submission>, ApiError>,
    notifications: &mut Notifications,
) -> Option<(usize, usize)> {
    match outcome {
        Ok(rows) => Some(summarize(rows.iter().map(|row| row.dropout_prediction))),
        Err(err) => {
            tracing::warn!(error = %err, "recent submissions unavailable");
            notifications.push(
                ToastKind::Error,
                err.user_message("Loading recent predictions"),
            );
            None
        }
    }
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let recent = use_state(|| None::<(usize, usize)>);
    let roster = use_reducer(Roster::default);
    let notifications = use_dispatch::<Notifications>();

    {
        let recent = recent.clone();
        let notifications = notifications.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let outcome = DropwatchClient::shared()
                    .get_submissions(DEFAULT_SUBMISSION_LIMIT)
                    .await;
                let mut queue = (*notifications.get()).clone();
                let summary = settle_recent(outcome, &mut queue);
                notifications.set(queue);
                if summary.is_some() {
                    recent.set(summary);
                }
            });
            || ()
        });
    }

    let act = |action: fn(u32) -> RosterAction, id: u32, message: &'static str| {
        let roster = roster.clone();
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| {
            roster.dispatch(action(id));
            notify(&notifications, ToastKind::Success, message);
        })
    };
    let active_users = roster.active();
    let (recent_total, recent_at_risk) = (*recent).map_or_else(
        || ("-".to_string(), "-".to_string()),
        |(total, at_risk)| (total.to_string(), at_risk.to_string()),
    );

    html! {
        <>
            <PageHeader title="Admin Dashboard" subtitle="System management and user control">
                <Link<MainRoute> to={MainRoute::AdminSubmissions} classes="btn btn-sm btn-primary">
                    {"View submissions"}
                </Link<MainRoute>>
            </PageHeader>
            <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-4 mb-8">
                <StatCard label="Total Users" value={roster.0.len().to_string()} />
                <StatCard label="Active Users" value={active_users.to_string()} />
                <StatCard
                    label="Recent Predictions"
                    value={recent_total}
                    hint={format!("last {DEFAULT_SUBMISSION_LIMIT}")}
                />
                <StatCard
                    label="At-Risk Students"
                    value={recent_at_risk}
                    hint="in recent predictions"
                />
            </div>
            <div class="grid gap-6 xl:grid-cols-3">
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"System Health"}</h2>
                        <ul class="space-y-2">
                            { for HEALTH.iter().map(|(metric, value, status)| {
                                let tone = if *status == "excellent" { "badge-success" } else { "badge-info" };
                                html! {
                                    <li class="flex justify-between items-center">
                                        <span>{*metric}</span>
                                        <span class="flex items-center gap-2">
                                            <span class="font-semibold">{*value}</span>
                                            <span class={classes!("badge", "badge-sm", tone)}>{*status}</span>
                                        </span>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="card bg-base-200 shadow xl:col-span-2">
                    <div class="card-body overflow-x-auto">
                        <h2 class="card-title">{"User Management"}</h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Department"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Join Date"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for roster.0.iter().map(|user| html! {
                                    <tr key={user.id}>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{user.department}</td>
                                        <td>
                                            <span class={classes!("badge", if user.active { "badge-success" } else { "badge-ghost" })}>
                                                {if user.active { "active" } else { "inactive" }}
                                            </span>
                                        </td>
                                        <td>{user.joined}</td>
                                        <td class="flex gap-2">
                                            if user.active {
                                                <button
                                                    class="btn btn-xs btn-outline"
                                                    onclick={act(RosterAction::Deactivate, user.id, "User deactivated")}
                                                >
                                                    {"Deactivate"}
                                                </button>
                                            }
                                            <button
                                                class="btn btn-xs btn-error btn-outline"
                                                onclick={act(RosterAction::Remove, user.id, "User removed successfully")}
                                            >
                                                {"Remove"}
                                            </button>
                                        </td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_a_user_shrinks_the_roster() {
        let roster = Rc::new(Roster::default()).reduce(RosterAction::Remove(2));
        assert_eq!(roster.0.len(), USERS.len() - 1);
        assert!(roster.0.iter().all(|user| user.id != 2));
        assert_eq!(roster.active(), 2);
    }

    #[test]
    fn deactivation_keeps_the_user_listed() {
        let roster = Rc::new(Roster::default()).reduce(RosterAction::Deactivate(1));
        assert_eq!(roster.0.len(), USERS.len());
        assert!(!roster.0[0].active);
        assert_eq!(roster.active(), 2);
    }

    #[test]
    fn failed_load_raises_an_error_toast() {
        let mut notifications = Notifications::default();
        let summary = settle_recent(
            Err(ApiError::Timeout(std::time::Duration::from_millis(5_000))),
            &mut notifications,
        );
        assert_eq!(summary, None);
        assert_eq!(notifications.toasts().len(), 1);
        assert_eq!(notifications.toasts()[0].kind, ToastKind::Error);
        assert!(
            notifications.toasts()[0]
                .message
                .starts_with("Loading recent predictions failed")
        );
    }

    #[test]
    fn loaded_rows_are_summarized_quietly() {
        let row = |flag| Submission {
            id: None,
            age: 19,
            attendance: 80.0,
            grades: 70.0,
            parent_support: 1,
            dropout_prediction: flag,
            probability: None,
            created_at: None,
        };
        let mut notifications = Notifications::default();
        let summary = settle_recent(Ok(vec![row(true), row(false)]), &mut notifications);
        assert_eq!(summary, Some((2, 1)));
        assert!(notifications.toasts().is_empty());
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let roster = Rc::new(Roster::default()).reduce(RosterAction::Remove(99));
        assert_eq!(*roster, Roster::default());
    }

    #[test]
    fn counts_flagged_submissions() {
        assert_eq!(summarize([true, false, true]), (3, 2));
        assert_eq!(summarize([]), (0, 0));
    }
}
