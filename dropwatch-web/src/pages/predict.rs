use crate::{
    api::{ApiError, DropwatchClient},
    components::{FormField, PageHeader, form_field::field_error},
    models::notifications::{Notifications, ToastKind},
};
use shared::models::PredictionResult;
use shared::validation::{FieldErrors, PredictForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

/// Toast text for a verdict.
fn verdict_message(result: &PredictionResult) -> String {
    let marker = if result.is_at_risk() { "⚠️" } else { "✅" };
    match result.probability {
        Some(probability) => format!(
            "{marker} {} ({:.0}% confidence)",
            result.headline(),
            probability * 100.0
        ),
        None => format!("{marker} {}", result.headline()),
    }
}

/// Announce a finished prediction and hand back the verdict to display.
/// Failures only produce an error toast.
fn settle_prediction(
    outcome: Result<PredictionResult, ApiError>,
    notifications: &mut Notifications,
) -> Option<PredictionResult> {
    match outcome {
        Ok(verdict) => {
            tracing::info!(at_risk = verdict.is_at_risk(), "prediction received");
            notifications.push(ToastKind::Success, verdict_message(&verdict));
            Some(verdict)
        }
        Err(err) => {
            tracing::error!(error = %err, "prediction failed");
            notifications.push(ToastKind::Error, err.user_message("Prediction"));
            None
        }
    }
}

#[derive(Properties, PartialEq)]
struct VerdictCardProps {
    result: PredictionResult,
}

#[function_component(VerdictCard)]
fn verdict_card(props: &VerdictCardProps) -> Html {
    let (tone, advice) = if props.result.is_at_risk() {
        (
            "alert-warning",
            "Consider scheduling a counselor session and reviewing attendance.",
        )
    } else {
        ("alert-success", "No intervention needed right now.")
    };
    html! {
        <div role="alert" class={classes!("alert", tone, "mt-6")}>
            <div>
                <h3 class="font-bold">{props.result.headline()}</h3>
                <div class="text-sm">{advice}</div>
            </div>
        </div>
    }
}

#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    let form = use_state(PredictForm::default);
    let errors = use_state(|| None::<FieldErrors>);
    let busy = use_state(|| false);
    let result = use_state(|| None::<PredictionResult>);
    let notifications = use_dispatch::<Notifications>();

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let result = result.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let features = match form.validate() {
                Ok(features) => features,
                Err(invalid) => {
                    errors.set(Some(invalid));
                    return;
                }
            };
            errors.set(None);
            busy.set(true);

            let busy = busy.clone();
            let result = result.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                let outcome = DropwatchClient::shared().predict_student(&features).await;
                let mut queue = (*notifications.get()).clone();
                let verdict = settle_prediction(outcome, &mut queue);
                notifications.set(queue);
                if verdict.is_some() {
                    result.set(verdict);
                }
                busy.set(false);
            });
        })
    };

    let update = |apply: fn(&mut PredictForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_support = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.parent_support = select.value();
                form.set(next);
            }
        })
    };
    let error = |field: &str| field_error((*errors).as_ref(), field);

    html! {
        <>
            <PageHeader
                title="Predict Student Outcome"
                subtitle="Scores a single student with the trained dropout model."
            />
            <div class="card bg-base-200 shadow-xl max-w-xl">
                <form class="card-body gap-2" {onsubmit} novalidate=true>
                    <FormField
                        id={PredictForm::AGE}
                        label="Age"
                        input_type="number"
                        placeholder="Age"
                        value={form.age.clone()}
                        oninput={update(|form, value| form.age = value)}
                        error={error(PredictForm::AGE)}
                        disabled={*busy}
                    />
                    <FormField
                        id={PredictForm::ATTENDANCE}
                        label="Attendance (%)"
                        input_type="number"
                        placeholder="Attendance (%)"
                        value={form.attendance.clone()}
                        oninput={update(|form, value| form.attendance = value)}
                        error={error(PredictForm::ATTENDANCE)}
                        disabled={*busy}
                    />
                    <FormField
                        id={PredictForm::GRADES}
                        label="Grades (%)"
                        input_type="number"
                        placeholder="Grades (%)"
                        value={form.grades.clone()}
                        oninput={update(|form, value| form.grades = value)}
                        error={error(PredictForm::GRADES)}
                        disabled={*busy}
                    />
                    <div class="form-control w-full">
                        <label class="label" for={PredictForm::PARENT_SUPPORT}>
                            <span class="label-text">{"Parent support"}</span>
                        </label>
                        <select
                            id={PredictForm::PARENT_SUPPORT}
                            class="select select-bordered w-full"
                            onchange={on_support}
                            disabled={*busy}
                        >
                            <option value="1" selected={form.parent_support == "1"}>{"Parent Support: Yes"}</option>
                            <option value="0" selected={form.parent_support == "0"}>{"Parent Support: No"}</option>
                        </select>
                        if let Some(message) = error(PredictForm::PARENT_SUPPORT) {
                            <p class="text-error text-sm mt-1">{message}</p>
                        }
                    </div>
                    <button class="btn btn-primary mt-4" type="submit" disabled={*busy}>
                        {if *busy { "Predicting..." } else { "Predict Dropout" }}
                    </button>
                </form>
            </div>
            if let Some(verdict) = *result {
                <VerdictCard result={verdict} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use shared::models::{Role, UserId, UserRecord};
    use shared::{KeyValueStorage, MemoryStorage, SessionStore};

    fn rejected() -> ApiError {
        ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "age must be positive".into(),
        }
    }

    #[test]
    fn rejected_payload_only_raises_an_error_toast() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::rehydrate(storage.clone());
        session.login(
            UserRecord::new(UserId::Number(1), "Ada", "ada@example.com", Role::User),
            Role::User,
        );
        let before = session.snapshot();
        let persisted = storage.get(shared::session::SESSION_STORAGE_KEY).unwrap();

        let mut notifications = Notifications::default();
        let verdict = settle_prediction(Err(rejected()), &mut notifications);

        assert_eq!(verdict, None);
        assert_eq!(notifications.toasts().len(), 1);
        assert_eq!(notifications.toasts()[0].kind, ToastKind::Error);
        assert_eq!(
            notifications.toasts()[0].message,
            "Prediction failed: age must be positive"
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(
            storage.get(shared::session::SESSION_STORAGE_KEY).unwrap(),
            persisted
        );
    }

    #[test]
    fn verdict_is_announced_and_returned() {
        let verdict = PredictionResult {
            dropout_prediction: false,
            probability: Some(0.1),
        };
        let mut notifications = Notifications::default();
        assert_eq!(
            settle_prediction(Ok(verdict), &mut notifications),
            Some(verdict)
        );
        assert_eq!(notifications.toasts()[0].kind, ToastKind::Success);
    }

    #[test]
    fn verdict_messages() {
        let at_risk = PredictionResult {
            dropout_prediction: true,
            probability: Some(0.82),
        };
        assert_eq!(
            verdict_message(&at_risk),
            "⚠️ At Risk of Dropout (82% confidence)"
        );

        let fine = PredictionResult {
            dropout_prediction: false,
            probability: None,
        };
        assert_eq!(verdict_message(&fine), "✅ Likely to Continue");
    }
}
