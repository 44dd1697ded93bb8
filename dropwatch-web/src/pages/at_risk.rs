use crate::{
    components::{PageHeader, StatCard},
    routes::MainRoute,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, Copy, PartialEq, Eq)]
enum RiskLevel {
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    fn badge(self) -> &'static str {
        match self {
            Self::Medium => "badge-warning",
            Self::High => "badge-error",
            Self::Critical => "badge-error badge-outline",
        }
    }
}

struct Student {
    name: &'static str,
    semester: u8,
    attendance: u8,
    grades: u8,
    risk: RiskLevel,
    score: u8,
}

impl Student {
    const fn new(
        name: &'static str,
        semester: u8,
        attendance: u8,
        grades: u8,
        risk: RiskLevel,
        score: u8,
    ) -> Self {
        Self {
            name,
            semester,
            attendance,
            grades,
            risk,
            score,
        }
    }
}

static STUDENTS: [Student; 5] = [
    Student::new("John Doe", 3, 62, 48, RiskLevel::High, 78),
    Student::new("Sarah Smith", 2, 74, 55, RiskLevel::Medium, 61),
    Student::new("Mike Johnson", 5, 41, 38, RiskLevel::Critical, 92),
    Student::new("Emma Wilson", 4, 58, 51, RiskLevel::High, 74),
    Student::new("Alex Brown", 1, 39, 42, RiskLevel::Critical, 89),
];

const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Schedule counseling session",
    "Review academic progress",
    "Connect with support services",
    "Monitor attendance",
];

fn selected_student(index: Option<usize>) -> Option<&'static Student> {
    index.and_then(|index| STUDENTS.get(index))
}

#[derive(Properties, PartialEq)]
struct StudentDetailProps {
    index: usize,
    onclose: Callback<MouseEvent>,
}

#[function_component(StudentDetail)]
fn student_detail(props: &StudentDetailProps) -> Html {
    let Some(student) = selected_student(Some(props.index)) else {
        return Html::default();
    };
    let row = |label: &str, value: String| {
        html! {
            <div class="flex justify-between">
                <span class="text-base-content/70">{label.to_string()}</span>
                <span class="font-semibold">{value}</span>
            </div>
        }
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{student.name}</h3>
                <div class="space-y-2 mb-4">
                    {row("Semester", student.semester.to_string())}
                    {row("Attendance", format!("{}%", student.attendance))}
                    {row("Grades", format!("{}%", student.grades))}
                    {row("Risk Level", student.risk.label().to_string())}
                    {row("Risk Score", student.score.to_string())}
                </div>
                <div class="bg-base-200 rounded-box p-4">
                    <h4 class="font-semibold mb-2">{"Recommended actions"}</h4>
                    <ul class="text-sm space-y-1">
                        { for RECOMMENDED_ACTIONS.iter().map(|action| html! { <li>{format!("✓ {action}")}</li> }) }
                    </ul>
                </div>
                <div class="modal-action">
                    <Link<MainRoute> to={MainRoute::Counselor} classes="btn btn-primary">
                        {"Refer to counselor"}
                    </Link<MainRoute>>
                    <button class="btn" onclick={props.onclose.clone()}>{"Close"}</button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={props.onclose.clone()}></div>
        </div>
    }
}

#[function_component(AtRiskPage)]
pub fn at_risk_page() -> Html {
    let selected = use_state(|| None::<usize>);
    let onclose = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <>
            <PageHeader title="Students at Risk" subtitle="Early identification and intervention strategies" />
            <div class="grid gap-4 md:grid-cols-3 mb-8">
                <StatCard label="High Risk Students" value="58" />
                <StatCard label="Critical Cases" value="13" />
                <StatCard label="Interventions Needed" value="71" />
            </div>
            <div class="card bg-base-200 shadow">
                <div class="card-body overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Semester"}</th>
                                <th>{"Attendance"}</th>
                                <th>{"Grades"}</th>
                                <th>{"Risk Level"}</th>
                                <th>{"Risk Score"}</th>
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for STUDENTS.iter().enumerate().map(|(index, student)| {
                                let open = {
                                    let selected = selected.clone();
                                    Callback::from(move |_: MouseEvent| selected.set(Some(index)))
                                };
                                html! {
                                    <tr>
                                        <td class="font-medium">{student.name}</td>
                                        <td>{student.semester}</td>
                                        <td>{format!("{}%", student.attendance)}</td>
                                        <td>{format!("{}%", student.grades)}</td>
                                        <td>
                                            <span class={classes!("badge", student.risk.badge())}>
                                                {student.risk.label()}
                                            </span>
                                        </td>
                                        <td>{student.score}</td>
                                        <td>
                                            <button class="btn btn-xs btn-primary" onclick={open}>
                                                {"View details"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
            if let Some(index) = *selected {
                <StudentDetail {index} {onclose} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_resolves_to_a_listed_student() {
        assert_eq!(
            selected_student(Some(2)).map(|student| student.name),
            Some("Mike Johnson")
        );
        assert!(selected_student(Some(STUDENTS.len())).is_none());
        assert!(selected_student(None).is_none());
    }

    #[test]
    fn critical_students_score_highest() {
        let lowest_critical = STUDENTS
            .iter()
            .filter(|student| student.risk == RiskLevel::Critical)
            .map(|student| student.score)
            .min();
        let highest_other = STUDENTS
            .iter()
            .filter(|student| student.risk != RiskLevel::Critical)
            .map(|student| student.score)
            .max();
        assert!(lowest_critical > highest_other);
    }
}
