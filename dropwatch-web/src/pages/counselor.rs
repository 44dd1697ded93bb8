use std::rc::Rc;

use crate::{
    components::{PageHeader, toaster::notify},
    models::notifications::{Notifications, ToastKind},
};
use gloo_timers::future::TimeoutFuture;
use shared::counseling::{COUNSELOR_ACKNOWLEDGEMENT, ai_reply};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

const AI_REPLY_DELAY_MS: u32 = 700;
const COUNSELOR_REPLY_DELAY_MS: u32 = 1_000;
const SCHEDULING_DELAY_MS: u32 = 1_500;

struct Counselor {
    name: &'static str,
    specialty: &'static str,
    experience: &'static str,
    available: &'static str,
    online: bool,
    rating: f32,
}

const COUNSELORS: [Counselor; 4] = [
    Counselor {
        name: "Dr. Sarah Johnson",
        specialty: "Academic Counseling",
        experience: "12 years",
        available: "Mon - Fri",
        online: true,
        rating: 4.9,
    },
    Counselor {
        name: "Mr. Robert Wilson",
        specialty: "Career Guidance",
        experience: "8 years",
        available: "Tue - Sat",
        online: true,
        rating: 4.7,
    },
    Counselor {
        name: "Ms. Emma Davis",
        specialty: "Mental Health",
        experience: "10 years",
        available: "Mon - Thu",
        online: false,
        rating: 4.8,
    },
    Counselor {
        name: "Dr. Michael Brown",
        specialty: "Study Skills",
        experience: "15 years",
        available: "Wed - Sun",
        online: true,
        rating: 4.6,
    },
];

const PROMISES: [(&str, &str); 3] = [
    (
        "Confidential",
        "All conversations are completely private and secure",
    ),
    (
        "24/7 Support",
        "Access counseling services anytime you need help",
    ),
    (
        "Expert Team",
        "Trained professionals with years of experience",
    ),
];

/// Who the student is talking to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Partner {
    Ai,
    Counselor(usize),
}

impl Partner {
    fn name(self) -> &'static str {
        match self {
            Self::Ai => "AI Counselor",
            Self::Counselor(index) => COUNSELORS.get(index).map_or("Counselor", |c| c.name),
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Ai => "Automated guidance",
            Self::Counselor(index) => COUNSELORS.get(index).map_or("", |c| c.specialty),
        }
    }

    fn online(self) -> bool {
        match self {
            Self::Ai => true,
            Self::Counselor(index) => COUNSELORS.get(index).is_some_and(|c| c.online),
        }
    }

    /// Answer to `text` and how long it takes to arrive.
    fn reply_to(self, text: &str) -> (u32, &'static str) {
        match self {
            Self::Ai => (AI_REPLY_DELAY_MS, ai_reply(text)),
            Self::Counselor(_) => (COUNSELOR_REPLY_DELAY_MS, COUNSELOR_ACKNOWLEDGEMENT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Speaker {
    Student,
    Counselor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatMessage {
    id: usize,
    speaker: Speaker,
    text: String,
    at: String,
}

enum ThreadAction {
    Post {
        speaker: Speaker,
        text: String,
        at: String,
    },
}

/// Messages exchanged with the current partner, oldest first.
#[derive(Debug, Default, PartialEq)]
struct ChatThread {
    messages: Vec<ChatMessage>,
}

impl Reducible for ChatThread {
    type Action = ThreadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ThreadAction::Post { speaker, text, at } = action;
        let mut messages = self.messages.clone();
        messages.push(ChatMessage {
            id: messages.len() + 1,
            speaker,
            text,
            at,
        });
        Rc::new(Self { messages })
    }
}

/// Local wall-clock time as `HH:MM`.
fn clock() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}

#[derive(Properties, PartialEq)]
struct ChatPanelProps {
    partner: Partner,
    onback: Callback<MouseEvent>,
}

#[function_component(ChatPanel)]
fn chat_panel(props: &ChatPanelProps) -> Html {
    let thread = use_reducer(ChatThread::default);
    let draft = use_state(String::new);
    let scheduling = use_state(|| false);
    let notifications = use_dispatch::<Notifications>();
    let partner = props.partner;

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let thread = thread.clone();
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = draft.trim().to_string();
            if text.is_empty() {
                return;
            }
            draft.set(String::new());
            let (delay, reply) = partner.reply_to(&text);
            thread.dispatch(ThreadAction::Post {
                speaker: Speaker::Student,
                text,
                at: clock(),
            });

            let thread = thread.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                thread.dispatch(ThreadAction::Post {
                    speaker: Speaker::Counselor,
                    text: reply.to_string(),
                    at: clock(),
                });
            });
        })
    };

    let onschedule = {
        let scheduling = scheduling.clone();
        Callback::from(move |_: MouseEvent| {
            scheduling.set(true);
            let scheduling = scheduling.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                TimeoutFuture::new(SCHEDULING_DELAY_MS).await;
                scheduling.set(false);
                tracing::info!(counselor = partner.name(), "session scheduled");
                notify(&notifications, ToastKind::Success, "Session scheduled successfully!");
            });
        })
    };

    html! {
        <div class="card bg-base-200 shadow max-w-3xl">
            <div class="card-body">
                <div class="flex items-center justify-between gap-4">
                    <div class="flex items-center gap-3">
                        <button class="btn btn-sm btn-ghost" onclick={props.onback.clone()}>{"← Back"}</button>
                        <div>
                            <h2 class="card-title">{partner.name()}</h2>
                            <p class="text-sm text-base-content/70">{partner.subtitle()}</p>
                        </div>
                    </div>
                    <span class={classes!("badge", if partner.online() { "badge-success" } else { "badge-ghost" })}>
                        {if partner.online() { "online" } else { "offline" }}
                    </span>
                </div>
                <div class="bg-base-100 rounded-box p-4 h-80 overflow-y-auto space-y-2">
                    if thread.messages.is_empty() {
                        <p class="text-center text-base-content/50 mt-24">
                            {format!("Start your conversation with {}", partner.name())}
                        </p>
                    }
                    { for thread.messages.iter().map(|message| {
                        let side = match message.speaker {
                            Speaker::Student => "chat-end",
                            Speaker::Counselor => "chat-start",
                        };
                        html! {
                            <div key={message.id} class={classes!("chat", side)}>
                                <div class="chat-bubble">{message.text.clone()}</div>
                                <div class="chat-footer opacity-50 text-xs">{message.at.clone()}</div>
                            </div>
                        }
                    }) }
                </div>
                if thread.messages.is_empty() && !matches!(partner, Partner::Ai) {
                    <button class="btn btn-outline" onclick={onschedule} disabled={*scheduling}>
                        {if *scheduling { "Scheduling..." } else { "📅 Schedule Session" }}
                    </button>
                }
                <form class="flex gap-2" {onsubmit}>
                    <input
                        class="input input-bordered flex-1"
                        placeholder="Type your message..."
                        value={(*draft).clone()}
                        {oninput}
                    />
                    <button class="btn btn-primary" type="submit" disabled={draft.trim().is_empty()}>
                        {"Send"}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[function_component(CounselorPage)]
pub fn counselor_page() -> Html {
    let partner = use_state(|| None::<Partner>);

    let open = |choice: Partner| {
        let partner = partner.clone();
        Callback::from(move |_: MouseEvent| partner.set(Some(choice)))
    };

    if let Some(current) = *partner {
        let onback = {
            let partner = partner.clone();
            Callback::from(move |_: MouseEvent| partner.set(None))
        };
        return html! {
            <>
                <PageHeader title="Counselor Connect" subtitle="Connect with professional counselors for guidance and support" />
                <ChatPanel key={current.name()} partner={current} {onback} />
            </>
        };
    }

    html! {
        <>
            <PageHeader title="Counselor Connect" subtitle="Connect with professional counselors for guidance and support" />
            <div class="card bg-base-200 shadow mb-6">
                <div class="card-body flex-row items-center justify-between gap-4">
                    <div>
                        <h2 class="card-title">{"AI Counselor"}</h2>
                        <p class="text-sm text-base-content/80">{"Instant automated guidance. Get quick tips and resources from our AI assistant."}</p>
                    </div>
                    <button class="btn btn-primary" onclick={open(Partner::Ai)}>{"Start"}</button>
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                { for COUNSELORS.iter().enumerate().map(|(index, counselor)| html! {
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-start">
                                <div>
                                    <h3 class="card-title text-base">{counselor.name}</h3>
                                    <p class="text-sm text-base-content/70">{counselor.specialty}</p>
                                </div>
                                <span class={classes!("badge", if counselor.online { "badge-success" } else { "badge-ghost" })}>
                                    {if counselor.online { "online" } else { "offline" }}
                                </span>
                            </div>
                            <div class="text-sm space-y-1">
                                <div><span class="font-semibold">{"Experience: "}</span>{counselor.experience}</div>
                                <div><span class="font-semibold">{"Available: "}</span>{counselor.available}</div>
                                <div>{format!("⭐ {:.1}", counselor.rating)}</div>
                            </div>
                            <div class="card-actions justify-end">
                                <button class="btn btn-sm btn-outline" onclick={open(Partner::Counselor(index))}>
                                    {"Start chat"}
                                </button>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <div class="grid gap-4 md:grid-cols-3 mt-8">
                { for PROMISES.iter().map(|(title, description)| html! {
                    <div class="p-4 rounded-box bg-base-200">
                        <h3 class="font-semibold">{*title}</h3>
                        <p class="text-sm text-base-content/80">{*description}</p>
                    </div>
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(thread: Rc<ChatThread>, speaker: Speaker, text: &str) -> Rc<ChatThread> {
        thread.reduce(ThreadAction::Post {
            speaker,
            text: text.to_string(),
            at: "10:30".to_string(),
        })
    }

    #[test]
    fn messages_are_numbered_in_order() {
        let thread = post(Rc::new(ChatThread::default()), Speaker::Student, "hi");
        let thread = post(thread, Speaker::Counselor, "hello");
        let ids: Vec<_> = thread.messages.iter().map(|message| message.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(thread.messages[1].speaker, Speaker::Counselor);
    }

    #[test]
    fn ai_partner_answers_by_keyword_and_faster() {
        let (ai_delay, ai_text) = Partner::Ai.reply_to("I'm anxious about exams");
        let (human_delay, human_text) = Partner::Counselor(0).reply_to("I'm anxious about exams");
        assert!(ai_delay < human_delay);
        assert!(ai_text.contains("stressed"));
        assert_eq!(human_text, COUNSELOR_ACKNOWLEDGEMENT);
    }

    #[test]
    fn partners_resolve_names() {
        assert_eq!(Partner::Ai.name(), "AI Counselor");
        assert_eq!(Partner::Counselor(0).name(), "Dr. Sarah Johnson");
        assert!(!Partner::Counselor(2).online());
    }
}
