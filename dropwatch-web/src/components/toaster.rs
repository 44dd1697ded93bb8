use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::Dispatch;
use yewdux::prelude::{use_dispatch, use_store_value};

use crate::models::notifications::{Notifications, TOAST_LIFETIME_MS, Toast, ToastKind};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let dispatch = use_dispatch::<Notifications>();
    let id = props.toast.id;

    {
        let dispatch = dispatch.clone();
        use_effect_with(id, move |&id| {
            let timeout = Timeout::new(TOAST_LIFETIME_MS, move || {
                dispatch.reduce_mut(|notifications| notifications.dismiss(id));
            });
            // Dropping the handle cancels the timer.
            move || drop(timeout)
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|notifications| notifications.dismiss(id));
    });

    html! {
        <div role="status" class={classes!("alert", "shadow-lg", props.toast.kind.alert_class())}>
            <span>{props.toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" {onclick}>{"✕"}</button>
        </div>
    }
}

/// Stack of transient notifications in the corner of the screen.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let notifications = use_store_value::<Notifications>();

    html! {
        <div class="toast toast-top toast-end z-50">
            { for notifications.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

/// Push a toast through `dispatch`.
pub fn notify(dispatch: &Dispatch<Notifications>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    dispatch.reduce_mut(move |notifications| {
        notifications.push(kind, message);
    });
}
