use crate::core::toast::{TOAST_DURATION_MS, Toast, plan_timers};
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toasts.clone(), move |list: &Vec<Toast>| {
            let mut running = timers.borrow_mut();
            let plan = plan_timers(running.keys().copied(), list);
            for id in plan.cancel {
                running.remove(&id);
            }
            for id in plan.start {
                let on_dismiss = on_dismiss.clone();
                running.insert(
                    id,
                    Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id)),
                );
            }
            || ()
        });
    }

    html! {
        <div class="toast-host toast-top" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div key={id} class={classes!("toast", toast.kind.class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss notification" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
