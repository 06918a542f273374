//! Login page view.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::components::atoms::IconButton;
use crate::components::atoms::icons::{IconExit, IconEye, IconEyeOff};
use crate::core::store::AppStore;
use crate::core::theme::Theme;
use crate::core::toast::Notice;
use crate::features::login::api::StoreLogin;
use crate::features::login::flow::{LoginFlow, SubmitOutcome};
use crate::features::login::state::{LoginFormAction, LoginFormState};
use crate::features::login::validation::Field;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPageProps {
    pub(crate) on_notice: Callback<Notice>,
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &LoginPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let theme = use_context::<Theme>().unwrap_or_else(Theme::quiz);
    let form = use_reducer(LoginFormState::default);
    let flow = {
        let client = api_ctx.client.clone();
        use_memo((), move |_| {
            LoginFlow::new(StoreLogin::new(client, Dispatch::<AppStore>::global()))
        })
    };

    let on_submit = {
        let form = form.clone();
        let flow = flow.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(LoginFormAction::TouchAll);
            if !form.errors().is_valid() || flow.is_submitting() {
                return;
            }
            let credentials = form.credentials();
            form.dispatch(LoginFormAction::SetSubmitting(true));
            let form = form.clone();
            let flow = flow.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                let outcome = flow.submit(&credentials).await;
                if outcome == SubmitOutcome::InFlight {
                    return;
                }
                form.dispatch(LoginFormAction::SetSubmitting(false));
                if let Some(notice) = outcome.notice() {
                    on_notice.emit(notice);
                }
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.dispatch(LoginFormAction::SetEmail(input.value()));
            }
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.dispatch(LoginFormAction::SetPassword(input.value()));
            }
        })
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(LoginFormAction::Blur(field)))
    };
    let on_toggle = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(LoginFormAction::TogglePassword))
    };

    let heading_style = theme
        .color("appPurple", "500")
        .map(|hex| format!("color: {hex};"));
    let email_error = form.visible_error(Field::Email);
    let password_error = form.visible_error(Field::Password);

    html! {
        <main class="login-page center">
            <form class="card login-card" action="/" novalidate={true} onsubmit={on_submit}>
                <Link<Route> to={Route::Home} classes="brand-link">
                    <span class="btn">{"Quiz App"}</span>
                </Link<Route>>
                <h2 class="login-title" style={heading_style}>{"Login"}</h2>
                <div class={classes!("form-control", email_error.is_some().then_some("invalid"))}>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Email Address"
                        autocomplete="on"
                        value={form.email.clone()}
                        oninput={on_email}
                        onblur={on_blur(Field::Email)}
                        aria-invalid={email_error.is_some().to_string()}
                    />
                    {email_error.map(|err| html! {
                        <p class="error-text">{err.message()}</p>
                    }).unwrap_or_default()}
                </div>
                <div class={classes!("form-control", password_error.is_some().then_some("invalid"))}>
                    <div class="input-group">
                        <input
                            id="password"
                            name="password"
                            type={form.password_input_type()}
                            placeholder="Password"
                            autocomplete="on"
                            value={form.password.clone()}
                            oninput={on_password}
                            onblur={on_blur(Field::Password)}
                            aria-invalid={password_error.is_some().to_string()}
                        />
                        <IconButton aria_label="Show or Hide password" class="input-right" onclick={on_toggle}>
                            {if form.show_password {
                                html! { <IconEye /> }
                            } else {
                                html! { <IconEyeOff /> }
                            }}
                        </IconButton>
                    </div>
                    {password_error.map(|err| html! {
                        <p class="error-text">{err.message()}</p>
                    }).unwrap_or_default()}
                </div>
                <button
                    type="submit"
                    class={classes!("solid", "primary", "block", form.submitting.then_some("loading"))}
                    disabled={form.submitting}
                    aria-busy={form.submitting.to_string()}
                >
                    {if form.submitting {
                        html! { <span class="spinner" aria-hidden="true" /> }
                    } else {
                        html! {
                            <>
                                <IconExit size={26} />
                                <span>{"Login"}</span>
                            </>
                        }
                    }}
                </button>
                <p class="signup-hint">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::SignUp} classes="accent-link">{"Sign Up"}</Link<Route>>
                </p>
            </form>
        </main>
    }
}
