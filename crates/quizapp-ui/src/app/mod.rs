use crate::app::api::ApiCtx;
use crate::components::toast::ToastHost;
use crate::core::config::MOUNT_POINT_ID;
use crate::core::store::{AppStore, SessionStatus};
use crate::core::theme::Theme;
use crate::core::toast::{Notice, ToastAction, ToastQueue};
use crate::error::BootstrapError;
use crate::features::login::view::LoginPage;
use gloo::utils::document;
use preferences::api_base_url;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

/// Root properties supplied once at bootstrap.
#[derive(Properties, PartialEq)]
pub(crate) struct QuizAppProps {
    /// Static theme tokens.
    pub(crate) theme: Theme,
}

#[function_component(QuizApp)]
pub(crate) fn quiz_app(props: &QuizAppProps) -> Html {
    let api_ctx = use_memo((), |_| ApiCtx::new(api_base_url()));
    let toasts = use_reducer(ToastQueue::default);

    {
        let theme = props.theme;
        use_effect_with(theme, move |theme| {
            apply_theme(theme);
            || ()
        });
    }

    let push_notice = {
        let toasts = toasts.clone();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    let render = {
        let push_notice = push_notice.clone();
        Callback::from(move |route: Route| switch(route, push_notice.clone()))
    };

    html! {
        <ContextProvider<Theme> context={props.theme}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={render} />
                    <ToastHost toasts={toasts.items().to_vec()} on_dismiss={dismiss_toast} />
                </BrowserRouter>
            </ContextProvider<ApiCtx>>
        </ContextProvider<Theme>>
    }
}

fn switch(route: Route, on_notice: Callback<Notice>) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage on_notice={on_notice} /> },
        Route::SignUp => html! {
            <Placeholder
                title="Sign Up"
                body="Account registration lives on the quiz server."
            />
        },
        Route::NotFound => html! {
            <Placeholder title="Not found" body="This page does not exist." />
        },
    }
}

#[function_component(HomePage)]
fn home_page() -> Html {
    let status = use_selector(|store: &AppStore| store.session.status);
    let user = use_selector(|store: &AppStore| store.session.user.clone());
    let greeting = match (*status, (*user).as_ref()) {
        (SessionStatus::Authenticated, Some(user)) => {
            format!("Welcome back, {}", user.name.as_deref().unwrap_or(user.email.as_str()))
        }
        _ => "Sign in to start a quiz.".to_string(),
    };

    html! {
        <main class="home center">
            <h1>{"Quiz App"}</h1>
            <p class="muted">{greeting}</p>
            <Link<Route> to={Route::Login} classes="btn solid primary">{"Login"}</Link<Route>>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    title: AttrValue,
    body: AttrValue,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <main class="placeholder center">
            <h2>{props.title.clone()}</h2>
            <p class="muted">{props.body.clone()}</p>
            <Link<Route> to={Route::Home} classes="accent-link">{"Back to Quiz App"}</Link<Route>>
        </main>
    }
}

fn apply_theme(theme: &Theme) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("style", &theme.root_style());
    }
    if let Some(body) = document().body() {
        let _ = body.set_attribute("data-theme", theme.name);
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
///
/// # Errors
///
/// Returns [`BootstrapError::MountPointMissing`] when the host page lacks the
/// mount element; the caller treats this as fatal.
pub fn run_app() -> Result<(), BootstrapError> {
    console_error_panic_hook::set_once();
    let root = document()
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(BootstrapError::MountPointMissing { id: MOUNT_POINT_ID })?;
    yew::Renderer::<QuizApp>::with_root_and_props(
        root,
        QuizAppProps {
            theme: Theme::quiz(),
        },
    )
    .render();
    Ok(())
}
