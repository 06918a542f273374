use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or(22)]
    pub(crate) size: u32,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let size = props.size.to_string();
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconEye)]
pub(crate) fn icon_eye(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <>
                <path d="M2 12s3.5-7 10-7s10 7 10 7s-3.5 7-10 7s-10-7-10-7" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
    )
}

#[function_component(IconEyeOff)]
pub(crate) fn icon_eye_off(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <path d="M10.7 5.1A10 10 0 0 1 12 5c6.5 0 10 7 10 7a18 18 0 0 1-2.2 3.2M6.6 6.6A17.6 17.6 0 0 0 2 12s3.5 7 10 7a9.7 9.7 0 0 0 5.4-1.6M9.9 9.9a3 3 0 0 0 4.2 4.2M2 2l20 20" />
        },
    )
}

#[function_component(IconExit)]
pub(crate) fn icon_exit(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4M10 17l5-5l-5-5M15 12H3" /> },
    )
}
