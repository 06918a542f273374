use yew::prelude::*;

/// Props for icon-only buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub(crate) aria_label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub(crate) disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!("icon-btn", "link", props.class.clone());
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {props.children.clone()}
        </button>
    }
}
