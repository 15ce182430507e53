//! Small form primitives shared by the auth pages and the dialogs.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    // `type` is a keyword, and format strings cannot spell `r#type`.
    let kind = r#type;

    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{kind}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Inline banner for server-side validation messages. Renders nothing when
/// there is no message.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "alert alert-error", "{message}" }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_its_button_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }

    #[test]
    fn primary_is_the_default_variant() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
