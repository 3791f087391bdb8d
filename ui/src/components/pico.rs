//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! The stylesheet itself is linked by `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    /// Renders `type="submit"` so the button submits its enclosing form.
    #[props(default = false)]
    submit: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows Pico's spinner in front of the label.
    #[props(default = false)]
    busy: bool,
}

/// A form button. Pico draws a spinner for `aria-busy="true"`.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled,
            "aria-busy": if props.busy { "true" } else { "false" },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    id: &'static str,
    label: &'static str,
    value: String,
    #[props(default = "text")]
    input_type: &'static str,
    #[props(optional)]
    placeholder: Option<&'static str>,
    #[props(default = false)]
    required: bool,
    on_input: EventHandler<String>,
}

/// A form input with its label above it.
///
/// The input is controlled: it always shows `value`, and every edit is
/// reported through `on_input` for the owner to store.
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    rsx! {
        label {
            r#for: props.id,
            "{props.label}"
        }
        input {
            id: props.id,
            name: props.id,
            r#type: props.input_type,
            placeholder: props.placeholder.unwrap_or(""),
            required: props.required,
            value: "{props.value}",
            oninput: move |evt: FormEvent| props.on_input.call(evt.value()),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AlertProps {
    message: String,
    on_dismiss: EventHandler<MouseEvent>,
}

/// A dismissible error notice.
pub fn Alert(props: AlertProps) -> Element {
    rsx! {
        article {
            class: "alert",
            role: "alert",
            p { "{props.message}" }
            a {
                href: "#",
                "aria-label": "Dismiss",
                class: "close",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    props.on_dismiss.call(evt);
                },
            }
        }
    }
}
