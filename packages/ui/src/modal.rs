use dioxus::prelude::*;

/// Dimmed backdrop with a centered dialog card, shared by the project
/// editor and the user-management dialog. Clicks inside the card never
/// reach the backdrop, so `on_close` fires only for a click on the dimmed
/// area itself.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    let backdrop_click = move |_| on_close.call(());

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: backdrop_click,
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
