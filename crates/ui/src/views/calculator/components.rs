use dioxus::prelude::*;

use crate::vm::CalculationCardVm;

/// Keys that dismiss the dialog without submitting.
fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

#[component]
pub fn FlipDialog(
    coins: String,
    heads: String,
    on_coins_change: Callback<String>,
    on_heads_change: Callback<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if is_dismiss_key(&evt.data.key()) {
                    evt.prevent_default();
                    on_close.call(());
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "dialog-title",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    h2 { id: "dialog-title", class: "dialog-title", "Coin Flip Probability Calculator" }
                    button {
                        class: "dialog-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                form {
                    class: "dialog-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    div { class: "field",
                        label { r#for: "coins", "Total Coin Flips (n)" }
                        input {
                            id: "coins",
                            autofocus: true,
                            r#type: "number",
                            placeholder: "Enter number of coin flips",
                            value: "{coins}",
                            required: true,
                            min: "1",
                            oninput: move |evt| on_coins_change.call(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "heads", "Desired Number of Heads (k)" }
                        input {
                            id: "heads",
                            r#type: "number",
                            placeholder: "Enter desired number of heads",
                            value: "{heads}",
                            required: true,
                            min: "0",
                            oninput: move |evt| on_heads_change.call(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary btn-block", r#type: "submit",
                        "Calculate Probability"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResultGrid(cards: Vec<CalculationCardVm>) -> Element {
    rsx! {
        div { class: "result-grid",
            for card in cards {
                ResultCard { key: "{card.label}", card }
            }
        }
    }
}

#[component]
fn ResultCard(card: CalculationCardVm) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Calculation {card.label}" }
            }
            div { class: "card-content",
                p { "Coin Flips (n): {card.coins}" }
                p { "Heads (k): {card.heads}" }
                p { "Probability: {card.probability_str}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses_dialog() {
        assert!(is_dismiss_key(&Key::Escape));
    }

    #[test]
    fn typing_keys_do_not_dismiss_dialog() {
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Character("5".to_string())));
        assert!(!is_dismiss_key(&Key::Backspace));
    }
}
