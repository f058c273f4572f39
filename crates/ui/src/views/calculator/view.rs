use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_result};
use crate::vm::{CalculatorFormVm, SubmitOutcome, map_calculation_cards};

use super::components::{FlipDialog, ResultGrid};
use super::scripts::show_alert;

#[component]
pub fn CalculatorView() -> Element {
    let ctx = use_context::<AppContext>();
    let calculator = ctx.calculator();

    let mut form = use_signal(|| {
        let mut form = CalculatorFormVm::default();
        if ctx.take_open_dialog_on_launch() {
            form.open();
        }
        form
    });

    // The list is a projection of the session store; a form update re-renders it.
    let cards_state = view_state_from_result(
        calculator
            .list_all()
            .map(|items| map_calculation_cards(&items)),
    );

    let on_submit = use_callback(move |()| {
        let outcome = form.write().submit(&calculator);
        if let SubmitOutcome::Rejected { message } = outcome {
            spawn(async move {
                show_alert(message).await;
            });
        }
    });

    let form_value = form();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Coin Flip Probability Calculator" }
            }
            div { class: "page-body",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| form.write().open(),
                    "Open Coin Flip Counter"
                }

                if form_value.is_open() {
                    FlipDialog {
                        coins: form_value.coins.clone(),
                        heads: form_value.heads.clone(),
                        on_coins_change: move |value: String| {
                            form.write().coins = value;
                        },
                        on_heads_change: move |value: String| {
                            form.write().heads = value;
                        },
                        on_submit,
                        on_close: move |()| form.write().close(),
                    }
                }

                match cards_state {
                    ViewState::Ready(cards) => rsx! {
                        if !cards.is_empty() {
                            ResultGrid { cards }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                }
            }
        }
    }
}
