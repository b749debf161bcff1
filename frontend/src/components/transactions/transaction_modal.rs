use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use shared::formatter::sanitize_currency_input;
use shared::submit::PROCESSING_LABEL;
use shared::{Direction, TransactionModal};
use crate::hooks::use_transaction_modal::TransactionModalActions;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub modal: TransactionModal,
    pub submitting: bool,
    pub actions: TransactionModalActions,
}

/// Deposit/withdraw dialog. All field state lives in the modal hook; this
/// only renders it and forwards edits.
#[function_component(TransactionModalView)]
pub fn transaction_modal_view(props: &TransactionModalProps) -> Html {
    if !props.modal.is_open {
        return html! {};
    }

    let actions = &props.actions;
    let form = &props.modal.form;
    let direction = props.modal.direction();

    let on_backdrop_click = {
        let close = actions.close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let close = actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let tab = |tab: Direction| {
        let switch_tab = actions.switch_tab.clone();
        let onchange = Callback::from(move |_: Event| switch_tab.emit(tab));
        html! {
            <label class={props.modal.tab_class(tab)}>
                <input
                    type="radio"
                    name="direction"
                    value={tab.as_str()}
                    checked={tab == direction}
                    class="hidden"
                    onchange={onchange}
                />
                {tab.tab_label()}
            </label>
        }
    };

    // Rewrites the field in place so stray characters never show
    let on_amount_input = {
        let on_amount_input = actions.on_amount_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let clean = sanitize_currency_input(&input.value());
            if clean != input.value() {
                input.set_value(&clean);
            }
            on_amount_input.emit(clean);
        })
    };

    let on_description_input = {
        let on_description_input = actions.on_description_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_description_input.emit(input.value());
        })
    };

    let on_date_input = {
        let on_date_input = actions.on_date_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_date_input.emit(input.value());
        })
    };

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="transaction-modal-backdrop modal modal-open" onclick={on_backdrop_click}>
            <div class="transaction-modal modal-box" onclick={on_modal_click}>
                <h3 class="font-bold text-lg">{"New Transaction"}</h3>

                <div role="tablist" class="tabs tabs-boxed">
                    {tab(Direction::Deposit)}
                    {tab(Direction::Withdraw)}
                </div>

                <form class="transaction-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="amountInput">{"Amount ($)"}</label>
                        <input
                            type="text"
                            id="amountInput"
                            name="amount"
                            inputmode="decimal"
                            placeholder="0.00"
                            value={form.amount.clone()}
                            oninput={on_amount_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="descriptionInput">{"Description (optional)"}</label>
                        <input
                            type="text"
                            id="descriptionInput"
                            name="description"
                            placeholder="Paycheck, rent, groceries..."
                            value={form.description.clone()}
                            oninput={on_description_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="dateInput">{"Date"}</label>
                        <input
                            type="date"
                            id="dateInput"
                            name="date"
                            value={form.date.clone()}
                            oninput={on_date_input}
                            required={true}
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" onclick={on_close_click}>
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            id="submitBtn"
                            class={direction.button_class()}
                            disabled={props.submitting}
                        >
                            {if props.submitting { PROCESSING_LABEL } else { direction.submit_label() }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
