use std::rc::Rc;

use yew::prelude::*;
use shared::formatter::sanitize_currency_input;
use shared::{submit_and_release, Direction, RefreshTarget, SubmitControl, SubmitOutcome, TransactionModal};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// Reducer-backed holder for the dialog so async completions always act on
/// the latest state
#[derive(Debug, Default, PartialEq)]
pub struct ModalStore(TransactionModal);

impl ModalStore {
    pub fn modal(&self) -> &TransactionModal {
        &self.0
    }
}

pub enum ModalAction {
    Open { direction: Direction, today: String },
    SwitchTab(Direction),
    Close,
    EditAmount(String),
    EditDescription(String),
    EditDate(String),
}

impl Reducible for ModalStore {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut modal = self.0.clone();
        match action {
            ModalAction::Open { direction, today } => modal.open(direction, &today),
            ModalAction::SwitchTab(direction) => modal.switch_tab(direction),
            ModalAction::Close => modal.close(),
            ModalAction::EditAmount(raw) => modal.form.amount = sanitize_currency_input(&raw),
            ModalAction::EditDescription(text) => modal.form.description = text,
            ModalAction::EditDate(date) => modal.form.date = date,
        }
        Rc::new(ModalStore(modal))
    }
}

pub struct UseTransactionModalResult {
    pub modal: TransactionModal,
    /// A submission is in flight; the submit button is disabled
    pub submitting: bool,
    pub actions: TransactionModalActions,
}

#[derive(Clone, PartialEq)]
pub struct TransactionModalActions {
    pub open: Callback<Direction>,
    pub switch_tab: Callback<Direction>,
    pub close: Callback<()>,
    pub on_amount_input: Callback<String>,
    pub on_description_input: Callback<String>,
    pub on_date_input: Callback<String>,
    pub submit: Callback<()>,
}

/// Dialog state plus the submit round trip. `on_refresh` receives each view
/// a successful submission asks to reload.
#[hook]
pub fn use_transaction_modal(
    api_client: &ApiClient,
    on_refresh: Callback<RefreshTarget>,
) -> UseTransactionModalResult {
    let store = use_reducer(ModalStore::default);
    let control = use_mut_ref(SubmitControl::default);
    // Mirrors `control` so a change re-renders the button
    let submitting = use_state(|| false);

    let open = {
        let store = store.clone();
        use_callback((), move |direction: Direction, _| {
            store.dispatch(ModalAction::Open { direction, today: today() });
        })
    };

    let switch_tab = {
        let store = store.clone();
        use_callback((), move |direction: Direction, _| {
            store.dispatch(ModalAction::SwitchTab(direction));
        })
    };

    let close = {
        let store = store.clone();
        use_callback((), move |_, _| store.dispatch(ModalAction::Close))
    };

    let on_amount_input = {
        let store = store.clone();
        use_callback((), move |raw: String, _| store.dispatch(ModalAction::EditAmount(raw)))
    };

    let on_description_input = {
        let store = store.clone();
        use_callback((), move |text: String, _| store.dispatch(ModalAction::EditDescription(text)))
    };

    let on_date_input = {
        let store = store.clone();
        use_callback((), move |date: String, _| store.dispatch(ModalAction::EditDate(date)))
    };

    // Rebuilt every render so it reads the form as currently shown
    let submit = {
        let api_client = api_client.clone();
        let store = store.clone();
        let control = control.clone();
        let submitting = submitting.clone();

        Callback::from(move |_: ()| {
            if !control.borrow_mut().try_begin() {
                return;
            }
            submitting.set(true);

            let api_client = api_client.clone();
            let store = store.clone();
            let control = control.clone();
            let submitting = submitting.clone();
            let on_refresh = on_refresh.clone();
            let form = store.modal().form.clone();

            spawn_local(async move {
                let outcome = submit_and_release(&api_client, &form, &control).await;

                match &outcome {
                    SubmitOutcome::Invalid(e) => Logger::warn_with_component("submit", &e.to_string()),
                    SubmitOutcome::Failed(e) => Logger::error_with_component("submit", &format!("Error: {}", e)),
                    SubmitOutcome::Rejected { message } => {
                        Logger::info_with_component("submit", &format!("Transaction rejected: {}", message))
                    }
                    SubmitOutcome::Accepted { .. } => {}
                }

                gloo::dialogs::alert(&outcome.notice());

                if outcome.closes_dialog() {
                    store.dispatch(ModalAction::Close);
                }
                for target in outcome.refreshes() {
                    on_refresh.emit(*target);
                }

                submitting.set(control.borrow().is_busy());
            });
        })
    };

    UseTransactionModalResult {
        modal: store.modal().clone(),
        submitting: *submitting,
        actions: TransactionModalActions {
            open,
            switch_tab,
            close,
            on_amount_input,
            on_description_input,
            on_date_input,
            submit,
        },
    }
}
