use yew::prelude::*;
use shared::{load_balance, BalanceDisplay, RefreshSequence};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub struct UseBalanceResult {
    /// Last successfully loaded values; `None` until the first load lands
    pub display: Option<BalanceDisplay>,
    pub refresh: Callback<()>,
}

/// Balance card data. A failed refresh is logged and keeps whatever was
/// shown before.
#[hook]
pub fn use_balance(api_client: &ApiClient) -> UseBalanceResult {
    let display = use_state(|| Option::<BalanceDisplay>::None);
    let sequence = use_mut_ref(RefreshSequence::default);

    let refresh = {
        let api_client = api_client.clone();
        let display = display.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let display = display.clone();
            let sequence = sequence.clone();
            let ticket = sequence.borrow_mut().begin();

            spawn_local(async move {
                match load_balance(&api_client).await {
                    Ok(fresh) => {
                        if sequence.borrow().is_current(ticket) {
                            display.set(Some(fresh));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component("balance", &format!("Error updating balance: {}", e));
                    }
                }
            });
        })
    };

    UseBalanceResult {
        display: (*display).clone(),
        refresh,
    }
}
