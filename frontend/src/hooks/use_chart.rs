use yew::prelude::*;
use shared::{load_chart, ChartView, RefreshSequence};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub struct UseChartResult {
    pub view: ChartView,
    pub refresh: Callback<()>,
}

/// Drives the chart state machine. Every refresh restarts from `Loading`;
/// responses overtaken by a newer refresh are dropped.
#[hook]
pub fn use_chart(api_client: &ApiClient) -> UseChartResult {
    let view = use_state(ChartView::default);
    let sequence = use_mut_ref(RefreshSequence::default);

    let refresh = {
        let api_client = api_client.clone();
        let view = view.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let view = view.clone();
            let sequence = sequence.clone();
            let ticket = sequence.borrow_mut().begin();

            view.set(ChartView::Loading);

            spawn_local(async move {
                let next = load_chart(&api_client).await;

                if !sequence.borrow().is_current(ticket) {
                    Logger::debug_with_component("chart", "Dropping chart data from a superseded refresh");
                    return;
                }

                if let ChartView::Error(reason) = &next {
                    Logger::error_with_component("chart", &format!("Error loading chart: {}", reason));
                }
                view.set(next);
            });
        })
    };

    UseChartResult {
        view: (*view).clone(),
        refresh,
    }
}
