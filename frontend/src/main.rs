use yew::prelude::*;
use shared::RefreshTarget;

mod components;
mod config;
mod hooks;
mod services;

use components::transactions::{BalanceChart, TransactionModalView};
use components::Header;
use config::DashboardConfig;
use hooks::{use_balance, use_chart, use_transaction_modal};
use services::api::ApiClient;
use services::logging::Logger;

/// Root of the dashboard. Builds the API client once and hands it, along with
/// the refresh callbacks, to everything that needs them.
#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| DashboardConfig::from_document());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::from_config(&config)
    });

    let balance = use_balance(&api_client);
    let chart = use_chart(&api_client);

    let on_refresh = {
        let refresh_chart = chart.refresh.clone();
        let refresh_balance = balance.refresh.clone();
        Callback::from(move |target: RefreshTarget| match target {
            RefreshTarget::Chart => refresh_chart.emit(()),
            RefreshTarget::Balance => refresh_balance.emit(()),
        })
    };

    let transaction_modal = use_transaction_modal(&api_client, on_refresh);

    // Load initial data
    use_effect_with((), {
        let refresh_chart = chart.refresh.clone();
        let refresh_balance = balance.refresh.clone();

        move |_| {
            Logger::info_with_component("app", "Loading dashboard");
            refresh_chart.emit(());
            refresh_balance.emit(());
            || ()
        }
    });

    html! {
        <>
            <Header
                balance={balance.display.clone()}
                on_open_transaction={transaction_modal.actions.open.clone()}
            />

            <main class="main">
                <div class="container">
                    <section class="chart-section">
                        <BalanceChart
                            view={chart.view.clone()}
                            geometry={config.chart_geometry()}
                            on_retry={chart.refresh.clone()}
                        />
                    </section>
                </div>
            </main>

            <TransactionModalView
                modal={transaction_modal.modal.clone()}
                submitting={transaction_modal.submitting}
                actions={transaction_modal.actions.clone()}
            />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
