use yew::prelude::*;
use shared::BalanceDisplay;

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    /// `None` until the first snapshot arrives
    pub display: Option<BalanceDisplay>,
}

#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let (amount, count_label) = match &props.display {
        Some(display) => (display.amount.clone(), display.count_label.clone()),
        None => ("--".to_string(), String::new()),
    };

    html! {
        <div class="balance-display stat">
            <span class="balance-label stat-title">{"Current Balance"}</span>
            <span class="balance-amount stat-value">
                {"$"}<span id="currentBalance">{amount}</span>
            </span>
            <span id="transactionCount" class="stat-desc">{count_label}</span>
        </div>
    }
}
