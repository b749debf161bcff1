use yew::prelude::*;
use shared::{BalanceDisplay, Direction};
use super::balance_card::BalanceCard;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub balance: Option<BalanceDisplay>,
    pub on_open_transaction: Callback<Direction>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let open_with = |direction: Direction| {
        let on_open = props.on_open_transaction.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(direction))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Finance Forecast"}</h1>
                <div class="header-right">
                    <BalanceCard display={props.balance.clone()} />
                    <div class="header-actions">
                        <button type="button" class="btn btn-success" onclick={open_with(Direction::Deposit)}>
                            {"Deposit"}
                        </button>
                        <button type="button" class="btn btn-warning" onclick={open_with(Direction::Withdraw)}>
                            {"Withdraw"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
