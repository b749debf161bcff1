pub mod balance_chart;
pub mod transaction_modal;

pub use balance_chart::BalanceChart;
pub use transaction_modal::TransactionModalView;
