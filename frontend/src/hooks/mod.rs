pub mod use_balance;
pub mod use_chart;
pub mod use_transaction_modal;

pub use use_balance::use_balance;
pub use use_chart::use_chart;
pub use use_transaction_modal::use_transaction_modal;
