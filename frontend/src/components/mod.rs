pub mod balance_card;
pub mod header;
pub mod transactions;

pub use header::Header;
