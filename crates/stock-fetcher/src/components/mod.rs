//! Dioxus components shipped by this crate.

mod about;
mod stock_fetcher;

pub use about::{about_card_spec, AboutCard, ATTR_CAPTION};
pub use stock_fetcher::{stock_fetcher_spec, StockFetcher, ATTR_DEALER_ID, ATTR_PRIMARY_COL};
