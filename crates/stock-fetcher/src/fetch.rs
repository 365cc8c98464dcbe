//! Retrieval of a dealer's published stock feed.
//!
//! The feed lives at a fixed bucket host; a dealer id is interpolated into
//! the path and the body is parsed as a JSON array of [`StockItem`]s. Every
//! failure mode collapses into one message-carrying error state consumed
//! uniformly by the renderer.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::model::{Inventory, StockItem};

/// Fixed host the stock feeds are published under.
pub const STOCK_BASE_URL: &str = "https://s3.ap-southeast-2.amazonaws.com/stock.publish";

/// Why a stock feed could not be loaded.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No dealer id was supplied, so no request was made.
    #[error("Dealer ID not provided.")]
    MissingDealerId,

    /// The request never resolved (DNS, connect, TLS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The request resolved with a non-success status.
    #[error("Network response was not ok: HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of stock items.
    #[error("Malformed stock payload: {0}")]
    Decode(String),
}

/// Feed address for a dealer under the fixed bucket host.
pub fn stock_url(dealer_id: &str) -> String {
    stock_url_with_base(STOCK_BASE_URL, dealer_id)
}

/// Feed address under an arbitrary base, for pointing tests at a local server.
pub fn stock_url_with_base(base_url: &str, dealer_id: &str) -> String {
    format!("{base_url}/dealer_{dealer_id}/stock.json")
}

/// Fetch and decode a dealer's stock feed.
///
/// An empty dealer id fails immediately without touching the network.
pub async fn fetch_stock(base_url: &str, dealer_id: &str) -> Result<Vec<StockItem>, FetchError> {
    if dealer_id.is_empty() {
        return Err(FetchError::MissingDealerId);
    }

    let url = stock_url_with_base(base_url, dealer_id);
    tracing::debug!(%url, "fetching dealer stock");

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .json::<Vec<StockItem>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Load a dealer's inventory from the fixed feed host.
pub async fn load_inventory(dealer_id: &str) -> Inventory {
    load_inventory_from(STOCK_BASE_URL, dealer_id).await
}

/// Load a dealer's inventory, collapsing any failure into
/// [`Inventory::Unavailable`] so the caller has a single error channel.
pub async fn load_inventory_from(base_url: &str, dealer_id: &str) -> Inventory {
    match fetch_stock(base_url, dealer_id).await {
        Ok(items) => {
            tracing::debug!(count = items.len(), dealer_id, "stock fetch complete");
            Inventory::Items(items)
        }
        Err(e) => {
            tracing::debug!(dealer_id, error = %e, "stock fetch failed");
            Inventory::Unavailable {
                message: e.to_string(),
            }
        }
    }
}

/// Monotonic sequence guard for in-flight fetches.
///
/// Each issued fetch takes a ticket; a completion whose ticket is no longer
/// the latest issued must be discarded, so overlapping fetches can never
/// finish out of order from the renderer's point of view. Single-threaded
/// by construction, like the component scheduling it guards.
#[derive(Clone, Default)]
pub struct FetchSequence(Rc<Cell<u64>>);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the ticket for a newly issued fetch, invalidating older ones.
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether a completion holding `ticket` is still the latest issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}
