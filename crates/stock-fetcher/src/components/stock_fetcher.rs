//! Stock Fetcher Component
//!
//! Given a dealer id, loads that dealer's published stock feed and renders
//! it as a responsive grid of item cards. Any change to the dealer id
//! triggers a fresh fetch; the accent colour is cosmetic only.

use dioxus::prelude::*;

use crate::fetch::{load_inventory, FetchSequence};
use crate::model::{Inventory, StockItem};
use crate::registry::{AttributeMap, ComponentSpec};
use crate::theme::{resolve_accent, STOCK_FETCHER_STYLES};

/// Attribute names observed when the component is driven via the registry.
pub const ATTR_DEALER_ID: &str = "dealer-id";
pub const ATTR_PRIMARY_COL: &str = "primary-col";

/// Registry entry for embedding via an attribute map.
pub fn stock_fetcher_spec() -> ComponentSpec {
    ComponentSpec {
        tag: "stock-fetcher",
        observed: &[ATTR_DEALER_ID, ATTR_PRIMARY_COL],
        render: render_from_attributes,
    }
}

/// One lifecycle hook for attribute-driven construction: every observed
/// attribute is parsed here and nowhere else.
fn render_from_attributes(attrs: &AttributeMap) -> Element {
    let dealer_id = attrs.get(ATTR_DEALER_ID).cloned().unwrap_or_default();
    let primary_col = attrs.get(ATTR_PRIMARY_COL).cloned();
    rsx! {
        StockFetcher {
            dealer_id,
            primary_col,
        }
    }
}

/// Dealer stock grid
///
/// # Examples
///
/// ```ignore
/// rsx! {
///     StockFetcher {
///         dealer_id: "1234".to_string(),
///         primary_col: Some("#3a6ea5".to_string()),
///     }
/// }
/// ```
#[component]
pub fn StockFetcher(
    /// Dealer identifier; empty renders an immediate error state.
    dealer_id: ReadOnlySignal<String>,
    /// Accent colour (CSS colour) for card headings.
    #[props(default = None)]
    primary_col: Option<String>,
) -> Element {
    let mut inventory = use_signal(Inventory::default);
    // Completions that are no longer the latest issued fetch are discarded
    // so a stale response cannot clobber a newer one.
    let sequence = use_hook(FetchSequence::new);

    // Fetch on mount and whenever dealer_id changes.
    use_effect(move || {
        let dealer_id = dealer_id();
        let ticket = sequence.issue();
        let sequence = sequence.clone();
        spawn(async move {
            let next = load_inventory(&dealer_id).await;
            if sequence.is_current(ticket) {
                inventory.set(next);
            } else {
                tracing::warn!(ticket, "discarding out-of-date stock response");
            }
        });
    });

    let accent = resolve_accent(primary_col.as_deref()).to_string();
    let current = inventory();

    let header = current.header_line();
    let fallback = current.fallback_line().map(str::to_string);
    let items = match current {
        Inventory::Items(items) => items,
        Inventory::Unavailable { .. } => Vec::new(),
    };

    rsx! {
        style { {STOCK_FETCHER_STYLES} }
        div {
            class: "stock-fetcher",
            style: "--primary-col: {accent};",

            h3 { class: "stock-count", "{header}" }

            div { class: "stock-grid",
                if let Some(message) = fallback {
                    p { "{message}" }
                } else {
                    for stock in items.iter() {
                        StockCard { stock: stock.clone() }
                    }
                }
            }
        }
    }
}

/// One item card: heading, representative image, six feature rows.
#[component]
fn StockCard(stock: StockItem) -> Element {
    let heading = stock.heading();
    let image_src = stock.image_src().to_string();
    let alt = stock.alt_text();

    rsx! {
        div { class: "stock-card",
            p { class: "stock-card__heading", "{heading}" }
            img {
                class: "stock-card__image",
                src: "{image_src}",
                alt: "{alt}",
            }
            div { class: "stock-card__features",
                for feature in stock.features() {
                    p { class: "stock-card__feature",
                        strong { "{feature.label}: " }
                        "{feature.value}"
                    }
                }
            }
        }
    }
}
