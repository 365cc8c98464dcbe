//! Dealer stock widgets for Dioxus.
//!
//! This crate provides two reusable components:
//!
//! - [`StockFetcher`]: fetches a dealer's published stock feed (a JSON
//!   array of vehicles) and renders it as a responsive grid of cards.
//! - [`AboutCard`]: a one-line "About us" blurb.
//!
//! Components can be used directly in `rsx!`, or instantiated from plain
//! attribute maps through the explicit [`registry`] — the library's
//! replacement for an ambient custom-element registry. Registration
//! happens once at application start:
//!
//! ```ignore
//! stock_fetcher::register_builtins(stock_fetcher::registry::global())?;
//! ```
//!
//! The Dioxus framework itself is an ordinary external dependency;
//! embedders bring their own renderer (desktop, web, ...).

pub mod components;
pub mod fetch;
pub mod model;
pub mod registry;
pub mod theme;

pub use components::{AboutCard, StockFetcher};
pub use fetch::{load_inventory, stock_url, FetchError, FetchSequence, STOCK_BASE_URL};
pub use model::{Feature, Inventory, StockItem, NOT_AVAILABLE, PLACEHOLDER_IMAGE};
pub use registry::{register_builtins, AttributeMap, ComponentSpec, Registry, RegistryError};
