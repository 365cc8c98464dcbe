//! Root demo application.
//!
//! Embeds the about card and the stock grid through the component
//! registry, driving them with attribute maps the way an embedding page
//! would push markup attributes.

use dioxus::prelude::*;
use stock_fetcher::components::{ATTR_CAPTION, ATTR_DEALER_ID, ATTR_PRIMARY_COL};
use stock_fetcher::{registry, AttributeMap};

use crate::get_options;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
#[component]
pub fn App() -> Element {
    let options = get_options();

    let mut about_attrs = AttributeMap::new();
    if let Some(caption) = options.caption {
        about_attrs.insert(ATTR_CAPTION.to_string(), caption);
    }

    let mut stock_attrs = AttributeMap::new();
    stock_attrs.insert(ATTR_DEALER_ID.to_string(), options.dealer_id);
    if let Some(col) = options.primary_col {
        stock_attrs.insert(ATTR_PRIMARY_COL.to_string(), col);
    }

    let registry = registry::global();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            {registry.render("about-card", &about_attrs).unwrap_or_else(VNode::empty)}
            {registry.render("stock-fetcher", &stock_attrs).unwrap_or_else(VNode::empty)}
        }
    }
}
