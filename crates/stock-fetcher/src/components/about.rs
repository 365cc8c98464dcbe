//! About Card Component
//!
//! One-line "About us" blurb with a caption pushed in by the embedder.

use dioxus::prelude::*;

use crate::registry::{AttributeMap, ComponentSpec};
use crate::theme::ABOUT_CARD_STYLES;

pub const ATTR_CAPTION: &str = "caption";

const DEFAULT_CAPTION: &str = "Default value of caption";

/// Registry entry for embedding via an attribute map.
pub fn about_card_spec() -> ComponentSpec {
    ComponentSpec {
        tag: "about-card",
        observed: &[ATTR_CAPTION],
        render: render_from_attributes,
    }
}

fn render_from_attributes(attrs: &AttributeMap) -> Element {
    let caption = attrs.get(ATTR_CAPTION).cloned();
    rsx! {
        AboutCard { caption }
    }
}

/// About card with a configurable caption.
#[component]
pub fn AboutCard(
    /// Caption text; a default is shown when the embedder supplies none.
    #[props(default = None)]
    caption: Option<String>,
) -> Element {
    let caption = caption.unwrap_or_else(|| DEFAULT_CAPTION.to_string());
    rsx! {
        style { {ABOUT_CARD_STYLES} }
        p { class: "about-card", "About us: {caption}" }
    }
}
