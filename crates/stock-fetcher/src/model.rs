//! Data model for a dealer's published stock feed.
//!
//! Every field of a stock item is optional on the wire; the feed carries
//! whatever the dealer entered, and missing values render as "N/A".

use serde::Deserialize;

/// Placeholder shown when an item has no photos.
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/250x167/e1e1e1/bebebe?text=No%20Image&font=lato";

/// Fallback text for absent item fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// One vehicle in a dealer's stock feed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StockItem {
    pub make: Option<String>,
    pub model: Option<String>,
    /// Photo URLs, best shot first.
    pub images: Option<Vec<String>>,
    pub transmission: Option<String>,
    #[serde(rename = "bodyType")]
    pub body_type: Option<String>,
    pub colour: Option<String>,
    /// Kilometres travelled.
    pub odometer: Option<u64>,
    /// Engine size, e.g. "2.0".
    pub size: Option<String>,
    /// Engine size qualifier, e.g. "L" or "Turbo".
    #[serde(rename = "sizeOption")]
    pub size_option: Option<String>,
    #[serde(rename = "stockNumber")]
    pub stock_number: Option<String>,
}

/// One labelled row in a stock card.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub label: &'static str,
    pub value: String,
}

impl StockItem {
    /// Card heading, "<make> - <model>" with per-side fallback.
    pub fn heading(&self) -> String {
        format!("{} - {}", or_na(&self.make), or_na(&self.model))
    }

    /// Alt text for the representative image.
    pub fn alt_text(&self) -> String {
        format!("{} {}", or_na(&self.make), or_na(&self.model))
    }

    /// First photo URL, or the fixed placeholder when the item has none.
    pub fn image_src(&self) -> &str {
        self.images
            .as_deref()
            .and_then(|images| images.first())
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// The six feature rows every card displays, in fixed order.
    pub fn features(&self) -> [Feature; 6] {
        [
            Feature {
                label: "Transmission",
                value: or_na(&self.transmission).to_string(),
            },
            Feature {
                label: "Body Type",
                value: or_na(&self.body_type).to_string(),
            },
            Feature {
                label: "Color",
                value: or_na(&self.colour).to_string(),
            },
            Feature {
                label: "Kilometres",
                value: self
                    .odometer
                    .map(|km| km.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            },
            Feature {
                label: "Engine",
                value: format!("{} {}", or_na(&self.size), or_empty(&self.size_option))
                    .trim_end()
                    .to_string(),
            },
            Feature {
                label: "Stock №",
                value: or_na(&self.stock_number).to_string(),
            },
        ]
    }
}

/// The inventory document a fetch produces.
///
/// Replaced wholesale on every fetch completion; the error arm carries the
/// single collapsed failure message, never a cause taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub enum Inventory {
    /// The dealer's items, in feed order.
    Items(Vec<StockItem>),
    /// Data could not be retrieved; `message` explains why.
    Unavailable { message: String },
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::Items(Vec::new())
    }
}

impl Inventory {
    /// Item count for the header, `None` in the error state so the header
    /// can suppress the number instead of showing a bogus one.
    pub fn count(&self) -> Option<usize> {
        match self {
            Inventory::Items(items) => Some(items.len()),
            Inventory::Unavailable { .. } => None,
        }
    }

    /// Header line above the grid. The count is suppressed entirely in the
    /// error state rather than showing a bogus number.
    pub fn header_line(&self) -> String {
        match self.count() {
            Some(n) => format!("{n} Stock Items"),
            None => "Stock Items".to_string(),
        }
    }

    /// Single line shown in place of the grid when data is unavailable.
    pub fn fallback_line(&self) -> Option<&str> {
        match self {
            Inventory::Items(_) => None,
            Inventory::Unavailable { message } if message.is_empty() => {
                Some("No data available.")
            }
            Inventory::Unavailable { message } => Some(message),
        }
    }
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE)
}

fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_item() {
        let item: StockItem = serde_json::from_str(r#"{"make":"Ford","model":"Focus"}"#).unwrap();
        assert_eq!(item.make.as_deref(), Some("Ford"));
        assert_eq!(item.heading(), "Ford - Focus");

        let features = item.features();
        assert_eq!(features.len(), 6);
        for feature in &features {
            assert_eq!(feature.value, NOT_AVAILABLE);
        }
    }

    #[test]
    fn test_unknown_wire_fields_are_ignored() {
        let item: StockItem =
            serde_json::from_str(r#"{"make":"Mazda","dealerNotes":"one owner"}"#).unwrap();
        assert_eq!(item.make.as_deref(), Some("Mazda"));
    }

    #[test]
    fn test_heading_falls_back_per_side() {
        let item = StockItem {
            model: Some("Focus".to_string()),
            ..Default::default()
        };
        assert_eq!(item.heading(), "N/A - Focus");
    }

    #[test]
    fn test_image_src_empty_list_uses_placeholder() {
        let item = StockItem {
            images: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);

        let item = StockItem::default();
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_image_src_takes_first_photo() {
        let item = StockItem {
            images: Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            ..Default::default()
        };
        assert_eq!(item.image_src(), "a.jpg");
    }

    #[test]
    fn test_feature_order_is_fixed() {
        let labels: Vec<&str> = StockItem::default()
            .features()
            .iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(
            labels,
            ["Transmission", "Body Type", "Color", "Kilometres", "Engine", "Stock №"]
        );
    }

    #[test]
    fn test_engine_feature_combines_size_and_qualifier() {
        let item = StockItem {
            size: Some("2.0".to_string()),
            size_option: Some("Turbo".to_string()),
            ..Default::default()
        };
        assert_eq!(item.features()[4].value, "2.0 Turbo");

        // Qualifier alone never appears without a size value
        let item = StockItem::default();
        assert_eq!(item.features()[4].value, "N/A");
    }

    #[test]
    fn test_inventory_count_suppressed_on_error() {
        let inventory = Inventory::Unavailable {
            message: "boom".to_string(),
        };
        assert_eq!(inventory.count(), None);
        assert_eq!(inventory.fallback_line(), Some("boom"));
    }

    #[test]
    fn test_header_line_counts_items() {
        assert_eq!(Inventory::Items(Vec::new()).header_line(), "0 Stock Items");
        assert_eq!(
            Inventory::Items(vec![StockItem::default()]).header_line(),
            "1 Stock Items"
        );
    }

    #[test]
    fn test_header_line_omits_count_on_error() {
        let inventory = Inventory::Unavailable {
            message: "feed offline".to_string(),
        };
        assert_eq!(inventory.header_line(), "Stock Items");
    }

    #[test]
    fn test_inventory_fallback_message_default() {
        let inventory = Inventory::Unavailable {
            message: String::new(),
        };
        assert_eq!(inventory.fallback_line(), Some("No data available."));

        let inventory = Inventory::Items(vec![StockItem::default()]);
        assert_eq!(inventory.fallback_line(), None);
        assert_eq!(inventory.count(), Some(1));
    }
}
