//! Component stylesheets.
//!
//! Each component injects its own style block so the library stays
//! self-contained; the only theming hook exposed to embedders is the
//! `--primary-col` custom property seeded from the accent colour prop.

/// Accent colour used when the embedder supplies none.
pub const DEFAULT_ACCENT: &str = "gray";

/// Resolve the accent colour for the `--primary-col` token.
///
/// Purely a function of the accent prop; restyling can never reach the
/// inventory or the network.
pub fn resolve_accent(primary_col: Option<&str>) -> &str {
    primary_col.filter(|col| !col.is_empty()).unwrap_or(DEFAULT_ACCENT)
}

/// Styles for the stock grid and its cards.
pub const STOCK_FETCHER_STYLES: &str = r#"
.stock-fetcher {
  --primary-col: gray;
}

.stock-count {
  color: var(--number-stock-col);
}

.stock-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 15px;
}

.stock-card {
  background-color: white;
  border: 1px solid #ddd;
}

.stock-card__heading {
  font-size: 14px;
  color: white;
  background-color: var(--primary-col);
  margin-block: 0;
  padding: 5px;
}

.stock-card__image {
  display: block;
  width: 100%;
}

.stock-card__features {
  background-color: white;
  padding: 10px;
}

.stock-card__feature {
  font-size: 12px;
  margin-block: 0;
}

.stock-card__feature strong {
  font-family: var(--font-bold);
}
"#;

/// Styles for the about card.
pub const ABOUT_CARD_STYLES: &str = r#"
.about-card {
  color: blue;
}
"#;
