//! Page chrome for the demo shell.
//!
//! The components carry their own styles; this only lays out the page
//! around them.

pub const GLOBAL_STYLES: &str = r#"
body {
  margin: 0;
  background-color: #f4f4f4;
  font-family: Arial, Helvetica, sans-serif;
}

.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 20px;
}
"#;
