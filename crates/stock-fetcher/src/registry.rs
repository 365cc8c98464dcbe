//! Explicit component registry.
//!
//! Components are registered once at application start under a tag name,
//! together with the binding table of attributes they observe. Embedding
//! code can then instantiate a component from a plain attribute map, with
//! all attribute parsing flowing through the component's one `render`
//! entry point. Duplicate registration is rejected, never silently
//! overwritten.

use std::collections::HashMap;
use std::sync::OnceLock;

use dioxus::prelude::*;
use parking_lot::RwLock;
use thiserror::Error;

/// Attribute name/value pairs pushed in by the embedding page.
pub type AttributeMap = HashMap<String, String>;

/// Builds a component instance from an attribute map.
pub type RenderFn = fn(&AttributeMap) -> Element;

/// A registerable component: its tag, the attributes it observes, and its
/// attribute-driven constructor.
#[derive(Clone)]
pub struct ComponentSpec {
    /// Tag the component is registered under, e.g. "stock-fetcher".
    pub tag: &'static str,
    /// Binding table: attribute names the render function consumes.
    pub observed: &'static [&'static str],
    pub render: RenderFn,
}

/// Registration failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A component is already registered under this tag.
    #[error("Component tag already registered: {0}")]
    DuplicateTag(String),
}

/// Tag-to-component registry.
#[derive(Default)]
pub struct Registry {
    specs: RwLock<HashMap<&'static str, ComponentSpec>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component spec under its tag.
    pub fn register(&self, spec: ComponentSpec) -> Result<(), RegistryError> {
        let mut specs = self.specs.write();
        if specs.contains_key(spec.tag) {
            tracing::warn!(tag = spec.tag, "duplicate component registration rejected");
            return Err(RegistryError::DuplicateTag(spec.tag.to_string()));
        }
        tracing::debug!(tag = spec.tag, observed = ?spec.observed, "component registered");
        specs.insert(spec.tag, spec);
        Ok(())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.specs.read().contains_key(tag)
    }

    /// The binding table a registered component observes.
    pub fn observed(&self, tag: &str) -> Option<&'static [&'static str]> {
        self.specs.read().get(tag).map(|spec| spec.observed)
    }

    /// Instantiate a registered component from an attribute map.
    ///
    /// Returns `None` for unknown tags. Must be called from within a
    /// running Dioxus scope, like any other element construction.
    pub fn render(&self, tag: &str, attrs: &AttributeMap) -> Option<Element> {
        let specs = self.specs.read();
        specs.get(tag).map(|spec| (spec.render)(attrs))
    }
}

/// Process-wide registry used by embedding applications.
pub fn global() -> &'static Registry {
    static GLOBAL: OnceLock<Registry> = OnceLock::new();
    GLOBAL.get_or_init(Registry::new)
}

/// Register this crate's components. Call once at application start.
pub fn register_builtins(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(crate::components::stock_fetcher_spec())?;
    registry.register(crate::components::about_card_spec())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_render(_attrs: &AttributeMap) -> Element {
        VNode::empty()
    }

    fn dummy_spec(tag: &'static str) -> ComponentSpec {
        ComponentSpec {
            tag,
            observed: &["dealer-id"],
            render: dummy_render,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = Registry::new();
        registry.register(dummy_spec("stock-fetcher")).unwrap();

        assert!(registry.contains("stock-fetcher"));
        assert!(!registry.contains("about-card"));
        assert_eq!(registry.observed("stock-fetcher"), Some(&["dealer-id"][..]));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = Registry::new();
        registry.register(dummy_spec("stock-fetcher")).unwrap();

        let err = registry.register(dummy_spec("stock-fetcher")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateTag("stock-fetcher".to_string())
        );
        // The original registration survives
        assert!(registry.contains("stock-fetcher"));
    }

    #[test]
    fn test_builtins_register_once() {
        let registry = Registry::new();
        register_builtins(&registry).unwrap();
        assert!(registry.contains("stock-fetcher"));
        assert!(registry.contains("about-card"));

        // A second pass trips the duplicate guard
        assert!(register_builtins(&registry).is_err());
    }

    #[test]
    fn test_unknown_tag_renders_nothing() {
        let registry = Registry::new();
        assert!(registry.render("mystery-widget", &AttributeMap::new()).is_none());
    }
}
