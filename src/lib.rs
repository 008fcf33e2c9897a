//! RecipeCard Headless Component
//!
//! A headless web-component crate: typed DOM nodes, shadow-root isolation,
//! and a custom-element registry, with one element built on top — a recipe
//! summary card rendered entirely from a plain data record.
//!
//! # Features
//!
//! - **Structured construction**: markup is built as a tree of typed nodes,
//!   never interpolated strings, so caller-supplied text can't inject markup
//! - **Shadow isolation**: each element owns an isolated subtree with its
//!   own scoped stylesheet
//! - **Headless inspection**: renders are queryable, serializable, and
//!   snapshot-testable without a browser
//!
//! # Example
//!
//! ```
//! use recipe_card::{CustomElement, CustomElementRegistry, RecipeCard};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = CustomElementRegistry::new();
//! registry.define(RecipeCard::TAG, || Box::new(RecipeCard::new()))?;
//!
//! let mut card = registry.create(RecipeCard::TAG)?;
//! card.set_property(
//!     "data",
//!     serde_json::json!({
//!         "imgSrc": "https://example.com/pasta.jpg",
//!         "imgAlt": "A bowl of pasta",
//!         "titleLnk": "https://example.com/pasta",
//!         "titleTxt": "Weeknight Pasta",
//!         "organization": "Example Kitchen",
//!         "rating": 4.5,
//!         "numRatings": 128,
//!         "lengthTime": "35 min",
//!         "ingredients": "Pasta, garlic, olive oil, parmesan"
//!     }),
//! )?;
//!
//! let article = card.shadow_root().find("article").expect("rendered card");
//! assert_eq!(article.find("time").unwrap().text_content(), "35 min");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod dom;
pub mod style;

pub mod card;
pub mod registry;
pub mod snapshot;

pub use card::{RecipeCard, RecipeData};
pub use dom::{Element, Node, ShadowMode, ShadowRoot};
pub use registry::CustomElementRegistry;
pub use snapshot::TextSnapshot;

/// Configuration for a card element instance
///
/// The defaults match the asset contract the card was designed against: star
/// icons named `{rating}-star.svg` under `assets/images/icons`. The icons'
/// existence is the host's responsibility; the element only derives paths.
///
/// # Examples
///
/// ```
/// let cfg = recipe_card::CardConfig::default();
/// assert!(cfg.icon_base.ends_with("icons"));
/// ```
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Base path under which the star-rating icons live
    pub icon_base: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            icon_base: "assets/images/icons".to_string(),
        }
    }
}

/// Core trait for custom element implementations
///
/// This is the component interface the registry instantiates through. The
/// lifecycle is deliberately small: construction attaches the shadow root,
/// `connected`/`disconnected` bracket host insertion and teardown, and all
/// data flows through the JSON property surface. Elements hold no owned
/// resources beyond their shadow subtree, so the default teardown is a no-op.
pub trait CustomElement {
    /// Tag name this element renders under
    fn tag_name(&self) -> &str;

    /// The element's isolated rendering boundary
    fn shadow_root(&self) -> &ShadowRoot;

    /// Set a named property from a JSON value
    ///
    /// `Value::Null` is the empty-input branch: the call is a no-op and any
    /// prior render is kept. A present but malformed value is rejected at
    /// this boundary with `Error::PropertyError`.
    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<()>;

    /// Lifecycle: the element was inserted into a host document
    fn connected(&mut self) {}

    /// Lifecycle: the element was removed from its host document
    fn disconnected(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardConfig::default();
        assert_eq!(config.icon_base, "assets/images/icons");
    }
}
