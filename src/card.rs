//! The recipe card element
//!
//! `RecipeCard` renders a recipe summary card — image, title link,
//! organization, star rating, duration, ingredients blurb — from a plain
//! data record. Construction attaches an empty open shadow root; each
//! assignment of the data property fully replaces the rendered subtree.
//! There are exactly two observable states, unrendered and rendered, and the
//! mutator never fails: assigning no data is a silent no-op, and a
//! non-finite rating propagates as `NaN` output rather than an error.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dom::{Element, Node, ShadowMode, ShadowRoot};
use crate::style;
use crate::{CardConfig, CustomElement, Error, Result};

/// The input record the card renders from
///
/// Supplied externally and never mutated by the element. Wire names are
/// camelCase so the record deserializes from the original JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    /// Image URL
    pub img_src: String,
    /// Image alt text
    pub img_alt: String,
    /// Hyperlink target for the title
    pub title_lnk: String,
    /// Display title
    pub title_txt: String,
    /// Publisher/site name
    pub organization: String,
    /// Average rating, 0-5, may be fractional
    pub rating: f64,
    /// Count of ratings, shown parenthesized and unmodified
    pub num_ratings: u32,
    /// Human-readable duration
    pub length_time: String,
    /// Ingredient summary text
    pub ingredients: String,
}

/// A recipe summary card with an isolated rendering boundary
pub struct RecipeCard {
    shadow: ShadowRoot,
    config: CardConfig,
    data: Option<RecipeData>,
}

impl RecipeCard {
    /// Tag name the element registers under
    pub const TAG: &'static str = "recipe-card";

    /// Create an unrendered card with the default configuration
    pub fn new() -> Self {
        Self::with_config(CardConfig::default())
    }

    /// Create an unrendered card resolving icons under a custom base path
    pub fn with_config(config: CardConfig) -> Self {
        Self {
            shadow: ShadowRoot::attach(ShadowMode::Open),
            config,
            data: None,
        }
    }

    /// Last data record rendered, if any
    pub fn data(&self) -> Option<&RecipeData> {
        self.data.as_ref()
    }

    /// The element's isolated subtree
    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow
    }

    /// Assign the data property
    ///
    /// `None` returns immediately with no rendering side effect; a prior
    /// render stays on screen. `Some` replaces the whole shadow subtree with
    /// the scoped stylesheet and a freshly built card.
    pub fn set_data(&mut self, data: Option<RecipeData>) {
        let Some(data) = data else {
            return;
        };

        let card = build_card(&data, &self.config);
        self.shadow
            .replace_children(vec![style::style_node().into(), card.into()]);
        debug!("recipe-card: rendered '{}'", data.title_txt);
        self.data = Some(data);
    }
}

impl Default for RecipeCard {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomElement for RecipeCard {
    fn tag_name(&self) -> &str {
        Self::TAG
    }

    fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow
    }

    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<()> {
        match name {
            "data" => {
                if value.is_null() {
                    // Empty input: keep whatever was rendered before.
                    return Ok(());
                }
                let data: RecipeData = serde_json::from_value(value)
                    .map_err(|e| Error::PropertyError(format!("malformed recipe data: {}", e)))?;
                self.set_data(Some(data));
                Ok(())
            }
            other => Err(Error::PropertyError(format!(
                "recipe-card has no property '{}'",
                other
            ))),
        }
    }
}

/// Build the single root `<article>` for one data record
fn build_card(data: &RecipeData, config: &CardConfig) -> Element {
    let mut card = Element::new("article");

    let mut img = Element::new("img");
    img.set_attr("src", &data.img_src);
    img.set_attr("alt", &data.img_alt);
    card.append(img);

    let mut title = Element::new("p");
    title.set_class("title");
    let mut link = Element::new("a");
    link.set_attr("href", &data.title_lnk);
    link.append_text(data.title_txt.as_str());
    title.append(link);
    card.append(title);

    let mut organization = Element::new("p");
    organization.set_class("organization");
    organization.append_text(data.organization.as_str());
    card.append(organization);

    card.append(rating_row(data, config));

    let mut time = Element::new("time");
    time.append_text(data.length_time.as_str());
    card.append(time);

    let mut ingredients = Element::new("p");
    ingredients.set_class("ingredients");
    ingredients.append_text(data.ingredients.as_str());
    card.append(ingredients);

    card
}

/// The horizontal rating row: numeral, star icon, parenthesized count
fn rating_row(data: &RecipeData, config: &CardConfig) -> Element {
    // Half rounds away from zero, same result as the original's Math.round
    // on the 0-5 domain. A NaN rating stays NaN through the numeral and the
    // icon path; malformed in, malformed out.
    let rounded = data.rating.round();

    let mut row = Element::new("div");
    row.set_class("rating");
    row.append(Node::text(format!("{}", rounded)));

    let mut icon = Element::new("img");
    icon.set_attr("src", &format!("{}/{}-star.svg", config.icon_base, rounded));
    icon.set_attr("alt", &format!("{} stars", rounded));
    row.append(icon);

    let mut count = Element::new("span");
    count.append_text(format!("({})", data.num_ratings));
    row.append(count);

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecipeData {
        RecipeData {
            img_src: "https://example.com/pasta.jpg".to_string(),
            img_alt: "A bowl of pasta".to_string(),
            title_lnk: "https://example.com/pasta".to_string(),
            title_txt: "Weeknight Pasta".to_string(),
            organization: "Example Kitchen".to_string(),
            rating: 4.5,
            num_ratings: 128,
            length_time: "35 min".to_string(),
            ingredients: "Pasta, garlic, olive oil, parmesan".to_string(),
        }
    }

    #[test]
    fn construction_leaves_the_shadow_empty() {
        let card = RecipeCard::new();
        assert!(card.shadow_root().is_empty());
        assert!(card.data().is_none());
    }

    #[test]
    fn render_follows_the_card_order() {
        let mut card = RecipeCard::new();
        card.set_data(Some(sample()));

        let article = card.shadow_root().find("article").expect("article");
        let tags: Vec<&str> = article.child_elements().map(|el| el.tag()).collect();
        assert_eq!(tags, ["img", "p", "p", "div", "time", "p"]);
        assert_eq!(
            article.find("img").unwrap().attr("alt"),
            Some("A bowl of pasta")
        );
        assert_eq!(
            article.find_class("ingredients").unwrap().text_content(),
            "Pasta, garlic, olive oil, parmesan"
        );
    }

    #[test]
    fn rating_rounds_half_away_from_zero() {
        let mut card = RecipeCard::new();
        card.set_data(Some(RecipeData {
            rating: 4.5,
            ..sample()
        }));
        let icon = card.shadow_root().find_class("rating").unwrap().find("img");
        assert_eq!(
            icon.unwrap().attr("src"),
            Some("assets/images/icons/5-star.svg")
        );
    }

    #[test]
    fn nan_rating_propagates_as_nan_output() {
        let mut card = RecipeCard::new();
        card.set_data(Some(RecipeData {
            rating: f64::NAN,
            ..sample()
        }));
        let row = card.shadow_root().find_class("rating").unwrap();
        assert_eq!(
            row.find("img").unwrap().attr("src"),
            Some("assets/images/icons/NaN-star.svg")
        );
        assert!(row.text_content().contains("NaN"));
    }

    #[test]
    fn custom_icon_base_feeds_the_icon_path() {
        let mut card = RecipeCard::with_config(CardConfig {
            icon_base: "/static/stars".to_string(),
        });
        card.set_data(Some(RecipeData {
            rating: 3.2,
            ..sample()
        }));
        let icon = card.shadow_root().find_class("rating").unwrap().find("img");
        assert_eq!(icon.unwrap().attr("src"), Some("/static/stars/3-star.svg"));
    }

    #[test]
    fn data_getter_returns_last_value_written() {
        let mut card = RecipeCard::new();
        card.set_data(Some(sample()));
        assert_eq!(card.data().unwrap().title_txt, "Weeknight Pasta");

        // Empty assignment keeps the previous record and render.
        card.set_data(None);
        assert_eq!(card.data().unwrap().title_txt, "Weeknight Pasta");
    }

    #[test]
    fn unknown_property_is_rejected() {
        let mut card = RecipeCard::new();
        let err = card
            .set_property("dta", serde_json::json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("no property"));
    }

    #[test]
    fn null_property_value_is_a_noop() {
        let mut card = RecipeCard::new();
        card.set_property("data", serde_json::Value::Null).unwrap();
        assert!(card.shadow_root().is_empty());
    }
}
