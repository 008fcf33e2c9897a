use recipe_card::{CustomElement, CustomElementRegistry, Error, RecipeCard};
use serde_json::json;

fn recipe_json() -> serde_json::Value {
    json!({
        "imgSrc": "https://example.com/stew.jpg",
        "imgAlt": "Beef stew in a pot",
        "titleLnk": "https://example.com/stew",
        "titleTxt": "Slow Beef Stew",
        "organization": "Example Kitchen",
        "rating": 3.8,
        "numRatings": 42,
        "lengthTime": "3 hr",
        "ingredients": "Beef, carrots, onion, red wine"
    })
}

fn registry() -> CustomElementRegistry {
    let mut registry = CustomElementRegistry::new();
    registry
        .define(RecipeCard::TAG, || Box::new(RecipeCard::new()))
        .expect("first definition");
    registry
}

#[test]
fn defining_the_same_tag_twice_errors() {
    let mut registry = registry();
    let err = registry
        .define(RecipeCard::TAG, || Box::new(RecipeCard::new()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Element 'recipe-card' is already defined");
}

#[test]
fn imperative_create_then_property_assignment_renders() -> anyhow::Result<()> {
    let registry = registry();
    let mut card = registry.create(RecipeCard::TAG)?;
    assert!(card.shadow_root().is_empty());

    card.set_property("data", recipe_json())?;
    let article = card.shadow_root().find("article").expect("rendered");
    assert_eq!(article.find("time").unwrap().text_content(), "3 hr");
    // 3.8 rounds to 4
    assert_eq!(
        article.find_class("rating").unwrap().find("img").unwrap().attr("src"),
        Some("assets/images/icons/4-star.svg")
    );
    Ok(())
}

#[test]
fn declarative_upgrade_instantiates_each_occurrence() {
    let registry = registry();
    let html = "<html><body>\
        <main><recipe-card></recipe-card></main>\
        <aside><recipe-card></recipe-card></aside>\
        </body></html>";

    let mut upgraded = registry.upgrade(html);
    assert_eq!(upgraded.len(), 2);

    // Each instance owns its subtree exclusively: rendering one leaves the
    // other unrendered.
    upgraded[0].set_property("data", recipe_json()).unwrap();
    assert!(!upgraded[0].shadow_root().is_empty());
    assert!(upgraded[1].shadow_root().is_empty());
}

#[test]
fn malformed_record_is_rejected_at_the_json_boundary() {
    let registry = registry();
    let mut card = registry.create(RecipeCard::TAG).unwrap();

    // rating has the wrong type and numRatings is missing
    let err = card
        .set_property(
            "data",
            json!({
                "imgSrc": "x", "imgAlt": "x", "titleLnk": "x", "titleTxt": "x",
                "organization": "x", "rating": "five", "lengthTime": "x",
                "ingredients": "x"
            }),
        )
        .unwrap_err();
    assert!(matches!(err, Error::PropertyError(_)));
    assert!(card.shadow_root().is_empty());
}

#[test]
fn null_data_keeps_a_prior_render_visible() -> anyhow::Result<()> {
    let registry = registry();
    let mut card = registry.create(RecipeCard::TAG)?;
    card.set_property("data", recipe_json())?;
    let before = card.shadow_root().clone();

    // Stale-content behavior is deliberate: empty input never clears.
    card.set_property("data", serde_json::Value::Null)?;
    assert_eq!(card.shadow_root(), &before);
    assert!(card.shadow_root().text_content().contains("Slow Beef Stew"));
    Ok(())
}
