//! Scoped styling for the recipe card
//!
//! The stylesheet is component-owned static CSS injected into the shadow
//! root on every render, so the card's appearance can never be affected by,
//! or leak into, the surrounding document.

use crate::dom::Element;

/// The card stylesheet: bordered rounded grid with fixed rows, cropped top
/// image, horizontal rating row, clipped ingredients block, link-colored
/// title anchor, muted secondary text with the organization line forced dark.
pub const CARD_STYLE: &str = "\
article {
    align-items: center;
    border: 1px solid rgb(223, 225, 229);
    border-radius: 8px;
    display: grid;
    grid-template-rows: 118px 56px 14px 18px 15px 36px;
    height: auto;
    row-gap: 5px;
    padding: 0 16px 16px 16px;
    width: 178px;
}

div.rating {
    align-items: center;
    column-gap: 5px;
    display: flex;
}

div.rating > img {
    height: auto;
    display: inline-block;
    object-fit: scale-down;
    width: 78px;
}

article > img {
    border-top-left-radius: 8px;
    border-top-right-radius: 8px;
    height: 118px;
    object-fit: cover;
    margin-left: -16px;
    width: calc(100% + 32px);
}

p.ingredients {
    height: 32px;
    line-height: 16px;
    padding-top: 4px;
    overflow: hidden;
}

p.organization {
    color: black !important;
}

a {
    text-decoration: none;
}

a > p.title {
    font-size: 16px;
    margin: 0;
    color: rgb(0, 0, 238);
}

p:not(.title), span, time {
    font-size: 12px;
    margin: 0;
    color: #70757a;
}
";

/// Build the `<style>` node injected ahead of the card subtree
pub fn style_node() -> Element {
    let mut style = Element::new("style");
    style.append_text(CARD_STYLE);
    style
}
