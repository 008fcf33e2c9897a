//! Typed DOM primitives for headless component rendering
//!
//! Components build their markup as a tree of typed nodes instead of
//! interpolating strings. Text stays data all the way down; entities are
//! escaped only at the serialization boundary (`outer_html`), so a hostile
//! title or ingredient string can never become live markup.

use std::borrow::Cow;

/// Tags serialized without a closing tag
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Tags whose text children are raw text, never entity-escaped
const RAW_TEXT_TAGS: &[&str] = &["style", "script"];

/// A node in a component subtree: an element or a run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Borrow this node as an element, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element node: tag name, ordered attributes, child nodes
///
/// Attribute order is preserved so serialization is deterministic, which the
/// golden snapshot tests rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name (always lowercase)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set the `class` attribute
    pub fn set_class(&mut self, class: &str) {
        self.set_attr("class", class);
    }

    /// Whether the `class` attribute contains the given class
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|part| part == class))
            .unwrap_or(false)
    }

    /// Append a child node
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Append a text child
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order (text nodes skipped)
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// First descendant with the given tag, depth-first
    pub fn find(&self, tag: &str) -> Option<&Element> {
        find_in(&self.children, &mut |el| el.tag == tag)
    }

    /// All descendants with the given tag, depth-first
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        find_all_in(&self.children, &mut |el| el.tag == tag, &mut out);
        out
    }

    /// First descendant carrying the given class, depth-first
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        find_in(&self.children, &mut |el| el.has_class(class))
    }

    /// Serialize this element and its subtree to HTML
    ///
    /// Text and attribute values are entity-escaped. `<style>` and
    /// `<script>` contents are written raw, matching how browsers serialize
    /// raw-text elements; their contents are component-owned, never caller
    /// data.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn find_in<'a>(
    nodes: &'a [Node],
    pred: &mut impl FnMut(&Element) -> bool,
) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_in(&el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_all_in<'a>(
    nodes: &'a [Node],
    pred: &mut impl FnMut(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                out.push(el);
            }
            find_all_in(&el.children, pred, out);
        }
    }
}

fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }

    let raw = RAW_TEXT_TAGS.contains(&el.tag.as_str());
    for child in &el.children {
        match child {
            Node::Text(t) if raw => out.push_str(t),
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Element(child_el) => write_element(child_el, out),
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Encapsulation mode of a shadow root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMode {
    Open,
    Closed,
}

/// The isolated rendering boundary owned by a component instance
///
/// Nothing outside the owning element can reach or mutate the subtree except
/// through the element's own API; styles appended here apply only within the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowRoot {
    mode: ShadowMode,
    children: Vec<Node>,
}

impl ShadowRoot {
    /// Attach a fresh, empty shadow root
    pub fn attach(mode: ShadowMode) -> Self {
        Self {
            mode,
            children: Vec::new(),
        }
    }

    /// Encapsulation mode chosen at attach time
    pub fn mode(&self) -> ShadowMode {
        self.mode
    }

    /// Whether nothing has been rendered into this root yet
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Remove all children
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Append a child node
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Replace the full contents of the root in one step
    pub fn replace_children(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Top-level child elements (text nodes skipped)
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant with the given tag, depth-first
    pub fn find(&self, tag: &str) -> Option<&Element> {
        find_in(&self.children, &mut |el| el.tag() == tag)
    }

    /// All descendants with the given tag, depth-first
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        find_all_in(&self.children, &mut |el| el.tag() == tag, &mut out);
        out
    }

    /// First descendant carrying the given class, depth-first
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        find_in(&self.children, &mut |el| el.has_class(class))
    }

    /// Concatenated text of the whole subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Serialize the root's contents to HTML
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Element(el) => write_element(el, &mut out),
            }
        }
        out
    }
}
