//! Custom element definitions and declarative upgrades
//!
//! A registry maps tag names to element factories. Hosts either create
//! instances imperatively with [`CustomElementRegistry::create`] or parse a
//! host document and upgrade every occurrence of a defined tag with
//! [`CustomElementRegistry::upgrade`]. Defining the same tag twice is a
//! registration error, matching the platform behavior the elements were
//! designed for.

use std::collections::HashMap;

use log::debug;
use scraper::{Html, Selector};

use crate::{CustomElement, Error, Result};

type ElementFactory = Box<dyn Fn() -> Box<dyn CustomElement>>;

/// Per-document registry of custom element definitions
#[derive(Default)]
pub struct CustomElementRegistry {
    definitions: HashMap<String, ElementFactory>,
}

impl CustomElementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Register a factory under a tag name
    ///
    /// Custom element names must contain a hyphen; a second definition for
    /// the same tag is rejected.
    pub fn define<F>(&mut self, tag: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn CustomElement> + 'static,
    {
        if !valid_custom_tag(tag) {
            return Err(Error::InvalidTagName(tag.to_string()));
        }
        if self.definitions.contains_key(tag) {
            return Err(Error::DuplicateDefinition(tag.to_string()));
        }
        self.definitions.insert(tag.to_string(), Box::new(factory));
        debug!("defined custom element '{}'", tag);
        Ok(())
    }

    /// Whether a tag has a definition
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Instantiate an element for a defined tag
    pub fn create(&self, tag: &str) -> Result<Box<dyn CustomElement>> {
        let factory = self
            .definitions
            .get(tag)
            .ok_or_else(|| Error::UnknownElement(tag.to_string()))?;
        Ok(factory())
    }

    /// Upgrade a host document: instantiate one element per occurrence of a
    /// defined tag, in document order
    ///
    /// Upgraded elements have had their `connected` hook run and are in the
    /// unrendered state until their data property is set. Unknown tags are
    /// left alone.
    pub fn upgrade(&self, html: &str) -> Vec<Box<dyn CustomElement>> {
        let document = Html::parse_document(html);
        let any = Selector::parse("*").unwrap();

        let mut upgraded = Vec::new();
        for el in document.select(&any) {
            if let Some(factory) = self.definitions.get(el.value().name()) {
                let mut instance = factory();
                instance.connected();
                upgraded.push(instance);
            }
        }
        debug!("upgraded {} element(s)", upgraded.len());
        upgraded
    }
}

fn valid_custom_tag(tag: &str) -> bool {
    let starts_with_letter = tag
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase());
    starts_with_letter
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
