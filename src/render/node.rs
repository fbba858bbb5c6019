//! Element trees and attribute selectors shared by render plans and surfaces.

use std::fmt;

/// A node to be inserted into a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Attribute selector: `[attr]`, `[attr='value']`, optionally with a tag
/// (`meta[name='description']`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    attribute: String,
    value: Option<String>,
}

impl Selector {
    /// Matches any element carrying `attribute`.
    pub fn attr(attribute: &str) -> Self {
        Self {
            tag: None,
            attribute: attribute.to_string(),
            value: None,
        }
    }

    /// Matches elements whose `attribute` equals `value`.
    pub fn attr_eq(attribute: &str, value: &str) -> Self {
        Self {
            tag: None,
            attribute: attribute.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn tag_attr_eq(tag: &str, attribute: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            ..Self::attr_eq(attribute, value)
        }
    }

    /// Whether an element with `tag` and attribute lookup `get` matches.
    pub fn matches<'a>(&self, tag: &str, get: impl Fn(&str) -> Option<&'a str>) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        match (get(&self.attribute), &self.value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == expected,
        }
    }
}

/// CSS form, suitable for `querySelector`.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        match &self.value {
            Some(value) => write!(f, "[{}='{}']", self.attribute, value),
            None => write!(f, "[{}]", self.attribute),
        }
    }
}
