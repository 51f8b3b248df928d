//! The owned XML tree underlying a query document.

/// A single node in a FetchXML document tree.
///
/// An element has a label, an ordered set of string attributes, and an
/// ordered list of exclusively owned children. Child order is preserved
/// through serialization and parsing; attribute order follows first
/// insertion.
///
/// # Example
///
/// ```
/// use fetchxml_lib::query::Element;
///
/// let mut entity = Element::new("entity");
/// entity.set_attribute("name", "account");
/// entity.push_child(Element::with_attribute("attribute", "name", "accountid"));
///
/// assert_eq!(entity.attribute("name"), Some("account"));
/// assert_eq!(entity.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates a new element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a new element carrying a single attribute.
    pub fn with_attribute(
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut element = Self::new(name);
        element.set_attribute(key, value);
        element
    }

    /// Returns the element label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing any existing value for the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns the children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first direct child with the given label.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the first direct child with the given label, appending
    /// `default` to the child list if none exists yet.
    pub fn child_or_insert(&mut self, name: &str, default: Element) -> &mut Element {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.children.push(default);
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Returns the first descendant with the given label, searching
    /// depth-first in document order. The element itself is not considered.
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_first(name) {
                return Some(found);
            }
        }
        None
    }

    /// Mutable variant of [`Element::find_first`].
    pub fn find_first_mut(&mut self, name: &str) -> Option<&mut Element> {
        for child in &mut self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_first_mut(name) {
                return Some(found);
            }
        }
        None
    }
}
