//! Link entity construction for FetchXML joins.

use super::element::Element;

/// The type of join for a link-entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkType {
    /// Inner join (default) - only returns records where the link exists.
    #[default]
    Inner,
    /// Outer join - returns all records, with null for missing links.
    Outer,
}

impl LinkType {
    fn as_str(self) -> &'static str {
        match self {
            LinkType::Inner => "inner",
            LinkType::Outer => "outer",
        }
    }
}

/// Builder for FetchXML `<link-entity>` elements.
///
/// Every field except the entity name is optional: the alias defaults to the
/// entity name, the join keys default to `{name}id` on both sides, and the
/// join type defaults to inner.
///
/// # Example
///
/// ```
/// use fetchxml_lib::query::LinkType;
/// use fetchxml_lib::query::QueryBuilder;
///
/// let query = QueryBuilder::new("account")
///     .link_entity("contact", |link| {
///         link.alias("c")
///             .from_field("contactid")
///             .to_field("primarycontactid")
///             .link_type(LinkType::Outer)
///     });
/// # let _ = query;
/// ```
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    name: String,
    alias: Option<String>,
    from: Option<String>,
    to: Option<String>,
    link_type: LinkType,
}

impl LinkBuilder {
    /// Creates a new link builder for the named entity.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            from: None,
            to: None,
            link_type: LinkType::default(),
        }
    }

    /// Sets the alias used to qualify attributes of the linked entity.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the attribute on the linked entity to join from.
    pub fn from_field(mut self, field: impl Into<String>) -> Self {
        self.from = Some(field.into());
        self
    }

    /// Sets the attribute on the parent entity to join to.
    pub fn to_field(mut self, field: impl Into<String>) -> Self {
        self.to = Some(field.into());
        self
    }

    /// Sets the link type (inner or outer join).
    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    /// Materializes the `<link-entity>` element, applying the defaults for
    /// any field left unset.
    pub(crate) fn into_element(self) -> Element {
        let LinkBuilder {
            name,
            alias,
            from,
            to,
            link_type,
        } = self;
        let join_key = format!("{name}id");

        let mut element = Element::new("link-entity");
        element.set_attribute("name", name.clone());
        element.set_attribute("alias", alias.unwrap_or(name));
        element.set_attribute("from", from.unwrap_or_else(|| join_key.clone()));
        element.set_attribute("to", to.unwrap_or(join_key));
        element.set_attribute("link-type", link_type.as_str());
        element
    }
}
