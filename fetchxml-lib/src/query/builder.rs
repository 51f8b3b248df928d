//! FetchXML query document builder.

use crate::error::Error;

use super::element::Element;
use super::link::LinkBuilder;
use super::value::Value;
use super::xml;

/// An aggregation function applied to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Average of the attribute values.
    Avg,
    /// Number of rows.
    Count,
    /// Number of non-null values in the column.
    CountColumn,
    /// Largest value.
    Max,
    /// Smallest value.
    Min,
    /// Sum of the attribute values.
    Sum,
}

impl Aggregate {
    fn as_str(self) -> &'static str {
        match self {
            Aggregate::Avg => "avg",
            Aggregate::Count => "count",
            Aggregate::CountColumn => "countcolumn",
            Aggregate::Max => "max",
            Aggregate::Min => "min",
            Aggregate::Sum => "sum",
        }
    }
}

/// Builder for constructing and parsing FetchXML query documents.
///
/// Every mutating call appends to the owned document tree and returns the
/// builder, so queries are assembled by chaining. Nothing is ever removed;
/// the only wholesale change is [`QueryBuilder::load_from_xml`], which
/// replaces the document with a parsed one.
///
/// # Example
///
/// ```
/// use fetchxml_lib::query::Aggregate;
/// use fetchxml_lib::query::QueryBuilder;
///
/// let xml = QueryBuilder::new("account")
///     .select(&["name", "accountid"])
///     .add_filter("statecode", "eq", 0)
///     .add_order("name", true)
///     .add_aggregate("revenue", "total_revenue", Aggregate::Sum)
///     .to_xml();
///
/// assert!(xml.starts_with(r#"<fetch><entity name="account">"#));
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    root: Element,
    selected: Vec<String>,
}

impl QueryBuilder {
    /// Creates a new query document for the given root entity.
    ///
    /// The entity name is not validated; an empty name produces a document
    /// the downstream query engine will reject, not an error here.
    pub fn new(root_entity: impl Into<String>) -> Self {
        let mut root = Element::new("fetch");
        root.push_child(Element::with_attribute("entity", "name", root_entity));
        Self {
            root,
            selected: Vec::new(),
        }
    }

    /// Creates a builder from an existing FetchXML document.
    ///
    /// The root entity name is taken from the first `<entity>` element found
    /// depth-first. Fails with [`Error::Parse`] on malformed text, with
    /// [`Error::MissingEntity`] when no `<entity>` element exists, and with
    /// [`Error::MissingEntityName`] when the entity has no `name` attribute.
    pub fn from_xml(xml: &str) -> Result<Self, Error> {
        let root = xml::parse_document(xml)?;
        let entity = root.find_first("entity").ok_or(Error::MissingEntity)?;
        if entity.attribute("name").is_none() {
            return Err(Error::MissingEntityName);
        }
        Ok(Self {
            root,
            selected: Vec::new(),
        })
    }

    /// Selects attributes to include in the query.
    ///
    /// Appends one `<attribute>` element per name, in the order given.
    /// Repeated calls accumulate; nothing is deduplicated or replaced. As a
    /// special case, the sole argument `"ALL"` appends a single
    /// `<all-attributes>` marker instead, exactly as [`QueryBuilder::select_all`]
    /// does. Mixing the marker with individual selections is not rejected
    /// here; it is the caller's responsibility to avoid it.
    pub fn select(mut self, attributes: &[&str]) -> Self {
        if let ["ALL"] = attributes {
            return self.select_all();
        }
        let entity = self.entity_mut();
        for name in attributes {
            entity.push_child(Element::with_attribute("attribute", "name", *name));
        }
        self.selected
            .extend(attributes.iter().map(|name| (*name).to_string()));
        self
    }

    /// Selects every attribute by appending an `<all-attributes>` marker.
    pub fn select_all(mut self) -> Self {
        self.entity_mut().push_child(Element::new("all-attributes"));
        self
    }

    /// Adds a link entity (join) to the query.
    ///
    /// Each call appends a new, independent `<link-entity>` element; links
    /// to the same entity are not merged. See [`LinkBuilder`] for the
    /// defaulting rules.
    ///
    /// # Example
    ///
    /// ```
    /// use fetchxml_lib::query::QueryBuilder;
    ///
    /// let query = QueryBuilder::new("account")
    ///     .link_entity("contact", |link| {
    ///         link.alias("c")
    ///             .from_field("contactid")
    ///             .to_field("primarycontactid")
    ///     });
    /// # let _ = query;
    /// ```
    pub fn link_entity<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(LinkBuilder) -> LinkBuilder,
    {
        let link = build(LinkBuilder::new(name));
        self.entity_mut().push_child(link.into_element());
        self
    }

    /// Adds a filter condition to the query.
    ///
    /// All conditions accumulate under a single `<filter type="and">`
    /// element, created lazily on the first call; the conditions are
    /// implicitly conjoined. `or` grouping and nested filters are outside
    /// this builder's contract.
    pub fn add_filter(
        mut self,
        attribute: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut condition = Element::new("condition");
        condition.set_attribute("attribute", attribute);
        condition.set_attribute("operator", operator);
        condition.set_attribute("value", value.into().to_text());

        self.entity_mut()
            .child_or_insert("filter", Element::with_attribute("filter", "type", "and"))
            .push_child(condition);
        self
    }

    /// Adds sorting on an attribute, descending when `descending` is true.
    pub fn add_order(mut self, attribute: impl Into<String>, descending: bool) -> Self {
        let mut order = Element::with_attribute("order", "attribute", attribute);
        order.set_attribute("descending", if descending { "true" } else { "false" });
        self.entity_mut().push_child(order);
        self
    }

    /// Adds an aggregated attribute.
    ///
    /// The element shares the `<attribute>` label with plain selections;
    /// consumers distinguish it by the presence of `alias` and `aggregate`.
    pub fn add_aggregate(
        mut self,
        attribute: impl Into<String>,
        alias: impl Into<String>,
        aggregate: Aggregate,
    ) -> Self {
        let mut column = Element::with_attribute("attribute", "name", attribute);
        column.set_attribute("alias", alias);
        column.set_attribute("aggregate", aggregate.as_str());
        self.entity_mut().push_child(column);
        self
    }

    /// Adds group-by clauses, one `<attribute groupby="true">` per name.
    pub fn add_group_by(mut self, attributes: &[&str]) -> Self {
        let entity = self.entity_mut();
        for name in attributes {
            let mut column = Element::with_attribute("attribute", "name", *name);
            column.set_attribute("groupby", "true");
            entity.push_child(column);
        }
        self
    }

    /// Replaces the document with one parsed from FetchXML text.
    ///
    /// Content built through earlier calls is abandoned wholesale, not
    /// merged. On failure the previous document is left untouched: the text
    /// must both parse ([`Error::Parse`]) and contain an `<entity>` element
    /// ([`Error::MissingEntity`]) before anything is replaced.
    pub fn load_from_xml(&mut self, xml: &str) -> Result<&mut Self, Error> {
        let root = xml::parse_document(xml)?;
        if root.find_first("entity").is_none() {
            return Err(Error::MissingEntity);
        }
        self.root = root;
        Ok(self)
    }

    /// Serializes the document with no whitespace between tags.
    pub fn to_xml(&self) -> String {
        xml::to_compact(&self.root)
    }

    /// Serializes the document one element per line with an XML declaration,
    /// children indented two spaces deeper than their parents.
    pub fn to_pretty_xml(&self) -> String {
        xml::to_pretty(&self.root)
    }

    /// Returns the document tree.
    pub fn document(&self) -> &Element {
        &self.root
    }

    /// Returns the attribute names recorded by [`QueryBuilder::select`]
    /// calls, in call order.
    pub fn selected_attributes(&self) -> &[String] {
        &self.selected
    }

    /// Returns the entity element the builder currently appends under.
    fn entity_mut(&mut self) -> &mut Element {
        self.root
            .find_first_mut("entity")
            .expect("builder document always contains an entity element")
    }
}
