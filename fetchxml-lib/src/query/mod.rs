//! FetchXML query document construction and parsing.
//!
//! This module provides the fluent [`QueryBuilder`] for assembling FetchXML
//! query documents and converting them to and from text.
//!
//! # Building
//!
//! - [`QueryBuilder`] - chainable document builder
//! - [`LinkBuilder`] / [`LinkType`] - link-entity (join) configuration
//! - [`Aggregate`] - aggregation functions
//! - [`Value`] - condition value coercion
//!
//! # The document tree
//!
//! - [`Element`] - the owned XML tree a builder operates on
//!
//! # Example
//!
//! ```
//! use fetchxml_lib::query::QueryBuilder;
//!
//! let xml = QueryBuilder::new("account")
//!     .select(&["name", "accountid"])
//!     .link_entity("contact", |link| {
//!         link.alias("c")
//!             .from_field("contactid")
//!             .to_field("primarycontactid")
//!     })
//!     .add_filter("name", "eq", "Contoso")
//!     .add_order("name", true)
//!     .to_xml();
//! # let _ = xml;
//! ```

mod builder;
mod element;
mod link;
mod value;
pub(crate) mod xml;

pub use builder::Aggregate;
pub use builder::QueryBuilder;
pub use element::Element;
pub use link::LinkBuilder;
pub use link::LinkType;
pub use value::Value;
