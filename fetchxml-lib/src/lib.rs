//! FetchXML query builder library
//!
//! A fluent builder for constructing and parsing FetchXML, the XML query
//! dialect used by Microsoft Dataverse to express entity selection,
//! filtering, joins, ordering, aggregation and grouping.
//!
//! The builder owns an in-memory document tree: chained calls append to it,
//! [`QueryBuilder::to_xml`] and [`QueryBuilder::to_pretty_xml`] serialize it,
//! and [`QueryBuilder::from_xml`] / [`QueryBuilder::load_from_xml`]
//! reconstruct it from existing text. Query execution and transport are out
//! of scope; the output is handed to whatever client talks to the query
//! service.

pub mod error;
pub mod query;

pub use error::Error;
pub use query::Aggregate;
pub use query::Element;
pub use query::LinkBuilder;
pub use query::LinkType;
pub use query::QueryBuilder;
pub use query::Value;
