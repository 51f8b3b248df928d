//! Integration tests for building, serializing and re-parsing FetchXML
//! documents through the public API.

use fetchxml_lib::Aggregate;
use fetchxml_lib::Error;
use fetchxml_lib::QueryBuilder;

/// The end-to-end query from the builder's documentation: selection, join,
/// two conditions, ordering, an aggregate and a group-by.
fn account_query() -> QueryBuilder {
    QueryBuilder::new("account")
        .select(&["name", "accountid"])
        .link_entity("contact", |link| {
            link.alias("c")
                .from_field("contactid")
                .to_field("primarycontactid")
        })
        .add_filter("name", "eq", "Contoso")
        .add_filter("statecode", "eq", 0)
        .add_order("name", true)
        .add_aggregate("revenue", "total_revenue", Aggregate::Sum)
        .add_group_by(&["industry"])
}

#[test]
fn test_end_to_end_entity_layout() {
    let query = account_query();
    let entity = query.document().find_first("entity").expect("entity");
    assert_eq!(entity.attribute("name"), Some("account"));

    let labels: Vec<_> = entity.children().iter().map(|c| c.name()).collect();
    assert_eq!(
        labels,
        [
            "attribute",
            "attribute",
            "link-entity",
            "filter",
            "order",
            "attribute",
            "attribute",
        ]
    );

    let filter = entity.child("filter").expect("filter");
    assert_eq!(filter.children().len(), 2);
    assert_eq!(filter.children()[0].attribute("value"), Some("Contoso"));
    assert_eq!(filter.children()[1].attribute("value"), Some("0"));

    let link = entity.child("link-entity").expect("link-entity");
    assert_eq!(link.attribute("alias"), Some("c"));
    assert_eq!(link.attribute("to"), Some("primarycontactid"));
    assert_eq!(link.attribute("link-type"), Some("inner"));

    let order = entity.child("order").expect("order");
    assert_eq!(order.attribute("descending"), Some("true"));

    // The aggregate and group-by nodes share the attribute label and differ
    // only in which attributes they carry.
    assert_eq!(entity.children()[5].attribute("aggregate"), Some("sum"));
    assert_eq!(entity.children()[6].attribute("groupby"), Some("true"));
}

#[test]
fn test_pretty_output_structure() {
    let pretty = account_query().to_pretty_xml();
    let lines: Vec<_> = pretty.lines().collect();

    assert_eq!(lines[0], r#"<?xml version="1.0" encoding="utf-8"?>"#);
    assert_eq!(lines[1], "<fetch>");
    assert_eq!(lines[2], r#"  <entity name="account">"#);
    assert!(lines[3].starts_with(r#"    <attribute name="name"#));
    assert_eq!(lines.last(), Some(&"</fetch>"));

    // Children are nested one level deeper than the entity.
    assert!(pretty.contains(r#"      <condition attribute="name" operator="eq" value="Contoso"/>"#));
}

#[test]
fn test_compact_round_trip_preserves_tree() {
    let built = account_query();
    let mut reloaded = QueryBuilder::new("placeholder");
    reloaded
        .load_from_xml(&built.to_xml())
        .expect("serialized output re-parses");

    assert_eq!(reloaded.document(), built.document());
}

#[test]
fn test_pretty_round_trip_preserves_tree() {
    let built = account_query();
    let reloaded = QueryBuilder::from_xml(&built.to_pretty_xml())
        .expect("pretty output re-parses");

    assert_eq!(reloaded.document(), built.document());
}

#[test]
fn test_serialization_is_idempotent() {
    let query = account_query();
    assert_eq!(query.to_xml(), query.to_xml());
    assert_eq!(query.to_pretty_xml(), query.to_pretty_xml());
}

#[test]
fn test_escaped_values_round_trip() {
    let built = QueryBuilder::new("account")
        .add_filter("name", "eq", r#"O'Brien & Co <"quoted">"#);
    let reloaded = QueryBuilder::from_xml(&built.to_xml()).expect("escaped output re-parses");

    let condition = reloaded
        .document()
        .find_first("condition")
        .expect("condition");
    assert_eq!(condition.attribute("value"), Some(r#"O'Brien & Co <"quoted">"#));
}

#[test]
fn test_from_xml_rejects_malformed_text() {
    assert!(matches!(
        QueryBuilder::from_xml("<not-xml"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_from_xml_requires_entity() {
    assert!(matches!(
        QueryBuilder::from_xml("<fetch></fetch>"),
        Err(Error::MissingEntity)
    ));
}

#[test]
fn test_from_xml_reads_nested_entity() {
    let text = r#"
    <fetch>
      <entity name="account">
        <attribute name="name" />
        <attribute name="accountid" />
        <filter type="and">
          <condition attribute="name" operator="eq" value="Contoso" />
          <condition attribute="statecode" operator="eq" value="0" />
        </filter>
        <link-entity name="contact" alias="c" from="contactid" to="primarycontactid" link-type="inner" />
        <order attribute="name" descending="true" />
        <attribute name="revenue" alias="total_revenue" aggregate="sum" />
        <attribute name="industry" groupby="true" />
      </entity>
    </fetch>
    "#;

    let query = QueryBuilder::from_xml(text).expect("well-formed input");
    let entity = query.document().find_first("entity").expect("entity");
    assert_eq!(entity.attribute("name"), Some("account"));
    assert_eq!(entity.children().len(), 7);
    assert_eq!(
        query.to_xml(),
        r#"<fetch><entity name="account"><attribute name="name"/><attribute name="accountid"/><filter type="and"><condition attribute="name" operator="eq" value="Contoso"/><condition attribute="statecode" operator="eq" value="0"/></filter><link-entity name="contact" alias="c" from="contactid" to="primarycontactid" link-type="inner"/><order attribute="name" descending="true"/><attribute name="revenue" alias="total_revenue" aggregate="sum"/><attribute name="industry" groupby="true"/></entity></fetch>"#
    );
}
