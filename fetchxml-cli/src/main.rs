//! Demonstration binary for the FetchXML query builder.
//!
//! Builds an example account query and prints it, then parses an existing
//! FetchXML document and prints it back.

use fetchxml_lib::Aggregate;
use fetchxml_lib::Error;
use fetchxml_lib::QueryBuilder;

fn main() -> Result<(), Error> {
    let query = QueryBuilder::new("account")
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
        .add_group_by(&["industry"]);

    println!("{}", query.to_pretty_xml());

    let fetch_xml = r#"
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

    let parsed = QueryBuilder::from_xml(fetch_xml)?;
    println!("{}", parsed.to_pretty_xml());

    Ok(())
}
