//! FetchXML text parsing and generation.

use quick_xml::escape::escape;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;

use super::element::Element;

const INDENT: &str = "  ";

/// Parses well-formed XML text into an [`Element`] tree.
///
/// Text content, comments, processing instructions and the XML declaration
/// are discarded; the FetchXML dialect consists of elements and attributes
/// only.
pub(crate) fn parse_document(xml: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // The reader has already verified the end tag matches.
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut root)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::parse("unexpected end of input inside an open element"));
    }
    root.ok_or_else(|| Error::parse("document has no root element"))
}

/// Serializes the tree with no whitespace between tags.
pub(crate) fn to_compact(root: &Element) -> String {
    let mut out = String::new();
    write_compact(&mut out, root);
    out
}

/// Serializes the tree one element per line, two-space indented, preceded
/// by an XML declaration.
pub(crate) fn to_pretty(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    write_pretty(&mut out, root, 0);
    out
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| Error::parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::parse(e.to_string()))?
            .into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}

fn attach(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), Error> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(Error::parse("document has more than one root element"));
    }
    Ok(())
}

fn write_open_tag(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.name());
    for (key, value) in element.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }
}

fn write_compact(out: &mut String, element: &Element) {
    write_open_tag(out, element);
    if element.children().is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');
        for child in element.children() {
            write_compact(out, child);
        }
        out.push_str("</");
        out.push_str(element.name());
        out.push('>');
    }
}

fn write_pretty(out: &mut String, element: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    write_open_tag(out, element);
    if element.children().is_empty() {
        out.push_str("/>\n");
    } else {
        out.push_str(">\n");
        for child in element.children() {
            write_pretty(out, child, depth + 1);
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str("</");
        out.push_str(element.name());
        out.push_str(">\n");
    }
}
