use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::LoadError;
use crate::wxr::{Element, QName};

/// Parses a whole XML document into an [`Element`] tree, resolving namespaces
/// as it goes. Comments, processing instructions and the doctype are dropped.
pub fn parse_document(xml: &str) -> Result<Element, LoadError> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = vec![];
    let mut root: Option<Element> = None;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(start)) => {
                let element = open_element(ns, &start)?;
                stack.push(element);
            }
            (ns, Event::Empty(start)) => {
                let element = open_element(ns, &start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            (_, Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return Err(LoadError::Malformed("closing tag without a matching opening tag".to_string()));
                };
                close_element(element, &mut stack, &mut root)?;
            }
            (_, Event::Text(text)) => {
                let text = text.unescape()?;
                push_text(&mut stack, &text);
            }
            (_, Event::CData(cdata)) => {
                // The reader works on a &str, so the bytes are valid UTF-8
                let text = String::from_utf8_lossy(&cdata);
                push_text(&mut stack, &text);
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LoadError::Malformed(format!("document ends before <{}> is closed", open.name.local)));
    }

    root.ok_or_else(|| LoadError::Malformed("document has no root element".to_string()))
}

fn open_element(ns: ResolveResult, start: &BytesStart) -> Result<Element, LoadError> {
    let namespace = match ns {
        ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
        _ => None,
    };
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = vec![];
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name: QName { namespace, local },
        attributes,
        text: None,
        children: vec![],
    })
}

fn close_element(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<(), LoadError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }

    if root.is_some() {
        return Err(LoadError::Malformed("more than one root element".to_string()));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) {
    if text.is_empty() {
        return;
    }
    // Text outside the root element is not part of the tree
    if let Some(current) = stack.last_mut() {
        current.text.get_or_insert_with(String::new).push_str(text);
    }
}
