//! DOM traversal helpers over the html5ever tree

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};

pub fn get_attr_value(attrs: &[Attribute], attr_name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.name.local.as_ref() == attr_name)
        .map(|attr| attr.value.as_ref().to_string())
}

/// Tag name of an element node, `None` for text, comments and the document
pub fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

pub fn attr_of(handle: &Handle, attr_name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { ref attrs, .. } => get_attr_value(&attrs.borrow(), attr_name),
        _ => None,
    }
}

/// Language of a code block, taken from a `language-xxx` or `lang-xxx` class
pub fn code_language(handle: &Handle) -> Option<String> {
    let classes = attr_of(handle, "class")?;
    classes
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-").or_else(|| class.strip_prefix("lang-")))
        .map(|lang| lang.to_string())
}

/// All text below a node, untouched. Used where whitespace is meaningful.
pub fn get_raw_text(handle: &Handle) -> String {
    let mut text = String::new();

    fn collect_text(node: &Handle, text: &mut String) {
        match &node.data {
            NodeData::Text { ref contents } => {
                text.push_str(&contents.borrow());
            }
            NodeData::Element { ref name, .. } if name.local.as_ref() == "br" => {
                text.push('\n');
            }
            _ => {
                for child in node.children.borrow().iter() {
                    collect_text(child, text);
                }
            }
        }
    }

    collect_text(handle, &mut text);
    text
}

/// Format a link as Markdown
/// - If link text equals URL or is empty, uses angle bracket syntax: <URL>
/// - Otherwise uses full Markdown syntax: [text](URL "title")
pub fn format_markdown_link(href: &str, link_text: &str, title: Option<&str>) -> String {
    if link_text == href || link_text.is_empty() {
        return format!("<{}>", href);
    }
    match title {
        Some(title) if !title.is_empty() => {
            format!("[{}]({} \"{}\")", link_text, href, title.replace('"', "\\\""))
        }
        _ => format!("[{}]({})", link_text, href),
    }
}

pub fn format_markdown_image(src: &str, alt: &str, title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => {
            format!("![{}]({} \"{}\")", alt, src, title.replace('"', "\\\""))
        }
        _ => format!("![{}]({})", alt, src),
    }
}
