use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;

use crate::content::dom::{attr_of, code_language, format_markdown_image, format_markdown_link, get_raw_text, tag_name};
use crate::content::HtmlConverter;

lazy_static! {
    static ref INLINE_SPACE: Regex = Regex::new(r"[ \t\r\n]+").unwrap();
    // Blank lines in raw post text are paragraph breaks, the way WordPress renders them
    static ref RAW_PARAGRAPH: Regex = Regex::new(r"[ \t\r]*\n[ \t\r]*\n[ \t\r\n]*").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref LIST_BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "main", "aside", "nav",
    "figure", "figcaption", "address", "details", "summary", "dl", "dd", "dt", "table", "tr",
];
const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "noscript", "template", "iframe"];

/// html5ever based HTML to Markdown conversion.
///
/// Covers what shows up in post bodies: paragraphs, headings, emphasis,
/// links, images, lists, quotes, code and rules. Tags it does not know about
/// contribute their text.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownConverter {}

impl HtmlConverter for MarkdownConverter {
    fn convert(&self, html: &str) -> String {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        let markdown = render_node(&dom.document);
        normalize_blocks(&markdown)
    }
}

fn render_children(handle: &Handle) -> String {
    let mut buf = String::new();
    for child in handle.children.borrow().iter() {
        let chunk = render_node(child);
        // Source indentation after a line break or a block is not content
        if buf.ends_with('\n') {
            buf.push_str(chunk.trim_start_matches(' '));
        } else {
            buf.push_str(&chunk);
        }
    }
    buf
}

fn render_node(handle: &Handle) -> String {
    match &handle.data {
        NodeData::Document => render_children(handle),
        NodeData::Text { ref contents } => render_text(&contents.borrow()),
        NodeData::Element { .. } => render_element(handle),
        _ => String::new(),
    }
}

fn render_text(text: &str) -> String {
    let paragraphs: Vec<String> = RAW_PARAGRAPH.split(text)
        .map(|part| escape_text(&INLINE_SPACE.replace_all(part, " ")))
        .collect();
    paragraphs.join("\n\n")
}

fn escape_text(text: &str) -> String {
    text.replace('*', "\\*").replace('_', "\\_")
}

fn render_element(handle: &Handle) -> String {
    let Some(tag) = tag_name(handle) else {
        return String::new();
    };
    let tag = tag.as_str();

    match tag {
        _ if SKIPPED_TAGS.contains(&tag) => String::new(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag[1..].parse::<usize>().unwrap_or(1);
            let inner = render_children(handle);
            let inner = INLINE_SPACE.replace_all(inner.trim(), " ");
            if inner.is_empty() {
                return String::new();
            }
            format!("\n\n{} {}\n\n", "#".repeat(level), inner)
        }
        "br" => "  \n".to_string(),
        "hr" => "\n\n---\n\n".to_string(),
        "strong" | "b" => wrap_inline(&render_children(handle), "**"),
        "em" | "i" => wrap_inline(&render_children(handle), "*"),
        "del" | "s" | "strike" => wrap_inline(&render_children(handle), "~~"),
        "code" | "kbd" | "tt" => render_inline_code(&get_raw_text(handle)),
        "pre" => render_code_block(handle),
        "a" => render_link(handle),
        "img" => render_image(handle),
        "ul" => render_list(handle, false),
        "ol" => render_list(handle, true),
        "blockquote" => render_quote(handle),
        "td" | "th" => format!("{} ", render_children(handle).trim()),
        _ if BLOCK_TAGS.contains(&tag) => {
            let inner = normalize_blocks(&render_children(handle));
            if inner.is_empty() {
                return String::new();
            }
            format!("\n\n{}\n\n", inner)
        }
        _ => render_children(handle),
    }
}

/// Moves surrounding spaces out of the markers, `** bold**` is not bold
fn wrap_inline(inner: &str, marker: &str) -> String {
    let trimmed = inner.trim();
    if trimmed.is_empty() {
        return inner.to_string();
    }
    let leading = if inner.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if inner.ends_with(char::is_whitespace) { " " } else { "" };
    format!("{}{}{}{}{}", leading, marker, trimmed, marker, trailing)
}

fn render_inline_code(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    if code.contains('`') {
        format!("`` {} ``", code)
    } else {
        format!("`{}`", code)
    }
}

fn render_code_block(handle: &Handle) -> String {
    let language = code_language(handle).or_else(|| {
        handle.children.borrow().iter()
            .find(|child| tag_name(child).as_deref() == Some("code"))
            .and_then(code_language)
    });
    let code = get_raw_text(handle);
    let code = code.trim_matches('\n');
    let fence = if code.contains("```") { "~~~" } else { "```" };

    format!("\n\n{}{}\n{}\n{}\n\n", fence, language.unwrap_or_default(), code, fence)
}

fn render_link(handle: &Handle) -> String {
    let text = render_children(handle);
    let Some(href) = attr_of(handle, "href") else {
        return text;
    };
    let title = attr_of(handle, "title");
    let link_text = INLINE_SPACE.replace_all(text.trim(), " ");
    // Escaping the text must not turn an autolink into a regular link
    let link_text = if link_text == escape_text(&href) { href.clone() } else { link_text.to_string() };

    let leading = if text.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if text.ends_with(char::is_whitespace) && !link_text.is_empty() { " " } else { "" };
    format!("{}{}{}", leading, format_markdown_link(&href, &link_text, title.as_deref()), trailing)
}

fn render_image(handle: &Handle) -> String {
    let Some(src) = attr_of(handle, "src") else {
        return String::new();
    };
    let alt = attr_of(handle, "alt").unwrap_or_default();
    let title = attr_of(handle, "title");
    format_markdown_image(&src, &alt, title.as_deref())
}

fn render_list(handle: &Handle, ordered: bool) -> String {
    let mut index = if ordered {
        attr_of(handle, "start").and_then(|start| start.trim().parse::<u64>().ok()).unwrap_or(1)
    } else {
        1
    };

    let mut items = vec![];
    for child in handle.children.borrow().iter() {
        match tag_name(child).as_deref() {
            Some("li") => {
                let marker = if ordered { format!("{}. ", index) } else { "- ".to_string() };
                index += 1;
                let inner = normalize_blocks(&render_children(child));
                let inner = LIST_BLANK_LINES.replace_all(&inner, "\n");
                items.push(indent_lines(&marker, &inner));
            }
            // Lists nested straight inside a list, without an <li>
            Some(_) => {
                let inner = normalize_blocks(&render_node(child));
                if !inner.is_empty() {
                    items.push(indent_lines("  ", &inner));
                }
            }
            None => {}
        }
    }

    if items.is_empty() {
        return String::new();
    }
    format!("\n\n{}\n\n", items.join("\n"))
}

fn render_quote(handle: &Handle) -> String {
    let inner = normalize_blocks(&render_children(handle));
    if inner.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = inner.lines()
        .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {}", line) })
        .collect();
    format!("\n\n{}\n\n", quoted.join("\n"))
}

/// First line gets the marker, the others are aligned under its text
fn indent_lines(marker: &str, text: &str) -> String {
    let pad = " ".repeat(marker.len());
    let mut buf = String::new();
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            buf.push_str(marker);
            buf.push_str(line);
        } else {
            buf.push('\n');
            if !line.is_empty() {
                buf.push_str(&pad);
                buf.push_str(line);
            }
        }
    }
    if buf.is_empty() {
        buf.push_str(marker.trim_end());
    }
    buf
}

fn normalize_blocks(text: &str) -> String {
    let text: Vec<&str> = text.lines()
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect();
    let text = text.join("\n");
    BLANK_LINES.replace_all(&text, "\n\n").trim().to_string()
}
