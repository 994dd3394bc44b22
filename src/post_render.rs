use std::borrow::Cow;
use std::fmt::Write;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::post::Post;
use crate::text_utils::{format_body_date, format_frontmatter_date};

const FRONTMATTER_DELIMITER: &str = "---";
const YAML_NULL: &str = "null";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// YAML metadata block on top of the document
    pub frontmatter: bool,
    /// `# Title` as the first line of the body
    pub title_in_body: bool,
    /// Emphasized publication date under the title
    pub date_in_body: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            frontmatter: true,
            title_in_body: true,
            date_in_body: true,
        }
    }
}

/// Example of output
/// ---
/// id: 42
/// title: Hello World
/// type: post
/// date: 2023-01-04 09:15:00
/// modified: 2023-01-04 09:15:00
/// categories: ['News']
/// ---
///
/// # Hello World
///
/// _Wed 04 Jan 2023, 09:15_
///
/// Post content
pub fn render(post: &Post, options: &RenderOptions) -> String {
    let mut md = String::new();
    if options.frontmatter {
        md.push_str(&render_frontmatter(post));
        md.push('\n');
    }
    md.push_str(&render_body(post, options.title_in_body, options.date_in_body));
    md
}

pub fn render_frontmatter(post: &Post) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "{}", FRONTMATTER_DELIMITER);
    let _ = writeln!(&mut buf, "id: {}", post.id);
    let _ = writeln!(&mut buf, "title: {}", post.title.as_deref().map_or(Cow::Borrowed(YAML_NULL), yaml_scalar));
    let _ = writeln!(&mut buf, "type: {}", post.post_type);
    let _ = writeln!(&mut buf, "date: {}", frontmatter_date(&post.date));
    let _ = writeln!(&mut buf, "modified: {}", frontmatter_date(&post.modified));
    if !post.categories.is_empty() {
        let _ = writeln!(&mut buf, "categories: {}", yaml_list(&post.categories));
    }
    if !post.tags.is_empty() {
        let _ = writeln!(&mut buf, "tags: {}", yaml_list(&post.tags));
    }
    if let Some(ref excerpt) = post.excerpt {
        let excerpt = excerpt.split_whitespace().collect::<Vec<_>>().join(" ");
        let _ = writeln!(&mut buf, "excerpt: {}", yaml_quoted(&excerpt));
    }
    if post.is_draft {
        let _ = writeln!(&mut buf, "draft: true");
    }
    let _ = writeln!(&mut buf, "{}", FRONTMATTER_DELIMITER);

    buf
}

/// Title, date and content, each followed by a blank line except the last one
pub fn render_body(post: &Post, include_title: bool, include_date: bool) -> String {
    let mut sections: Vec<String> = vec![];

    if let (true, Some(title)) = (include_title, &post.title) {
        sections.push(format!("# {}", title));
    }
    if let (true, Some(date)) = (include_date, &post.date) {
        sections.push(format!("_{}_", format_body_date(date)));
    }
    if let Some(ref content) = post.content {
        sections.push(content.clone());
    }

    if sections.is_empty() {
        return String::new();
    }
    let mut buf = sections.join("\n\n");
    buf.push('\n');
    buf
}

fn frontmatter_date(date: &Option<NaiveDateTime>) -> String {
    match date {
        Some(date) => format_frontmatter_date(date),
        None => YAML_NULL.to_string(),
    }
}

/// `['first', 'second']`
fn yaml_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|item| yaml_quoted(item)).collect();
    format!("[{}]", items.join(", "))
}

fn yaml_quoted(value: &str) -> String {
    format!("'{}'", value.replace(['\n', '\r'], " ").replace('\'', "''"))
}

/// Writes the value plain when YAML would read it back as the same string
fn yaml_scalar(value: &str) -> Cow<'_, str> {
    const INDICATORS: &[char] = &['-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`'];
    const RESERVED: &[&str] = &["null", "~", "true", "false", "yes", "no", "on", "off"];

    let needs_quotes = value.is_empty()
        || value.trim() != value
        || value.starts_with(INDICATORS)
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
        || value.contains(['\n', '\r', '\t'])
        || RESERVED.contains(&value.to_ascii_lowercase().as_str())
        || value.parse::<f64>().is_ok();

    if needs_quotes {
        Cow::Owned(yaml_quoted(value))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::post::PostType;
    use crate::text_utils::parse_date_time;

    use super::*;

    fn hello_world() -> Post {
        Post {
            id: 42,
            post_type: PostType::Post,
            title: Some("Hello World".to_string()),
            name: Some("hello-world".to_string()),
            content: None,
            excerpt: None,
            date: parse_date_time("2023-01-04T09:15:00"),
            modified: parse_date_time("2023-01-04T09:15:00"),
            categories: vec!["News".to_string()],
            tags: vec![],
            is_draft: false,
        }
    }

    #[test]
    fn test_render_defaults() {
        let md = render(&hello_world(), &RenderOptions::default());
        assert_eq!(md, r##"---
id: 42
title: Hello World
type: post
date: 2023-01-04 09:15:00
modified: 2023-01-04 09:15:00
categories: ['News']
---

# Hello World

_Wed 04 Jan 2023, 09:15_
"##);
    }

    #[test]
    fn test_render_draft_without_date() {
        let mut post = hello_world();
        post.is_draft = true;
        post.date = None;
        post.content = Some("Some text".to_string());

        let md = render(&post, &RenderOptions::default());
        assert_eq!(md, r##"---
id: 42
title: Hello World
type: post
date: null
modified: 2023-01-04 09:15:00
categories: ['News']
draft: true
---

# Hello World

Some text
"##);
    }

    #[test]
    fn test_render_without_frontmatter() {
        let mut post = hello_world();
        post.content = Some("Body line".to_string());
        let options = RenderOptions { frontmatter: false, title_in_body: false, date_in_body: false };

        let md = render(&post, &options);
        assert_eq!(md, "Body line\n");
        assert!(!md.starts_with(FRONTMATTER_DELIMITER));
    }

    #[test]
    fn test_title_in_body_only() {
        let options = RenderOptions { frontmatter: false, title_in_body: true, date_in_body: false };
        let md = render(&hello_world(), &options);
        assert_eq!(md, "# Hello World\n");

        let mut untitled = hello_world();
        untitled.title = None;
        assert_eq!(render(&untitled, &options), "");
    }

    #[test]
    fn test_null_title_and_categories_omitted() {
        let mut post = hello_world();
        post.title = None;
        post.categories.clear();
        post.modified = None;

        let frontmatter = render_frontmatter(&post);
        assert_eq!(frontmatter, "---\nid: 42\ntitle: null\ntype: post\ndate: 2023-01-04 09:15:00\nmodified: null\n---\n");
    }

    #[test]
    fn test_categories_and_tags_are_distinct() {
        let mut post = hello_world();
        post.post_type = PostType::Page;
        post.categories = vec!["News".to_string(), "Code".to_string(), "News".to_string()];
        post.tags = vec!["rust".to_string(), "it's".to_string()];
        post.excerpt = Some("Short\n\nversion".to_string());

        let frontmatter = render_frontmatter(&post);
        assert!(frontmatter.contains("type: page\n"));
        assert!(frontmatter.contains("categories: ['News', 'Code', 'News']\n"));
        assert!(frontmatter.contains("tags: ['rust', 'it''s']\n"));
        assert!(frontmatter.contains("excerpt: 'Short version'\n"));
        let categories = frontmatter.find("categories:").unwrap();
        let tags = frontmatter.find("tags:").unwrap();
        assert!(categories < tags);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut post = hello_world();
        post.content = Some("A *post*".to_string());
        let options = RenderOptions::default();
        assert_eq!(render(&post, &options), render(&post, &options));
    }

    #[test]
    fn test_yaml_scalar() {
        assert_eq!(yaml_scalar("Hello World"), "Hello World");
        assert_eq!(yaml_scalar("Rust & WordPress"), "Rust & WordPress");
        assert_eq!(yaml_scalar("Part 1: the beginning"), "'Part 1: the beginning'");
        assert_eq!(yaml_scalar("What's new"), "What's new");
        assert_eq!(yaml_scalar("'quoted'"), "'''quoted'''");
        assert_eq!(yaml_scalar("- dash"), "'- dash'");
        assert_eq!(yaml_scalar("2023"), "'2023'");
        assert_eq!(yaml_scalar("No"), "'No'");
        assert_eq!(yaml_scalar("C# tips"), "C# tips");
        assert_eq!(yaml_scalar("Tips #1"), "'Tips #1'");
    }

    #[test]
    fn test_options_from_toml() {
        let options: RenderOptions = toml::from_str("title_in_body = false").unwrap();
        assert_eq!(options, RenderOptions { frontmatter: true, title_in_body: false, date_in_body: true });
    }
}
