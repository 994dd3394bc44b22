use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use spdlog::debug;

use crate::content::HtmlConverter;
use crate::error::LoadError;
use crate::text_utils::parse_date_time;
use crate::wxr::{Element, CONTENT_NS, EXCERPT_NS, WP_NS};

const CATEGORY_DOMAIN: &str = "category";
const TAG_DOMAIN: &str = "post_tag";
const DRAFT_STATUS: &str = "draft";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Post,
    Page,
}

impl PostType {
    /// Only `post` and `page`, matched exactly. Attachments, menu items and
    /// the other item types of an export have no counterpart.
    pub fn from_wxr(value: &str) -> Option<PostType> {
        match value {
            "post" => Some(PostType::Post),
            "page" => Some(PostType::Page),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Post => "post",
            PostType::Page => "page",
        }
    }
}

impl Display for PostType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub post_type: PostType,
    pub title: Option<String>,
    /// Slug, used as is in file names
    pub name: Option<String>,
    /// Body, already converted to Markdown
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub is_draft: bool,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.post_type, self.id, self.title.as_deref().unwrap_or("untitled"))
    }
}

/// Example of item
/// <item>
///     <title>Hello World</title>
///     <content:encoded><![CDATA[<p>Welcome</p>]]></content:encoded>
///     <wp:post_id>42</wp:post_id>
///     <wp:post_date>2023-01-04 09:15:00</wp:post_date>
///     <wp:post_name>hello-world</wp:post_name>
///     <wp:status>publish</wp:status>
///     <wp:post_type>post</wp:post_type>
///     <category domain="category" nicename="news"><![CDATA[News]]></category>
/// </item>
impl Post {
    /// Builds a post from an `<item>` already known to be a post or a page.
    pub fn from_element<C: HtmlConverter + ?Sized>(item: &Element, post_type: PostType, converter: &C) -> Result<Post, LoadError> {
        let id = Self::extract_id(item)?;

        let title = non_empty(item.child_text(None, "title"));
        let name = non_empty(item.child_text(Some(WP_NS), "post_name"));
        let content = non_empty(item.child_text(Some(CONTENT_NS), "encoded"))
            .map(|html| converter.convert(&html));
        let excerpt = non_empty(item.child_text(Some(EXCERPT_NS), "encoded"))
            .map(|html| converter.convert(&html))
            .filter(|excerpt| !excerpt.is_empty());

        let date = Self::extract_date(item, "post_date", id);
        let modified = Self::extract_date(item, "post_modified", id);

        let categories = Self::extract_terms(item, CATEGORY_DOMAIN);
        let tags = Self::extract_terms(item, TAG_DOMAIN);

        let is_draft = item.child_text(Some(WP_NS), "status") == Some(DRAFT_STATUS);

        Ok(Post {
            id,
            post_type,
            title,
            name,
            content,
            excerpt,
            date,
            modified,
            categories,
            tags,
            is_draft,
        })
    }

    fn extract_id(item: &Element) -> Result<u64, LoadError> {
        let raw = item.child_text(Some(WP_NS), "post_id").unwrap_or_default();
        raw.trim().parse::<u64>()
            .map_err(|_| LoadError::InvalidPostId(raw.to_string()))
    }

    fn extract_date(item: &Element, field: &str, id: u64) -> Option<NaiveDateTime> {
        let raw = item.child_text(Some(WP_NS), field)?;
        let date = parse_date_time(raw);
        if date.is_none() {
            debug!("Ignoring invalid {} {:?} of post {}", field, raw, id);
        }
        date
    }

    fn extract_terms(item: &Element, domain: &str) -> Vec<String> {
        item.find_all(None, "category")
            .filter(|category| category.attribute("domain") == Some(domain))
            .filter_map(|category| category.text.clone())
            .collect()
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(|text| text.to_string())
}
