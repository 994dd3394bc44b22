use std::fs;
use std::path::Path;

use spdlog::{debug, info};

use crate::content::HtmlConverter;
use crate::error::LoadError;
use crate::post::{Post, PostType};
use crate::wxr::xml_tree::parse_document;
use crate::wxr::{Element, WP_NS};

/// One exported site. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Posts and pages, drafts included, in export order
    pub posts: Vec<Post>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlogSummary {
    pub posts: usize,
    pub pages: usize,
    pub drafts: usize,
}

impl Blog {
    pub fn from_file<C: HtmlConverter + ?Sized>(path: &Path, converter: &C) -> Result<Blog, LoadError> {
        let xml = fs::read_to_string(path)
            .map_err(|e| LoadError::Io(path.to_path_buf(), e))?;

        info!("Loading export {}", path.display());
        Self::from_xml(&xml, converter)
    }

    pub fn from_xml<C: HtmlConverter + ?Sized>(xml: &str, converter: &C) -> Result<Blog, LoadError> {
        let root = parse_document(xml)?;
        let channel = root.find(None, "channel").ok_or(LoadError::MissingChannel)?;

        let title = channel_text(channel, "title");
        let description = channel_text(channel, "description");
        let url = channel_text(channel, "link");

        let mut posts = vec![];
        for item in channel.find_all(None, "item") {
            let raw_type = item.child_text(Some(WP_NS), "post_type");
            let Some(post_type) = raw_type.and_then(PostType::from_wxr) else {
                debug!("Skipping item of type {:?}", raw_type.unwrap_or("<none>"));
                continue;
            };
            posts.push(Post::from_element(item, post_type, converter)?);
        }

        Ok(Blog {
            title,
            description,
            url,
            posts,
        })
    }

    pub fn summary(&self) -> BlogSummary {
        let mut summary = BlogSummary::default();
        for post in &self.posts {
            match post.post_type {
                PostType::Post => summary.posts += 1,
                PostType::Page => summary.pages += 1,
            }
            if post.is_draft {
                summary.drafts += 1;
            }
        }
        summary
    }
}

fn channel_text(channel: &Element, name: &str) -> String {
    channel.child_text(None, name).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::content::MarkdownConverter;
    use crate::test_data::{WXR_EXPORT, WXR_WITHOUT_CHANNEL};

    use super::*;

    fn keep_html(html: &str) -> String {
        html.to_string()
    }

    #[test]
    fn test_load_blog() {
        let blog = Blog::from_xml(WXR_EXPORT, &keep_html).unwrap();
        assert_eq!(blog.title, "Field Notes");
        assert_eq!(blog.description, "Just another WordPress site");
        assert_eq!(blog.url, "https://notes.example.com");

        let ids: Vec<u64> = blog.posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, [42, 43, 44, 45]);
        assert_eq!(blog.summary(), BlogSummary { posts: 3, pages: 1, drafts: 1 });
    }

    #[test]
    fn test_only_posts_and_pages() {
        let blog = Blog::from_xml(WXR_EXPORT, &keep_html).unwrap();
        assert!(blog.posts.iter().all(|post| post.id != 50 && post.id != 51 && post.id != 52));
    }

    #[test]
    fn test_converts_content() {
        let blog = Blog::from_xml(WXR_EXPORT, &MarkdownConverter::default()).unwrap();
        let about = blog.posts.iter().find(|post| post.id == 44).unwrap();
        assert_eq!(about.post_type, PostType::Page);
        assert_eq!(about.content.as_deref(), Some("This is **me**.\n\n- Rust\n- Coffee"));
    }

    #[test]
    fn test_dyn_converter() {
        let converter: Box<dyn HtmlConverter> = Box::new(|_: &str| "stub".to_string());
        let blog = Blog::from_xml(WXR_EXPORT, converter.as_ref()).unwrap();
        assert_eq!(blog.posts[1].content.as_deref(), Some("stub"));
        // No content element, nothing to convert
        assert_eq!(blog.posts[0].content, None);
    }

    #[test]
    fn test_missing_channel_metadata() {
        let xml = r#"<rss version="2.0"><channel></channel></rss>"#;
        let blog = Blog::from_xml(xml, &keep_html).unwrap();
        assert_eq!(blog.title, "");
        assert_eq!(blog.description, "");
        assert_eq!(blog.url, "");
        assert!(blog.posts.is_empty());
    }

    #[test]
    fn test_missing_channel() {
        assert!(matches!(Blog::from_xml(WXR_WITHOUT_CHANNEL, &keep_html), Err(LoadError::MissingChannel)));
    }

    #[test]
    fn test_malformed_xml() {
        let res = Blog::from_xml("<rss><channel><item></channel></rss>", &keep_html);
        assert!(matches!(res, Err(LoadError::Xml(_)) | Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WXR_EXPORT.as_bytes()).unwrap();

        let blog = Blog::from_file(file.path(), &keep_html).unwrap();
        assert_eq!(blog.posts.len(), 4);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Blog::from_file(&missing, &keep_html), Err(LoadError::Io(..))));
    }
}
