pub mod xml_tree;

pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const WP_NS: &str = "http://wordpress.org/export/1.2/";
pub const EXCERPT_NS: &str = "http://wordpress.org/export/1.2/excerpt/";
pub const WFW_NS: &str = "http://wellformedweb.org/CommentAPI/";
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Element name after namespace resolution.
///
/// Lookups compare the namespace URI, never the prefix, so `wp:post_id`
/// only matches when `wp` is bound to [`WP_NS`] in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local == local
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<(String, String)>,
    /// Character data directly inside the element, `None` when there is none
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// First direct child with the given name
    pub fn find(&self, namespace: Option<&str>, local: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name.matches(namespace, local))
    }

    /// All direct children with the given name, in document order
    pub fn find_all<'a>(&'a self, namespace: Option<&'a str>, local: &'a str) -> impl Iterator<Item=&'a Element> + 'a {
        self.children.iter().filter(move |child| child.name.matches(namespace, local))
    }

    pub fn child_text(&self, namespace: Option<&str>, local: &str) -> Option<&str> {
        self.find(namespace, local).and_then(|child| child.text.as_deref())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
