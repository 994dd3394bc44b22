pub mod dom;
pub mod markdown_converter;

pub use markdown_converter::MarkdownConverter;

/// Turns the HTML body of an exported post into Markdown text.
///
/// The loader calls it once per post that has content. Any `Fn(&str) -> String`
/// works as a converter, which keeps tests independent of the real one.
pub trait HtmlConverter {
    fn convert(&self, html: &str) -> String;
}

impl<F> HtmlConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, html: &str) -> String {
        self(html)
    }
}
