pub mod blog;
pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod output;
pub mod post;
pub mod post_render;
pub mod text_utils;
pub mod wxr;
mod test_data;

pub use blog::{Blog, BlogSummary};
pub use content::{HtmlConverter, MarkdownConverter};
pub use error::LoadError;
pub use output::OutputLayout;
pub use post::{Post, PostType};
pub use post_render::RenderOptions;
