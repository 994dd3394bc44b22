use std::fs::{create_dir_all, File};
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::blog::Blog;
use crate::post::Post;
use crate::post_render::{render, RenderOptions};
use crate::text_utils::format_file_date;

const POSTS_DIR: &str = "posts";
const DRAFTS_DIR: &str = "drafts";
const EXTENSION: &str = "md";

/// Directory tree of one converted blog
/// <output>/<blog title>/
///     posts/2023-01-04-hello-world.md
///     drafts/45.md
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(output_dir: &Path, blog_title: &str) -> OutputLayout {
        let dir_name = blog_dir_name(blog_title);
        let root = match dir_name {
            Some(name) => output_dir.join(name),
            None => output_dir.to_path_buf(),
        };
        OutputLayout { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(POSTS_DIR)
    }

    pub fn drafts_dir(&self) -> PathBuf {
        self.root.join(DRAFTS_DIR)
    }

    pub fn create_dirs(&self) -> io::Result<()> {
        for dir in [self.posts_dir(), self.drafts_dir()] {
            create_dir_all(&dir)
                .map_err(|e| io::Error::new(e.kind(), format!("Error creating directory {}: {}", dir.display(), e)))?;
        }
        Ok(())
    }

    /// Drafts are named after the id only. Published posts are
    /// `<date>-<slug>.md`, or `<id>.md` when either part is missing.
    pub fn post_path(&self, post: &Post) -> PathBuf {
        if post.is_draft {
            return self.drafts_dir().join(id_file_name(post));
        }

        let file_name = match (&post.date, post.name.as_deref()) {
            (Some(date), Some(name)) => format!("{}-{}.{}", format_file_date(date), name, EXTENSION),
            _ => id_file_name(post),
        };
        self.posts_dir().join(file_name)
    }

    pub fn write_post(&self, post: &Post, options: &RenderOptions) -> io::Result<PathBuf> {
        let path = self.post_path(post);
        let markdown = render(post, options);

        let mut file = File::create(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("Error creating file {}: {}", path.display(), e)))?;
        file.write_all(markdown.as_bytes())
            .map_err(|e| io::Error::new(e.kind(), format!("Error writing file {}: {}", path.display(), e)))?;

        debug!("Wrote {} to {}", post, path.display());
        Ok(path)
    }

    /// Writes every post of the blog, stopping on the first failure.
    /// Files already written stay on disk.
    pub fn write_blog(&self, blog: &Blog, options: &RenderOptions) -> io::Result<Vec<PathBuf>> {
        self.create_dirs()?;

        let mut written = Vec::with_capacity(blog.posts.len());
        for post in &blog.posts {
            let path = self.write_post(post, options)?;
            info!("Created {}", path.display());
            written.push(path);
        }

        info!("{} files written under {}", written.len(), self.root.display());
        Ok(written)
    }
}

fn id_file_name(post: &Post) -> String {
    format!("{}.{}", post.id, EXTENSION)
}

/// The title becomes a single directory level. Separators are replaced so a
/// title never escapes the output directory.
fn blog_dir_name(title: &str) -> Option<String> {
    let name: String = title.trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();

    match name.as_str() {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
