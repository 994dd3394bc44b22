use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use wxr2md::config::Config;
use wxr2md::logger::configure_logger;
use wxr2md::{Blog, MarkdownConverter, OutputLayout, RenderOptions};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "wxr2md.toml";
const DEFAULT_OUTPUT_DIR: &str = "./out";

/// Converts a WordPress export (WXR) into Markdown files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// WordPress export file
    input: PathBuf,

    /// Output directory. A subdirectory named after the blog is created in it
    #[arg(short, long, visible_alias = "out")]
    output: Option<PathBuf>,

    /// Do not write the YAML frontmatter
    #[arg(long)]
    no_frontmatter: bool,

    /// Add the title as a heading on top of the body
    #[arg(long)]
    title_in_body: bool,

    /// Add the publication date under the title
    #[arg(long)]
    date_in_body: bool,

    /// Config path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging on the console
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Flags win over the configuration file
    fn render_options(&self, config: &Config) -> RenderOptions {
        let mut options = config.render_options();
        if self.no_frontmatter {
            options.frontmatter = false;
        }
        if self.title_in_body {
            options.title_in_body = true;
        }
        if self.date_in_body {
            options.date_in_body = true;
        }
        options
    }

    fn output_dir(&self, config: &Config) -> PathBuf {
        self.output.clone()
            .or_else(|| config.output_dir().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config.clone())?;

    if let Err(err) = configure_logger(config.log.as_ref(), args.verbose) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let options = args.render_options(&config);
    let output_dir = args.output_dir(&config);

    let blog = Blog::from_file(&args.input, &MarkdownConverter::default())
        .with_context(|| format!("Could not convert {}", args.input.display()))?;

    let summary = blog.summary();
    info!("Blog '{}' at {}: {} posts, {} pages, {} drafts",
        blog.title, blog.url, summary.posts, summary.pages, summary.drafts);

    let layout = OutputLayout::new(&output_dir, &blog.title);
    layout.write_blog(&blog, &options)
        .with_context(|| format!("Could not write posts to {}", layout.root().display()))?;

    Ok(())
}
