use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::post_render::RenderOptions;

const EXE_DIR_VAR: &str = "${exe_dir}";

#[derive(Deserialize, Debug, Default)]
pub struct Output {
    pub dir: Option<PathBuf>,
}

/// Same keys as [`RenderOptions`], all optional so the command line can tell
/// what the file actually sets.
#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct Render {
    pub frontmatter: Option<bool>,
    pub title_in_body: Option<bool>,
    pub date_in_body: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

/// Ordered from the most severe to the most verbose
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub output: Option<Output>,
    pub render: Option<Render>,
    pub log: Option<Log>,
}

impl Render {
    /// Converter defaults for the command line: frontmatter on, title and date off.
    pub fn to_options(self) -> RenderOptions {
        RenderOptions {
            frontmatter: self.frontmatter.unwrap_or(true),
            title_in_body: self.title_in_body.unwrap_or(false),
            date_in_body: self.date_in_body.unwrap_or(false),
        }
    }
}

impl Config {
    pub fn output_dir(&self) -> Option<&Path> {
        self.output.as_ref()?.dir.as_deref()
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render.unwrap_or_default().to_options()
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with(EXE_DIR_VAR) {
        return path;
    }

    let cur_exe = env::current_exe().ok();
    match cur_exe.as_deref().and_then(Path::parent).and_then(Path::to_str) {
        Some(exe_dir) => PathBuf::from(str_path.replace(EXE_DIR_VAR, exe_dir)),
        None => path,
    }
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if let Some(ref mut output) = cfg.output {
        output.dir = output.dir.take().map(parse_path);
    }
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r#"
[output]
dir = "./exported"

[render]
frontmatter = false
title_in_body = true

[log]
level = "Debug"
log_to_console = true
location = "/tmp/wxr2md.log"
"#).unwrap();

        assert_eq!(cfg.output_dir(), Some(Path::new("./exported")));
        assert_eq!(cfg.render_options(), RenderOptions { frontmatter: false, title_in_body: true, date_in_body: false });

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/wxr2md.log")));
    }

    #[test]
    fn test_empty_config() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.output_dir().is_none());
        assert!(cfg.log.is_none());
        assert_eq!(cfg.render_options(), RenderOptions { frontmatter: true, title_in_body: false, date_in_body: false });
    }

    #[test]
    fn test_exe_dir_path() {
        let cfg = parse_config("[output]\ndir = \"${exe_dir}/out\"").unwrap();
        let dir = cfg.output_dir().unwrap();
        assert!(!dir.starts_with(EXE_DIR_VAR));
        assert!(dir.ends_with("out"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[log]\nlevel = \"Loud\"\nlog_to_console = true").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[output]\ndir = \"/srv/blog\"\n").unwrap();
        let cfg = read_config(file.path()).unwrap();
        assert_eq!(cfg.output_dir(), Some(Path::new("/srv/blog")));

        let missing = file.path().with_extension("missing");
        assert_eq!(read_config(&missing).unwrap_err().kind(), ErrorKind::NotFound);
    }
}
