use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a WXR export. Any of them aborts the conversion.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading export file {0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("Export is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Export is not well-formed XML: {0}")]
    Malformed(String),

    #[error("Export has no <channel> element under its root")]
    MissingChannel,

    #[error("Invalid post id {0:?}")]
    InvalidPostId(String),
}
