use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use wxr2md::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must be readable. Without one, the first `wxr2md.toml`
/// found is used, and no file at all means defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        return Ok(Config::default());
    };

    println!("Reading config from {}", config_path.display());
    let config = read_config(&config_path)
        .with_context(|| format!("Could not load configuration {}", config_path.display()))?;

    Ok(config)
}
