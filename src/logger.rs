use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Log, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

fn add_console_sinks(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let stdout = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stdout)
        .level_filter(LevelFilter::MoreVerbose(Level::Warn))
        .build()?);

    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .level_filter(LevelFilter::MoreSevereEqual(Level::Warn))
        .build()?);

    builder.sink(stdout).sink(stderr);

    Ok(())
}

/// `verbose` lowers the level to at least Debug, whatever the configuration says.
fn effective_level(log: Option<&Log>, verbose: bool) -> Level {
    let level = log.map_or(LogLevel::Info, |log| log.level);
    if verbose && level < LogLevel::Debug {
        LogLevel::Debug.into()
    } else {
        level.into()
    }
}

pub fn configure_logger(log: Option<&Log>, verbose: bool) -> spdlog::Result<()> {
    let level = effective_level(log, verbose);

    let mut builder = Logger::builder();
    let mut has_sink = false;

    if let Some(location) = log.and_then(|log| log.location.as_ref()) {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(30)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
        has_sink = true;
    }

    if !has_sink || log.is_some_and(|log| log.log_to_console) {
        add_console_sinks(&mut builder)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(level));

    spdlog::set_default_logger(logger);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(level: LogLevel) -> Log {
        Log {
            level,
            log_to_console: true,
            location: None,
        }
    }

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(None, false), Level::Info);
        assert_eq!(effective_level(None, true), Level::Debug);
        assert_eq!(effective_level(Some(&log(LogLevel::Error)), false), Level::Error);
        assert_eq!(effective_level(Some(&log(LogLevel::Error)), true), Level::Debug);
        assert_eq!(effective_level(Some(&log(LogLevel::Trace)), true), Level::Trace);
    }

    #[test]
    fn test_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = log(LogLevel::Info);
        config.location = Some(dir.path().join("wxr2md.log"));
        config.log_to_console = false;

        assert!(configure_logger(Some(&config), false).is_ok());
    }
}
