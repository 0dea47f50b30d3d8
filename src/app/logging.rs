//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt},
    color_eyre::Result,
    tracing::{Level, info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging
pub fn setup() -> Result<()> {
    let max_level = level_from_str(&getopt!(logging.level));
    let enabled = getopt!(logging.enable);

    if !enabled {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    match getopt!(logging.format) {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    info!("Logging setup successfully");
    Ok(())
}

/// convert a string to a log level
fn level_from_str(lvl: &str) -> Level {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Level::DEBUG,
        "t" | "trace" | "trc" => Level::TRACE,
        "e" | "error" | "err" => Level::ERROR,
        "i" | "info" | "inf" => Level::INFO,
        "w" | "warn" | "wrn" => Level::WARN,
        _ => Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("info"), Level::INFO);
        assert_eq!(level_from_str("WARN"), Level::WARN);
        assert_eq!(level_from_str("nonsense"), Level::ERROR);
    }
}
