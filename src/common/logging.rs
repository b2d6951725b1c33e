use env_logger::Builder;
use log::{warn, LevelFilter};
use std::io::Write;

/// Parse a level name such as `info` or `debug`, case-insensitively.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse::<LevelFilter>().ok()
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`. `RUST_LOG`, when set, is applied on
/// top of `level`.
pub fn init_logger(level: &str) {
    let filter = parse_level(level);

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(filter.unwrap_or(LevelFilter::Info))
        .parse_default_env()
        .init();

    if filter.is_none() {
        warn!("Unknown log level '{}', using info", level);
    }
}
