//! env_logger setup driven by `LoggingConfig`
//!
//! `tracing` events from the core and infra crates reach this logger through
//! the `log` feature, so one logger covers the whole process.

use std::io::Write;

use env_logger::fmt::TimestampPrecision;
use env_logger::Builder;

use po_shared::config::{LogFormat, LoggingConfig};

/// Install the process-wide logger
///
/// `RUST_LOG`, when set, replaces the configured level.
pub fn init(config: &LoggingConfig) {
    builder(config, &config.filter()).init();
}

/// Logger builder for a config and a filter directive such as `info` or
/// `po_api=debug,sqlx=warn`
pub fn builder(config: &LoggingConfig, filter: &str) -> Builder {
    let mut builder = Builder::new();
    builder.parse_filters(filter);

    match config.format {
        LogFormat::Json => {
            let timestamp = config.timestamp;
            let source_location = config.source_location;
            builder.format(move |buf, record| {
                let mut entry = serde_json::json!({
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                if timestamp {
                    entry["timestamp"] = chrono::Utc::now().to_rfc3339().into();
                }
                if source_location {
                    entry["module"] = record.module_path().into();
                }
                writeln!(buf, "{}", entry)
            });
        }
        LogFormat::Pretty => {
            builder
                .format_timestamp(config.timestamp.then_some(TimestampPrecision::Millis))
                .format_module_path(config.source_location)
                .format_target(true);
        }
        LogFormat::Compact => {
            builder
                .format_timestamp(config.timestamp.then_some(TimestampPrecision::Seconds))
                .format_module_path(config.source_location)
                .format_target(false);
        }
    }

    builder
}
