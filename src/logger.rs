//! Module provides initialization of global application logger

use chrono::Local;
use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

/// Initializes the global logger for an application.
///
/// Diagnostics go to standard error and a timestamped log file; standard
/// output stays reserved for the smoke test report.
///
/// # Errors
///
/// An error is returned if logger has already been initialized.
///
pub fn init() -> Result<Handle, SetLoggerError> {
    let pattern = "{d(%Y-%m-%dT%H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(encoder.clone())
        .build();
    let file_name = format!(
        "logs/vidsmoke_{}.log",
        Local::now().format("%Y-%m-%dT%H-%M-%S%.3f"),
    );
    let file = FileAppender::builder()
        .encoder(encoder)
        .build(file_name)
        .unwrap();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appenders(["stderr", "file"]).build(level))
        .expect("wrong logger configuration");
    log4rs::init_config(config)
}
