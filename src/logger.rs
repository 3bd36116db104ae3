//! Module provides initialization of global application logger

use chrono::{Local, SecondsFormat};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

use crate::config::Config;

/// Error that can happen on logger initialization.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file creation failure: {0}")]
    FileCreation(#[from] std::io::Error),

    #[error("wrong logger configuration: {0}")]
    Configuration(#[from] ConfigErrors),

    #[error("logger was already initialized: {0}")]
    Initialized(#[from] log::SetLoggerError),
}

/// Initializes the global logger for an application.
///
/// Messages are always written to the console, and also to the timestamped
/// file inside of [log directory](Config::log_directory) if there is one.
///
/// # Errors
///
/// An error is returned if logger has already been initialized
/// or if log file cannot be created.
///
pub fn init(config: &Config) -> Result<Handle, LoggerError> {
    let pattern = "{d:<35} [thread \"{T}\" id {({I}]):<6} {l:<5} {t} >> {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stdout = ConsoleAppender::builder().encoder(encoder.clone()).build();
    let mut builder =
        LogConfig::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut appenders = vec!["stdout"];

    if let Some(directory) = config.log_directory() {
        let file_name = format!(
            "logfile_{}.log",
            Local::now()
                .to_rfc3339_opts(SecondsFormat::Nanos, true)
                .replace(':', "-"),
        );
        let file = FileAppender::builder()
            .encoder(encoder)
            .build(directory.join(file_name))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        appenders.push("file");
    }

    let log_config = builder.build(
        Root::builder()
            .appenders(appenders)
            .build(config.log_level()),
    )?;
    Ok(log4rs::init_config(log_config)?)
}
