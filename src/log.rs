//! The `log` module defines an interface to the crate's logging facilities,
//! used by the round engine to narrate what a round is doing. This module
//! (re)exports the five logging macros: `error!`, `warn!`, `info!`,
//! `debug!` and `trace!` where `error!` represents the highest-priority log
//! messages and `trace!` the lowest. To emit a log message, simply use one
//! of these macros in your code:
//!
//! ```rust
//! use mingle::log::info;
//!
//! pub fn do_a_thing() {
//!     info!("A thing is being done.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. Log messages are enabled/disabled
//! using the functions:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with
//!    priority at least `level`
//!
//! In addition, per-module filtering of messages can be configured using
//! `set_module_filter()` / `set_module_filters()` and
//! `remove_module_filter()`:
//!
//! ```rust
//! use mingle::log::{set_log_level, set_module_filter, LevelFilter};
//!
//! pub fn setup_logging() {
//!     // Enable `info` log messages globally.
//!     set_log_level(LevelFilter::Info);
//!     // Enable all log messages for the round engine.
//!     set_module_filter("mingle::meeting", LevelFilter::Trace);
//! }
//! ```

pub use log::{debug, error, info, trace, warn, LevelFilter};

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

#[cfg(feature = "logging")]
use log4rs::append::console::ConsoleAppender;
#[cfg(feature = "logging")]
use log4rs::config::runtime::ConfigBuilder;
#[cfg(feature = "logging")]
use log4rs::config::{Appender, Logger, Root};
#[cfg(feature = "logging")]
use log4rs::encode::pattern::PatternEncoder;
#[cfg(feature = "logging")]
use log4rs::{Config, Handle};

// Logging disabled
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;

// Use an ISO 8601 timestamp format and color coded level tag
#[cfg(feature = "logging")]
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// A global instance of the logging configuration.
static LOG_CONFIGURATION: LazyLock<Mutex<LogConfiguration>> = LazyLock::new(Mutex::default);

/// Holds logging configuration: the filter levels of modules and a handle
/// to the global logger.
///
/// Because loggers are globally installed, only one instance of this
/// struct exists. The public API are free functions which fetch the
/// singleton and call the appropriate member function.
struct LogConfiguration {
    /// The "default" level filter for modules ("targets") without an
    /// explicitly set filter. A global filter level of `LevelFilter::Off`
    /// disables logging.
    global_log_level: LevelFilter,
    /// Module ("target") specific level filters, keyed by module path
    /// (e.g. `"mingle::meeting"`).
    module_levels: HashMap<String, LevelFilter>,

    #[cfg(feature = "logging")]
    /// Handle to the `log4rs` logger.
    root_handle: Option<Handle>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            global_log_level: DEFAULT_LOG_LEVEL,
            module_levels: HashMap::new(),

            #[cfg(feature = "logging")]
            root_handle: None,
        }
    }
}

impl LogConfiguration {
    fn set_log_level(&mut self, level: LevelFilter) {
        self.global_log_level = level;
        self.set_config();
    }

    /// Returns true if the configuration was mutated, false otherwise.
    fn insert_module_filter(&mut self, module: &str, level: LevelFilter) -> bool {
        match self.module_levels.entry(module.to_string()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() == level {
                    // Don't bother building and setting a new config
                    return false;
                }
                entry.insert(level);
            }

            Entry::Vacant(entry) => {
                entry.insert(level);
            }
        }
        true
    }

    fn set_module_filter(&mut self, module: &str, level: LevelFilter) {
        if self.insert_module_filter(module, level) {
            self.set_config();
        }
    }

    fn set_module_filters(&mut self, module_filters: &[(&str, LevelFilter)]) {
        let mut mutated: bool = false;
        for (module, level) in module_filters {
            mutated |= self.insert_module_filter(module, *level);
        }
        if mutated {
            self.set_config();
        }
    }

    fn remove_module_filter(&mut self, module: &str) {
        if self.module_levels.remove(module).is_some() {
            self.set_config();
        }
    }

    /// Sets the global logger to conform to this `LogConfiguration`.
    #[cfg(feature = "logging")]
    fn set_config(&mut self) {
        let encoder = Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN));
        let stdout: ConsoleAppender = ConsoleAppender::builder().encoder(encoder).build();
        let mut config: ConfigBuilder =
            Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));

        // Add module specific configuration
        for (module, level) in &self.module_levels {
            config = config.logger(Logger::builder().build(module.clone(), *level));
        }

        // The `Root` determines the global log level
        let root = Root::builder()
            .appender("stdout")
            .build(self.global_log_level);
        let new_config = match config.build(root) {
            Err(e) => {
                panic!("failed to build config: {e}");
            }
            Ok(config) => config,
        };

        match self.root_handle {
            Some(ref mut handle) => {
                // The global logger has already been initialized
                handle.set_config(new_config);
            }

            None => {
                // The global logger has not yet been initialized
                self.root_handle = Some(log4rs::init_config(new_config).unwrap());
            }
        }
    }

    /// No global logger without the `logging` feature. We still keep up
    /// appearances.
    #[cfg(not(feature = "logging"))]
    fn set_config(&mut self) {
        log::set_max_level(self.global_log_level);
    }
}

// The public API

/// Enables the logger with no global level filter / full logging.
/// Equivalent to `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to
/// `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A global filter level of `LevelFilter::Off`
/// disables logging.
pub fn set_log_level(level: LevelFilter) {
    let mut log_configuration = get_log_configuration();
    log_configuration.set_log_level(level);
}

/// Sets a level filter for the given module path.
pub fn set_module_filter(module_path: &str, level_filter: LevelFilter) {
    let mut log_configuration = get_log_configuration();
    log_configuration.set_module_filter(module_path, level_filter);
}

/// Removes a module-specific level filter for the given module path. The
/// global level filter will apply to the module.
pub fn remove_module_filter(module_path: &str) {
    let mut log_configuration = get_log_configuration();
    log_configuration.remove_module_filter(module_path);
}

/// Sets the level filters for a set of modules according to the provided
/// list. Use this instead of `set_module_filter()` to set filters in bulk.
pub fn set_module_filters(module_filters: &[(&str, LevelFilter)]) {
    let mut log_configuration = get_log_configuration();
    log_configuration.set_module_filters(module_filters);
}

/// Fetches a mutable reference to the global `LogConfiguration`.
fn get_log_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION.lock().expect("Mutex poisoned")
}
