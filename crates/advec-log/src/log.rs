use std::{
    io::Write,
    sync::{OnceLock, Mutex},
};

use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use crate::*;

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Level {

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    pub fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Self::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
            Self::Warn => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            Self::Info => spec.set_fg(Some(Color::Green)),
            Self::Debug => spec.set_fg(Some(Color::Blue)),
            Self::Trace => spec.set_fg(Some(Color::Magenta)).set_dimmed(true),
        };
        spec
    }
}

impl Display for Level {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

struct Logger {
    stderr: StandardStream,
    filter: Filter,
}

impl Logger {

    #[inline(always)]
    fn new(filter: Filter) -> Self {
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            filter,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: fmt::Arguments) -> Result<bool> {
        if !self.filter.enabled(target, level) {
            return Ok(false)
        }
        self.stderr.set_color(&level.color_spec())?;
        write!(self.stderr, "[{:<5}]", level)?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}: {}", target, msg)?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs the logger with directives read from `RUST_LOG`.
///
/// Returns `false` if a logger was already installed.
pub fn init() -> bool {
    init_with_filter(Filter::from_env())
}

/// Installs the logger with explicit directives, see [`Filter::parse`].
pub fn init_with(directives: &str) -> bool {
    init_with_filter(Filter::parse(directives))
}

pub fn init_with_filter(filter: Filter) -> bool {
    if LOGGER.get().is_some() {
        return false
    }
    LOGGER
        .set(Mutex::new(Logger::new(filter)))
        .is_ok()
}

pub fn enabled(target: &str, level: Level) -> bool {
    let Some(logger) = LOGGER.get() else {
        return false
    };
    logger
        .lock()
        .map(|logger| logger.filter.enabled(target, level))
        .unwrap_or(false)
}

/// Writes one record if the logger is installed and `level` passes the filter for `target`.
///
/// Logging before [`init`] is a no-op returning `Ok(false)`.
#[inline(always)]
pub fn log(target: &str, level: Level, args: fmt::Arguments) -> Result<bool> {
    let Some(logger) = LOGGER.get() else {
        return Ok(false)
    };
    logger
        .lock()
        .map_err(|_| LogError::Poisoned)?
        .log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(Level::from_str("TRACE"), Ok(Level::Trace));
        assert_eq!(Level::from_str("Warn"), Ok(Level::Warn));
        assert_eq!(Level::from_str("warning"), Err(()));
    }

    #[test]
    fn levels_order_from_quiet_to_verbose() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Debug < Level::Trace);
        assert_eq!(Level::Info.to_string(), "INFO");
    }

    #[test]
    fn logging_without_logger_is_a_no_op() {
        assert!(!crate::trace!("dropped {}", 1));
        assert!(!enabled("advec_log", Level::Error));
    }
}
