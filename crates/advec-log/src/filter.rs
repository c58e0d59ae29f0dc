//! Per-target level filtering.
//!
//! Directives use the familiar `RUST_LOG` syntax: a comma separated list where each entry is
//! either a bare level, which sets the base level, or `target=level`. A target matches itself
//! and every module nested below it, and the longest matching target wins.
//!
//! ```rust
//! use advec_log::{Filter, Level};
//!
//! let filter = Filter::parse("warn,advec_mem::vec_types=trace");
//! assert_eq!(filter.target_level("advec_mem::vec_types::vector"), Level::Trace);
//! assert_eq!(filter.target_level("advec_mem::raw_storage"), Level::Warn);
//! ```

use core::str::FromStr;

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::Level;

#[derive(Clone, Debug)]
pub struct Filter {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filter {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filter {

    pub fn parse(directives: &str) -> Self {
        let mut filter = Self::default();
        for directive in directives.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue
            }
            let (target, level) = match directive.find('=') {
                Some(i) => (Some(directive[..i].trim()), directive[i + 1..].trim()),
                None => (None, directive),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(target) = target {
                let entry = filter.target_levels
                    .entry(CompactString::new(target))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filter.base_level = level;
            }
        }
        filter
    }

    /// Reads directives from `RUST_LOG`, falling back to errors only.
    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|env| Self::parse(&env))
            .unwrap_or_default()
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}
