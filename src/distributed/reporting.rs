use std::fmt;
use std::sync::Mutex;

use log::Level;

/// Progress and diagnostics sink handed to workers and the aggregator.
///
/// One reporter belongs to one rank of one job run; nothing here touches
/// process-wide state except through the implementation chosen by the caller.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, level: Level, message: fmt::Arguments<'_>);

    fn info(&self, message: fmt::Arguments<'_>) {
        self.report(Level::Info, message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.report(Level::Debug, message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.report(Level::Warn, message);
    }
}

/// Forwards reports to the `log` facade, tagged with the reporting rank.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    rank: usize,
}

impl LogReporter {
    pub fn new(rank: usize) -> Self {
        LogReporter { rank }
    }
}

impl ProgressReporter for LogReporter {
    fn report(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(level, "rank = {}, {}", self.rank, message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

/// Keeps every report in memory, in arrival order.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::{MemoryReporter, ProgressReporter};
///
/// let reporter = MemoryReporter::default();
/// reporter.info(format_args!("read {} rows", 4));
/// assert_eq!(reporter.messages(), vec!["read 4 rows".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn entries(&self) -> Vec<(Level, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }
}

impl ProgressReporter for MemoryReporter {
    fn report(&self, level: Level, message: fmt::Arguments<'_>) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}
