use core::fmt::Write;
use log::{Log, LevelFilter, Metadata, Record, SetLoggerError, set_logger, set_max_level};

use crate::uart_console::Console;

/// Log records go to the UART without a timestamp: timer0 is reprogrammed
/// by every wait and cannot serve as a clock.
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn register(level: LevelFilter) -> Result<(), SetLoggerError> {
        static LOGGER: ConsoleLogger = ConsoleLogger;
        set_logger(&LOGGER)?;
        set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(Console, "{:>5}({}): {}",
                             record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
    }
}
