use core::fmt;

use crate::uart;

/// Formatting sink on the UART transmitter. Every write blocks until the
/// FIFO has taken the last byte, so none of them fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &c in bytes {
            uart::write(c)
        }
    }
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ({
        let _ = core::fmt::Write::write_fmt(&mut $crate::uart_console::Console,
                                            format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ({
        $crate::print!($($arg)*);
        $crate::print!("\n");
    })
}
