use crate::csr;

const UART_EV_RX: u8 = 0x2;

/// Clears stale events and leaves the UART in polled mode.
pub fn init() {
    unsafe {
        csr::uart::ev_pending_write(csr::uart::ev_pending_read());
        csr::uart::ev_enable_write(0);
    }
}

pub fn read_nonblock() -> Option<u8> {
    unsafe {
        if csr::uart::rxempty_read() != 0 {
            return None
        }
        let c = csr::uart::rxtx_read();
        csr::uart::ev_pending_write(UART_EV_RX);
        Some(c)
    }
}

pub fn read() -> u8 {
    loop {
        if let Some(c) = read_nonblock() {
            return c
        }
    }
}

/// Queues one byte, spinning while the transmit FIFO is full.
pub fn write(c: u8) {
    unsafe {
        while csr::uart::txfull_read() != 0 {}
        csr::uart::rxtx_write(c)
    }
}
