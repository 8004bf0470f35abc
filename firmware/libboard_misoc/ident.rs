use core::{cmp, str};
use crate::csr;

/// Reads the gateware identifier, which carries its build date.
pub fn read(buf: &mut [u8]) -> &str {
    let len = unsafe {
        csr::identifier::address_write(0);
        cmp::min(csr::identifier::data_read() as usize, buf.len())
    };
    for (i, byte) in buf[..len].iter_mut().enumerate() {
        unsafe {
            csr::identifier::address_write(1 + i as u8);
            *byte = csr::identifier::data_read();
        }
    }
    str::from_utf8(&buf[..len]).unwrap_or("(invalid identifier)")
}
