//! Text rendering of diagnostic results for the operator console.

use core::cmp;
use core::fmt::{self, Write};

use byteorder::{ByteOrder, LittleEndian};

use crate::link::{Delay, LinkStatus};
use crate::memtest::{MemoryRegion, TestResult};

pub const BYTES_PER_LINE: usize = 16;

/// One `name: value` line per register, booleans as 0/1.
impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(found) = self.delay_found {
            writeln!(f, "delay_found: {}", found as u8)?;
        }
        match self.delay {
            Delay::Tap(delay) => writeln!(f, "delay: {}", delay)?,
            Delay::Window { tap, min, min_found, max, max_found } => {
                writeln!(f, "delay: {}", tap)?;
                writeln!(f, "delay_min_found: {}", min_found as u8)?;
                writeln!(f, "delay_min: {}", min)?;
                writeln!(f, "delay_max_found: {}", max_found as u8)?;
                writeln!(f, "delay_max: {}", max)?;
            }
        }
        if let Some(found) = self.bitslip_found {
            writeln!(f, "bitslip_found: {}", found as u8)?;
        }
        writeln!(f, "bitslip: {}", self.bitslip)?;
        writeln!(f, "ready: {}", self.ready as u8)?;
        writeln!(f, "error: {}", self.error as u8)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "errors: {}/{}", self.errors, self.total)
    }
}

fn dump_line<W: Write + ?Sized>(w: &mut W, addr: usize, data: &[u8]) -> fmt::Result {
    write!(w, "\n0x{:08x}  ", addr)?;
    for byte in data {
        write!(w, "{:02x} ", byte)?;
    }
    for _ in data.len()..BYTES_PER_LINE {
        w.write_str("   ")?;
    }
    w.write_str(" ")?;
    for &byte in data {
        let c = if byte < 0x20 || byte > 0x7e { '.' } else { byte as char };
        w.write_char(c)?;
    }
    for _ in data.len()..BYTES_PER_LINE {
        w.write_str(" ")?;
    }
    Ok(())
}

/// Hex and ASCII listing of `data`, labelled as if it lived at `addr`.
pub fn dump_bytes<W: Write + ?Sized>(w: &mut W, data: &[u8], addr: usize) -> fmt::Result {
    w.write_str("Memory dump:")?;
    for (n, line) in data.chunks(BYTES_PER_LINE).enumerate() {
        dump_line(w, addr + n * BYTES_PER_LINE, line)?;
    }
    w.write_str("\n")
}

/// Same listing as [`dump_bytes`], fetching the region one word at a time.
pub fn dump_region<W: Write + ?Sized>(w: &mut W, region: &MemoryRegion) -> fmt::Result {
    const WORDS_PER_LINE: usize = BYTES_PER_LINE / 4;

    w.write_str("Memory dump:")?;
    let mut line = [0u8; BYTES_PER_LINE];
    let mut index = 0;
    while index < region.words() {
        let count = cmp::min(WORDS_PER_LINE, region.words() - index);
        for i in 0..count {
            LittleEndian::write_u32(&mut line[4 * i..4 * i + 4], region.read(index + i));
        }
        dump_line(w, region.base() + 4 * index, &line[..4 * count])?;
        index += count;
    }
    w.write_str("\n")
}
