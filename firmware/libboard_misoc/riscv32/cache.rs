use core::arch::asm;
#[cfg(has_ddrphy)]
use core::ptr;
#[cfg(has_ddrphy)]
use crate::{csr, mem};

pub fn flush_cpu_dcache() {
    unsafe {
        asm!(".word(0x500F)", options(nostack));
    }
}

/// Evicts the L2 by streaming twice its size of main RAM through it.
#[cfg(has_ddrphy)]
pub fn flush_l2_cache() {
    unsafe {
        for i in 0..2 * (csr::CONFIG_L2_SIZE as usize) / 4 {
            let addr = mem::MAIN_RAM_BASE + i * 4;
            ptr::read_volatile(addr as *const usize);
        }
    }
}
