use core::arch::asm;
use riscv::register::{mie, mstatus};

fn vmim_write(val: usize) {
    unsafe {
        asm!("csrw 0xBC0, {rs}", rs = in(reg) val);
    }
}

pub fn enable_interrupts() {
    unsafe {
        mstatus::set_mie();
        mie::set_mext();
    }
}

/// Replaces the VexRiscv external interrupt mask.
pub fn set_mask(mask: usize) {
    vmim_write(mask)
}
