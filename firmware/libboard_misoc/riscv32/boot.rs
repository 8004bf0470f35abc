use core::arch::asm;

/// Restarts the firmware from the runtime's entry point.
pub unsafe fn reset() -> ! {
    asm!("j          _start",
         "nop",
         options(nomem, nostack, noreturn)
    );
}
