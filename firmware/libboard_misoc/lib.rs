#![no_std]

#[macro_use]
extern crate log;
#[cfg(test)]
extern crate std;

#[cfg(target_arch = "riscv32")]
#[path = "riscv32/mod.rs"]
mod arch;

#[cfg(not(target_arch = "riscv32"))]
#[path = "host/mod.rs"]
mod arch;

pub use arch::*;

include!(concat!(env!("OUT_DIR"), "/generated/mem.rs"));
include!(concat!(env!("OUT_DIR"), "/generated/csr.rs"));

pub mod clock;
#[cfg(has_identifier)]
pub mod ident;
#[cfg(has_uart)]
pub mod uart;
#[cfg(has_amc_rtm_link_control)]
pub mod serwb;
#[cfg(all(feature = "uart_console", has_uart))]
#[macro_use]
pub mod uart_console;
#[cfg(all(feature = "uart_console", has_uart))]
pub mod uart_logger;

use amc_rtm_link::cache::CacheFlush;
use amc_rtm_link::memtest;
use amc_rtm_link::{Capabilities, Config, Diagnostics, MemoryRegion};

/// What the gateware this firmware is built for can do.
pub const CAPABILITIES: Capabilities = Capabilities {
    delay_min_max:      cfg!(feature = "delay-min-max"),
    bitslip_found_flag: cfg!(feature = "found-flags"),
    bounded_timeout:    cfg!(feature = "bounded-timeout"),
    shared_cache_flush: cfg!(feature = "l2-cache"),
};

#[cfg(all(feature = "l2-cache", not(has_ddrphy)))]
compile_error!("the l2-cache feature needs gateware with an L2 in front of main RAM (has_ddrphy)");

pub const CONFIG: Config = Config::new(CAPABILITIES, clock::FREQ);

pub struct Caches;

impl CacheFlush for Caches {
    fn flush_cpu_dcache(&mut self) {
        cache::flush_cpu_dcache()
    }

    #[cfg(has_ddrphy)]
    fn flush_l2_cache(&mut self) {
        cache::flush_l2_cache()
    }

    #[cfg(not(has_ddrphy))]
    fn flush_l2_cache(&mut self) {}
}

#[cfg(has_amc_rtm_link_control)]
pub type Board = Diagnostics<serwb::AmcRtmLink, clock::Timer0, Caches>;

/// Takes ownership of the link CSRs, timer0 and the link RAM window.
///
/// # Safety
///
/// Must be called at most once; the returned handles assume exclusive
/// access to the hardware they wrap.
#[cfg(has_amc_rtm_link_control)]
pub unsafe fn diagnostics() -> Result<Board, memtest::Error> {
    let region = MemoryRegion::new(mem::AMC_RTM_LINK_RAM_BASE, mem::AMC_RTM_LINK_RAM_SIZE)?;
    info!("link RAM at {:#010x}, {} bytes", region.base(), region.size());
    Ok(Diagnostics::new(serwb::AmcRtmLink::new(), clock::Timer0::new(),
                        Caches, region, CONFIG))
}
