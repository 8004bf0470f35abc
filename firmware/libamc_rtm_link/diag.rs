use core::fmt::{self, Write};

use crate::cache::CacheFlush;
use crate::link::{self, Capabilities, LinkControl, LinkStatus};
use crate::memtest::{self, MemoryRegion, TestResult};
use crate::report;
use crate::wait::CountdownTimer;

/// Polls before training is declared timed out.
pub const POLL_ATTEMPTS: u32 = 10;
/// Pause between polls, in deciseconds.
pub const POLL_INTERVAL: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub capabilities: Capabilities,
    /// Frequency of the clock driving the countdown timer, in Hz.
    pub clock_frequency: u32,
    pub poll_attempts: u32,
    pub poll_interval: u32,
}

impl Config {
    pub const fn new(capabilities: Capabilities, clock_frequency: u32) -> Config {
        Config {
            capabilities,
            clock_frequency,
            poll_attempts: POLL_ATTEMPTS,
            poll_interval: POLL_INTERVAL,
        }
    }
}

/// The hardware blocks the console commands operate on.
pub struct Diagnostics<L, T, C> {
    pub link: L,
    pub timer: T,
    pub caches: C,
    pub region: MemoryRegion,
    pub config: Config,
}

impl<L, T, C> Diagnostics<L, T, C>
where
    L: LinkControl,
    T: CountdownTimer,
    C: CacheFlush,
{
    pub fn new(link: L, timer: T, caches: C, region: MemoryRegion, config: Config) -> Self {
        Diagnostics { link, timer, caches, region, config }
    }

    pub fn train(&mut self) -> LinkStatus {
        link::train(&mut self.link, &mut self.timer, &self.config)
    }

    pub fn test(&mut self) -> TestResult {
        memtest::run(&mut self.region, &mut self.caches, &self.config.capabilities)
    }

    /// `amc_rtm_link_init`
    pub fn link_init<W: Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        let status = self.train();
        write!(out, "{}", status)
    }

    /// `amc_rtm_link_test`
    pub fn link_test<W: Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        let result = self.test();
        writeln!(out, "{}", result)
    }

    /// `amc_rtm_link_dump`
    pub fn link_dump<W: Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        report::dump_region(out, &self.region)
    }
}
