#![allow(dead_code)]

use std::cell::Cell;
use std::ptr;

use amc_rtm_link::cache::CacheFlush;
use amc_rtm_link::link::LinkControl;
use amc_rtm_link::memtest::MemoryRegion;
use amc_rtm_link::wait::CountdownTimer;

pub const CLOCK_FREQUENCY: u32 = 125_000_000;

/// Calibration registers of the link-control block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calibration {
    pub delay: u32,
    pub delay_found: bool,
    pub delay_min: u32,
    pub delay_min_found: bool,
    pub delay_max: u32,
    pub delay_max_found: bool,
    pub bitslip: u32,
    pub bitslip_found: bool,
}

/// Link-control block whose `ready`/`error` bits rise after a set number of
/// polls following a reset. Calibration reads return `stale` until the
/// first reset and `trained` afterwards.
pub struct FakeLink {
    pub resets: u32,
    pub polls: Cell<u32>,
    pub ready_on: Option<u32>,
    pub error_on: Option<u32>,
    pub stale: Calibration,
    pub trained: Calibration,
}

impl FakeLink {
    pub fn new(trained: Calibration) -> FakeLink {
        FakeLink {
            resets: 0,
            polls: Cell::new(0),
            ready_on: None,
            error_on: None,
            stale: Calibration {
                delay: 99, delay_min: 99, delay_max: 99, delay_max_found: true, bitslip: 99,
                ..Default::default()
            },
            trained,
        }
    }

    pub fn ready_on(mut self, poll: u32) -> FakeLink {
        self.ready_on = Some(poll);
        self
    }

    pub fn error_on(mut self, poll: u32) -> FakeLink {
        self.error_on = Some(poll);
        self
    }

    fn current(&self) -> &Calibration {
        if self.resets == 0 { &self.stale } else { &self.trained }
    }
}

impl LinkControl for FakeLink {
    fn reset(&mut self) {
        self.resets += 1;
        self.polls.set(0);
    }

    fn ready(&self) -> bool {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        self.resets > 0 && self.ready_on.map_or(false, |n| polls >= n)
    }

    fn error(&self) -> bool {
        self.resets > 0 && self.error_on.map_or(false, |n| self.polls.get() >= n)
    }

    fn delay(&self) -> u32 {
        self.current().delay
    }

    fn bitslip(&self) -> u32 {
        self.current().bitslip
    }

    fn delay_found(&self) -> bool {
        self.current().delay_found
    }

    fn bitslip_found(&self) -> bool {
        self.current().bitslip_found
    }

    fn delay_min(&self) -> u32 {
        self.current().delay_min
    }

    fn delay_max(&self) -> u32 {
        self.current().delay_max
    }

    fn delay_min_found(&self) -> bool {
        self.current().delay_min_found
    }

    fn delay_max_found(&self) -> bool {
        self.current().delay_max_found
    }
}

/// Countdown that has always expired by the second latch.
#[derive(Default)]
pub struct FakeTimer {
    pub loads: Vec<u32>,
    pub reloads: Vec<u32>,
    pub enabled: bool,
    remaining: u32,
    latched: u32,
}

impl FakeTimer {
    pub fn waits(&self) -> usize {
        self.loads.len()
    }
}

impl CountdownTimer for FakeTimer {
    fn en_write(&mut self, enable: bool) {
        self.enabled = enable
    }

    fn reload_write(&mut self, value: u32) {
        self.reloads.push(value)
    }

    fn load_write(&mut self, value: u32) {
        assert!(!self.enabled, "timer loaded while running");
        self.loads.push(value);
        self.remaining = value;
    }

    fn update_value(&mut self) {
        assert!(self.enabled, "latch of a stopped timer");
        self.latched = self.remaining;
        self.remaining = 0;
    }

    fn value(&self) -> u32 {
        self.latched
    }
}

/// Records flushes; bits listed in `flips` are inverted in memory when the
/// CPU data cache is flushed, i.e. between the write and verify passes.
#[derive(Default)]
pub struct FakeCaches {
    pub log: Vec<&'static str>,
    pub flips: Vec<(usize, u32)>,
}

impl CacheFlush for FakeCaches {
    fn flush_cpu_dcache(&mut self) {
        self.log.push("l1");
        for &(addr, mask) in &self.flips {
            unsafe {
                let word = addr as *mut u32;
                ptr::write_volatile(word, ptr::read_volatile(word) ^ mask);
            }
        }
    }

    fn flush_l2_cache(&mut self) {
        self.log.push("l2")
    }
}

/// Heap storage standing in for the link memory window.
pub struct Backing(Vec<u32>);

impl Backing {
    pub fn new(size: usize) -> Backing {
        Backing(vec![0; (size + 3) / 4])
    }

    pub fn region(&mut self, size: usize) -> MemoryRegion {
        unsafe { MemoryRegion::new(self.0.as_mut_ptr() as usize, size).unwrap() }
    }
}

pub fn word_addr(region: &MemoryRegion, index: usize) -> usize {
    region.base() + 4 * index
}
