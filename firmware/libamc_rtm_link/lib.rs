#![no_std]

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod cache;
pub mod console;
pub mod diag;
pub mod link;
pub mod memtest;
pub mod prng;
pub mod report;
pub mod wait;

pub use diag::{Config, Diagnostics};
pub use link::{Capabilities, LinkControl, LinkStatus};
pub use memtest::{MemoryRegion, TestResult};
