//! Pattern test of the memory window exposed over the AMC/RTM link.

use core::{fmt, ptr};

use crate::cache::{self, CacheFlush};
use crate::link::Capabilities;
use crate::prng::{Mode, Pattern};

/// Both passes restart the generator from this seed.
pub const SEED: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Unaligned { base: usize },
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::Unaligned { base } =>
                write!(f, "region base 0x{:08x} is not word aligned", base),
            &Error::Empty =>
                write!(f, "region holds no complete word"),
        }
    }
}

/// A window of 32-bit words accessed only through volatile loads and stores.
pub struct MemoryRegion {
    base: *mut u32,
    words: usize,
}

impl MemoryRegion {
    /// Describes `size` bytes at `base`. A trailing partial word is ignored.
    ///
    /// # Safety
    ///
    /// The window must be valid for reads and writes for as long as the
    /// region exists, and nothing else may access it meanwhile.
    pub unsafe fn new(base: usize, size: usize) -> Result<MemoryRegion, Error> {
        if base % 4 != 0 {
            return Err(Error::Unaligned { base })
        }
        let words = size / 4;
        if words == 0 {
            return Err(Error::Empty)
        }
        Ok(MemoryRegion { base: base as *mut u32, words })
    }

    pub fn base(&self) -> usize {
        self.base as usize
    }

    pub fn words(&self) -> usize {
        self.words
    }

    pub fn size(&self) -> usize {
        self.words * 4
    }

    pub fn read(&self, index: usize) -> u32 {
        assert!(index < self.words);
        unsafe { ptr::read_volatile(self.base.add(index)) }
    }

    pub fn write(&mut self, index: usize, value: u32) {
        assert!(index < self.words);
        unsafe { ptr::write_volatile(self.base.add(index), value) }
    }
}

/// Outcome of one write/verify pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestResult {
    pub errors: usize,
    pub total: usize,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Fills the region with the LCG sequence starting after `seed`.
pub fn write_pattern(region: &mut MemoryRegion, seed: u32) {
    let pattern = Pattern::new(seed, Mode::Random);
    for (index, value) in pattern.take(region.words()).enumerate() {
        region.write(index, value);
    }
}

/// Re-derives the sequence from `seed` and counts words that differ.
pub fn verify_pattern(region: &MemoryRegion, seed: u32) -> TestResult {
    let pattern = Pattern::new(seed, Mode::Random);
    let errors = pattern.take(region.words())
        .enumerate()
        .filter(|&(index, expected)| region.read(index) != expected)
        .count();
    TestResult { errors, total: region.words() }
}

/// Overwrites the whole region with a pseudo-random pattern, flushes the
/// caches in between and reads it back.
pub fn run<C>(region: &mut MemoryRegion, caches: &mut C, capabilities: &Capabilities) -> TestResult
where
    C: CacheFlush + ?Sized,
{
    info!("testing {} words at 0x{:08x}", region.words(), region.base());
    write_pattern(region, SEED);
    cache::flush(caches, capabilities.shared_cache_flush);
    let result = verify_pattern(region, SEED);
    if !result.passed() {
        warn!("{} of {} words corrupted", result.errors, result.total);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unaligned_base() {
        let result = unsafe { MemoryRegion::new(0x2000_0002, 0x2000) };
        assert_eq!(result.err(), Some(Error::Unaligned { base: 0x2000_0002 }));
    }

    #[test]
    fn rejects_sub_word_size() {
        let result = unsafe { MemoryRegion::new(0x2000_0000, 3) };
        assert_eq!(result.err(), Some(Error::Empty));
    }

    #[test]
    fn truncates_partial_word() {
        let mut backing = vec![0u32; 4];
        let region = unsafe { MemoryRegion::new(backing.as_mut_ptr() as usize, 15).unwrap() };
        assert_eq!(region.words(), 3);
        assert_eq!(region.size(), 12);
    }

    #[test]
    fn partial_word_left_untouched() {
        let mut backing = vec![0x5555_5555u32; 4];
        {
            let mut region = unsafe { MemoryRegion::new(backing.as_mut_ptr() as usize, 14).unwrap() };
            write_pattern(&mut region, SEED);
            assert!(verify_pattern(&region, SEED).passed());
        }
        assert_eq!(backing[0], 1013904223);
        assert_eq!(backing[3], 0x5555_5555);
    }
}
