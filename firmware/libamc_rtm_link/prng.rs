/// How the next test word is derived from the current seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Linear congruential generator, `1664525 * seed + 1013904223`.
    Random,
    /// `seed + 1`
    Increment,
}

pub const LCG_MULTIPLIER: u32 = 1664525;
pub const LCG_INCREMENT: u32 = 1013904223;

/// Computes the word following `seed`. Arithmetic wraps at 32 bits.
pub fn next_value(seed: u32, mode: Mode) -> u32 {
    match mode {
        Mode::Random => seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT),
        Mode::Increment => seed.wrapping_add(1),
    }
}

/// Endless stream of test words; every word produced becomes the next seed.
#[derive(Debug, Clone)]
pub struct Pattern {
    seed: u32,
    mode: Mode,
}

impl Pattern {
    pub fn new(seed: u32, mode: Mode) -> Pattern {
        Pattern { seed, mode }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Iterator for Pattern {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.seed = next_value(self.seed, self.mode);
        Some(self.seed)
    }
}
