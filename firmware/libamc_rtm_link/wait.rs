//! Busy-waiting on a countdown timer.
//!
//! The timer is the misoc `timer0` block: writing `load` arms a countdown,
//! `reload` re-arms it when it expires (0 makes it one-shot), and the
//! current count only becomes visible in `value` after a write to
//! `update_value` latches it.

/// Deciseconds per second.
pub const TICKS_PER_SECOND: u32 = 10;

/// Register interface of a countdown timer channel.
pub trait CountdownTimer {
    fn en_write(&mut self, enable: bool);
    fn reload_write(&mut self, value: u32);
    fn load_write(&mut self, value: u32);
    /// Latches the running count into `value`.
    fn update_value(&mut self);
    fn value(&self) -> u32;
}

impl<'a, T: CountdownTimer + ?Sized> CountdownTimer for &'a mut T {
    fn en_write(&mut self, enable: bool) {
        (**self).en_write(enable)
    }

    fn reload_write(&mut self, value: u32) {
        (**self).reload_write(value)
    }

    fn load_write(&mut self, value: u32) {
        (**self).load_write(value)
    }

    fn update_value(&mut self) {
        (**self).update_value()
    }

    fn value(&self) -> u32 {
        (**self).value()
    }
}

/// Number of timer cycles in `ds` deciseconds, clamped to the counter width.
pub fn cycles(clock_frequency: u32, ds: u32) -> u32 {
    (clock_frequency / TICKS_PER_SECOND).saturating_mul(ds)
}

/// Spins for `ds` deciseconds.
///
/// The timer is left enabled and in one-shot mode afterwards; anything else
/// using the same channel has to re-arm it.
pub fn busy_wait<T: CountdownTimer + ?Sized>(timer: &mut T, clock_frequency: u32, ds: u32) {
    timer.en_write(false);
    timer.reload_write(0);
    timer.load_write(cycles(clock_frequency, ds));
    timer.en_write(true);
    timer.update_value();
    while timer.value() != 0 {
        timer.update_value();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, PartialEq, Eq)]
    enum Op {
        En(bool),
        Reload(u32),
        Load(u32),
        Update,
    }

    /// Counts down by `step` on every latch.
    struct FakeTimer {
        ops: Vec<Op>,
        count: u32,
        latched: u32,
        step: u32,
    }

    impl FakeTimer {
        fn new(step: u32) -> FakeTimer {
            FakeTimer { ops: Vec::new(), count: 0, latched: 0xdead_beef, step }
        }
    }

    impl CountdownTimer for FakeTimer {
        fn en_write(&mut self, enable: bool) {
            self.ops.push(Op::En(enable))
        }

        fn reload_write(&mut self, value: u32) {
            self.ops.push(Op::Reload(value))
        }

        fn load_write(&mut self, value: u32) {
            self.count = value;
            self.ops.push(Op::Load(value))
        }

        fn update_value(&mut self) {
            self.latched = self.count;
            self.count = self.count.saturating_sub(self.step);
            self.ops.push(Op::Update)
        }

        fn value(&self) -> u32 {
            self.latched
        }
    }

    #[test]
    fn programs_one_shot_countdown() {
        let mut timer = FakeTimer::new(u32::MAX);
        busy_wait(&mut timer, 125_000_000, 1);
        assert_eq!(timer.ops[..4], [Op::En(false), Op::Reload(0), Op::Load(12_500_000), Op::En(true)]);
    }

    #[test]
    fn polls_until_zero() {
        let mut timer = FakeTimer::new(250);
        busy_wait(&mut timer, 10_000, 1);
        // 1000 cycles at 250 per latch: 1000, 750, 500, 250, 0
        let updates = timer.ops.iter().filter(|op| **op == Op::Update).count();
        assert_eq!(updates, 5);
        assert_eq!(timer.value(), 0);
    }

    #[test]
    fn zero_deciseconds_returns_at_once() {
        let mut timer = FakeTimer::new(1);
        busy_wait(&mut timer, 125_000_000, 0);
        assert_eq!(timer.ops.last(), Some(&Op::Update));
        assert_eq!(timer.ops.iter().filter(|op| **op == Op::Update).count(), 1);
    }

    #[test]
    fn cycle_count_saturates() {
        assert_eq!(cycles(125_000_000, 3), 37_500_000);
        assert_eq!(cycles(125_000_000, 1_000), u32::MAX);
    }
}
