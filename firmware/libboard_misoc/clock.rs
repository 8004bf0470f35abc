use amc_rtm_link::wait::CountdownTimer;
use crate::csr;

pub const FREQ: u32 = csr::CONFIG_CLOCK_FREQUENCY;

/// Handle on timer0, the countdown used to pace link training.
pub struct Timer0 {
    _private: (),
}

impl Timer0 {
    /// # Safety
    ///
    /// Only one handle may exist; the timer is reprogrammed on every wait.
    pub const unsafe fn new() -> Timer0 {
        Timer0 { _private: () }
    }
}

impl CountdownTimer for Timer0 {
    fn en_write(&mut self, enable: bool) {
        unsafe { csr::timer0::en_write(enable as u8) }
    }

    fn reload_write(&mut self, value: u32) {
        unsafe { csr::timer0::reload_write(value) }
    }

    fn load_write(&mut self, value: u32) {
        unsafe { csr::timer0::load_write(value) }
    }

    fn update_value(&mut self) {
        unsafe { csr::timer0::update_value_write(1) }
    }

    fn value(&self) -> u32 {
        unsafe { csr::timer0::value_read() }
    }
}
