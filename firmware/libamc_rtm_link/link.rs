//! Training of the AMC/RTM serial link.
//!
//! Resetting the link-control block restarts its calibration engine, which
//! scans the input delay taps and bitslip positions until it locks onto the
//! training pattern (`ready`) or gives up (`error`).

use crate::diag::Config;
use crate::wait::{self, CountdownTimer};

/// Which registers and behaviours a gateware revision provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The calibration also reports the `delay_min`/`delay_max` window
    /// edges and whether each edge was found.
    pub delay_min_max: bool,
    /// `bitslip_found` and `delay_found` are readable.
    pub bitslip_found_flag: bool,
    /// Training gives up after a fixed number of paced polls. Without it
    /// the trainer spins until `ready`, forever if the link never locks.
    pub bounded_timeout: bool,
    /// A shared L2 cache sits between the CPU and the link memory.
    pub shared_cache_flush: bool,
}

impl Capabilities {
    pub const SAYMA_AMC: Capabilities = Capabilities {
        delay_min_max: false,
        bitslip_found_flag: true,
        bounded_timeout: true,
        shared_cache_flush: false,
    };

    pub const WINDOW_SCAN: Capabilities = Capabilities {
        delay_min_max: true,
        bitslip_found_flag: false,
        bounded_timeout: false,
        shared_cache_flush: true,
    };
}

/// Register interface of the link-control CSR block.
///
/// The provided methods cover registers that only some gateware revisions
/// have; the trainer reads them only when [`Capabilities`] says they exist.
pub trait LinkControl {
    /// Restarts calibration.
    fn reset(&mut self);
    fn ready(&self) -> bool;
    fn error(&self) -> bool;
    fn delay(&self) -> u32;
    fn bitslip(&self) -> u32;

    fn delay_found(&self) -> bool {
        false
    }

    fn bitslip_found(&self) -> bool {
        false
    }

    fn delay_min(&self) -> u32 {
        0
    }

    fn delay_max(&self) -> u32 {
        0
    }

    fn delay_min_found(&self) -> bool {
        false
    }

    fn delay_max_found(&self) -> bool {
        false
    }
}

impl<'a, L: LinkControl + ?Sized> LinkControl for &'a mut L {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn ready(&self) -> bool {
        (**self).ready()
    }

    fn error(&self) -> bool {
        (**self).error()
    }

    fn delay(&self) -> u32 {
        (**self).delay()
    }

    fn bitslip(&self) -> u32 {
        (**self).bitslip()
    }

    fn delay_found(&self) -> bool {
        (**self).delay_found()
    }

    fn bitslip_found(&self) -> bool {
        (**self).bitslip_found()
    }

    fn delay_min(&self) -> u32 {
        (**self).delay_min()
    }

    fn delay_max(&self) -> u32 {
        (**self).delay_max()
    }

    fn delay_min_found(&self) -> bool {
        (**self).delay_min_found()
    }

    fn delay_max_found(&self) -> bool {
        (**self).delay_max_found()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    Tap(u32),
    /// Chosen tap plus the edges of the eye it was centred in.
    Window { tap: u32, min: u32, min_found: bool, max: u32, max_found: bool },
}

/// Calibration state sampled right after training ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStatus {
    pub delay: Delay,
    pub delay_found: Option<bool>,
    pub bitslip: u32,
    pub bitslip_found: Option<bool>,
    pub ready: bool,
    pub error: bool,
}

impl LinkStatus {
    pub fn read<L: LinkControl + ?Sized>(link: &L, capabilities: &Capabilities) -> LinkStatus {
        let (delay_found, bitslip_found) = if capabilities.bitslip_found_flag {
            (Some(link.delay_found()), Some(link.bitslip_found()))
        } else {
            (None, None)
        };
        let delay = if capabilities.delay_min_max {
            Delay::Window {
                tap: link.delay(),
                min: link.delay_min(),
                min_found: link.delay_min_found(),
                max: link.delay_max(),
                max_found: link.delay_max_found(),
            }
        } else {
            Delay::Tap(link.delay())
        };
        LinkStatus {
            delay,
            delay_found,
            bitslip: link.bitslip(),
            bitslip_found,
            ready: link.ready(),
            error: link.error(),
        }
    }
}

/// Why the polling loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Ready,
    Error,
    Timeout,
}

fn poll_bounded<L, T>(link: &L, timer: &mut T, config: &Config) -> Termination
where
    L: LinkControl + ?Sized,
    T: CountdownTimer + ?Sized,
{
    let mut timeout = config.poll_attempts;
    loop {
        if link.ready() {
            return Termination::Ready
        }
        if link.error() {
            return Termination::Error
        }
        if timeout == 0 {
            return Termination::Timeout
        }
        debug!("link not ready, {} polls left", timeout);
        wait::busy_wait(timer, config.clock_frequency, config.poll_interval);
        timeout -= 1;
    }
}

fn poll_unbounded<L: LinkControl + ?Sized>(link: &L) -> Termination {
    // Hangs if the link never locks; only a hardware reset gets out.
    while !link.ready() {
        core::hint::spin_loop()
    }
    Termination::Ready
}

/// Restarts link calibration, waits for it to settle and reports the result.
///
/// A failed or timed out training is not an error here: the returned status
/// carries the hardware's `ready` and `error` bits for the operator to judge.
pub fn train<L, T>(link: &mut L, timer: &mut T, config: &Config) -> LinkStatus
where
    L: LinkControl + ?Sized,
    T: CountdownTimer + ?Sized,
{
    let capabilities = &config.capabilities;

    info!("waiting for AMC/RTM link to be ready...");
    link.reset();
    let termination = if capabilities.bounded_timeout {
        poll_bounded(link, timer, config)
    } else {
        poll_unbounded(link)
    };
    match termination {
        Termination::Ready => info!("done."),
        Termination::Error => warn!("AMC/RTM link reported a training error"),
        Termination::Timeout =>
            warn!("AMC/RTM link not ready after {} polls", config.poll_attempts),
    }

    LinkStatus::read(link, capabilities)
}
