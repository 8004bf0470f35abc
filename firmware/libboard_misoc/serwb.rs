use amc_rtm_link::LinkControl;
use crate::csr::amc_rtm_link_control as control;

/// The AMC side of the AMC/RTM serwb link.
///
/// Registers the gateware was not built with fall back to the
/// `LinkControl` defaults and are never read.
pub struct AmcRtmLink {
    _private: (),
}

impl AmcRtmLink {
    /// # Safety
    ///
    /// Only one handle may exist; `reset` restarts training under anyone
    /// else polling the link.
    pub const unsafe fn new() -> AmcRtmLink {
        AmcRtmLink { _private: () }
    }
}

impl LinkControl for AmcRtmLink {
    fn reset(&mut self) {
        unsafe { control::reset_write(1) }
    }

    fn ready(&self) -> bool {
        unsafe { control::ready_read() != 0 }
    }

    fn error(&self) -> bool {
        unsafe { control::error_read() != 0 }
    }

    fn delay(&self) -> u32 {
        unsafe { control::delay_read() as u32 }
    }

    fn bitslip(&self) -> u32 {
        unsafe { control::bitslip_read() as u32 }
    }

    #[cfg(feature = "found-flags")]
    fn delay_found(&self) -> bool {
        unsafe { control::delay_found_read() != 0 }
    }

    #[cfg(feature = "found-flags")]
    fn bitslip_found(&self) -> bool {
        unsafe { control::bitslip_found_read() != 0 }
    }

    #[cfg(feature = "delay-min-max")]
    fn delay_min(&self) -> u32 {
        unsafe { control::delay_min_read() as u32 }
    }

    #[cfg(feature = "delay-min-max")]
    fn delay_max(&self) -> u32 {
        unsafe { control::delay_max_read() as u32 }
    }

    #[cfg(feature = "delay-min-max")]
    fn delay_min_found(&self) -> bool {
        unsafe { control::delay_min_found_read() != 0 }
    }

    #[cfg(feature = "delay-min-max")]
    fn delay_max_found(&self) -> bool {
        unsafe { control::delay_max_found_read() != 0 }
    }
}
