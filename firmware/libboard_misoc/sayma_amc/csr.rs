#[allow(dead_code)]
pub mod csr {
  pub mod uart {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const RXTX_ADDR: *mut u32 = 0xe0001000 as *mut u32;
    pub const RXTX_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn rxtx_read() -> u8 {
      read_volatile(RXTX_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn rxtx_write(w: u8) {
      write_volatile(RXTX_ADDR.offset(0), (w) as u32);
    }

    pub const TXFULL_ADDR: *mut u32 = 0xe0001004 as *mut u32;
    pub const TXFULL_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn txfull_read() -> u8 {
      read_volatile(TXFULL_ADDR) as u8
    }

    pub const RXEMPTY_ADDR: *mut u32 = 0xe0001008 as *mut u32;
    pub const RXEMPTY_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn rxempty_read() -> u8 {
      read_volatile(RXEMPTY_ADDR) as u8
    }

    pub const EV_STATUS_ADDR: *mut u32 = 0xe000100c as *mut u32;
    pub const EV_STATUS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_status_read() -> u8 {
      read_volatile(EV_STATUS_ADDR) as u8
    }

    pub const EV_PENDING_ADDR: *mut u32 = 0xe0001010 as *mut u32;
    pub const EV_PENDING_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_pending_read() -> u8 {
      read_volatile(EV_PENDING_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_pending_write(w: u8) {
      write_volatile(EV_PENDING_ADDR.offset(0), (w) as u32);
    }

    pub const EV_ENABLE_ADDR: *mut u32 = 0xe0001014 as *mut u32;
    pub const EV_ENABLE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_enable_read() -> u8 {
      read_volatile(EV_ENABLE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_enable_write(w: u8) {
      write_volatile(EV_ENABLE_ADDR.offset(0), (w) as u32);
    }
  }

  pub mod timer0 {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const LOAD_ADDR: *mut u32 = 0xe0001800 as *mut u32;
    pub const LOAD_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn load_read() -> u32 {
      read_volatile(LOAD_ADDR) as u32
    }

    #[inline(always)]
    pub unsafe fn load_write(w: u32) {
      write_volatile(LOAD_ADDR.offset(0), (w) as u32);
    }

    pub const RELOAD_ADDR: *mut u32 = 0xe0001804 as *mut u32;
    pub const RELOAD_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn reload_read() -> u32 {
      read_volatile(RELOAD_ADDR) as u32
    }

    #[inline(always)]
    pub unsafe fn reload_write(w: u32) {
      write_volatile(RELOAD_ADDR.offset(0), (w) as u32);
    }

    pub const EN_ADDR: *mut u32 = 0xe0001808 as *mut u32;
    pub const EN_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn en_read() -> u8 {
      read_volatile(EN_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn en_write(w: u8) {
      write_volatile(EN_ADDR.offset(0), (w) as u32);
    }

    pub const UPDATE_VALUE_ADDR: *mut u32 = 0xe000180c as *mut u32;
    pub const UPDATE_VALUE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn update_value_read() -> u8 {
      read_volatile(UPDATE_VALUE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn update_value_write(w: u8) {
      write_volatile(UPDATE_VALUE_ADDR.offset(0), (w) as u32);
    }

    pub const VALUE_ADDR: *mut u32 = 0xe0001810 as *mut u32;
    pub const VALUE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn value_read() -> u32 {
      read_volatile(VALUE_ADDR) as u32
    }

    pub const EV_STATUS_ADDR: *mut u32 = 0xe0001814 as *mut u32;
    pub const EV_STATUS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_status_read() -> u8 {
      read_volatile(EV_STATUS_ADDR) as u8
    }

    pub const EV_PENDING_ADDR: *mut u32 = 0xe0001818 as *mut u32;
    pub const EV_PENDING_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_pending_read() -> u8 {
      read_volatile(EV_PENDING_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_pending_write(w: u8) {
      write_volatile(EV_PENDING_ADDR.offset(0), (w) as u32);
    }

    pub const EV_ENABLE_ADDR: *mut u32 = 0xe000181c as *mut u32;
    pub const EV_ENABLE_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ev_enable_read() -> u8 {
      read_volatile(EV_ENABLE_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn ev_enable_write(w: u8) {
      write_volatile(EV_ENABLE_ADDR.offset(0), (w) as u32);
    }
  }

  pub mod identifier {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const ADDRESS_ADDR: *mut u32 = 0xe0002000 as *mut u32;
    pub const ADDRESS_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn address_read() -> u8 {
      read_volatile(ADDRESS_ADDR) as u8
    }

    #[inline(always)]
    pub unsafe fn address_write(w: u8) {
      write_volatile(ADDRESS_ADDR.offset(0), (w) as u32);
    }

    pub const DATA_ADDR: *mut u32 = 0xe0002004 as *mut u32;
    pub const DATA_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn data_read() -> u8 {
      read_volatile(DATA_ADDR) as u8
    }
  }

  pub mod amc_rtm_link_control {
    #[allow(unused_imports)]
    use core::ptr::{read_volatile, write_volatile};

    pub const RESET_ADDR: *mut u32 = 0xe000a000 as *mut u32;
    pub const RESET_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn reset_write(w: u8) {
      write_volatile(RESET_ADDR.offset(0), (w) as u32);
    }

    pub const READY_ADDR: *mut u32 = 0xe000a004 as *mut u32;
    pub const READY_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn ready_read() -> u8 {
      read_volatile(READY_ADDR) as u8
    }

    pub const ERROR_ADDR: *mut u32 = 0xe000a008 as *mut u32;
    pub const ERROR_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn error_read() -> u8 {
      read_volatile(ERROR_ADDR) as u8
    }

    pub const DELAY_ADDR: *mut u32 = 0xe000a00c as *mut u32;
    pub const DELAY_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_read() -> u16 {
      read_volatile(DELAY_ADDR) as u16
    }

    pub const DELAY_FOUND_ADDR: *mut u32 = 0xe000a010 as *mut u32;
    pub const DELAY_FOUND_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_found_read() -> u8 {
      read_volatile(DELAY_FOUND_ADDR) as u8
    }

    pub const DELAY_MIN_ADDR: *mut u32 = 0xe000a014 as *mut u32;
    pub const DELAY_MIN_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_min_read() -> u16 {
      read_volatile(DELAY_MIN_ADDR) as u16
    }

    pub const DELAY_MIN_FOUND_ADDR: *mut u32 = 0xe000a018 as *mut u32;
    pub const DELAY_MIN_FOUND_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_min_found_read() -> u8 {
      read_volatile(DELAY_MIN_FOUND_ADDR) as u8
    }

    pub const DELAY_MAX_ADDR: *mut u32 = 0xe000a01c as *mut u32;
    pub const DELAY_MAX_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_max_read() -> u16 {
      read_volatile(DELAY_MAX_ADDR) as u16
    }

    pub const DELAY_MAX_FOUND_ADDR: *mut u32 = 0xe000a020 as *mut u32;
    pub const DELAY_MAX_FOUND_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn delay_max_found_read() -> u8 {
      read_volatile(DELAY_MAX_FOUND_ADDR) as u8
    }

    pub const BITSLIP_ADDR: *mut u32 = 0xe000a024 as *mut u32;
    pub const BITSLIP_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn bitslip_read() -> u8 {
      read_volatile(BITSLIP_ADDR) as u8
    }

    pub const BITSLIP_FOUND_ADDR: *mut u32 = 0xe000a028 as *mut u32;
    pub const BITSLIP_FOUND_SIZE: usize = 1;

    #[inline(always)]
    pub unsafe fn bitslip_found_read() -> u8 {
      read_volatile(BITSLIP_FOUND_ADDR) as u8
    }
  }

  pub const CONFIG_CLOCK_FREQUENCY: u32 = 125000000;
  pub const CONFIG_CSR_DATA_WIDTH: u32 = 32;
  pub const CONFIG_IDENTIFIER_STR: &'static str = "Sayma AMC CPU testing design";
  pub const CONFIG_L2_SIZE: u32 = 8192;
  pub const CONFIG_SOC_PLATFORM: &'static str = "sayma_amc";
}
