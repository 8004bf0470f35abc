#![no_std]
#![no_main]

#[macro_use]
extern crate log;
#[macro_use]
extern crate board_misoc;

use core::fmt;
use amc_rtm_link::console::{self, Outcome, Shell};
use board_misoc::uart_console::Console;
use board_misoc::uart_logger::ConsoleLogger;
use board_misoc::{boot, ident, irq, uart};
use log::LevelFilter;
use riscv_rt::entry;

fn startup() -> Result<(), fmt::Error> {
    irq::set_mask(0);
    irq::enable_interrupts();
    uart::init();
    if let Err(e) = ConsoleLogger::register(LevelFilter::Info) {
        println!("cannot register logger: {}", e);
    }

    let mut diag = match unsafe { board_misoc::diagnostics() } {
        Ok(diag) => diag,
        Err(e) => {
            error!("link RAM unusable: {}", e);
            return Ok(())
        }
    };
    debug!("capabilities: {:?}", diag.config.capabilities);

    let mut console = Console;
    console::banner(&mut console, ident::read(&mut [0; 64]))?;

    let mut shell = Shell::new();
    loop {
        let c = uart::read();
        if shell.service(c, &mut diag, &mut console)? == Outcome::Reboot {
            unsafe { boot::reset() }
        }
    }
}

#[entry]
fn main() -> ! {
    if startup().is_err() {
        println!("console output failed");
    }
    println!("Halting.");
    loop {}
}

#[panic_handler]
fn panic_fmt(info: &core::panic::PanicInfo) -> ! {
    if let Some(location) = info.location() {
        print!("panic at {}:{}:{}", location.file(), location.line(), location.column());
    } else {
        print!("panic at unknown location");
    }
    println!(": {}", info.message());
    loop {}
}
