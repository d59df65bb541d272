#![cfg_attr(not(test), no_std)]

#[cfg(all(not(test), not(target_os = "none")))]
extern crate std;

#[macro_use]
pub mod printf;

pub mod bench;
pub mod console;
pub mod error;
pub mod harness;
pub mod hpm;
pub mod memlayout;
pub mod mmio;
pub mod param;
pub mod uart;

#[cfg(not(target_os = "none"))]
pub mod hosted;

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
pub mod entry;
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
pub mod start;

use bench::Workloads;
use harness::Harness;
use hpm::Hpm;
use uart::Uart;

/// Brings up the console and the HPM at their slots and runs the benchmark menu forever.
///
/// # Safety
/// Must run on the soft core, with the peripherals at the addresses in `memlayout`.
pub unsafe fn main() -> ! {
    let mut uart = unsafe { Uart::new(memlayout::UART0) };
    uart.init(param::BAUD);

    let hpm = unsafe { Hpm::new(memlayout::HPM0) };

    Harness::new(hpm, uart, Workloads::DEFAULT).run()
}

pub fn panic_handler(info: &core::panic::PanicInfo<'_>) -> ! {
    printf::handle_panic(info)
}
