// Physical memory layout
//
// The soft core sees its peripherals through a single I/O bridge. Each core on
// the bridge gets a fixed-size slot of 32-bit registers:
//
// 00000000 -- boot RAM, the image is loaded and runs from here
// C0000000 -- I/O bridge
//   C0000000 -- slot 0, system timer (unused)
//   C0000100 -- slot 1, uart
//   C0000500 -- slot 5, hardware performance monitor
// C0000000 + 0x100 * slot -- base of any other slot

/// Base address of the I/O bridge.
pub const BRIDGE_BASE: usize = 0xC000_0000;

/// Size of one slot on the bridge in bytes.
pub const SLOT_STRIDE: usize = 0x100;

pub const S1_UART: usize = 1;
pub const S5_HPM: usize = 5;

/// Base address of the core plugged into `slot` of the bridge at `bridge`.
pub const fn slot_addr(bridge: usize, slot: usize) -> usize {
    bridge + SLOT_STRIDE * slot
}

pub const UART0: usize = slot_addr(BRIDGE_BASE, S1_UART);
pub const HPM0: usize = slot_addr(BRIDGE_BASE, S5_HPM);
