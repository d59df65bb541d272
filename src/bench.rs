//! Benchmark payloads.
//!
//! Both loops are plain busy-work sized to give the HPM something to count. Every
//! access to their working data is volatile so the optimizer keeps the loops intact.

use core::ptr::{read_volatile, write_volatile};

use crate::param::{ARITH_ITERATIONS, MEM_LEN, MEM_REPEAT};

/// Sizes of the two benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workloads {
    pub arith_iterations: u32,
    pub mem_repeat: u32,
}

impl Workloads {
    pub const DEFAULT: Self = Self {
        arith_iterations: ARITH_ITERATIONS,
        mem_repeat: MEM_REPEAT,
    };
}

impl Default for Workloads {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Loop indices of the arithmetic benchmark. Counts past `i32::MAX` wrap like the
/// accumulator does.
fn indices(iterations: u32) -> impl DoubleEndedIterator<Item = i32> {
    (0..iterations).map(|i| i as i32)
}

/// Accumulate, multiply by three and divide by three, `iterations` times.
/// Returns the final accumulator.
pub fn arithmetic(iterations: u32) -> i32 {
    let mut sum: i32 = 0;
    let sum = &mut sum as *mut i32;

    for i in indices(iterations) {
        // Safety: `sum` points at a live local.
        unsafe {
            write_volatile(sum, read_volatile(sum).wrapping_add(i));
            write_volatile(sum, read_volatile(sum).wrapping_mul(3));
            write_volatile(sum, read_volatile(sum) / 3);
        }
    }

    unsafe { read_volatile(sum) }
}

/// Fills one array with its indices and copies it element by element into a second
/// array, `repeat` times. Returns the destination array.
pub fn memory(repeat: u32) -> [i32; MEM_LEN] {
    let mut a = [0i32; MEM_LEN];
    let mut b = [0i32; MEM_LEN];

    for _ in 0..repeat {
        for i in 0..MEM_LEN {
            // Safety: both pointers are in bounds of live local arrays.
            unsafe {
                write_volatile(&mut a[i], i as i32);
                write_volatile(&mut b[i], read_volatile(&a[i]));
            }
        }
    }

    b
}
