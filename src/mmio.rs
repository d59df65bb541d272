//! Access to memory-mapped device registers.
//!
//! Every driver reaches its registers through a [`Bus`]. On the soft core that is
//! [`Mmio`], which performs volatile loads and stores at physical addresses. Tests
//! and the hosted build substitute a simulated register region instead.

use core::ptr;

/// A 32-bit register bus.
pub trait Bus {
    /// Reads the 32-bit register at `addr`.
    fn peek32(&self, addr: usize) -> u32;

    /// Writes `value` to the 32-bit register at `addr`.
    fn poke32(&self, addr: usize, value: u32);
}

impl<B: Bus + ?Sized> Bus for &B {
    fn peek32(&self, addr: usize) -> u32 {
        (**self).peek32(addr)
    }

    fn poke32(&self, addr: usize, value: u32) {
        (**self).poke32(addr, value)
    }
}

/// The physical bus. The only place in the crate that dereferences raw addresses.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// Every address later passed to `peek32`/`poke32` must be a mapped, 4-byte aligned
    /// device register that tolerates volatile 32-bit access.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Bus for Mmio {
    #[inline(always)]
    fn peek32(&self, addr: usize) -> u32 {
        // Safety: guaranteed by the caller of `Mmio::new`.
        unsafe { ptr::read_volatile(addr as *const u32) }
    }

    #[inline(always)]
    fn poke32(&self, addr: usize, value: u32) {
        // Safety: guaranteed by the caller of `Mmio::new`.
        unsafe { ptr::write_volatile(addr as *mut u32, value) }
    }
}
