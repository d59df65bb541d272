//! Simulated HPM core for hosted builds.
//!
//! [`SimHpm`] answers the HPM's register interface the way the hardware does: a CTRL
//! start lets the counter run at `CLOCK_HZ`, stop freezes it, reset zeroes it without
//! changing whether it runs. Time comes from a [`Clock`], the host's monotonic clock
//! by default.

use core::cell::Cell;
use std::time::Instant;

use crate::hpm::{Control, Register};
use crate::mmio::Bus;
use crate::param::CLOCK_HZ;

pub trait Clock {
    /// Nanoseconds since an arbitrary fixed origin.
    fn nanos(&self) -> u64;
}

impl<K: Clock + ?Sized> Clock for &K {
    fn nanos(&self) -> u64 {
        (**self).nanos()
    }
}

pub struct HostClock {
    origin: Instant,
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for HostClock {
    fn nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Counter cycles in `nanos` nanoseconds.
const fn cycles_for(nanos: u64) -> u64 {
    (nanos as u128 * CLOCK_HZ as u128 / 1_000_000_000) as u64
}

/// HPM register block whose counter advances at `CLOCK_HZ` while started.
pub struct SimHpm<K: Clock = HostClock> {
    base: usize,
    clock: K,
    /// cycles banked by earlier start/stop spans
    cycles: Cell<u64>,
    /// clock reading at the last start, while running
    started: Cell<Option<u64>>,
}

impl SimHpm<HostClock> {
    pub fn new(base: usize) -> Self {
        Self::with_clock(base, HostClock::new())
    }
}

impl<K: Clock> SimHpm<K> {
    pub fn with_clock(base: usize, clock: K) -> Self {
        Self {
            base,
            clock,
            cycles: Cell::new(0),
            started: Cell::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.get().is_some()
    }

    fn elapsed(&self) -> u64 {
        self.started
            .get()
            .map_or(0, |t| cycles_for(self.clock.nanos() - t))
    }

    fn control(&self, ctrl: Control) {
        match ctrl {
            Control::Start => {
                if !self.is_running() {
                    self.started.set(Some(self.clock.nanos()));
                }
            }
            Control::Stop => {
                self.cycles.set(self.cycles.get() + self.elapsed());
                self.started.set(None);
            }
            Control::Reset => {
                self.cycles.set(0);
                if self.is_running() {
                    self.started.set(Some(self.clock.nanos()));
                }
            }
        }
    }
}

impl<K: Clock> Bus for SimHpm<K> {
    fn peek32(&self, addr: usize) -> u32 {
        if addr.wrapping_sub(self.base) == Register::RealTime as usize {
            // the hardware counter is 32 bits wide
            (self.cycles.get() + self.elapsed()) as u32
        } else {
            0
        }
    }

    // Writes to anything but CTRL, and CTRL values outside the sentinels, are dropped.
    fn poke32(&self, addr: usize, value: u32) {
        if addr.wrapping_sub(self.base) != Register::Ctrl as usize {
            return;
        }

        if let Ok(ctrl) = Control::try_from(value) {
            self.control(ctrl);
        }
    }
}
