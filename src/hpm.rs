//! Hardware performance monitor.
//!
//! The HPM core exposes five 32-bit registers:
//!
//! | Offset | Register    | Access |
//! |--------|-------------|--------|
//! | 0x00   | `CTRL`      | write: 0 stop, 1 start, 2 reset |
//! | 0x04   | `REG_04`    | unused |
//! | 0x08   | `INST`      | unused |
//! | 0x0C   | `MEM_RD`    | unused |
//! | 0x10   | `REAL_TIME` | read: cycle counter |
//!
//! `REAL_TIME` sits where the register map used to put a memory write counter. The
//! hardware wires the working cycle counter there, so that is what gets read.
//!
//! Nothing here enforces an order between reset, start and stop. The usual bracket is
//! reset, start, workload, stop, then [`Hpm::report`].

use crate::console::Console;
use crate::error::Error;
use crate::mmio::{Bus, Mmio};
use crate::param::CYCLES_PER_US;

#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Ctrl = 0x00,
    Reg04 = 0x04,
    Inst = 0x08,
    MemRd = 0x0c,
    RealTime = 0x10,
}

/// Values understood by the `CTRL` register.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Stop = 0,
    Start = 1,
    Reset = 2,
}

impl TryFrom<u32> for Control {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Control::Stop),
            1 => Ok(Control::Start),
            2 => Ok(Control::Reset),
            v => Err(Error::InvalidControl(v)),
        }
    }
}

/// One reading of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub cycles: u32,
    pub micros: u32,
}

impl Stats {
    pub const fn from_cycles(cycles: u32) -> Self {
        Self {
            cycles,
            micros: cycles / CYCLES_PER_US,
        }
    }
}

pub struct Hpm<B: Bus = Mmio> {
    base_address: usize,
    bus: B,
}

impl Hpm<Mmio> {
    /// # Safety
    /// `base_address` must be the slot of an HPM core.
    pub const unsafe fn new(base_address: usize) -> Self {
        Self {
            base_address,
            bus: unsafe { Mmio::new() },
        }
    }
}

impl<B: Bus> Hpm<B> {
    pub const fn with_bus(base_address: usize, bus: B) -> Self {
        Self { base_address, bus }
    }

    pub fn read(&self, reg: Register) -> u32 {
        self.bus.peek32(self.base_address + reg as usize)
    }

    fn control(&self, ctrl: Control) {
        self.bus
            .poke32(self.base_address + Register::Ctrl as usize, ctrl as u32)
    }

    pub fn start(&self) {
        self.control(Control::Start)
    }

    pub fn stop(&self) {
        self.control(Control::Stop)
    }

    pub fn reset(&self) {
        self.control(Control::Reset)
    }

    /// Takes a single snapshot of the cycle counter. Not atomic against a running
    /// counter, call `stop` first.
    pub fn stats(&self) -> Stats {
        Stats::from_cycles(self.read(Register::RealTime))
    }

    /// Prints the benchmark report for the current counter value.
    pub fn report<C: Console + ?Sized>(&self, console: &mut C) {
        let stats = self.stats();

        console.put_str("\r\n=== HPM Benchmark Report ===\r\n");
        console.put_str("Total Cycles:  ");
        console.put_int(stats.cycles);
        console.put_str("\r\n");
        console.put_str("Time (us):     ");
        console.put_int(stats.micros);
        console.put_str("\r\n");
        console.put_str("============================\r\n");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::console::sim::SimConsole;
    use crate::mmio::sim::{Access, SimBus};

    const BASE: usize = 0xC000_0500;

    fn sim() -> SimBus {
        SimBus::new(BASE, 5)
    }

    #[test]
    fn control_writes_sentinels() {
        let bus = sim();
        let hpm = Hpm::with_bus(BASE, &bus);

        hpm.start();
        assert_eq!(bus.get(Register::Ctrl as usize), 1);
        hpm.stop();
        assert_eq!(bus.get(Register::Ctrl as usize), 0);
        hpm.reset();
        assert_eq!(bus.get(Register::Ctrl as usize), 2);

        assert_eq!(bus.writes(), vec![(0, 1), (0, 0), (0, 2)]);
    }

    #[test]
    fn report_prints_cycles_and_micros() {
        let bus = sim();
        bus.set(Register::RealTime as usize, 500);
        let hpm = Hpm::with_bus(BASE, &bus);
        let mut console = SimConsole::default();

        hpm.report(&mut console);

        assert_eq!(
            console.output,
            "\r\n=== HPM Benchmark Report ===\r\n\
             Total Cycles:  500\r\n\
             Time (us):     5\r\n\
             ============================\r\n"
        );
        assert_eq!(bus.log(), vec![Access::Read(0x10)]);
    }

    #[test]
    fn report_truncates_micros() {
        let bus = sim();
        bus.set(Register::RealTime as usize, 99);
        let mut console = SimConsole::default();

        Hpm::with_bus(BASE, &bus).report(&mut console);

        assert!(console.output.contains("Total Cycles:  99\r\n"));
        assert!(console.output.contains("Time (us):     0\r\n"));
    }

    #[test]
    fn report_full_counter_range() {
        let bus = sim();
        bus.set(Register::RealTime as usize, u32::MAX);
        let mut console = SimConsole::default();

        Hpm::with_bus(BASE, &bus).report(&mut console);

        assert!(console.output.contains("Total Cycles:  4294967295\r\n"));
        assert!(console.output.contains("Time (us):     42949672\r\n"));
    }

    #[test]
    fn reserved_registers_are_readable() {
        let bus = sim();
        bus.set(Register::MemRd as usize, 0xabcd);
        let hpm = Hpm::with_bus(BASE, &bus);
        assert_eq!(hpm.read(Register::MemRd), 0xabcd);
        assert_eq!(hpm.read(Register::Inst), 0);
    }

    #[test]
    fn control_round_trips_through_u32() {
        for ctrl in [Control::Stop, Control::Start, Control::Reset] {
            assert_eq!(Control::try_from(ctrl as u32), Ok(ctrl));
        }
        assert_eq!(Control::try_from(3), Err(Error::InvalidControl(3)));
    }

    proptest! {
        #[test]
        fn micros_is_truncated_division(cycles in any::<u32>()) {
            let stats = Stats::from_cycles(cycles);
            prop_assert_eq!(stats.micros, cycles / 100);
            prop_assert!(stats.micros * 100 <= cycles);
        }
    }
}
