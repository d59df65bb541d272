use crate::console::Console;
use crate::mmio::{Bus, Mmio};
use crate::param::CLOCK_HZ;

// UART core registers are 32-bit words memory-mapped at the UART slot.
/// Read Data Register (rx byte and FIFO status)
const RD_DATA: usize = 0x00;
const RD_DATA_MASK: u32 = 0xff;
/// Receive FIFO is empty
const RX_EMPTY: u32 = 1 << 8;
/// Transmit FIFO is full
const TX_FULL: u32 = 1 << 9;
/// Baud rate divisor register
const DVSR: usize = 0x04;
/// Write Data Register (pushes a tx byte)
const WR_DATA: usize = 0x08;
/// Remove Read Data register, any write pops the head of the rx FIFO
const RM_RD_DATA: usize = 0x0c;

/// Divisor the core needs to sample at 16x `baud` from `clock_hz`.
pub const fn divisor(clock_hz: u32, baud: u32) -> u32 {
    clock_hz / 16 / baud - 1
}

pub struct Uart<B: Bus = Mmio> {
    base_address: usize,
    bus: B,
}

impl Uart<Mmio> {
    /// # Safety
    /// `base_address` must be the slot of a UART core.
    pub const unsafe fn new(base_address: usize) -> Self {
        Self {
            base_address,
            bus: unsafe { Mmio::new() },
        }
    }
}

impl<B: Bus> Uart<B> {
    pub const fn with_bus(base_address: usize, bus: B) -> Self {
        Self { base_address, bus }
    }

    fn read(&self, reg: usize) -> u32 {
        self.bus.peek32(self.base_address + reg)
    }

    fn write(&self, reg: usize, value: u32) {
        self.bus.poke32(self.base_address + reg, value)
    }

    pub fn init(&mut self, baud: u32) {
        self.write(DVSR, divisor(CLOCK_HZ, baud));
    }
}

impl<B: Bus> Console for Uart<B> {
    // Spins until the transmit FIFO has room.
    fn putc(&mut self, c: u8) {
        while self.read(RD_DATA) & TX_FULL != 0 {
            core::hint::spin_loop();
        }

        self.write(WR_DATA, c as u32);
    }

    // Read one input character from the UART if there are any waiting.
    fn try_getc(&mut self) -> Option<u8> {
        let data = self.read(RD_DATA);
        if data & RX_EMPTY != 0 {
            return None;
        }

        self.write(RM_RD_DATA, 0);
        Some((data & RD_DATA_MASK) as u8)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::param::BAUD;

    const BASE: usize = 0x100;

    /// Models the UART core's FIFOs behind its register interface.
    #[derive(Default)]
    struct SimUart {
        rx: RefCell<VecDeque<u8>>,
        tx: RefCell<Vec<u8>>,
        dvsr: RefCell<u32>,
        pops: RefCell<usize>,
        /// Status reads left that report a full tx FIFO.
        busy_reads: RefCell<usize>,
    }

    impl Bus for SimUart {
        fn peek32(&self, addr: usize) -> u32 {
            assert_eq!(addr - BASE, RD_DATA);
            let mut status = match self.rx.borrow().front() {
                Some(&c) => c as u32,
                None => RX_EMPTY,
            };
            let mut busy = self.busy_reads.borrow_mut();
            if *busy > 0 {
                *busy -= 1;
                status |= TX_FULL;
            }
            status
        }

        fn poke32(&self, addr: usize, value: u32) {
            match addr - BASE {
                DVSR => *self.dvsr.borrow_mut() = value,
                WR_DATA => self.tx.borrow_mut().push(value as u8),
                RM_RD_DATA => {
                    *self.pops.borrow_mut() += 1;
                    self.rx.borrow_mut().pop_front();
                }
                reg => panic!("write to read-only register {reg:#x}"),
            }
        }
    }

    #[test]
    fn divisor_for_default_baud() {
        assert_eq!(divisor(CLOCK_HZ, BAUD), 650);
        assert_eq!(divisor(CLOCK_HZ, 115_200), 53);
    }

    #[test]
    fn init_programs_divisor() {
        let sim = SimUart::default();
        let mut uart = Uart::with_bus(BASE, &sim);
        uart.init(BAUD);
        assert_eq!(*sim.dvsr.borrow(), 650);
    }

    #[test]
    fn try_getc_pops_once_per_byte() {
        let sim = SimUart::default();
        sim.rx.borrow_mut().extend(b"hi");
        let mut uart = Uart::with_bus(BASE, &sim);

        assert_eq!(uart.try_getc(), Some(b'h'));
        assert_eq!(uart.try_getc(), Some(b'i'));
        assert_eq!(uart.try_getc(), None);
        assert_eq!(uart.try_getc(), None);
        assert_eq!(*sim.pops.borrow(), 2);
    }

    #[test]
    fn putc_waits_for_tx_room() {
        let sim = SimUart::default();
        *sim.busy_reads.borrow_mut() = 3;
        let mut uart = Uart::with_bus(BASE, &sim);

        uart.put_str("ok");
        assert_eq!(*sim.busy_reads.borrow(), 0);
        assert_eq!(sim.tx.borrow().as_slice(), b"ok");
    }
}
