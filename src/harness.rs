//! Benchmark console.
//!
//! Prints a menu, then polls the console forever. A command byte runs its benchmark
//! bracketed by the HPM (reset, start, run, stop) and prints the report. Anything else
//! is echoed and otherwise ignored.

use crate::bench::{self, Workloads};
use crate::console::Console;
use crate::error::Error;
use crate::hpm::Hpm;
use crate::mmio::Bus;

const BANNER: &str = "\r\n\r\n--------------------------------\r\n   HPM: Ready   \r\n--------------------------------\r\n> Press 'a' for Arithmetic Test\r\n> Press 'm' for Memory Test\r\n";
const AGAIN: &str = "> Press 'a' or 'm' to run again\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Arithmetic,
    Memory,
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(c: u8) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            b'a' => Ok(Command::Arithmetic),
            b'm' => Ok(Command::Memory),
            _ => Err(Error::UnknownCommand(c)),
        }
    }
}

impl Command {
    fn title(self) -> &'static str {
        match self {
            Command::Arithmetic => "\r\n[Running Arithmetic Benchmark]...\r\n",
            Command::Memory => "\r\n[Running Memory Benchmark]...\r\n",
        }
    }
}

pub struct Harness<B: Bus, C: Console> {
    hpm: Hpm<B>,
    console: C,
    workloads: Workloads,
}

impl<B: Bus, C: Console> Harness<B, C> {
    pub fn new(hpm: Hpm<B>, console: C, workloads: Workloads) -> Self {
        Self {
            hpm,
            console,
            workloads,
        }
    }

    pub fn banner(&mut self) {
        self.console.put_str(BANNER);
    }

    /// One pass of the console loop. Returns the command that ran, if any.
    /// Never blocks when there is no input.
    pub fn poll(&mut self) -> Option<Command> {
        let c = self.console.try_getc()?;

        // echo back to the user
        self.console.putc(c);
        self.console.put_str("\r\n");

        let command = Command::try_from(c).ok()?;
        self.execute(command);
        self.console.put_str(AGAIN);

        Some(command)
    }

    /// Runs one benchmark under the counter and reports it.
    pub fn execute(&mut self, command: Command) {
        self.console.put_str(command.title());

        self.hpm.reset();
        self.hpm.start();

        match command {
            Command::Arithmetic => {
                bench::arithmetic(self.workloads.arith_iterations);
            }
            Command::Memory => {
                bench::memory(self.workloads.mem_repeat);
            }
        }

        self.hpm.stop();
        self.hpm.report(&mut self.console);
    }

    pub fn run(mut self) -> ! {
        self.banner();

        loop {
            self.poll();
        }
    }
}
